use super::*;

/// Tests creating a valid student.
///
/// Expected: 201 with the assigned ID and a Location header for the new student
#[tokio::test]
async fn creates_student_with_location() {
    let (app, _db) = test_app().await;

    let response = send(
        &app,
        Method::POST,
        "/api/Students",
        Some(json!({ "name": "Ann", "age": 20, "grade": 85 })),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let created: StudentDto = response.json();
    assert!(created.id > 0);
    assert_eq!(created.name, "Ann");
    assert_eq!(created.age, 20);
    assert_eq!(created.grade, 85);
    assert_eq!(
        response.location,
        Some(format!("/api/Students/{}", created.id))
    );
}

/// Tests that boundary values are accepted on create.
///
/// Expected: 201 for age 0 and for grade 100
#[tokio::test]
async fn accepts_boundary_values() {
    let (app, _db) = test_app().await;

    for body in [
        json!({ "name": "Young", "age": 0, "grade": 50 }),
        json!({ "name": "Top", "age": 20, "grade": 100 }),
        json!({ "name": "Bottom", "age": 20, "grade": 0 }),
    ] {
        let response = send(&app, Method::POST, "/api/Students", Some(body)).await;
        assert_eq!(response.status, StatusCode::CREATED);
    }
}

/// Tests that invalid field values are rejected on create.
///
/// Verifies that negative age, out of range grades and empty names never reach
/// the store.
///
/// Expected: 400 with "Invalid Student Data" and an empty store
#[tokio::test]
async fn rejects_invalid_student_data() {
    let (app, _db) = test_app().await;

    for body in [
        json!({ "name": "Ann", "age": -1, "grade": 50 }),
        json!({ "name": "Ann", "age": 20, "grade": 101 }),
        json!({ "name": "Ann", "age": 20, "grade": -1 }),
        json!({ "name": "", "age": 20, "grade": 50 }),
    ] {
        let response = send(&app, Method::POST, "/api/Students", Some(body)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body, "Invalid Student Data");
    }

    let response = send(&app, Method::GET, "/api/Students/All", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

/// Tests creating a student without a body.
///
/// Expected: 400 with "Invalid Student Data"
#[tokio::test]
async fn rejects_missing_body() {
    let (app, _db) = test_app().await;

    let response = send(&app, Method::POST, "/api/Students", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, "Invalid Student Data");
}

/// Tests creating a student with missing fields.
///
/// Expected: 400 with "Invalid Student Data"
#[tokio::test]
async fn rejects_incomplete_body() {
    let (app, _db) = test_app().await;

    let response = send(
        &app,
        Method::POST,
        "/api/Students",
        Some(json!({ "name": "Ann" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, "Invalid Student Data");
}

/// Tests that a client-supplied ID is ignored on create.
///
/// Expected: 201 with the store-assigned ID
#[tokio::test]
async fn ignores_client_supplied_id() {
    let (app, _db) = test_app().await;

    let response = send(
        &app,
        Method::POST,
        "/api/Students",
        Some(json!({ "id": 42, "name": "Ann", "age": 20, "grade": 85 })),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json::<StudentDto>().id, 1);
}

/// Tests creating a student when the store assigns no ID.
///
/// A trigger discards every insert, so saving the new student fails.
///
/// Expected: 500 with {"message":"Error Adding Student"}
#[tokio::test]
async fn returns_500_when_insert_yields_no_id() -> Result<(), DbErr> {
    let (app, db) = test_app().await;

    db.execute_unprepared(
        "CREATE TRIGGER discard_student_insert BEFORE INSERT ON students \
         BEGIN SELECT RAISE(IGNORE); END;",
    )
    .await?;

    let response = send(
        &app,
        Method::POST,
        "/api/Students",
        Some(json!({ "name": "Ann", "age": 20, "grade": 85 })),
    )
    .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Error Adding Student" })
    );

    Ok(())
}
