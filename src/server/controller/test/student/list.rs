use super::*;

/// Tests listing all students on an empty store.
///
/// Expected: 404 with "No Students Found!"
#[tokio::test]
async fn get_all_returns_404_when_empty() {
    let (app, _db) = test_app().await;

    let response = send(&app, Method::GET, "/api/Students/All", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, "No Students Found!");
}

/// Tests listing all students.
///
/// Expected: 200 with every student
#[tokio::test]
async fn get_all_returns_students() -> Result<(), DbErr> {
    let (app, db) = test_app().await;

    let first = factory::create_student(&db).await?;
    let second = factory::create_student_with_grade(&db, 10).await?;

    let response = send(&app, Method::GET, "/api/Students/All", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let students: Vec<StudentDto> = response.json();
    assert_eq!(students.len(), 2);
    assert_eq!(students[0].id, first.id);
    assert_eq!(students[1].id, second.id);

    Ok(())
}

/// Tests listing passed students when nobody passed.
///
/// Expected: 404 with "No Students Found!"
#[tokio::test]
async fn get_passed_returns_404_when_nobody_passed() -> Result<(), DbErr> {
    let (app, db) = test_app().await;

    factory::create_student_with_grade(&db, 10).await?;

    let response = send(&app, Method::GET, "/api/Students/Passed", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, "No Students Found!");

    Ok(())
}

/// Tests listing passed students.
///
/// Expected: 200 with only the passing student
#[tokio::test]
async fn get_passed_returns_only_passing_students() -> Result<(), DbErr> {
    let (app, db) = test_app().await;

    factory::create_student_with_grade(&db, 10).await?;
    let passing = factory::create_student_with_grade(&db, 95).await?;

    let response = send(&app, Method::GET, "/api/Students/Passed", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let students: Vec<StudentDto> = response.json();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, passing.id);

    Ok(())
}

/// Tests the average grade on an empty store.
///
/// Expected: 200 with 0.0
#[tokio::test]
async fn average_grade_is_zero_when_empty() {
    let (app, _db) = test_app().await;

    let response = send(&app, Method::GET, "/api/Students/AverageGrade", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json::<f64>(), 0.0);
}

/// Tests the average grade with stored students.
///
/// Expected: 200 with the mean grade
#[tokio::test]
async fn average_grade_returns_mean() -> Result<(), DbErr> {
    let (app, db) = test_app().await;

    factory::create_student_with_grade(&db, 60).await?;
    factory::create_student_with_grade(&db, 90).await?;

    let response = send(&app, Method::GET, "/api/Students/AverageGrade", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json::<f64>(), 75.0);

    Ok(())
}
