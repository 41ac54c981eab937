use super::*;

/// Tests locating an existing student.
///
/// Verifies the located entity carries the stored fields and is in update mode.
///
/// Expected: Ok(Some(Student)) with mode Update
#[tokio::test]
async fn locates_existing_student_in_update_mode() -> Result<(), AppError> {
    let test = TestBuilder::new().with_student_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_student(db).await?;

    let student = StudentService::new(db).find(created.id).await?.unwrap();

    assert_eq!(student.mode(), StudentMode::Update);
    assert_eq!(student.id, created.id);
    assert_eq!(student.name, created.name);
    assert_eq!(student.age, created.age);
    assert_eq!(student.grade, created.grade);

    Ok(())
}

/// Tests locating a nonexistent student.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_student() -> Result<(), AppError> {
    let test = TestBuilder::new().with_student_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = StudentService::new(db).find(1).await?;

    assert!(student.is_none());

    Ok(())
}
