use super::*;

/// Tests deleting a student twice.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn delete_is_reported_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_student_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_student(db).await?;

    let service = StudentService::new(db);

    assert!(service.delete(created.id).await?);
    assert!(!service.delete(created.id).await?);
    assert!(service.find(created.id).await?.is_none());

    Ok(())
}
