use super::*;

/// Tests listing passed students.
///
/// Verifies that only students at or above the passing grade are returned, with
/// the threshold itself counting as a pass.
///
/// Expected: Ok(Vec) containing the students graded 50 and 90
#[tokio::test]
async fn returns_only_students_at_or_above_passing_grade() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_student_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_student_with_grade(db, 49).await?;
    let borderline = factory::create_student_with_grade(db, 50).await?;
    let strong = factory::create_student_with_grade(db, 90).await?;

    let repo = StudentRepository::new(db);
    let passed = repo.get_passed().await?;

    assert_eq!(passed, vec![borderline, strong]);

    Ok(())
}

/// Tests listing passed students when everyone failed.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_list_when_nobody_passed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_student_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_student_with_grade(db, 0).await?;
    factory::create_student_with_grade(db, 30).await?;

    let repo = StudentRepository::new(db);
    let passed = repo.get_passed().await?;

    assert!(passed.is_empty());

    Ok(())
}
