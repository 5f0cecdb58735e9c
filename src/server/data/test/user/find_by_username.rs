use super::*;

/// Tests finding an existing user by username.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("traveler")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("traveler").await?;

    assert_eq!(user.map(|u| u.id), Some(created.id));

    Ok(())
}

/// Tests that username lookup does not match on the email address column.
///
/// Expected: Ok(None)
#[tokio::test]
async fn does_not_match_email_address() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("traveler")
        .email_address("wanderer")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("wanderer").await?;

    assert!(user.is_none());

    Ok(())
}
