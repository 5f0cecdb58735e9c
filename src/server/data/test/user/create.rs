use super::*;

/// Tests creating a new user.
///
/// Verifies that the user repository stores the username, email address and hash
/// exactly as given and assigns an id.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            username: "testuser".to_string(),
            email_address: "testuser@example.com".to_string(),
            password_hash: "abc123".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert!(user.id > 0);
    assert_eq!(user.username, "testuser");
    assert_eq!(user.email_address, "testuser@example.com");
    assert_eq!(user.password_hash, "abc123");

    Ok(())
}

/// Tests that the table rejects a duplicate email address.
///
/// Expected: Err from the unique constraint
#[tokio::test]
async fn fails_for_duplicate_email_address() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email_address("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            username: "someoneelse".to_string(),
            email_address: "taken@example.com".to_string(),
            password_hash: "abc123".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that the table rejects a duplicate username.
///
/// Expected: Err from the unique constraint
#[tokio::test]
async fn fails_for_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("taken")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            username: "taken".to_string(),
            email_address: "fresh@example.com".to_string(),
            password_hash: "abc123".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
