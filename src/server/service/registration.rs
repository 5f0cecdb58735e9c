//! Registration service for business logic.
//!
//! This module provides the `RegistrationService`, which decides whether a validated
//! registration request may create an account and stores it with a hashed password.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{register::RegisterError, AppError},
    model::user::{CreateUserParam, RegisterUserParam, User},
    util::password::hash_password,
};

/// Service providing business logic for account registration.
pub struct RegistrationService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> RegistrationService<'a> {
    /// Creates a new RegistrationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// The email address is checked before the username, so a request that collides on
    /// both reports the email address.
    ///
    /// # Arguments
    /// - `param` - Validated registration request
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::RegisterErr(EmailTaken))` - Email address already registered
    /// - `Err(AppError::RegisterErr(UsernameTaken))` - Username already registered
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    ///
    /// A concurrent registration that passes the lookups is still caught by the table's
    /// unique constraints and reported as the matching `RegisterError`.
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo
            .find_by_email_address(&param.email_address)
            .await?
            .is_some()
        {
            return Err(RegisterError::EmailTaken.into());
        }

        if user_repo.find_by_username(&param.username).await?.is_some() {
            return Err(RegisterError::UsernameTaken.into());
        }

        let user = user_repo
            .create(CreateUserParam {
                username: param.username,
                email_address: param.email_address,
                password_hash: hash_password(&param.password),
            })
            .await
            .map_err(duplicate_to_register_error)?;

        tracing::info!("Registered user {} ({})", user.username, user.id);

        Ok(user)
    }
}

/// Maps a unique violation on insert to the column it collided on.
fn duplicate_to_register_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) if detail.contains("email_address") => {
            RegisterError::EmailTaken.into()
        }
        Some(SqlErr::UniqueConstraintViolation(_)) => RegisterError::UsernameTaken.into(),
        _ => err.into(),
    }
}
