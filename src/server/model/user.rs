//! User domain models and parameters.
//!
//! Provides the domain model for registered accounts and the parameter types that flow
//! from the registration controller through the service into the repository.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{RegisterFormDto, RegisterUserDto, UserDto},
    server::error::register::RegisterError,
};

/// Registered account.
///
/// The password hash stays on the server; `into_dto` drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email_address: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email_address: self.email_address,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email_address: entity.email_address,
            password_hash: entity.password_hash,
            created_at: entity.created_at,
        }
    }
}

/// Validated registration request.
///
/// Username and email address are trimmed. Only constructible through `from_dto`, so a
/// value of this type always satisfies the register form limits.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterUserParam {
    pub username: String,
    pub email_address: String,
    pub password: String,
}

impl RegisterUserParam {
    /// Validates a registration request against the server's form limits.
    ///
    /// # Returns
    /// - `Ok(RegisterUserParam)` - Request is complete and within limits
    /// - `Err(RegisterError::Invalid)` - A field is missing or too long
    pub fn from_dto(dto: RegisterUserDto) -> Result<Self, RegisterError> {
        dto.validate(&RegisterFormDto::default())?;

        Ok(Self {
            username: dto.username.trim().to_string(),
            email_address: dto.email_address.trim().to_string(),
            password: dto.password,
        })
    }
}

/// Parameters for inserting a user row.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub email_address: String,
    /// Already-hashed password, see `util::password`.
    pub password_hash: String,
}
