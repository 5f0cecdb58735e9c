//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .username("traveler")
//!     .email_address("traveler@example.com")
//!     .password_hash("0f1e")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod user;

pub use user::create_user;
