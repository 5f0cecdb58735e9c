#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod register;

#[cfg(feature = "web")]
pub use register::{get_register_form, register_user};
