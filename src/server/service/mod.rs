//! Business logic layer.

pub mod registration;
