//! Domain models and operation parameters for the server.

pub mod user;
