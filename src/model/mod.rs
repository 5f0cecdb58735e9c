//! DTOs shared between the client and the server.

pub mod api;
pub mod user;
