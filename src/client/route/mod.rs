pub mod not_found;
pub mod register;

pub use not_found::NotFound;
pub use register::Register;
