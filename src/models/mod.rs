pub mod classes;
pub mod common;
pub mod connections;
pub mod users;

pub use common::ErrorResponse;
