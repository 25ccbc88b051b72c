pub mod numeric;
pub mod response;

pub use response::ErrorResponse;
