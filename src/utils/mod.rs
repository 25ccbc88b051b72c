pub mod parameter_error_handler;
pub mod time;

pub use parameter_error_handler::{
    json_error_handler, json_error_handler_with, query_error_handler, query_error_handler_with,
};
pub use time::{from_minutes, to_minutes};
