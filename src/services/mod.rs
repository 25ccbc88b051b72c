pub mod classes;
pub mod connections;

#[cfg(test)]
pub(crate) mod test_storage;

pub use classes::ClassService;
pub use connections::ConnectionService;
