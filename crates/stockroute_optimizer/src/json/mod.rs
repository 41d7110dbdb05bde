pub mod network_file;
pub mod schema;
pub mod types;
