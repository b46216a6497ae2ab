pub mod error;
pub mod logger;
pub mod quiz;
pub mod server;
pub mod types;
