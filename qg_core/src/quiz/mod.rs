pub mod formatter;
pub mod parser;
pub mod request;
