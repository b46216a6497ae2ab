pub mod app_state;
pub mod http_server;
pub mod ping;
pub mod quiz;
