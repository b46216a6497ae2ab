use qg_core::logger::init_logger;
use tracing::error;
mod clients;
mod error;
pub mod server;

fn main() {
    init_logger();
    if let Err(e) = server::http_server::http_server_backend() {
        error!("{e}");
        std::process::exit(1);
    }
}
