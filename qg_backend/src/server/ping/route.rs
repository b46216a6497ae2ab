use crate::server::app_state::AppState;
use crate::server::ping::controller::ping;
use axum::routing::get;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new().route("/v1/ping", get(ping))
}
