use crate::server::app_state::AppState;
use crate::server::quiz::controller::generate_quiz;
use axum::routing::post;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new().route("/v1/quizzes/generate", post(generate_quiz))
}
