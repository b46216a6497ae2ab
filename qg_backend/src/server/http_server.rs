use crate::clients::provider::ProviderClient;
use crate::error::{ErrorBackend, Result};
use crate::server::app_state::AppState;
use crate::server::{ping, quiz};
use axum::http::StatusCode;
use qg_core::server::default_config::{
    DEFAULT_SERVER_BACKEND_HOST, DEFAULT_SERVER_BACKEND_PORT, DEFAULT_SERVER_BACKEND_PROTOCOL,
    ENV_PROVIDER_API_KEY,
};
use qg_core::server::routes::print_all_backend_api_paths;
use std::env;
use std::sync::Arc;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::{Level, error, info};

/// Simple fallback handler for unmatched routes.
async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Starts the HTTP server using Axum and shared provider-client state.
///
/// # Behavior
/// - Reads the provider API key from the environment; absence is fatal.
/// - Sets up routing for `/api/v1/quizzes` and `/api/v1/ping`.
/// - Adds tracing for incoming requests and failures.
/// - Binds to configured host/port and starts listening.
#[tokio::main]
pub async fn http_server_backend() -> Result<()> {
    let api_key = env::var(ENV_PROVIDER_API_KEY)
        .map_err(|_| ErrorBackend::MissingApiKey(ENV_PROVIDER_API_KEY))?;

    let host = env::var("SERVER_BACKEND_HOST").unwrap_or(String::from(DEFAULT_SERVER_BACKEND_HOST));
    let port = env::var("SERVER_BACKEND_PORT").unwrap_or(String::from(DEFAULT_SERVER_BACKEND_PORT));
    let protocol = env::var("SERVER_BACKEND_PROTOCOL")
        .unwrap_or(String::from(DEFAULT_SERVER_BACKEND_PROTOCOL));

    let provider = ProviderClient::new(api_key)?;
    // Initialize shared application state
    let app_state = Arc::new(AppState::new(provider));
    let routes_api = axum::Router::new()
        .merge(quiz::route::routes())
        .merge(ping::route::routes())
        .with_state(app_state.clone());

    print_all_backend_api_paths();

    // Build versioned API routes
    let router = axum::Router::new()
        .nest("/api", routes_api)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
        .fallback(fallback);

    let listener = match tokio::net::TcpListener::bind(format!("{host}:{port}")).await {
        Ok(listener) => {
            info!("Starting HTTP server on {protocol}://{host}:{port}");
            listener
        }
        Err(err) => {
            error!("Failed to bind to {host}:{port}. {}", err);
            return Err(ErrorBackend::from(err));
        }
    };
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
