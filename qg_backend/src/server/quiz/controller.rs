use crate::error::ResultAPI;
use crate::server::app_state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use qg_core::quiz::formatter::build_prompt;
use qg_core::quiz::parser::parse_quiz;
use qg_core::quiz::request::QuizRequest;
use qg_core::server::payload::generate_quiz_request::GenerateQuizRequest;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Handler for quiz generation: validates the submission, formats the
/// prompt, issues the one outbound provider call, and decodes the reply.
///
/// # Returns
/// * `Ok(Json)` - The generated quiz as `{questions: [...], generatedAt}`.
/// * `Err` - Invalid input (400), or an upstream/parse failure (502).
pub async fn generate_quiz(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<GenerateQuizRequest>, JsonRejection>,
) -> ResultAPI {
    let Json(payload) = payload?;

    let request = QuizRequest::new(&payload.topics, payload.question_count)?;
    info!(
        "Generating {} questions on topics: {}",
        request.question_count(),
        request.topics().join(", ")
    );

    let prompt = build_prompt(&request);
    let raw = state.provider.generate_content(&prompt).await?;
    let quiz = parse_quiz(&raw, request.question_count())?;

    Ok(Json(json!(quiz)))
}
