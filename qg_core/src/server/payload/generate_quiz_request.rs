use serde::{Deserialize, Serialize};

/// Inbound body for `POST /api/v1/quizzes/generate`. Topics arrive as one
/// comma-separated string, exactly as the browser form submits them.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizRequest {
    pub topics: String,
    pub question_count: usize,
}
