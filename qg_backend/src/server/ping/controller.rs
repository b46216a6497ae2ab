use crate::error::ResultAPI;
use axum::Json;
use serde_json::json;

pub async fn ping() -> ResultAPI {
    Ok(Json(json!({ "status": "ok" })))
}
