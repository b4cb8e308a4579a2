use axum::{Json, Router, extract::{State, rejection::JsonRejection}, routing::post};
use serde_json::Value;
use std::sync::Arc;
use tower_http::{cors::{Any, CorsLayer}, trace::TraceLayer};
use uuid::Uuid;

use crate::{error::ApiError, models::{StoryRequest, StoryResponse}, story::{MockStoryBackend, StoryBackend}};

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn StoryBackend>,
}

impl AppState {
    /// State served by the binary: the mock story with its fixed three second delay.
    pub fn mock() -> Self {
        Self {
            backend: Arc::new(MockStoryBackend::default()),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate-story", post(generate_story))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}

pub async fn generate_story(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<StoryResponse>, ApiError> {
    let Json(value) = payload?;
    let body = parse_story_request(value)?;
    let request_id = Uuid::new_v4();

    tracing::info!(%request_id, "📖 Generating story {:?} (type: {:?})", body.title, body.kind);

    let story = state.backend.generate(&body).await;

    tracing::info!(%request_id, "✅ Story generated with {} segments", story.segments.len());
    Ok(Json(story))
}

/// Only a JSON object is a story request; serde would otherwise accept `[]` for an all-optional struct.
pub fn parse_story_request(value: Value) -> Result<StoryRequest, ApiError> {
    if !value.is_object() {
        return Err(ApiError::InvalidRequest(format!("expected a JSON object, got {}", json_kind(&value))));
    }
    serde_json::from_value(value).map_err(|e| ApiError::InvalidRequest(e.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
