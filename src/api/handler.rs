//! Request handlers.
//!
//! Every validation failure maps to `422 Unprocessable Entity` with an
//! `{"error": ...}` body, whether it comes from the path (unknown module)
//! or the request body (malformed JSON, missing or mistyped fields). Axum's
//! stock rejections would answer 400 for some of those, so body extraction
//! goes through [`ApiJson`] to pin the status.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Path, Query, Request},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::trainer::{feedback, generate_scenario, Answer, Module, Scenario};

// ---------------------------------------------------------------------------
// Wire helpers
// ---------------------------------------------------------------------------

/// Optional seat overrides for `GET /scenario/:module`. Unknown query keys
/// are ignored, matching the tolerant handling of unknown seat values.
#[derive(Debug, Deserialize)]
pub struct ScenarioQuery {
    pub opener: Option<String>,
    pub defender: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub feedback: String,
}

type ValidationError = (StatusCode, Json<Value>);

fn validation_error(message: &str) -> ValidationError {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "error": message })),
    )
}

/// `axum::Json` with every rejection rewritten to a 422 validation error.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(validation_error(&rejection.body_text())),
        }
    }
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

pub async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

// ---------------------------------------------------------------------------
// GET /scenario/:module
// ---------------------------------------------------------------------------

/// Generate a fresh scenario. The module id arrives as a raw path segment
/// so unknown ids can be answered with 422 instead of axum's 400.
pub async fn get_scenario(
    Path(module): Path<String>,
    Query(params): Query<ScenarioQuery>,
) -> Result<Json<Scenario>, ValidationError> {
    let module = Module::parse(&module)
        .ok_or_else(|| validation_error(&format!("Unknown module: {module}")))?;

    let mut rng = rand::thread_rng();
    let scenario = generate_scenario(
        &mut rng,
        module,
        params.opener.as_deref(),
        params.defender.as_deref(),
    );
    Ok(Json(scenario))
}

// ---------------------------------------------------------------------------
// POST /feedback
// ---------------------------------------------------------------------------

/// Grade a submitted answer.
///
/// No scenario store exists, so tips are computed against a fresh default
/// scenario for the answered module, not the exact one the client saw.
/// Tip triggers are constant per module, which keeps the output stable
/// anyway.
pub async fn submit_feedback(ApiJson(answer): ApiJson<Answer>) -> Json<FeedbackResponse> {
    let mut rng = rand::thread_rng();
    let scenario = generate_scenario(&mut rng, answer.module, None, None);
    let tips = feedback(
        &scenario,
        &answer.action,
        answer.reasoning.as_deref().unwrap_or(""),
    );
    Json(FeedbackResponse { feedback: tips })
}
