//! Axum route handlers for the Interview API.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequestParts, State},
    http::request::Parts,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::AppError;
use crate::interview::selector::{Difficulty, Role};
use crate::interview::store::{persist_best_effort, ReviewRecord, ANONYMOUS_USER};
use crate::models::Turn;
use crate::state::AppState;

/// Header the identity proxy uses to forward the signed-in user.
pub const USER_HEADER: &str = "x-user-email";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub role: Option<String>,
    pub difficulty: Option<String>,
    #[serde(alias = "transcript")]
    pub messages: Option<Vec<Turn>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub role: Option<String>,
    #[serde(alias = "transcript")]
    pub messages: Option<Vec<Turn>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub review: String,
}

#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub roles: Vec<CatalogEntry>,
    pub difficulties: Vec<CatalogEntry>,
}

/// The caller's identity as forwarded by the identity provider; opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity(pub String);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for UserIdentity {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .headers
            .get(USER_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(ANONYMOUS_USER);
        Ok(UserIdentity(user.to_string()))
    }
}

/// Requires a non-blank role and a present message list.
fn require_role_and_messages(
    role: Option<String>,
    messages: Option<Vec<Turn>>,
) -> Result<(String, Vec<Turn>), AppError> {
    match (role, messages) {
        (Some(role), Some(messages)) if !role.trim().is_empty() => Ok((role, messages)),
        _ => Err(AppError::Validation(
            "Missing role or messages".to_string(),
        )),
    }
}

fn reject_body(rejection: JsonRejection) -> AppError {
    AppError::Validation(rejection.body_text())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/chat
///
/// Returns the interviewer's next turn for the posted transcript.
/// An omitted difficulty selects the generic interviewer instruction.
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload.map_err(reject_body)?;
    let (role, messages) = require_role_and_messages(request.role, request.messages)?;
    let difficulty = request.difficulty.as_deref().unwrap_or_default();

    let reply = state
        .interviews
        .continue_interview(&role, difficulty, &messages)
        .await
        .map_err(|e| {
            error!("Chat generation failed: {e}");
            AppError::llm("Failed to get AI response")
        })?;

    Ok(Json(ChatResponse { reply }))
}

/// POST /api/review
///
/// Generates the end-of-interview review, then makes one best-effort attempt
/// to persist it. A failed save never changes the response.
pub async fn handle_review(
    State(state): State<AppState>,
    identity: UserIdentity,
    payload: Result<Json<ReviewRequest>, JsonRejection>,
) -> Result<Json<ReviewResponse>, AppError> {
    info!("Review API called");
    let Json(request) = payload.map_err(reject_body)?;
    let (role, messages) = require_role_and_messages(request.role, request.messages)?;
    if messages.is_empty() {
        return Err(AppError::Validation(
            "Missing role or messages".to_string(),
        ));
    }

    let review = state
        .interviews
        .summarize(&role, &messages)
        .await
        .map_err(|e| AppError::llm_with_details("Failed to generate review", e))?;

    let record = ReviewRecord {
        user_id: identity.0,
        role,
        transcript: messages,
        review,
    };
    if persist_best_effort(state.reviews.as_ref(), &record).await {
        info!("Saved to database");
    }

    Ok(Json(ReviewResponse {
        review: record.review,
    }))
}

/// GET /api/roles
///
/// Lists the roles and difficulties that have dedicated interviewer prompts.
pub async fn handle_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        roles: Role::ALL
            .into_iter()
            .map(|r| CatalogEntry {
                value: r.as_str(),
                label: r.label(),
            })
            .collect(),
        difficulties: Difficulty::ALL
            .into_iter()
            .map(|d| CatalogEntry {
                value: d.as_str(),
                label: d.label(),
            })
            .collect(),
    })
}
