//! HTTP routes.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use grimroll_domain::{CharacterId, RollLogId};
use grimroll_shared::{
    ErrorCode, ErrorResponse, RollLogData, SkillCheckRequest, SkillCheckResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use super::auth::AuthenticatedUser;
use super::rate_limit::limit_skill_checks;
use super::ApiState;
use crate::use_cases::roll_log::RollLogError;
use crate::use_cases::skill_check::SkillCheckError;

/// Create all HTTP routes.
pub fn routes(state: ApiState) -> Router {
    // Only submissions are rate limited; reads are cheap and roll nothing.
    let skill_checks = Router::new()
        .route("/api/skill-checks", post(resolve_skill_check))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            limit_skill_checks,
        ));

    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/roll-logs/{id}", get(get_roll_log))
        .route(
            "/api/characters/{id}/roll-logs",
            get(list_character_roll_logs),
        )
        .merge(skill_checks)
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Skill checks
// =============================================================================

async fn resolve_skill_check(
    State(state): State<ApiState>,
    AuthenticatedUser(user): AuthenticatedUser,
    body: Result<Json<SkillCheckRequest>, JsonRejection>,
) -> Result<Json<SkillCheckResponse>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let request = request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let response = state
        .app
        .use_cases
        .skill_check
        .resolve
        .execute(user, request.into())
        .await?;
    Ok(Json(response))
}

// =============================================================================
// Roll history
// =============================================================================

#[derive(Debug, Deserialize)]
struct HistoryQuery {
    limit: Option<u32>,
}

async fn get_roll_log(
    State(state): State<ApiState>,
    AuthenticatedUser(user): AuthenticatedUser,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<RollLogData>, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let log = state
        .app
        .use_cases
        .roll_log
        .history
        .get(user, RollLogId::from_uuid(id))
        .await?;
    Ok(Json(log))
}

async fn list_character_roll_logs(
    State(state): State<ApiState>,
    AuthenticatedUser(user): AuthenticatedUser,
    id: Result<Path<Uuid>, PathRejection>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<Vec<RollLogData>>, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let logs = state
        .app
        .use_cases
        .roll_log
        .history
        .list_for_character(user, CharacterId::from_uuid(id), query.limit)
        .await?;
    Ok(Json(logs))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Unauthorized,
    RateLimited,
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(ErrorCode::NotFound, "Not found"),
            ),
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(ErrorCode::BadRequest, msg),
            ),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new(ErrorCode::Unauthorized, "Missing or invalid user identity"),
            ),
            ApiError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                ErrorResponse::new(ErrorCode::RateLimited, "Too many skill checks"),
            ),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(ErrorCode::InternalError, "Internal error"),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<crate::infrastructure::ports::RepoError> for ApiError {
    fn from(e: crate::infrastructure::ports::RepoError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<SkillCheckError> for ApiError {
    fn from(e: SkillCheckError) -> Self {
        match e {
            SkillCheckError::NotFound => ApiError::NotFound,
            SkillCheckError::AuditWrite(e) | SkillCheckError::Repo(e) => e.into(),
        }
    }
}

impl From<RollLogError> for ApiError {
    fn from(e: RollLogError) -> Self {
        match e {
            RollLogError::NotFound => ApiError::NotFound,
            RollLogError::Repo(e) => e.into(),
        }
    }
}
