//! Axum route handlers for the Session API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::find_question;
use crate::errors::AppError;
use crate::guidance::SkillGapReport;
use crate::profile::{AnswerUpdate, Section};
use crate::session::controller::{send_chat_message, SessionSnapshot};
use crate::session::navigation::Trigger;
use crate::session::store::SharedSession;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub section: Section,
    pub question_id: String,
    pub update: AnswerUpdate,
}

#[derive(Debug, Deserialize)]
pub struct SelectCareerRequest {
    pub career: String,
}

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub trigger: Trigger,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

/// Result of a state-changing call. `applied` is false when the trigger was
/// not valid from the current screen; the snapshot is then unchanged.
#[derive(Debug, Serialize)]
pub struct TransitionResponse {
    pub applied: bool,
    pub session: SessionSnapshot,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub accepted: bool,
    pub session: SessionSnapshot,
}

async fn load_session(state: &AppState, id: Uuid) -> Result<SharedSession, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionSnapshot>) {
    let session = state.sessions.create().await;
    let snapshot = session.read().await.snapshot();
    (StatusCode::CREATED, Json(snapshot))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let session = load_session(&state, id).await?;
    let snapshot = session.read().await.snapshot();
    Ok(Json(snapshot))
}

/// PATCH /api/v1/sessions/:id/answers
///
/// Only question ids declared in the catalog are accepted. Values are stored as sent.
pub async fn handle_update_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    if find_question(req.section, &req.question_id).is_none() {
        return Err(AppError::Validation(format!(
            "Unknown question '{}' in section '{}'",
            req.question_id,
            req.section.as_str()
        )));
    }

    let session = load_session(&state, id).await?;
    let mut guard = session.write().await;
    guard.update_answer(req.section, &req.question_id, req.update);
    Ok(Json(guard.snapshot()))
}

/// POST /api/v1/sessions/:id/submit
pub async fn handle_submit_quiz(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TransitionResponse>, AppError> {
    let session = load_session(&state, id).await?;
    let mut guard = session.write().await;
    let applied = guard.submit_quiz();
    Ok(Json(TransitionResponse {
        applied,
        session: guard.snapshot(),
    }))
}

/// POST /api/v1/sessions/:id/careers/select
pub async fn handle_select_career(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SelectCareerRequest>,
) -> Result<Json<TransitionResponse>, AppError> {
    let session = load_session(&state, id).await?;
    let mut guard = session.write().await;
    let applied = guard.select_career(&req.career);
    Ok(Json(TransitionResponse {
        applied,
        session: guard.snapshot(),
    }))
}

/// POST /api/v1/sessions/:id/navigate
pub async fn handle_navigate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<NavigateRequest>,
) -> Result<Json<TransitionResponse>, AppError> {
    if !req.trigger.is_plain_navigation() {
        return Err(AppError::Validation(format!(
            "Trigger {:?} has its own endpoint",
            req.trigger
        )));
    }

    let session = load_session(&state, id).await?;
    let mut guard = session.write().await;
    let applied = guard.navigate(req.trigger);
    Ok(Json(TransitionResponse {
        applied,
        session: guard.snapshot(),
    }))
}

/// GET /api/v1/sessions/:id/skill-gap
///
/// `null` until a career has been selected.
pub async fn handle_skill_gap(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<SkillGapReport>>, AppError> {
    let session = load_session(&state, id).await?;
    let report = session.read().await.skill_gap();
    Ok(Json(report))
}

/// POST /api/v1/sessions/:id/chat
///
/// Returns as soon as the user message is logged. The bot reply shows up in
/// later snapshots once the configured delay has passed.
pub async fn handle_send_chat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let session = load_session(&state, id).await?;
    let accepted = send_chat_message(
        session.clone(),
        state.chat_responder.clone(),
        state.config.chat_reply_delay,
        req.text,
    )
    .await;
    let snapshot = session.read().await.snapshot();
    Ok(Json(ChatResponse { accepted, session: snapshot }))
}
