//! HTTP endpoint handlers. These are thin wrappers that forward to the session store.
//! Each handler is instrumented and logs its parameters and basic result info.

use std::sync::Arc;
use axum::{extract::{Path, Query, State}, http::StatusCode, response::IntoResponse, Json};
use tracing::{info, instrument};

use crate::curriculum::generate_curriculum;
use crate::error::Result;
use crate::protocol::*;
use crate::session::{DecisionOutcome, PromptOutcome, SessionSnapshot, StepCompleted, StepStarted, VerificationOutcome};
use crate::domain::{DecisionPoint, VerificationChallenge};
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip_all)]
pub async fn http_get_curriculum(Query(q): Query<CurriculumQuery>) -> impl IntoResponse {
  let selection = q.selection();
  let steps = generate_curriculum(selection);
  info!(target: "vibequest_backend", class = %selection.player_class, platform = %selection.platform, stack = %selection.stack, count = steps.len(), "HTTP curriculum served");
  Json(CurriculumOut { selection: Some(selection), steps })
}

#[instrument(level = "info", skip_all)]
pub async fn http_create_session(
  State(state): State<Arc<AppState>>,
  Json(body): Json<CreateSessionIn>,
) -> Result<(StatusCode, Json<SessionSnapshot>)> {
  let selection = body.selection.as_ref().map(SelectionIn::parse).transpose()?;
  let snapshot = state.create_session(selection).await;
  Ok((StatusCode::CREATED, Json(snapshot)))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_session(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Result<Json<SessionSnapshot>> {
  state.read_session(&id, |s| s.snapshot()).await.map(Json)
}

#[instrument(level = "info", skip(state))]
pub async fn http_delete_session(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Result<StatusCode> {
  state.remove_session(&id).await?;
  Ok(StatusCode::NO_CONTENT)
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_post_selection(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Json(body): Json<SelectionIn>,
) -> Result<Json<SessionSnapshot>> {
  let selection = body.parse()?;
  state
    .with_session(&id, |s| {
      s.select(selection)?;
      Ok(s.snapshot())
    })
    .await
    .map(Json)
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_session_curriculum(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<Json<CurriculumOut>> {
  state
    .read_session(&id, |s| CurriculumOut { selection: s.selection(), steps: s.steps() })
    .await
    .map(Json)
}

#[instrument(level = "info", skip(state))]
pub async fn http_start_step(
  State(state): State<Arc<AppState>>,
  Path((id, step_id)): Path<(String, String)>,
) -> Result<Json<StepStarted>> {
  state.with_session(&id, |s| s.start_step(&step_id)).await.map(Json)
}

#[instrument(level = "info", skip(state))]
pub async fn http_complete_step(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Result<Json<StepCompleted>> {
  state.with_session(&id, |s| s.complete_step()).await.map(Json)
}

#[instrument(level = "info", skip(state, body), fields(kind = ?body.kind))]
pub async fn http_request_decision(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Json(body): Json<DecisionRequestIn>,
) -> Result<Json<DecisionPoint>> {
  state.with_session(&id, |s| s.request_decision(body.kind, &mut rand::thread_rng())).await.map(Json)
}

#[instrument(level = "info", skip(state, body), fields(option_id = %body.option_id))]
pub async fn http_resolve_decision(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Json(body): Json<ResolveDecisionIn>,
) -> Result<Json<DecisionOutcome>> {
  state.with_session(&id, |s| s.resolve_decision(&body.option_id)).await.map(Json)
}

#[instrument(level = "info", skip(state, body), fields(kind = ?body.kind))]
pub async fn http_request_verification(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Json(body): Json<VerificationRequestIn>,
) -> Result<Json<VerificationChallenge>> {
  state.with_session(&id, |s| s.request_verification(body.kind, &mut rand::thread_rng())).await.map(Json)
}

#[instrument(level = "info", skip(state, body), fields(answer_len = body.answer.len(), hint_used = body.hint_used))]
pub async fn http_resolve_verification(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Json(body): Json<ResolveVerificationIn>,
) -> Result<Json<VerificationOutcome>> {
  state.with_session(&id, |s| s.resolve_verification(&body.answer, body.hint_used)).await.map(Json)
}

#[instrument(level = "info", skip(state))]
pub async fn http_skip_verification(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Result<Json<ResourcesOut>> {
  state
    .with_session(&id, |s| s.skip_verification())
    .await
    .map(|resources| Json(ResourcesOut { resources }))
}

#[instrument(level = "info", skip(state, body), fields(prompt_len = body.prompt.len()))]
pub async fn http_submit_prompt(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Json(body): Json<PromptIn>,
) -> Result<Json<PromptOutcome>> {
  state.with_session(&id, |s| Ok(s.submit_prompt(&body.prompt))).await.map(Json)
}

#[instrument(level = "info", skip(state))]
pub async fn http_reset(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Result<Json<SessionSnapshot>> {
  state
    .with_session(&id, |s| {
      s.reset();
      Ok(s.snapshot())
    })
    .await
    .map(Json)
}
