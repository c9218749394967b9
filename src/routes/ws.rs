//! WebSocket upgrade + message loop. Each client message is parsed as JSON and
//! forwarded to the session store. We reply with a single JSON message per request.

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{debug, error, info, instrument};

use crate::error::Result;
use crate::protocol::{ClientWsMessage, ServerWsMessage};
use crate::state::AppState;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "vibequest_backend", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  info!(target: "vibequest_backend", "WebSocket connected");
  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        // Parse, dispatch, serialize response.
        let reply_msg = match serde_json::from_str::<ClientWsMessage>(&txt) {
          Ok(incoming) => {
            debug!(target: "vibequest_backend", "WS received: {:?}", &incoming);
            handle_client_ws(incoming, &state).await.unwrap_or_else(ServerWsMessage::from)
          }
          Err(e) => ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) },
        };

        let out = serde_json::to_string(&reply_msg).unwrap_or_else(|e| {
          serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
        });

        if let Err(e) = socket.send(Message::Text(out)).await {
          error!(target: "vibequest_backend", error = %e, "WS send error");
          break;
        }
      }
      Message::Ping(payload) => { let _ = socket.send(Message::Pong(payload)).await; }
      Message::Close(_) => break,
      _ => {}
    }
  }
  info!(target: "vibequest_backend", "WebSocket disconnected");
}

/// Dispatch one client message. Shared by the socket loop and tests.
#[instrument(level = "info", skip(state))]
pub async fn handle_client_ws(msg: ClientWsMessage, state: &AppState) -> Result<ServerWsMessage> {
  let reply = match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::CreateSession { selection } => {
      let selection = selection.as_ref().map(|s| s.parse()).transpose()?;
      ServerWsMessage::Session { session: state.create_session(selection).await }
    }

    ClientWsMessage::GetSession { session_id } => {
      ServerWsMessage::Session { session: state.read_session(&session_id, |s| s.snapshot()).await? }
    }

    ClientWsMessage::DeleteSession { session_id } => {
      state.remove_session(&session_id).await?;
      ServerWsMessage::SessionDeleted { session_id }
    }

    ClientWsMessage::Select { session_id, selection } => {
      let selection = selection.parse()?;
      let session = state
        .with_session(&session_id, |s| {
          s.select(selection)?;
          Ok(s.snapshot())
        })
        .await?;
      ServerWsMessage::Session { session }
    }

    ClientWsMessage::GetCurriculum { session_id } => {
      ServerWsMessage::Curriculum { steps: state.read_session(&session_id, |s| s.steps()).await? }
    }

    ClientWsMessage::StartStep { session_id, step_id } => {
      let started = state.with_session(&session_id, |s| s.start_step(&step_id)).await?;
      ServerWsMessage::StepStarted { started }
    }

    ClientWsMessage::CompleteStep { session_id } => {
      let completed = state.with_session(&session_id, |s| s.complete_step()).await?;
      ServerWsMessage::StepCompleted { completed }
    }

    ClientWsMessage::RequestDecision { session_id, decision_type } => {
      let decision =
        state.with_session(&session_id, |s| s.request_decision(decision_type, &mut rand::thread_rng())).await?;
      ServerWsMessage::Decision { decision }
    }

    ClientWsMessage::ResolveDecision { session_id, option_id } => {
      let outcome = state.with_session(&session_id, |s| s.resolve_decision(&option_id)).await?;
      ServerWsMessage::DecisionResolved { outcome }
    }

    ClientWsMessage::RequestVerification { session_id, verification_type } => {
      let verification = state
        .with_session(&session_id, |s| s.request_verification(verification_type, &mut rand::thread_rng()))
        .await?;
      ServerWsMessage::Verification { verification }
    }

    ClientWsMessage::ResolveVerification { session_id, answer, hint_used } => {
      let outcome = state.with_session(&session_id, |s| s.resolve_verification(&answer, hint_used)).await?;
      ServerWsMessage::VerificationResult { outcome }
    }

    ClientWsMessage::SkipVerification { session_id } => {
      let resources = state.with_session(&session_id, |s| s.skip_verification()).await?;
      ServerWsMessage::Skipped { resources }
    }

    ClientWsMessage::SubmitPrompt { session_id, prompt } => {
      let outcome = state.with_session(&session_id, |s| Ok(s.submit_prompt(&prompt))).await?;
      ServerWsMessage::PromptResult { outcome }
    }

    ClientWsMessage::Reset { session_id } => {
      let session = state
        .with_session(&session_id, |s| {
          s.reset();
          Ok(s.snapshot())
        })
        .await?;
      ServerWsMessage::Session { session }
    }
  };
  Ok(reply)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::{json, Value};

  async fn send(state: &AppState, msg: Value) -> Value {
    let incoming: ClientWsMessage = serde_json::from_value(msg).unwrap();
    let reply = handle_client_ws(incoming, state).await.unwrap_or_else(ServerWsMessage::from);
    serde_json::to_value(reply).unwrap()
  }

  #[tokio::test]
  async fn step_lifecycle_over_ws() {
    let state = AppState::default();
    let created = send(
      &state,
      json!({ "type": "create_session", "selection": { "playerClass": "co-pilot", "platform": "web", "stack": "react-node" } }),
    )
    .await;
    assert_eq!(created["type"], "session");
    let id = created["session"]["id"].as_str().unwrap().to_string();

    let started = send(&state, json!({ "type": "start_step", "sessionId": id, "stepId": "plan-1" })).await;
    assert_eq!(started["type"], "step_started");
    assert_eq!(started["started"]["step"]["status"], "in-progress");

    let done = send(&state, json!({ "type": "complete_step", "sessionId": id })).await;
    assert_eq!(done["type"], "step_completed");
    assert_eq!(done["completed"]["nextStepId"], "plan-2");

    let deleted = send(&state, json!({ "type": "delete_session", "sessionId": id })).await;
    assert_eq!(deleted["type"], "session_deleted");
    assert_eq!(deleted["sessionId"], id);
    assert!(state.sessions.read().await.is_empty());
  }

  #[tokio::test]
  async fn failures_become_error_frames() {
    let state = AppState::default();
    let reply = send(&state, json!({ "type": "start_step", "sessionId": "ghost", "stepId": "plan-1" })).await;
    assert_eq!(reply["type"], "error");
    assert_eq!(reply["message"], "Session not found: ghost");

    let pong = send(&state, json!({ "type": "ping" })).await;
    assert_eq!(pong, json!({ "type": "pong" }));
  }
}
