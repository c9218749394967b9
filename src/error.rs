//! Errors for session intents that can be refused. Lookups in the pure core never fail.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
  #[error("Session not found: {0}")]
  SessionNotFound(String),

  #[error("No class/platform/stack selected yet")]
  NoSelection,

  #[error("Selection is locked once the first step has started; reset to change it")]
  SelectionLocked,

  #[error("Unknown step: {0}")]
  UnknownStep(String),

  #[error("Step {step_id} is locked; complete first: {}", .missing.join(", "))]
  StepLocked { step_id: String, missing: Vec<String> },

  #[error("Step already completed: {0}")]
  StepAlreadyCompleted(String),

  #[error("Need {need} coffee (have {have})")]
  InsufficientCoffee { need: i32, have: i32 },

  #[error("Step {0} is still in progress; complete it first")]
  StepInProgress(String),

  #[error("No step in progress")]
  NoActiveStep,

  #[error("No decision pending")]
  NoPendingDecision,

  #[error("Unknown option: {0}")]
  UnknownOption(String),

  #[error("No verification pending")]
  NoPendingVerification,

  #[error("Answer too short: {got} characters, need at least {min}")]
  AnswerTooShort { min: usize, got: usize },

  #[error("Pick one of the offered outputs")]
  MissingSelection,

  #[error("Invalid selection: {0}")]
  InvalidSelection(String),
}

pub type Result<T> = std::result::Result<T, GameError>;

impl GameError {
  pub fn status(&self) -> StatusCode {
    match self {
      GameError::SessionNotFound(_) | GameError::UnknownStep(_) => StatusCode::NOT_FOUND,
      GameError::AnswerTooShort { .. }
      | GameError::MissingSelection
      | GameError::InvalidSelection(_)
      | GameError::UnknownOption(_) => StatusCode::UNPROCESSABLE_ENTITY,
      _ => StatusCode::CONFLICT,
    }
  }
}

impl IntoResponse for GameError {
  fn into_response(self) -> Response {
    (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn errors_map_to_status_codes() {
    assert_eq!(GameError::SessionNotFound("x".into()).status(), StatusCode::NOT_FOUND);
    assert_eq!(GameError::SelectionLocked.status(), StatusCode::CONFLICT);
    assert_eq!(GameError::StepInProgress("plan-1".into()).status(), StatusCode::CONFLICT);
    assert_eq!(GameError::AnswerTooShort { min: 10, got: 2 }.status(), StatusCode::UNPROCESSABLE_ENTITY);
  }

  #[test]
  fn locked_step_lists_missing_dependencies() {
    let e = GameError::StepLocked { step_id: "brain-3".into(), missing: vec!["brain-2".into()] };
    assert_eq!(e.to_string(), "Step brain-3 is locked; complete first: brain-2");
  }
}
