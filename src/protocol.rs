//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{
    CurriculumStep, DecisionPoint, DecisionType, Platform, PlayerClass, Selection, Stack, VerificationChallenge,
    VerificationType,
};
use crate::error::{GameError, Result};
use crate::resources::PlayerResources;
use crate::session::{DecisionOutcome, PromptOutcome, SessionSnapshot, StepCompleted, StepStarted, VerificationOutcome};

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ClientWsMessage {
    Ping,
    CreateSession {
        #[serde(default)]
        selection: Option<SelectionIn>,
    },
    GetSession {
        session_id: String,
    },
    DeleteSession {
        session_id: String,
    },
    Select {
        session_id: String,
        selection: SelectionIn,
    },
    GetCurriculum {
        session_id: String,
    },
    StartStep {
        session_id: String,
        step_id: String,
    },
    CompleteStep {
        session_id: String,
    },
    RequestDecision {
        session_id: String,
        #[serde(default)]
        decision_type: Option<DecisionType>,
    },
    ResolveDecision {
        session_id: String,
        option_id: String,
    },
    RequestVerification {
        session_id: String,
        #[serde(default)]
        verification_type: Option<VerificationType>,
    },
    ResolveVerification {
        session_id: String,
        answer: String,
        #[serde(default)]
        hint_used: bool,
    },
    SkipVerification {
        session_id: String,
    },
    SubmitPrompt {
        session_id: String,
        prompt: String,
    },
    Reset {
        session_id: String,
    },
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ServerWsMessage {
    Pong,
    Session { session: SessionSnapshot },
    SessionDeleted { session_id: String },
    Curriculum { steps: Vec<CurriculumStep> },
    StepStarted { started: StepStarted },
    StepCompleted { completed: StepCompleted },
    Decision { decision: DecisionPoint },
    DecisionResolved { outcome: DecisionOutcome },
    Verification { verification: VerificationChallenge },
    VerificationResult { outcome: VerificationOutcome },
    Skipped { resources: PlayerResources },
    PromptResult { outcome: PromptOutcome },
    Error { message: String },
}

impl From<GameError> for ServerWsMessage {
    fn from(e: GameError) -> Self {
        ServerWsMessage::Error { message: e.to_string() }
    }
}

//
// HTTP request/response DTOs
//

/// Selection triple as sent by clients (wire strings, e.g. "10x-architect").
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionIn {
    pub player_class: String,
    pub platform: String,
    pub stack: String,
}

impl SelectionIn {
    /// Strict parse for session intents; unknown keys are refused.
    pub fn parse(&self) -> Result<Selection> {
        let class: PlayerClass = self.player_class.parse().map_err(GameError::InvalidSelection)?;
        let platform: Platform = self.platform.parse().map_err(GameError::InvalidSelection)?;
        let stack: Stack = self.stack.parse().map_err(GameError::InvalidSelection)?;
        Ok(Selection::new(class, platform, stack))
    }
}

/// Stateless curriculum query. Missing or unknown keys fall back to the default triple.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumQuery {
    pub player_class: Option<String>,
    pub platform: Option<String>,
    pub stack: Option<String>,
}

impl CurriculumQuery {
    pub fn selection(&self) -> Selection {
        Selection::parse_or_default(
            self.player_class.as_deref().unwrap_or_default(),
            self.platform.as_deref().unwrap_or_default(),
            self.stack.as_deref().unwrap_or_default(),
        )
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct CreateSessionIn {
    #[serde(default)]
    pub selection: Option<SelectionIn>,
}

#[derive(Debug, Deserialize, Default)]
pub struct DecisionRequestIn {
    #[serde(default, rename = "type")]
    pub kind: Option<DecisionType>,
}

#[derive(Debug, Deserialize, Default)]
pub struct VerificationRequestIn {
    #[serde(default, rename = "type")]
    pub kind: Option<VerificationType>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveDecisionIn {
    pub option_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveVerificationIn {
    pub answer: String,
    #[serde(default)]
    pub hint_used: bool,
}

#[derive(Debug, Deserialize)]
pub struct PromptIn {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct CurriculumOut {
    pub selection: Option<Selection>,
    pub steps: Vec<CurriculumStep>,
}

#[derive(Debug, Serialize)]
pub struct ResourcesOut {
    pub resources: PlayerResources,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_messages_use_snake_case_tags_and_camel_case_fields() {
        let msg: ClientWsMessage =
            serde_json::from_str(r#"{"type":"start_step","sessionId":"s1","stepId":"plan-1"}"#).unwrap();
        match msg {
            ClientWsMessage::StartStep { session_id, step_id } => {
                assert_eq!(session_id, "s1");
                assert_eq!(step_id, "plan-1");
            }
            other => panic!("unexpected {other:?}"),
        }

        let msg: ClientWsMessage =
            serde_json::from_str(r#"{"type":"request_decision","sessionId":"s1","decisionType":"scope-creep"}"#).unwrap();
        assert!(matches!(msg, ClientWsMessage::RequestDecision { decision_type: Some(DecisionType::ScopeCreep), .. }));
    }

    #[test]
    fn strict_selection_parse() {
        let ok = SelectionIn { player_class: "10x-architect".into(), platform: "mobile".into(), stack: "nextjs-prisma".into() };
        assert_eq!(ok.parse().unwrap(), Selection::new(PlayerClass::Architect, Platform::Mobile, Stack::NextjsPrisma));
        let bad = SelectionIn { player_class: "wizard".into(), ..ok };
        assert!(matches!(bad.parse(), Err(GameError::InvalidSelection(_))));
    }

    #[test]
    fn curriculum_query_falls_back() {
        let q = CurriculumQuery { player_class: Some("nonexistent".into()), ..Default::default() };
        assert_eq!(q.selection(), Selection::default());
    }

    #[test]
    fn errors_become_error_frames() {
        let json = serde_json::to_value(ServerWsMessage::from(GameError::NoActiveStep)).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["message"], "No step in progress");
    }
}
