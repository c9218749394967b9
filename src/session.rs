//! Game session: the single owner of a player's resources and curriculum progress.
//!
//! Every intent is a method on `GameSession` and every stat change goes through
//! `resources::apply_consequences`. Sessions are plain values; `state::AppState` keeps them
//! behind a lock and is the only writer.

use std::collections::BTreeSet;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rand::Rng;
use serde::Serialize;
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::challenges::{
  get_contextual_decision, get_contextual_verification, get_decision_for_step, get_verification_for_step,
  random_decision, random_verification, ChallengeContext,
};
use crate::config::GameConfig;
use crate::curriculum::{generate_curriculum, next_step, step_by_id};
use crate::domain::{
  CurriculumStep, DecisionOption, DecisionPoint, DecisionResolution, DecisionType, GamePhase, Selection, StepStatus,
  VerificationChallenge, VerificationMode, VerificationResult, VerificationType,
};
use crate::error::{GameError, Result};
use crate::prompt::{assess_prompt, PromptAssessment};
use crate::resources::{apply_consequences, regenerate_coffee, Consequences, DerivedStats, PlayerResources};
use crate::scoring::score_verification;

const FAIL_SANITY_PENALTY: i32 = -10;
const SKIP_SANITY_PENALTY: i32 = -15;
const SKIP_TECH_DEBT: i32 = 10;

#[derive(Clone, Debug)]
pub struct GameSession {
  pub id: String,
  selection: Option<Selection>,
  steps: Vec<CurriculumStep>,
  starting: PlayerResources,
  resources: PlayerResources,
  completed_steps: BTreeSet<String>,
  completed_verifications: BTreeSet<String>,
  current_step_id: Option<String>,
  /// Set by the first `start_step`; locks the selection until `reset`.
  started: bool,
  pending_decision: Option<DecisionPoint>,
  pending_verification: Option<VerificationChallenge>,
  decision_history: Vec<DecisionResolution>,
  min_answer_chars: usize,
  last_active: Instant,
}

/// Read-only view returned to clients.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
  pub id: String,
  pub selection: Option<Selection>,
  pub selection_locked: bool,
  pub resources: PlayerResources,
  pub derived: DerivedStats,
  pub phase: GamePhase,
  pub completed_steps: Vec<String>,
  pub completed_verifications: Vec<String>,
  pub current_step_id: Option<String>,
  pub pending_decision_id: Option<String>,
  pub pending_verification_id: Option<String>,
  pub decision_history: Vec<DecisionResolution>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StepStarted {
  pub step: CurriculumStep,
  pub resources: PlayerResources,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StepCompleted {
  pub step_id: String,
  pub xp_gained: u32,
  pub next_step_id: Option<String>,
  pub phase: GamePhase,
  pub resources: PlayerResources,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DecisionOutcome {
  pub decision_id: String,
  pub option: DecisionOption,
  pub was_optimal: bool,
  pub resources: PlayerResources,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationOutcome {
  pub verification_id: String,
  pub result: VerificationResult,
  pub consequences: Consequences,
  pub resources: PlayerResources,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PromptOutcome {
  pub assessment: PromptAssessment,
  pub resources: PlayerResources,
}

fn now_millis() -> u64 {
  SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis() as u64).unwrap_or(0)
}

/// Phase of a step id, read from its archetype prefix.
fn phase_of(step_id: &str) -> GamePhase {
  match step_id.split('-').next().unwrap_or_default() {
    "skeleton" => GamePhase::Skeleton,
    "brain" => GamePhase::Brain,
    "quality" | "prod" => GamePhase::Production,
    _ => GamePhase::Initialization,
  }
}

impl GameSession {
  pub fn new(config: &GameConfig, selection: Option<Selection>) -> Self {
    let starting = config.resources.to_resources();
    Self {
      id: Uuid::new_v4().to_string(),
      selection,
      steps: selection.map(generate_curriculum).unwrap_or_default(),
      starting,
      resources: starting,
      completed_steps: BTreeSet::new(),
      completed_verifications: BTreeSet::new(),
      current_step_id: None,
      started: false,
      pending_decision: None,
      pending_verification: None,
      decision_history: Vec::new(),
      min_answer_chars: config.verification.min_answer_chars,
      last_active: Instant::now(),
    }
  }

  pub fn resources(&self) -> &PlayerResources {
    &self.resources
  }

  pub fn selection(&self) -> Option<Selection> {
    self.selection
  }

  pub fn current_step(&self) -> Option<&CurriculumStep> {
    self.current_step_id.as_deref().and_then(|id| step_by_id(&self.steps, id))
  }

  pub fn pending_decision(&self) -> Option<&DecisionPoint> {
    self.pending_decision.as_ref()
  }

  pub fn pending_verification(&self) -> Option<&VerificationChallenge> {
    self.pending_verification.as_ref()
  }

  pub fn is_step_completed(&self, step_id: &str) -> bool {
    self.completed_steps.contains(step_id)
  }

  /// Mark the session as used now. The store calls this on every intent.
  pub fn touch(&mut self) {
    self.last_active = Instant::now();
  }

  pub fn idle_for(&self) -> Duration {
    self.last_active.elapsed()
  }

  /// The single mutation path for stats.
  fn apply(&mut self, delta: &Consequences) {
    let before = self.resources;
    self.resources = apply_consequences(&self.resources, delta);
    if self.resources.level > before.level {
      info!(target: "session", id = %self.id, level = self.resources.level, "Level up");
    }
    debug!(target: "session", id = %self.id, ?delta, resources = ?self.resources, "Consequences applied");
  }

  fn selection_or_err(&self) -> Result<Selection> {
    self.selection.ok_or(GameError::NoSelection)
  }

  fn challenge_ctx(&self, selection: Selection) -> ChallengeContext<'_> {
    ChallengeContext::new(self.current_step(), selection)
  }

  /// Choose the (class, platform, stack) triple. Regenerates the curriculum.
  #[instrument(level = "info", skip(self), fields(id = %self.id))]
  pub fn select(&mut self, selection: Selection) -> Result<()> {
    if self.started {
      return Err(GameError::SelectionLocked);
    }
    self.selection = Some(selection);
    self.steps = generate_curriculum(selection);
    self.current_step_id = None;
    info!(target: "session", id = %self.id, class = %selection.player_class, platform = %selection.platform, stack = %selection.stack, "Selection set");
    Ok(())
  }

  /// Live status of one step, derived from progress.
  pub fn step_status(&self, step: &CurriculumStep) -> StepStatus {
    if self.completed_steps.contains(&step.id) {
      StepStatus::Completed
    } else if self.current_step_id.as_deref() == Some(step.id.as_str()) {
      StepStatus::InProgress
    } else if step.depends_on.iter().all(|d| self.completed_steps.contains(d)) {
      StepStatus::Available
    } else {
      StepStatus::Locked
    }
  }

  /// The curriculum with live statuses.
  pub fn steps(&self) -> Vec<CurriculumStep> {
    self
      .steps
      .iter()
      .map(|s| CurriculumStep { status: self.step_status(s), ..s.clone() })
      .collect()
  }

  pub fn phase(&self) -> GamePhase {
    self
      .steps
      .iter()
      .find(|s| !self.completed_steps.contains(&s.id))
      .map(|s| phase_of(&s.id))
      .unwrap_or(GamePhase::Production)
  }

  #[instrument(level = "info", skip(self), fields(id = %self.id))]
  pub fn start_step(&mut self, step_id: &str) -> Result<StepStarted> {
    self.selection_or_err()?;
    let step = step_by_id(&self.steps, step_id).ok_or_else(|| GameError::UnknownStep(step_id.to_string()))?;

    if self.completed_steps.contains(step_id) {
      return Err(GameError::StepAlreadyCompleted(step_id.to_string()));
    }
    if self.current_step_id.as_deref() == Some(step_id) {
      let step = CurriculumStep { status: StepStatus::InProgress, ..step.clone() };
      return Ok(StepStarted { step, resources: self.resources });
    }
    if let Some(current) = &self.current_step_id {
      return Err(GameError::StepInProgress(current.clone()));
    }
    let missing: Vec<String> =
      step.depends_on.iter().filter(|d| !self.completed_steps.contains(*d)).cloned().collect();
    if !missing.is_empty() {
      return Err(GameError::StepLocked { step_id: step_id.to_string(), missing });
    }
    let need = step.coffee_cost as i32;
    if self.resources.coffee < need {
      warn!(target: "session", id = %self.id, %step_id, need, have = self.resources.coffee, "Not enough coffee to start step");
      return Err(GameError::InsufficientCoffee { need, have: self.resources.coffee });
    }

    let step = step.clone();
    if need > 0 {
      self.apply(&Consequences::new().coffee(-need));
    }
    self.current_step_id = Some(step.id.clone());
    self.started = true;
    info!(target: "session", id = %self.id, %step_id, coffee_cost = need, "Step started");

    Ok(StepStarted { step: CurriculumStep { status: StepStatus::InProgress, ..step }, resources: self.resources })
  }

  #[instrument(level = "info", skip(self), fields(id = %self.id))]
  pub fn complete_step(&mut self) -> Result<StepCompleted> {
    let step = self.current_step().cloned().ok_or(GameError::NoActiveStep)?;

    self.apply(&Consequences::new().xp(step.xp_reward as i32));
    self.completed_steps.insert(step.id.clone());
    self.current_step_id = None;

    let next_step_id = next_step(&self.steps, &step.id).map(|s| s.id.clone());
    info!(target: "session", id = %self.id, step_id = %step.id, xp = step.xp_reward, next = ?next_step_id, "Step completed");

    Ok(StepCompleted {
      step_id: step.id,
      xp_gained: step.xp_reward,
      next_step_id,
      phase: self.phase(),
      resources: self.resources,
    })
  }

  /// Without a requested type: the authored decision for the current step, else a random
  /// contextual one. With a type: that contextual decision.
  #[instrument(level = "info", skip(self, rng), fields(id = %self.id))]
  pub fn request_decision<R: Rng + ?Sized>(&mut self, kind: Option<DecisionType>, rng: &mut R) -> Result<DecisionPoint> {
    let selection = self.selection_or_err()?;
    let decision = {
      let ctx = self.challenge_ctx(selection);
      match kind {
        Some(kind) => get_contextual_decision(kind, &ctx),
        None => get_decision_for_step(&ctx).unwrap_or_else(|| random_decision(&ctx, rng)),
      }
    };
    info!(target: "challenge", id = %self.id, decision_id = %decision.id, "Decision presented");
    self.pending_decision = Some(decision.clone());
    Ok(decision)
  }

  #[instrument(level = "info", skip(self), fields(id = %self.id))]
  pub fn resolve_decision(&mut self, option_id: &str) -> Result<DecisionOutcome> {
    let decision = self.pending_decision.as_ref().ok_or(GameError::NoPendingDecision)?;
    let option = decision.option(option_id).cloned().ok_or_else(|| GameError::UnknownOption(option_id.to_string()))?;
    let decision_id = decision.id.clone();

    self.pending_decision = None;
    self.apply(&option.consequences);
    self.decision_history.push(DecisionResolution {
      decision_id: decision_id.clone(),
      option_chosen: option.id.clone(),
      timestamp: now_millis(),
      was_optimal: option.is_optimal,
    });
    info!(target: "challenge", id = %self.id, %decision_id, option = %option.id, optimal = option.is_optimal, "Decision resolved");

    Ok(DecisionOutcome { decision_id, was_optimal: option.is_optimal, option, resources: self.resources })
  }

  /// Same fallback rules as `request_decision`.
  #[instrument(level = "info", skip(self, rng), fields(id = %self.id))]
  pub fn request_verification<R: Rng + ?Sized>(
    &mut self,
    kind: Option<VerificationType>,
    rng: &mut R,
  ) -> Result<VerificationChallenge> {
    let selection = self.selection_or_err()?;
    let challenge = {
      let ctx = self.challenge_ctx(selection);
      match kind {
        Some(kind) => get_contextual_verification(kind, &ctx),
        None => get_verification_for_step(&ctx).unwrap_or_else(|| random_verification(&ctx, rng)),
      }
    };
    info!(target: "challenge", id = %self.id, verification_id = %challenge.id, mode = ?challenge.mode, "Verification presented");
    self.pending_verification = Some(challenge.clone());
    Ok(challenge)
  }

  /// Gate, score and apply the outcome. A refused answer leaves the verification pending.
  #[instrument(level = "info", skip(self, answer), fields(id = %self.id, answer_len = answer.len()))]
  pub fn resolve_verification(&mut self, answer: &str, hint_used: bool) -> Result<VerificationOutcome> {
    let challenge = self.pending_verification.as_ref().ok_or(GameError::NoPendingVerification)?;

    if challenge.mode == VerificationMode::PredictOutput {
      if answer.trim().is_empty() {
        return Err(GameError::MissingSelection);
      }
    } else {
      let got = answer.trim().chars().count();
      if got < self.min_answer_chars {
        return Err(GameError::AnswerTooShort { min: self.min_answer_chars, got });
      }
    }

    let result = score_verification(challenge, answer, hint_used);
    let consequences = if result.passed {
      Consequences::new().xp(challenge.xp_reward as i32).ai_trust(challenge.ai_trust_bonus)
    } else {
      Consequences::new().sanity(FAIL_SANITY_PENALTY)
    };
    let verification_id = challenge.id.clone();

    self.pending_verification = None;
    self.apply(&consequences);
    if result.passed {
      self.completed_verifications.insert(verification_id.clone());
    }
    info!(target: "challenge", id = %self.id, %verification_id, score = result.score, passed = result.passed, "Verification resolved");

    Ok(VerificationOutcome { verification_id, result, consequences, resources: self.resources })
  }

  #[instrument(level = "info", skip(self), fields(id = %self.id))]
  pub fn skip_verification(&mut self) -> Result<PlayerResources> {
    let challenge = self.pending_verification.take().ok_or(GameError::NoPendingVerification)?;
    self.apply(&Consequences::new().sanity(SKIP_SANITY_PENALTY).tech_debt(SKIP_TECH_DEBT));
    warn!(target: "challenge", id = %self.id, verification_id = %challenge.id, "Verification skipped");
    Ok(self.resources)
  }

  #[instrument(level = "info", skip(self, prompt), fields(id = %self.id, prompt_len = prompt.len()))]
  pub fn submit_prompt(&mut self, prompt: &str) -> PromptOutcome {
    let assessment = assess_prompt(prompt);
    self.apply(&assessment.consequences);
    info!(target: "session", id = %self.id, quality = assessment.quality, category = ?assessment.category, "Prompt assessed");
    PromptOutcome { assessment, resources: self.resources }
  }

  pub fn tick_coffee(&mut self) {
    self.resources = regenerate_coffee(&self.resources);
  }

  /// Back to the starting resources with no progress. Keeps the selection but unlocks it.
  #[instrument(level = "info", skip(self), fields(id = %self.id))]
  pub fn reset(&mut self) {
    self.resources = self.starting;
    self.completed_steps.clear();
    self.completed_verifications.clear();
    self.current_step_id = None;
    self.started = false;
    self.pending_decision = None;
    self.pending_verification = None;
    self.decision_history.clear();
    info!(target: "session", id = %self.id, "Session reset");
  }

  pub fn snapshot(&self) -> SessionSnapshot {
    SessionSnapshot {
      id: self.id.clone(),
      selection: self.selection,
      selection_locked: self.started,
      resources: self.resources,
      derived: self.resources.derived(),
      phase: self.phase(),
      completed_steps: self.completed_steps.iter().cloned().collect(),
      completed_verifications: self.completed_verifications.iter().cloned().collect(),
      current_step_id: self.current_step_id.clone(),
      pending_decision_id: self.pending_decision.as_ref().map(|d| d.id.clone()),
      pending_verification_id: self.pending_verification.as_ref().map(|v| v.id.clone()),
      decision_history: self.decision_history.clone(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{Platform, PlayerClass, Stack};
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  fn session() -> GameSession {
    GameSession::new(&GameConfig::default(), Some(Selection::default()))
  }

  #[test]
  fn nothing_works_before_selection() {
    let mut s = GameSession::new(&GameConfig::default(), None);
    assert_eq!(s.start_step("plan-1").unwrap_err(), GameError::NoSelection);
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(s.request_decision(None, &mut rng).unwrap_err(), GameError::NoSelection);
    assert!(s.steps().is_empty());
  }

  #[test]
  fn live_status_follows_dependencies() {
    let mut s = session();
    let status = |s: &GameSession, id: &str| s.steps().into_iter().find(|x| x.id == id).map(|x| x.status);
    assert_eq!(status(&s, "plan-1"), Some(StepStatus::Available));
    assert_eq!(status(&s, "plan-2"), Some(StepStatus::Locked));

    s.start_step("plan-1").unwrap();
    assert_eq!(status(&s, "plan-1"), Some(StepStatus::InProgress));
    s.complete_step().unwrap();
    assert_eq!(status(&s, "plan-1"), Some(StepStatus::Completed));
    assert_eq!(status(&s, "plan-2"), Some(StepStatus::Available));
  }

  #[test]
  fn start_step_checks_dependencies_and_coffee() {
    let mut s = session();
    match s.start_step("plan-2").unwrap_err() {
      GameError::StepLocked { missing, .. } => assert_eq!(missing, vec!["plan-1".to_string()]),
      other => panic!("unexpected {other:?}"),
    }
    assert_eq!(s.start_step("nope").unwrap_err(), GameError::UnknownStep("nope".into()));

    s.start_step("plan-1").unwrap();
    s.complete_step().unwrap();
    s.resources.coffee = 2;
    assert_eq!(s.start_step("plan-2").unwrap_err(), GameError::InsufficientCoffee { need: 5, have: 2 });

    s.resources.coffee = 50;
    let started = s.start_step("plan-2").unwrap();
    assert_eq!(started.resources.coffee, 45);
    assert_eq!(started.step.status, StepStatus::InProgress);
  }

  #[test]
  fn cannot_start_another_step_while_one_is_in_progress() {
    let mut s = session();
    s.start_step("plan-1").unwrap();
    let coffee = s.resources().coffee;
    assert_eq!(s.start_step("init-1").unwrap_err(), GameError::StepInProgress("plan-1".into()));

    let status = |s: &GameSession, id: &str| s.steps().into_iter().find(|x| x.id == id).map(|x| x.status);
    assert_eq!(status(&s, "plan-1"), Some(StepStatus::InProgress));
    assert_eq!(status(&s, "init-1"), Some(StepStatus::Available));
    assert_eq!(s.resources().coffee, coffee);

    s.complete_step().unwrap();
    assert_eq!(s.start_step("init-1").unwrap().step.id, "init-1");
  }

  #[test]
  fn completing_grants_xp_and_points_to_next() {
    let mut s = session();
    s.start_step("plan-1").unwrap();
    let xp = s.current_step().unwrap().xp_reward;
    let done = s.complete_step().unwrap();
    assert_eq!(done.xp_gained, xp);
    assert_eq!(done.resources.xp, xp);
    assert_eq!(done.next_step_id.as_deref(), Some("plan-2"));
    assert!(s.current_step().is_none());
    assert_eq!(s.complete_step().unwrap_err(), GameError::NoActiveStep);
    assert_eq!(s.start_step("plan-1").unwrap_err(), GameError::StepAlreadyCompleted("plan-1".into()));
  }

  #[test]
  fn selection_locks_after_first_start_and_reset_unlocks() {
    let mut s = session();
    let flutter = Selection::new(PlayerClass::CoPilot, Platform::Mobile, Stack::FlutterFirebase);
    s.select(flutter).unwrap();
    s.start_step("plan-1").unwrap();
    assert_eq!(s.select(Selection::default()).unwrap_err(), GameError::SelectionLocked);
    s.reset();
    assert!(s.select(Selection::default()).is_ok());
    assert_eq!(s.resources(), &PlayerResources::default());
  }

  #[test]
  fn decision_consequences_apply_exactly_once() {
    let mut s = session();
    let mut rng = StdRng::seed_from_u64(3);
    s.start_step("plan-1").unwrap();
    let d = s.request_decision(None, &mut rng).unwrap();
    assert_eq!(d.id, "decision-plan-1");

    let before = *s.resources();
    let opt = d.options[0].clone();
    let out = s.resolve_decision(&opt.id).unwrap();
    assert_eq!(out.resources, apply_consequences(&before, &opt.consequences));
    assert_eq!(s.resolve_decision(&opt.id).unwrap_err(), GameError::NoPendingDecision);
    assert_eq!(s.snapshot().decision_history.len(), 1);
  }

  #[test]
  fn unknown_option_keeps_decision_pending() {
    let mut s = session();
    let mut rng = StdRng::seed_from_u64(3);
    s.request_decision(Some(DecisionType::ScopeCreep), &mut rng).unwrap();
    assert_eq!(s.resolve_decision("nope").unwrap_err(), GameError::UnknownOption("nope".into()));
    assert!(s.pending_decision().is_some());
  }

  #[test]
  fn verification_pass_fail_and_skip() {
    let mut s = session();
    let mut rng = StdRng::seed_from_u64(5);

    let v = s.request_verification(Some(VerificationType::PredictOutput), &mut rng).unwrap();
    assert_eq!(s.resolve_verification("  ", false).unwrap_err(), GameError::MissingSelection);
    let expected = v.expected_output.clone().unwrap();
    let out = s.resolve_verification(&expected, false).unwrap();
    assert!(out.result.passed);
    assert_eq!(out.resources.xp, v.xp_reward);
    assert_eq!(out.resources.ai_trust, 75 + v.ai_trust_bonus);
    assert!(s.snapshot().completed_verifications.contains(&v.id));

    s.request_verification(Some(VerificationType::PredictOutput), &mut rng).unwrap();
    let out = s.resolve_verification("definitely not it", false).unwrap();
    assert!(!out.result.passed);
    assert_eq!(out.resources.sanity, 90);

    s.request_verification(Some(VerificationType::StateManagement), &mut rng).unwrap();
    assert_eq!(s.resolve_verification("short", false).unwrap_err(), GameError::AnswerTooShort { min: 10, got: 5 });
    let r = s.skip_verification().unwrap();
    assert_eq!(r.sanity, 75);
    assert_eq!(r.tech_debt, 10);
    assert_eq!(s.skip_verification().unwrap_err(), GameError::NoPendingVerification);
  }

  #[test]
  fn prompt_quality_moves_stats() {
    let mut s = session();
    let out = s.submit_prompt("make app");
    assert_eq!(out.resources.xp, 10);
    assert_eq!(out.resources.sanity, 90);
  }

  #[test]
  fn coffee_ticks_cap_at_100() {
    let mut s = session();
    for _ in 0..80 {
      s.tick_coffee();
    }
    assert_eq!(s.resources().coffee, 100);
  }

  #[test]
  fn phase_advances_with_progress() {
    assert_eq!(phase_of("plan-1"), GamePhase::Initialization);
    assert_eq!(phase_of("skeleton-3"), GamePhase::Skeleton);
    assert_eq!(phase_of("brain-1.5"), GamePhase::Brain);
    assert_eq!(phase_of("prod-4"), GamePhase::Production);
    assert_eq!(session().phase(), GamePhase::Initialization);
  }
}
