//! Challenge library: decisions and verifications.
//!
//! Two kinds of builders live here:
//!   - step-keyed builders (authored per curriculum step id, see `planning`, `skeleton`, `brain`)
//!   - type-keyed contextual builders (`contextual`) used when a step has no authored content or a
//!     specific flavor is requested
//!
//! All builders are pure functions of the `ChallengeContext`. The only randomness is in
//! `random_decision` / `random_verification`, which pick *which* contextual type to build.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::domain::{
  CurriculumStep, DecisionCategory, DecisionOption, DecisionPoint, DecisionTrigger, DecisionType, Framework, Platform,
  PlayerClass, Selection, Stack, StepType, VerificationChallenge, VerificationType,
};
use crate::resources::Consequences;

mod brain;
mod contextual;
mod planning;
mod skeleton;

pub use contextual::{get_contextual_decision, get_contextual_verification};

/// Everything a builder may branch on.
#[derive(Clone, Copy, Debug)]
pub struct ChallengeContext<'a> {
  pub step: Option<&'a CurriculumStep>,
  pub player_class: PlayerClass,
  pub platform: Platform,
  pub stack: Stack,
}

impl<'a> ChallengeContext<'a> {
  pub fn new(step: Option<&'a CurriculumStep>, sel: Selection) -> Self {
    Self { step, player_class: sel.player_class, platform: sel.platform, stack: sel.stack }
  }

  pub fn step_id(&self) -> Option<&'a str> {
    self.step.map(|s| s.id.as_str())
  }

  pub fn step_type(&self) -> Option<StepType> {
    self.step.map(|s| s.step_type)
  }

  pub fn framework(&self) -> Framework {
    self.stack.framework()
  }

  pub fn is_flutter(&self) -> bool {
    self.framework() == Framework::Flutter
  }

  pub fn is(&self, class: PlayerClass) -> bool {
    self.player_class == class
  }

  /// `flutter` for the Flutter family, `web` for everything else.
  pub(crate) fn by_framework<T>(&self, flutter: T, web: T) -> T {
    if self.is_flutter() { flutter } else { web }
  }
}

pub(crate) fn option(
  id: &str,
  label: impl Into<String>,
  description: impl Into<String>,
  consequences: Consequences,
  is_optimal: bool,
  reasoning: impl Into<String>,
) -> DecisionOption {
  DecisionOption {
    id: id.to_string(),
    label: label.into(),
    description: description.into(),
    consequences,
    is_optimal,
    reasoning: reasoning.into(),
  }
}

/// A before-step decision bound to the step it was built for.
pub(crate) fn step_decision(
  step: &CurriculumStep,
  title: &str,
  category: DecisionCategory,
  scenario: String,
  options: Vec<DecisionOption>,
) -> DecisionPoint {
  DecisionPoint {
    id: format!("decision-{}", step.id),
    step_id: step.id.clone(),
    trigger: DecisionTrigger::BeforeStep,
    title: title.to_string(),
    scenario,
    category,
    options,
  }
}

pub(crate) fn verify_id(step: &CurriculumStep) -> String {
  format!("verify-{}", step.id)
}

type DecisionBuilder = fn(&CurriculumStep, &ChallengeContext<'_>) -> DecisionPoint;
type VerificationBuilder = fn(&CurriculumStep, &ChallengeContext<'_>) -> VerificationChallenge;

struct StepChallenge {
  decision: DecisionBuilder,
  verification: VerificationBuilder,
}

macro_rules! step_table {
  ($($id:literal => $module:ident :: $name:ident),* $(,)?) => {
    const STEP_CHALLENGES: &[(&str, StepChallenge)] = &[
      $(($id, StepChallenge { decision: $module::$name::decision, verification: $module::$name::verification })),*
    ];
  };
}

step_table! {
  "plan-1" => planning::plan_1,
  "plan-2" => planning::plan_2,
  "init-1" => planning::init_1,
  "init-2" => planning::init_2,
  "init-3" => planning::init_3,
  "init-4" => planning::init_4,
  "init-5" => planning::init_5,
  "arch-1" => planning::arch_1,
  "skeleton-0" => skeleton::skeleton_0,
  "skeleton-1" => skeleton::skeleton_1,
  "skeleton-2" => skeleton::skeleton_2,
  "skeleton-3" => skeleton::skeleton_3,
  "skeleton-4" => skeleton::skeleton_4,
  "skeleton-5" => skeleton::skeleton_5,
  "skeleton-6" => skeleton::skeleton_6,
  "brain-0" => brain::brain_0,
  "brain-1" => brain::brain_1,
  "brain-1.5" => brain::brain_1_5,
  "brain-2" => brain::brain_2,
  "brain-3" => brain::brain_3,
  "brain-4" => brain::brain_4,
  "brain-5" => brain::brain_5,
  "prod-4" => brain::prod_4,
}

fn lookup(step_id: &str) -> Option<&'static StepChallenge> {
  STEP_CHALLENGES.iter().find(|(id, _)| *id == step_id).map(|(_, c)| c)
}

/// Step ids that have authored decision/verification content.
pub fn step_challenge_ids() -> impl Iterator<Item = &'static str> {
  STEP_CHALLENGES.iter().map(|(id, _)| *id)
}

pub fn has_step_challenge(step_id: &str) -> bool {
  lookup(step_id).is_some()
}

/// Authored decision for the context's step, or `None` when the step has none.
pub fn get_decision_for_step(ctx: &ChallengeContext<'_>) -> Option<DecisionPoint> {
  let step = ctx.step?;
  match lookup(&step.id) {
    Some(c) => Some((c.decision)(step, ctx)),
    None => {
      debug!(target: "challenge", step_id = %step.id, "No authored decision for step");
      None
    }
  }
}

/// Authored verification for the context's step, or `None` when the step has none.
pub fn get_verification_for_step(ctx: &ChallengeContext<'_>) -> Option<VerificationChallenge> {
  let step = ctx.step?;
  match lookup(&step.id) {
    Some(c) => Some((c.verification)(step, ctx)),
    None => {
      debug!(target: "challenge", step_id = %step.id, "No authored verification for step");
      None
    }
  }
}

/// Decision types that make sense for the current step. Never empty.
pub fn available_decision_types(ctx: &ChallengeContext<'_>) -> Vec<DecisionType> {
  let mut types = vec![DecisionType::ScopeCreep, DecisionType::AiReview];
  match ctx.step_type() {
    Some(StepType::Testing) => types.push(DecisionType::TestingApproach),
    Some(StepType::Configuration) | Some(StepType::Deployment) => types.push(DecisionType::TechChoice),
    _ => {}
  }
  types
}

/// Verification types that make sense for the current step. Never empty.
pub fn available_verification_types(ctx: &ChallengeContext<'_>) -> Vec<VerificationType> {
  let mut types = Vec::new();
  match ctx.step_type() {
    Some(StepType::CodeGeneration) => types.extend([
      VerificationType::StateManagement,
      VerificationType::ComponentStructure,
      VerificationType::SpotTheBug,
    ]),
    Some(StepType::CodeReview) => types.extend([VerificationType::SpotTheBug, VerificationType::PredictOutput]),
    Some(StepType::Testing) => types.push(VerificationType::PredictOutput),
    _ => {}
  }
  if types.is_empty() {
    types.push(VerificationType::StateManagement);
  }
  types
}

/// Uniform pick. `None` only for an empty slice.
pub fn pick_random_of<T: Copy, R: Rng + ?Sized>(available: &[T], rng: &mut R) -> Option<T> {
  available.choose(rng).copied()
}

pub fn random_decision<R: Rng + ?Sized>(ctx: &ChallengeContext<'_>, rng: &mut R) -> DecisionPoint {
  let kind = pick_random_of(&available_decision_types(ctx), rng).unwrap_or(DecisionType::ScopeCreep);
  debug!(target: "challenge", ?kind, step_id = ?ctx.step_id(), "Random decision type picked");
  get_contextual_decision(kind, ctx)
}

pub fn random_verification<R: Rng + ?Sized>(ctx: &ChallengeContext<'_>, rng: &mut R) -> VerificationChallenge {
  let kind = pick_random_of(&available_verification_types(ctx), rng).unwrap_or(VerificationType::StateManagement);
  debug!(target: "challenge", ?kind, step_id = ?ctx.step_id(), "Random verification type picked");
  get_contextual_verification(kind, ctx)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::curriculum::{generate_curriculum, step_by_id};
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  fn ctx_for<'a>(steps: &'a [CurriculumStep], id: &str, sel: Selection) -> ChallengeContext<'a> {
    ChallengeContext::new(step_by_id(steps, id), sel)
  }

  #[test]
  fn step_keyed_content_exists_for_authored_steps() {
    let sel = Selection::default();
    let steps = generate_curriculum(sel);
    let ctx = ctx_for(&steps, "plan-1", sel);
    let d = get_decision_for_step(&ctx).unwrap();
    assert_eq!(d.id, "decision-plan-1");
    assert_eq!(d.step_id, "plan-1");
    assert_eq!(d.options.len(), 3);
    let v = get_verification_for_step(&ctx).unwrap();
    assert_eq!(v.id, "verify-plan-1");
  }

  #[test]
  fn unauthored_steps_return_none() {
    let sel = Selection::default();
    let steps = generate_curriculum(sel);
    let ctx = ctx_for(&steps, "quality-1", sel);
    assert!(get_decision_for_step(&ctx).is_none());
    assert!(get_verification_for_step(&ctx).is_none());
    let no_step = ChallengeContext::new(None, sel);
    assert!(get_decision_for_step(&no_step).is_none());
  }

  #[test]
  fn builders_are_pure() {
    let sel = Selection::new(PlayerClass::Architect, Platform::Mobile, Stack::FlutterFirebase);
    let steps = generate_curriculum(sel);
    for id in step_challenge_ids() {
      let ctx = ctx_for(&steps, id, sel);
      assert_eq!(get_decision_for_step(&ctx), get_decision_for_step(&ctx));
      assert_eq!(get_verification_for_step(&ctx), get_verification_for_step(&ctx));
    }
  }

  #[test]
  fn available_types_follow_step_type() {
    let sel = Selection::default();
    let steps = generate_curriculum(sel);

    let testing = ctx_for(&steps, "skeleton-6", sel);
    assert!(available_decision_types(&testing).contains(&DecisionType::TestingApproach));
    assert_eq!(available_verification_types(&testing), vec![VerificationType::PredictOutput]);

    let codegen = ctx_for(&steps, "skeleton-1", sel);
    assert_eq!(
      available_verification_types(&codegen),
      vec![VerificationType::StateManagement, VerificationType::ComponentStructure, VerificationType::SpotTheBug]
    );
    assert_eq!(available_decision_types(&codegen), vec![DecisionType::ScopeCreep, DecisionType::AiReview]);

    let config = ctx_for(&steps, "plan-1", sel);
    assert!(available_decision_types(&config).contains(&DecisionType::TechChoice));
    assert_eq!(available_verification_types(&config), vec![VerificationType::StateManagement]);

    let none = ChallengeContext::new(None, sel);
    assert!(!available_verification_types(&none).is_empty());
  }

  #[test]
  fn random_pick_stays_in_available_set() {
    let sel = Selection::default();
    let steps = generate_curriculum(sel);
    let ctx = ctx_for(&steps, "skeleton-2", sel);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
      let v = random_verification(&ctx, &mut rng);
      assert!(
        v.id.starts_with("verify-state-") || v.id.starts_with("verify-component-") || v.id.starts_with("verify-bug-"),
        "{}",
        v.id
      );
    }
    assert_eq!(pick_random_of::<u8, _>(&[], &mut rng), None);
  }
}
