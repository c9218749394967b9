//! Domain models used by the engine: the player selection triple, curriculum steps,
//! decision points and verification challenges.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::resources::Consequences;

/// Player archetype. Shapes curriculum tone, rewards and which options count as optimal.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerClass {
  /// Lets the AI do the work and focuses on understanding.
  #[default]
  VibeSurfer,
  /// Designs the solution and pairs with the AI to implement it.
  CoPilot,
  /// Writes the code; the AI is a helper.
  #[serde(rename = "10x-architect")]
  Architect,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
  #[default]
  Web,
  Mobile,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Stack {
  #[default]
  ReactNode,
  FlutterFirebase,
  NextjsPrisma,
}

/// Framework family a stack belongs to. Contextual challenge content is authored per family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Framework {
  React,
  Flutter,
}

impl PlayerClass {
  pub const ALL: [PlayerClass; 3] = [PlayerClass::VibeSurfer, PlayerClass::CoPilot, PlayerClass::Architect];

  pub fn as_str(&self) -> &'static str {
    match self {
      PlayerClass::VibeSurfer => "vibe-surfer",
      PlayerClass::CoPilot => "co-pilot",
      PlayerClass::Architect => "10x-architect",
    }
  }
}

impl Platform {
  pub const ALL: [Platform; 2] = [Platform::Web, Platform::Mobile];

  pub fn as_str(&self) -> &'static str {
    match self {
      Platform::Web => "web",
      Platform::Mobile => "mobile",
    }
  }
}

impl Stack {
  pub const ALL: [Stack; 3] = [Stack::ReactNode, Stack::FlutterFirebase, Stack::NextjsPrisma];

  pub fn as_str(&self) -> &'static str {
    match self {
      Stack::ReactNode => "react-node",
      Stack::FlutterFirebase => "flutter-firebase",
      Stack::NextjsPrisma => "nextjs-prisma",
    }
  }

  pub fn framework(&self) -> Framework {
    match self {
      Stack::FlutterFirebase => Framework::Flutter,
      Stack::ReactNode | Stack::NextjsPrisma => Framework::React,
    }
  }

  /// Human readable stack name, e.g. "Next.js + Prisma".
  pub fn display_name(&self) -> &'static str {
    match self {
      Stack::ReactNode => "React + Node.js",
      Stack::FlutterFirebase => "Flutter + Firebase",
      Stack::NextjsPrisma => "Next.js + Prisma",
    }
  }
}

macro_rules! str_enum_impls {
  ($ty:ty, $what:literal) => {
    impl fmt::Display for $ty {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
    }

    impl FromStr for $ty {
      type Err = String;

      fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
          .iter()
          .copied()
          .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
          .ok_or_else(|| format!("unknown {}: {:?}", $what, s))
      }
    }
  };
}

str_enum_impls!(PlayerClass, "player class");
str_enum_impls!(Platform, "platform");
str_enum_impls!(Stack, "stack");

/// The (class, platform, stack) triple chosen during setup.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
  pub player_class: PlayerClass,
  pub platform: Platform,
  pub stack: Stack,
}

impl Selection {
  pub fn new(player_class: PlayerClass, platform: Platform, stack: Stack) -> Self {
    Self { player_class, platform, stack }
  }

  /// Parse a string triple. Any unknown part yields the default triple as a whole.
  pub fn parse_or_default(player_class: &str, platform: &str, stack: &str) -> Self {
    match (player_class.parse(), platform.parse(), stack.parse()) {
      (Ok(c), Ok(p), Ok(s)) => Self::new(c, p, s),
      _ => Self::default(),
    }
  }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum StepType {
  Configuration,
  CodeGeneration,
  Testing,
  Git,
  Deployment,
  PromptWriting,
  CodeReview,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum StepStatus {
  Locked,
  Available,
  InProgress,
  Completed,
}

/// One unit of the generated curriculum.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumStep {
  pub id: String,
  pub title: String,
  pub description: String,
  pub learning_objective: String,
  #[serde(rename = "type")]
  pub step_type: StepType,
  pub status: StepStatus,
  pub order: u32,
  pub coffee_cost: u32,
  pub xp_reward: u32,
  #[serde(default)]
  pub depends_on: Vec<String>,

  // AI-tool guidance (text only)
  pub ai_tool: String,
  #[serde(default)] pub tool_instructions: Vec<String>,
  #[serde(default)] pub example_prompts: Vec<String>,
  #[serde(default)] pub prompt_template: String,
  #[serde(default)] pub tool_tips: Vec<String>,
  #[serde(default)] pub explanation: String,
  #[serde(default)] pub best_practices: Vec<String>,
}

/// Coarse progress phase, derived from which steps are done.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GamePhase {
  Initialization,
  Skeleton,
  Brain,
  Production,
}

//
// Decisions
//

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DecisionTrigger {
  BeforeStep,
  AfterStep,
  OnFailure,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DecisionCategory {
  ScopeManagement,
  QualityTradeoff,
  AiUsage,
  TimeManagement,
  TechnicalChoice,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DecisionOption {
  pub id: String,
  pub label: String,
  pub description: String,
  pub consequences: Consequences,
  pub is_optimal: bool,
  /// Revealed after the player picks this option.
  pub reasoning: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DecisionPoint {
  pub id: String,
  pub step_id: String,
  pub trigger: DecisionTrigger,
  pub title: String,
  pub scenario: String,
  pub category: DecisionCategory,
  pub options: Vec<DecisionOption>,
}

impl DecisionPoint {
  pub fn option(&self, option_id: &str) -> Option<&DecisionOption> {
    self.options.iter().find(|o| o.id == option_id)
  }
}

/// History entry written when a decision is resolved.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DecisionResolution {
  pub decision_id: String,
  pub option_chosen: String,
  /// Milliseconds since the unix epoch.
  pub timestamp: u64,
  pub was_optimal: bool,
}

/// Closed set of generic decision flavors.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DecisionType {
  ScopeCreep,
  AiReview,
  TestingApproach,
  TechChoice,
}

//
// Verifications
//

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum VerificationMode {
  ExplainCode,
  PredictOutput,
  SpotTheBug,
  RefactorChallenge,
}

impl VerificationMode {
  /// Modes answered with free text rather than a pick from `output_options`.
  pub fn is_free_text(&self) -> bool {
    !matches!(self, VerificationMode::PredictOutput)
  }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BugLocation {
  pub line: u32,
  pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationChallenge {
  pub id: String,
  pub mode: VerificationMode,
  pub title: String,
  pub description: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub code_to_explain: Option<String>,
  #[serde(default)]
  pub required_concepts: Vec<String>,
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub concept_hints: BTreeMap<String, String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub expected_output: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub output_options: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub bug_location: Option<BugLocation>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub bug_explanation: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub refactor_goals: Vec<String>,
  pub xp_reward: u32,
  pub ai_trust_bonus: i32,
}

impl VerificationChallenge {
  pub fn new(id: impl Into<String>, mode: VerificationMode, title: impl Into<String>, description: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      mode,
      title: title.into(),
      description: description.into(),
      code_to_explain: None,
      required_concepts: Vec::new(),
      concept_hints: BTreeMap::new(),
      expected_output: None,
      output_options: Vec::new(),
      bug_location: None,
      bug_explanation: None,
      refactor_goals: Vec::new(),
      xp_reward: 0,
      ai_trust_bonus: 0,
    }
  }

  pub fn code(mut self, code: impl Into<String>) -> Self {
    self.code_to_explain = Some(code.into());
    self
  }

  pub fn concepts(mut self, concepts: &[&str]) -> Self {
    self.required_concepts = concepts.iter().map(|c| c.to_string()).collect();
    self
  }

  pub fn hints(mut self, hints: &[(&str, &str)]) -> Self {
    self.concept_hints = hints.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    self
  }

  /// Expected answer plus the distractors offered next to it. The expected answer is always
  /// part of `output_options`.
  pub fn expect(mut self, expected: impl Into<String>, distractors: &[&str]) -> Self {
    let expected = expected.into();
    let mut options: Vec<String> = distractors.iter().map(|d| d.to_string()).collect();
    // fixed slot so the right answer is not always first
    let slot = expected.len() % (options.len() + 1);
    options.insert(slot, expected.clone());
    self.expected_output = Some(expected);
    self.output_options = options;
    self
  }

  pub fn bug(mut self, line: u32, description: impl Into<String>, explanation: impl Into<String>) -> Self {
    self.bug_location = Some(BugLocation { line, description: description.into() });
    self.bug_explanation = Some(explanation.into());
    self
  }

  pub fn goals(mut self, goals: &[&str]) -> Self {
    self.refactor_goals = goals.iter().map(|g| g.to_string()).collect();
    self
  }

  pub fn rewards(mut self, xp_reward: u32, ai_trust_bonus: i32) -> Self {
    self.xp_reward = xp_reward;
    self.ai_trust_bonus = ai_trust_bonus;
    self
  }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
  pub passed: bool,
  /// 0..=100
  pub score: u32,
  pub feedback: Vec<String>,
  pub concepts_matched: Vec<String>,
  pub concepts_missed: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub bonus_awarded: Option<String>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum VerificationType {
  StateManagement,
  ComponentStructure,
  SpotTheBug,
  PredictOutput,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn selection_parses_known_keys() {
    let s = Selection::parse_or_default("co-pilot", "mobile", "flutter-firebase");
    assert_eq!(s, Selection::new(PlayerClass::CoPilot, Platform::Mobile, Stack::FlutterFirebase));
  }

  #[test]
  fn selection_falls_back_as_a_whole() {
    let s = Selection::parse_or_default("nonexistent", "mobile", "flutter-firebase");
    assert_eq!(s, Selection::default());
    assert_eq!(s, Selection::new(PlayerClass::VibeSurfer, Platform::Web, Stack::ReactNode));
  }

  #[test]
  fn architect_uses_numeric_wire_name() {
    let json = serde_json::to_string(&PlayerClass::Architect).unwrap();
    assert_eq!(json, "\"10x-architect\"");
    assert_eq!("10x-architect".parse::<PlayerClass>().unwrap(), PlayerClass::Architect);
  }

  #[test]
  fn expected_output_is_always_offered() {
    let v = VerificationChallenge::new("v", VerificationMode::PredictOutput, "t", "d")
      .expect("24", &["12", "30", "undefined"]);
    assert_eq!(v.output_options.len(), 4);
    assert!(v.output_options.contains(&"24".to_string()));
    assert_eq!(v.expected_output.as_deref(), Some("24"));
  }

  #[test]
  fn stacks_map_to_framework_families() {
    assert_eq!(Stack::ReactNode.framework(), Framework::React);
    assert_eq!(Stack::NextjsPrisma.framework(), Framework::React);
    assert_eq!(Stack::FlutterFirebase.framework(), Framework::Flutter);
  }
}
