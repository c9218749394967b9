//! Curriculum generation.
//!
//! A curriculum is a pure function of the (class, platform, stack) triple: the authored step
//! table in `steps` is rendered against a typed `StepCtx`, then every step gets the class
//! flavor (title prefix, difficulty suffixes, tips and reward offsets).

use tracing::{debug, instrument};

use crate::domain::{CurriculumStep, Framework, Platform, PlayerClass, Selection, Stack, StepStatus, StepType};

mod steps;

/// Stack-dependent tokens used by the step templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackProfile {
  pub name: &'static str,
  pub styling: &'static str,
  pub language: &'static str,
  pub framework: &'static str,
}

impl StackProfile {
  pub fn of(stack: Stack) -> Self {
    match stack {
      Stack::ReactNode => Self {
        name: stack.display_name(),
        styling: "Tailwind CSS",
        language: "TypeScript",
        framework: "React",
      },
      Stack::FlutterFirebase => Self {
        name: stack.display_name(),
        styling: "Material Design",
        language: "Dart",
        framework: "Flutter",
      },
      Stack::NextjsPrisma => Self {
        name: stack.display_name(),
        styling: "Tailwind CSS",
        language: "TypeScript",
        framework: "Next.js",
      },
    }
  }
}

/// Render context handed to every step template.
#[derive(Clone, Copy, Debug)]
pub(crate) struct StepCtx {
  pub class: PlayerClass,
  pub platform: Platform,
  pub stack: Stack,
  pub profile: StackProfile,
}

impl StepCtx {
  pub fn new(sel: Selection) -> Self {
    Self { class: sel.player_class, platform: sel.platform, stack: sel.stack, profile: StackProfile::of(sel.stack) }
  }

  /// Pick a value by player class.
  pub fn by_class<T>(&self, vibe: T, co_pilot: T, architect: T) -> T {
    match self.class {
      PlayerClass::VibeSurfer => vibe,
      PlayerClass::CoPilot => co_pilot,
      PlayerClass::Architect => architect,
    }
  }

  /// Pick a value by platform.
  pub fn by_platform<T>(&self, mobile: T, web: T) -> T {
    match self.platform {
      Platform::Mobile => mobile,
      Platform::Web => web,
    }
  }

  pub fn is_mobile(&self) -> bool { self.platform == Platform::Mobile }
  pub fn is_architect(&self) -> bool { self.class == PlayerClass::Architect }
  pub fn is_co_pilot(&self) -> bool { self.class == PlayerClass::CoPilot }
  pub fn is_flutter(&self) -> bool { self.stack.framework() == Framework::Flutter }

  /// Backend name mentioned in step text.
  pub fn backend(&self) -> &'static str {
    if self.is_mobile() {
      "Firebase"
    } else if self.stack == Stack::NextjsPrisma {
      "Prisma"
    } else {
      "Node.js"
    }
  }
}

/// A step before the class flavor is applied.
pub(crate) struct StepDraft {
  pub id: &'static str,
  pub title: String,
  pub description: String,
  pub objective: String,
  pub step_type: StepType,
  pub order: u32,
  pub coffee_cost: u32,
  pub xp_reward: u32,
  pub depends_on: &'static [&'static str],
  pub tool: &'static str,
  pub instructions: Vec<String>,
  pub prompts: Vec<String>,
  pub template: String,
  pub tips: Vec<String>,
}

const VIBE_TIPS: [&str; 3] = [
  "Let AI do the heavy lifting",
  "Focus on understanding the generated code",
  "Ask AI to explain what it created",
];
const CO_PILOT_TIPS: [&str; 4] = [
  "Plan your approach first",
  "Use AI to implement your design",
  "Review and refine AI-generated code",
  "Understand both the what and the how",
];
const ARCHITECT_TIPS: [&str; 5] = [
  "Write code yourself first",
  "Use AI only when stuck or for guidance",
  "Understand every line of code",
  "Focus on deep technical knowledge",
  "AI is a helper, not a crutch",
];

const VIBE_PRACTICES: [&str; 5] = [
  "Let AI generate the complete solution",
  "Focus on understanding the generated code",
  "Ask AI to explain what it created",
  "Learn concepts, not just copy code",
  "Use AI prompts to learn best practices",
];
const CO_PILOT_PRACTICES: [&str; 6] = [
  "Plan your approach before using AI",
  "Design the structure, let AI implement details",
  "Review and refine AI-generated code",
  "Understand both the architecture and implementation",
  "Work collaboratively with AI",
  "Focus on code quality and best practices",
];
const ARCHITECT_PRACTICES: [&str; 6] = [
  "Write code yourself first",
  "Use AI only when you need help",
  "Understand every line of code you write",
  "Focus on deep technical understanding",
  "Use AI for debugging and learning, not generation",
  "Solve problems yourself before asking AI",
];

fn to_strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| s.to_string()).collect()
}

/// Apply the class flavor and produce the final step.
fn finish(draft: StepDraft, ctx: &StepCtx) -> CurriculumStep {
  let (prefix, desc_suffix, objective_suffix, extra_tips, practices, xp_bonus, coffee_bonus) = match ctx.class {
    PlayerClass::VibeSurfer => (
      "🤖",
      "[AI-Driven: Let AI generate the solution, focus on understanding the concepts.]",
      "(Easy Mode: Learn by observing AI-generated solutions. Focus on understanding concepts rather than writing code yourself.)",
      &VIBE_TIPS[..],
      &VIBE_PRACTICES[..],
      0,
      0,
    ),
    PlayerClass::CoPilot => (
      "🤝",
      "[Hybrid Approach: You architect the solution, AI helps implement it. Work together with AI.]",
      "(Intermediate: Hybrid methodology. You design and plan, AI helps implement. Focus on code quality, architecture, and understanding the implementation.)",
      &CO_PILOT_TIPS[..],
      &CO_PILOT_PRACTICES[..],
      5,
      0,
    ),
    PlayerClass::Architect => (
      "⚡",
      "[Expert Mode: You write the code, AI provides guidance and help when stuck. Deep technical understanding required.]",
      "(Expert: AI is just a tool. You write the code yourself, use AI for help, debugging, and learning. Deep technical understanding and problem-solving skills required.)",
      &ARCHITECT_TIPS[..],
      &ARCHITECT_PRACTICES[..],
      10,
      5,
    ),
  };

  let description = format!("{} {}", draft.description, desc_suffix);
  let explanation = match ctx.class {
    PlayerClass::VibeSurfer => format!(
      "{} Let {} generate the complete solution. Your job is to understand what it created.",
      description, draft.tool
    ),
    PlayerClass::CoPilot => format!(
      "{} Work with {} to implement your design. You plan, AI helps execute.",
      description, draft.tool
    ),
    PlayerClass::Architect => format!(
      "{} Write the code yourself. Use {} only for help, debugging, or when you're stuck.",
      description, draft.tool
    ),
  };

  let mut tool_tips: Vec<String> = draft.tips.into_iter().filter(|t| !t.is_empty()).collect();
  tool_tips.extend(to_strings(extra_tips));

  CurriculumStep {
    id: draft.id.to_string(),
    title: format!("{} {}", prefix, draft.title),
    description,
    learning_objective: format!("{} {}", draft.objective, objective_suffix),
    step_type: draft.step_type,
    status: if draft.order == 0 { StepStatus::Available } else { StepStatus::Locked },
    order: draft.order,
    coffee_cost: draft.coffee_cost + coffee_bonus,
    xp_reward: draft.xp_reward + xp_bonus,
    depends_on: draft.depends_on.iter().map(|d| d.to_string()).collect(),
    ai_tool: draft.tool.to_string(),
    tool_instructions: draft.instructions,
    example_prompts: draft.prompts,
    prompt_template: draft.template,
    tool_tips,
    explanation,
    best_practices: to_strings(practices),
  }
}

/// Build the ordered step list for a selection triple. Deterministic: identical input,
/// identical output.
#[instrument(level = "debug", fields(class = %sel.player_class, platform = %sel.platform, stack = %sel.stack))]
pub fn generate_curriculum(sel: Selection) -> Vec<CurriculumStep> {
  let ctx = StepCtx::new(sel);
  let steps: Vec<CurriculumStep> = steps::drafts(&ctx).into_iter().map(|d| finish(d, &ctx)).collect();
  debug!(target: "session", count = steps.len(), "Curriculum generated");
  steps
}

/// String-keyed entry point. Unknown keys never fail: the default triple is used instead.
pub fn generate_curriculum_for_keys(player_class: &str, platform: &str, stack: &str) -> Vec<CurriculumStep> {
  generate_curriculum(Selection::parse_or_default(player_class, platform, stack))
}

pub fn step_by_id<'a>(steps: &'a [CurriculumStep], id: &str) -> Option<&'a CurriculumStep> {
  steps.iter().find(|s| s.id == id)
}

/// The step after `id` in list order, if any.
pub fn next_step<'a>(steps: &'a [CurriculumStep], id: &str) -> Option<&'a CurriculumStep> {
  let idx = steps.iter().position(|s| s.id == id)?;
  steps.get(idx + 1)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  fn all_selections() -> Vec<Selection> {
    let mut out = Vec::new();
    for c in PlayerClass::ALL {
      for p in Platform::ALL {
        for s in Stack::ALL {
          out.push(Selection::new(c, p, s));
        }
      }
    }
    out
  }

  #[test]
  fn generation_is_deterministic() {
    for sel in all_selections() {
      assert_eq!(generate_curriculum(sel), generate_curriculum(sel));
    }
  }

  #[test]
  fn step_ids_are_stable_across_triples() {
    let reference: Vec<String> = generate_curriculum(Selection::default()).into_iter().map(|s| s.id).collect();
    assert_eq!(reference.len(), 31);
    for sel in all_selections() {
      let ids: Vec<String> = generate_curriculum(sel).into_iter().map(|s| s.id).collect();
      assert_eq!(ids, reference);
    }
  }

  #[test]
  fn ids_are_unique_and_dependencies_resolve() {
    for sel in all_selections() {
      let steps = generate_curriculum(sel);
      let ids: HashSet<&str> = steps.iter().map(|s| s.id.as_str()).collect();
      assert_eq!(ids.len(), steps.len());
      for s in &steps {
        for dep in &s.depends_on {
          assert!(ids.contains(dep.as_str()), "{} depends on missing {}", s.id, dep);
        }
      }
    }
  }

  #[test]
  fn class_offsets_apply() {
    let vibe = generate_curriculum(Selection::new(PlayerClass::VibeSurfer, Platform::Web, Stack::ReactNode));
    let co = generate_curriculum(Selection::new(PlayerClass::CoPilot, Platform::Web, Stack::ReactNode));
    let arch = generate_curriculum(Selection::new(PlayerClass::Architect, Platform::Web, Stack::ReactNode));
    for ((v, c), a) in vibe.iter().zip(&co).zip(&arch) {
      assert_eq!(c.xp_reward, v.xp_reward + 5);
      assert_eq!(c.coffee_cost, v.coffee_cost);
      assert_eq!(a.xp_reward, v.xp_reward + 10);
      assert_eq!(a.coffee_cost, v.coffee_cost + 5);
    }
    assert!(vibe[0].title.starts_with("🤖 "));
    assert!(co[0].title.starts_with("🤝 "));
    assert!(arch[0].title.starts_with("⚡ "));
  }

  #[test]
  fn only_order_zero_starts_available() {
    let steps = generate_curriculum(Selection::default());
    for s in &steps {
      let expected = if s.order == 0 { StepStatus::Available } else { StepStatus::Locked };
      assert_eq!(s.status, expected, "{}", s.id);
    }
  }

  #[test]
  fn stack_tokens_are_substituted() {
    let steps = generate_curriculum(Selection::new(PlayerClass::CoPilot, Platform::Mobile, Stack::FlutterFirebase));
    let init2 = step_by_id(&steps, "init-2").unwrap();
    assert_eq!(init2.title, "🤝 Initialize pubspec.yaml");
    assert_eq!(init2.ai_tool, "cursor-composer");
    let styling = step_by_id(&steps, "init-4").unwrap();
    assert_eq!(styling.title, "🤝 Configure Material Design");
    let plan = step_by_id(&steps, "plan-1").unwrap();
    assert!(plan.description.contains("Flutter + Firebase"));
  }

  #[test]
  fn unknown_keys_fall_back_to_default() {
    let fallback = generate_curriculum_for_keys("nonexistent", "web", "react-node");
    let explicit = generate_curriculum_for_keys("vibe-surfer", "web", "react-node");
    assert_eq!(fallback, explicit);
  }

  #[test]
  fn next_step_follows_list_order() {
    let steps = generate_curriculum(Selection::default());
    assert_eq!(next_step(&steps, "plan-1").map(|s| s.id.as_str()), Some("plan-2"));
    assert!(next_step(&steps, "prod-5").is_none());
    assert!(next_step(&steps, "missing").is_none());
  }
}
