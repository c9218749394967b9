//! Prompt quality heuristic for the "write a prompt" interaction.

use serde::{Deserialize, Serialize};

use crate::resources::Consequences;

/// Quality at or above this counts as a good prompt.
pub const GOOD_PROMPT_QUALITY: f64 = 0.7;

const SPECIFICITY_WORDS: [&str; 3] = ["with", "using", "for"];
const TECH_TERMS: [&str; 7] = ["component", "function", "api", "endpoint", "database", "styling", "responsive"];
const BEST_PRACTICES: [&str; 3] = ["TypeScript", "Tailwind", "test"];

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PromptCategory {
  Excellent,
  Good,
  Acceptable,
  Poor,
  Vague,
}

impl PromptCategory {
  /// Category for a 0..=100 score.
  pub fn from_score(score: u32) -> Self {
    match score {
      80.. => PromptCategory::Excellent,
      60..=79 => PromptCategory::Good,
      40..=59 => PromptCategory::Acceptable,
      20..=39 => PromptCategory::Poor,
      _ => PromptCategory::Vague,
    }
  }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PromptAssessment {
  /// 0.0..=1.0
  pub quality: f64,
  pub score: u32,
  pub category: PromptCategory,
  pub consequences: Consequences,
}

/// Length, specificity words and technical terms each add to the score. Capped at 1.
///
/// Specificity and best-practice checks are case-sensitive; technical terms are not.
pub fn assess_prompt_quality(prompt: &str) -> f64 {
  let mut score = 0.0;
  let len = prompt.chars().count();
  if len > 50 {
    score += 0.2;
  }
  if len > 100 {
    score += 0.1;
  }

  score += 0.1 * SPECIFICITY_WORDS.iter().filter(|w| prompt.contains(*w)).count() as f64;

  let lower = prompt.to_lowercase();
  score += 0.05 * TECH_TERMS.iter().filter(|t| lower.contains(*t)).count() as f64;

  score += 0.1 * BEST_PRACTICES.iter().filter(|t| prompt.contains(*t)).count() as f64;

  score.min(1.0)
}

pub fn assess_prompt(prompt: &str) -> PromptAssessment {
  let quality = assess_prompt_quality(prompt);
  let score = (quality * 100.0).round() as u32;
  let consequences = if quality >= GOOD_PROMPT_QUALITY {
    Consequences::new().xp(30)
  } else {
    Consequences::new().xp(10).sanity(-10)
  };
  PromptAssessment { quality, score, category: PromptCategory::from_score(score), consequences }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn vague_prompt_scores_low() {
    let a = assess_prompt("make app");
    assert_eq!(a.quality, 0.0);
    assert_eq!(a.category, PromptCategory::Vague);
    assert_eq!(a.consequences, Consequences::new().xp(10).sanity(-10));
  }

  #[test]
  fn detailed_prompt_is_rewarded() {
    let p = "Create a responsive TodoItem component using TypeScript and Tailwind, with a checkbox \
             for completion and a delete button. Include a test for the toggle.";
    let a = assess_prompt(p);
    assert!(a.quality >= GOOD_PROMPT_QUALITY, "{}", a.quality);
    assert_eq!(a.consequences, Consequences::new().xp(30));
    assert_eq!(a.category, PromptCategory::Excellent);
  }

  #[test]
  fn quality_is_capped() {
    let p = "with using for component function api endpoint database styling responsive TypeScript Tailwind test \
             and some padding so the prompt is comfortably longer than one hundred characters in total";
    assert_eq!(assess_prompt_quality(p), 1.0);
  }

  #[test]
  fn categories_follow_score_bands() {
    assert_eq!(PromptCategory::from_score(80), PromptCategory::Excellent);
    assert_eq!(PromptCategory::from_score(60), PromptCategory::Good);
    assert_eq!(PromptCategory::from_score(59), PromptCategory::Acceptable);
    assert_eq!(PromptCategory::from_score(20), PromptCategory::Poor);
    assert_eq!(PromptCategory::from_score(19), PromptCategory::Vague);
  }
}
