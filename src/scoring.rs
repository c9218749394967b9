//! Heuristic verification scoring.
//!
//! Free-text answers are matched against required concepts (or bug/goal keywords) with
//! case-insensitive substring checks. Predict-output answers must equal the expected output.
//! Nothing here understands code; it only looks for the right words.

use tracing::debug;

use crate::domain::{VerificationChallenge, VerificationMode, VerificationResult};

/// Minimum score for `passed`.
pub const PASS_THRESHOLD: u32 = 60;
/// Free-text answers shorter than this are capped at `SHORT_ANSWER_CAP`.
pub const MIN_EXPLANATION_CHARS: usize = 20;
pub const SHORT_ANSWER_CAP: f64 = 50.0;

const NO_HINT_BONUS: &str = "No hints used";

#[derive(Default)]
struct Tally {
  score: f64,
  feedback: Vec<String>,
  matched: Vec<String>,
  missed: Vec<String>,
}

/// Score `answer` against `challenge`. `answer` is free text, or the chosen option for
/// predict-output. Total: never fails, never panics.
pub fn score_verification(challenge: &VerificationChallenge, answer: &str, hint_used: bool) -> VerificationResult {
  let mut t = match challenge.mode {
    VerificationMode::ExplainCode => concept_tally(&challenge.required_concepts, answer),
    VerificationMode::PredictOutput => predict_tally(challenge, answer),
    VerificationMode::SpotTheBug => match &challenge.bug_location {
      Some(bug) => bug_tally(&bug.description, answer),
      None => concept_tally(&challenge.required_concepts, answer),
    },
    VerificationMode::RefactorChallenge if challenge.refactor_goals.is_empty() => {
      concept_tally(&challenge.required_concepts, answer)
    }
    VerificationMode::RefactorChallenge => goal_tally(&challenge.refactor_goals, answer),
  };

  if challenge.mode.is_free_text() && answer.trim().chars().count() < MIN_EXPLANATION_CHARS {
    t.feedback.push("Your explanation is too short. Try to be more detailed.".to_string());
    t.score = t.score.min(SHORT_ANSWER_CAP);
  }

  let score = t.score.round().clamp(0.0, 100.0) as u32;
  let passed = score >= PASS_THRESHOLD;
  debug!(target: "challenge", id = %challenge.id, mode = ?challenge.mode, score, passed, "Verification scored");

  VerificationResult {
    passed,
    score,
    feedback: t.feedback,
    concepts_matched: t.matched,
    concepts_missed: t.missed,
    bonus_awarded: (passed && !hint_used).then(|| NO_HINT_BONUS.to_string()),
  }
}

/// A concept counts when any of its words (or the word with its first '-' read as a space)
/// appears in the answer.
fn concept_tally(concepts: &[String], answer: &str) -> Tally {
  let mut t = Tally::default();
  if concepts.is_empty() {
    return t;
  }
  let lower = answer.to_lowercase();
  let each = 100.0 / concepts.len() as f64;

  for concept in concepts {
    let concept_lower = concept.to_lowercase();
    let hit = concept_lower
      .split(' ')
      .filter(|w| !w.is_empty())
      .any(|w| lower.contains(w) || lower.contains(&w.replacen('-', " ", 1)));
    if hit {
      t.matched.push(concept.clone());
      t.score += each;
    } else {
      t.missed.push(concept.clone());
    }
  }

  let n = concepts.len();
  if t.matched.len() == n {
    t.feedback.push("✅ Excellent! You covered all key concepts.".to_string());
  } else if !t.matched.is_empty() {
    t.feedback.push(format!("Good start! You mentioned {}/{} concepts.", t.matched.len(), n));
  }
  t
}

fn predict_tally(challenge: &VerificationChallenge, answer: &str) -> Tally {
  let mut t = Tally::default();
  let expected = challenge.expected_output.as_deref().unwrap_or_default();
  if answer == expected {
    t.score = 100.0;
    t.feedback.push("✅ Correct! You understood the code behavior.".to_string());
  } else {
    t.feedback.push(format!("❌ Incorrect. The correct answer was: {expected}"));
    t.feedback.push("Review the code carefully - trace through each line.".to_string());
  }
  t
}

fn keywords(text: &str) -> Vec<String> {
  text.to_lowercase().split(' ').filter(|w| w.chars().count() > 3).map(str::to_string).collect()
}

fn bug_tally(description: &str, answer: &str) -> Tally {
  let mut t = Tally::default();
  let lower = answer.to_lowercase();
  let (hit, miss): (Vec<String>, Vec<String>) = keywords(description).into_iter().partition(|k| lower.contains(k.as_str()));

  // a description without keywords counts as caught
  if hit.len() * 2 >= hit.len() + miss.len() {
    t.score = 100.0;
    t.feedback.push("✅ Great catch! You identified the bug correctly.".to_string());
  } else if !hit.is_empty() {
    t.score = 50.0;
    t.feedback.push("You're on the right track, but missed some details.".to_string());
  } else {
    t.score = 20.0;
    t.feedback.push(format!("The bug was: {description}"));
  }
  t.matched = hit;
  t.missed = miss;
  t
}

fn goal_tally(goals: &[String], answer: &str) -> Tally {
  let mut t = Tally::default();
  let lower = answer.to_lowercase();
  let each = 100.0 / goals.len() as f64;

  for goal in goals {
    if keywords(goal).iter().any(|k| lower.contains(k.as_str())) {
      t.matched.push(goal.clone());
      t.score += each;
    } else {
      t.missed.push(goal.clone());
    }
  }

  if t.score >= 75.0 {
    t.feedback.push("✅ Great refactoring! You addressed the key issues.".to_string());
  } else if t.score >= 50.0 {
    t.feedback.push("Good effort, but there's room for improvement.".to_string());
  }
  t
}

#[cfg(test)]
mod tests {
  use super::*;

  fn explain(concepts: &[&str]) -> VerificationChallenge {
    VerificationChallenge::new("v", VerificationMode::ExplainCode, "t", "d").concepts(concepts)
  }

  #[test]
  fn all_concepts_in_a_long_enough_answer_pass() {
    let r = score_verification(&explain(&["state", "filter"]), "it uses state to filter", false);
    assert_eq!(r.score, 100);
    assert!(r.passed);
    assert_eq!(r.concepts_matched, vec!["state", "filter"]);
    assert_eq!(r.bonus_awarded.as_deref(), Some("No hints used"));
  }

  #[test]
  fn short_answers_are_capped() {
    let r = score_verification(&explain(&["state", "filter"]), "ok", false);
    assert!(r.score <= 50);
    assert!(!r.passed);

    let r = score_verification(&explain(&["state"]), "state", true);
    assert_eq!(r.score, 50);
    assert!(r.feedback.iter().any(|f| f.contains("too short")));
    assert_eq!(r.bonus_awarded, None);
  }

  #[test]
  fn partial_concepts_score_proportionally() {
    let c = explain(&["immutability", "spread operator", "map/filter", "state updates"]);
    let r = score_verification(&c, "It copies the list with the spread syntax every time", false);
    assert_eq!(r.concepts_matched, vec!["spread operator"]);
    assert_eq!(r.score, 25);
    assert!(!r.passed);
    assert!(r.feedback.iter().any(|f| f == "Good start! You mentioned 1/4 concepts."));
  }

  #[test]
  fn hyphenated_words_match_with_a_space() {
    let r = score_verification(&explain(&["mobile-first"]), "we design for mobile first and scale up", false);
    assert_eq!(r.score, 100);
  }

  #[test]
  fn predict_output_is_exact() {
    let c = VerificationChallenge::new("p", VerificationMode::PredictOutput, "t", "d").expect("24", &["27", "15"]);
    assert_eq!(score_verification(&c, "24", false).score, 100);
    let wrong = score_verification(&c, "27", false);
    assert_eq!(wrong.score, 0);
    assert!(!wrong.passed);
    assert!(wrong.feedback[0].contains("24"));
    // exact match only, no trimming or case folding
    assert_eq!(score_verification(&c, " 24", false).score, 0);
  }

  #[test]
  fn spot_the_bug_uses_bug_keywords() {
    let c = VerificationChallenge::new("b", VerificationMode::SpotTheBug, "t", "d").bug(5, "Missing key prop", "x");
    let full = score_verification(&c, "the TodoItem is missing the key prop", false);
    assert_eq!(full.score, 100);
    assert_eq!(full.concepts_matched, vec!["missing", "prop"]);

    let c = VerificationChallenge::new("b", VerificationMode::SpotTheBug, "t", "d")
      .bug(12, "setState() is missing here entirely", "x");
    let partial = score_verification(&c, "nothing triggers a rebuild, it is missing", false);
    assert_eq!(partial.score, 50);

    let none = score_verification(&c, "looks completely fine to me honestly", false);
    assert_eq!(none.score, 20);
    assert!(none.feedback[0].starts_with("The bug was:"));
  }

  #[test]
  fn bug_without_keywords_is_caught_by_any_answer() {
    let c = VerificationChallenge::new("b", VerificationMode::SpotTheBug, "t", "d").bug(3, "Off by one", "x");
    let r = score_verification(&c, "the loop bound looks wrong to me", false);
    assert_eq!(r.score, 100);
    assert!(r.concepts_matched.is_empty() && r.concepts_missed.is_empty());
  }

  #[test]
  fn refactor_goals_split_the_score() {
    let c = VerificationChallenge::new("r", VerificationMode::RefactorChallenge, "t", "d")
      .goals(&["extract component", "remove duplication"]);
    let r = score_verification(&c, "I would extract the row into its own widget", false);
    assert_eq!(r.score, 50);
    assert_eq!(r.concepts_missed, vec!["remove duplication"]);
  }
}
