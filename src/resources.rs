//! Player resources, sparse consequence deltas and the single function that applies them.
//!
//! Every change to a stat goes through `apply_consequences`, which clamps the bounded
//! fields into `0..=100` and keeps `xp`/`level` non-decreasing.

use serde::{Deserialize, Serialize};

pub const STAT_MIN: i32 = 0;
pub const STAT_MAX: i32 = 100;
pub const XP_PER_LEVEL: u32 = 100;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResources {
  pub sanity: i32,
  pub coffee: i32,
  pub xp: u32,
  pub level: u32,
  pub tech_debt: i32,
  pub ai_trust: i32,
  pub code_quality: i32,
}

impl Default for PlayerResources {
  fn default() -> Self {
    Self { sanity: 100, coffee: 50, xp: 0, level: 1, tech_debt: 0, ai_trust: 75, code_quality: 50 }
  }
}

impl PlayerResources {
  /// Clamp every bounded field and repair `level`. Used for values coming from config.
  pub fn normalized(mut self) -> Self {
    self.sanity = clamp_stat(self.sanity);
    self.coffee = clamp_stat(self.coffee);
    self.tech_debt = clamp_stat(self.tech_debt);
    self.ai_trust = clamp_stat(self.ai_trust);
    self.code_quality = clamp_stat(self.code_quality);
    self.level = self.level.max(level_for_xp(self.xp));
    self
  }

  /// High when sanity and coffee are both low.
  pub fn burnout_risk(&self) -> u32 {
    let sanity_factor = f64::from(STAT_MAX - self.sanity) / 100.0;
    let coffee_factor = f64::from(STAT_MAX - self.coffee) / 100.0;
    ((sanity_factor * 0.6 + coffee_factor * 0.4) * 100.0).round() as u32
  }

  /// High when tech debt is low and code quality is high.
  pub fn deployment_readiness(&self) -> u32 {
    let debt_factor = f64::from(STAT_MAX - self.tech_debt) / 100.0;
    let quality_factor = f64::from(self.code_quality) / 100.0;
    ((debt_factor * 0.5 + quality_factor * 0.5) * 100.0).round() as u32
  }

  pub fn derived(&self) -> DerivedStats {
    DerivedStats { burnout_risk: self.burnout_risk(), deployment_readiness: self.deployment_readiness() }
  }

  /// Shortfall messages for an action costing `coffee`/`sanity`. Empty means affordable.
  pub fn shortfalls(&self, coffee: i32, sanity: i32) -> Vec<String> {
    let mut missing = Vec::new();
    if coffee > 0 && self.coffee < coffee {
      missing.push(format!("Need {} coffee (have {})", coffee, self.coffee));
    }
    if sanity > 0 && self.sanity < sanity {
      missing.push(format!("Need {} sanity (have {})", sanity, self.sanity));
    }
    missing
  }

  pub fn can_afford(&self, coffee: i32, sanity: i32) -> bool {
    self.shortfalls(coffee, sanity).is_empty()
  }
}

/// Computed stats. Never stored; always derived from the current resources.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
  pub burnout_risk: u32,
  pub deployment_readiness: u32,
}

/// Sparse stat deltas. Absent fields leave the stat untouched.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Consequences {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sanity_change: Option<i32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub coffee_change: Option<i32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub xp_change: Option<i32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tech_debt_change: Option<i32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub ai_trust_change: Option<i32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub code_quality_change: Option<i32>,
}

impl Consequences {
  pub fn new() -> Self { Self::default() }

  pub fn sanity(mut self, delta: i32) -> Self { self.sanity_change = Some(delta); self }
  pub fn coffee(mut self, delta: i32) -> Self { self.coffee_change = Some(delta); self }
  pub fn xp(mut self, delta: i32) -> Self { self.xp_change = Some(delta); self }
  pub fn tech_debt(mut self, delta: i32) -> Self { self.tech_debt_change = Some(delta); self }
  pub fn ai_trust(mut self, delta: i32) -> Self { self.ai_trust_change = Some(delta); self }
  pub fn code_quality(mut self, delta: i32) -> Self { self.code_quality_change = Some(delta); self }

  pub fn is_empty(&self) -> bool {
    *self == Self::default()
  }
}

pub fn clamp_stat(v: i32) -> i32 {
  v.clamp(STAT_MIN, STAT_MAX)
}

pub fn level_for_xp(xp: u32) -> u32 {
  1 + xp / XP_PER_LEVEL
}

/// Apply a sparse delta. Bounded fields are clamped into `0..=100`; negative xp deltas
/// are ignored so `xp` (and with it `level`) never decreases.
pub fn apply_consequences(current: &PlayerResources, delta: &Consequences) -> PlayerResources {
  let mut next = *current;

  fn bump(v: i32, d: Option<i32>) -> i32 {
    match d {
      Some(d) => clamp_stat(v.saturating_add(d)),
      None => v,
    }
  }

  next.sanity = bump(next.sanity, delta.sanity_change);
  next.coffee = bump(next.coffee, delta.coffee_change);
  next.tech_debt = bump(next.tech_debt, delta.tech_debt_change);
  next.ai_trust = bump(next.ai_trust, delta.ai_trust_change);
  next.code_quality = bump(next.code_quality, delta.code_quality_change);

  if let Some(d) = delta.xp_change {
    let gain = u32::try_from(d.max(0)).unwrap_or(0);
    next.xp = next.xp.saturating_add(gain);
    next.level = next.level.max(level_for_xp(next.xp));
  }

  next
}

/// One timer tick: +1 coffee, capped at 100.
pub fn regenerate_coffee(current: &PlayerResources) -> PlayerResources {
  apply_consequences(current, &Consequences::new().coffee(1))
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn sanity_floor_is_zero() {
    let start = PlayerResources { sanity: 5, ..Default::default() };
    let next = apply_consequences(&start, &Consequences::new().sanity(-50));
    assert_eq!(next.sanity, 0);
  }

  #[test]
  fn absent_fields_are_untouched() {
    let start = PlayerResources { sanity: 42, coffee: 17, ..Default::default() };
    let next = apply_consequences(&start, &Consequences::new().tech_debt(10));
    assert_eq!(next.sanity, 42);
    assert_eq!(next.coffee, 17);
    assert_eq!(next.ai_trust, start.ai_trust);
    assert_eq!(next.tech_debt, 10);
  }

  #[test]
  fn xp_is_unbounded_and_levels_up() {
    let start = PlayerResources { xp: 95, ..Default::default() };
    let next = apply_consequences(&start, &Consequences::new().xp(250));
    assert_eq!(next.xp, 345);
    assert_eq!(next.level, 4);
  }

  #[test]
  fn negative_xp_is_ignored() {
    let start = PlayerResources { xp: 30, ..Default::default() };
    let next = apply_consequences(&start, &Consequences::new().xp(-20));
    assert_eq!(next.xp, 30);
  }

  #[test]
  fn coffee_regeneration_caps_at_100() {
    let mut r = PlayerResources { coffee: 97, ..Default::default() };
    for _ in 0..10 {
      r = regenerate_coffee(&r);
    }
    assert_eq!(r.coffee, 100);
  }

  #[test]
  fn derived_stats_from_defaults() {
    let r = PlayerResources::default();
    // sanity 100, coffee 50 -> 0.0*0.6 + 0.5*0.4 = 0.2
    assert_eq!(r.burnout_risk(), 20);
    // debt 0, quality 50 -> 0.5 + 0.25
    assert_eq!(r.deployment_readiness(), 75);
  }

  #[test]
  fn shortfall_messages() {
    let r = PlayerResources { coffee: 3, sanity: 100, ..Default::default() };
    assert_eq!(r.shortfalls(10, 0), vec!["Need 10 coffee (have 3)".to_string()]);
    assert!(r.can_afford(3, 50));
  }

  fn any_delta() -> impl Strategy<Value = Consequences> {
    (
      proptest::option::of(-200i32..200),
      proptest::option::of(-200i32..200),
      proptest::option::of(-200i32..200),
      proptest::option::of(-200i32..200),
      proptest::option::of(-200i32..200),
      proptest::option::of(-200i32..200),
    )
      .prop_map(|(s, c, x, t, a, q)| Consequences {
        sanity_change: s,
        coffee_change: c,
        xp_change: x,
        tech_debt_change: t,
        ai_trust_change: a,
        code_quality_change: q,
      })
  }

  proptest! {
    #[test]
    fn bounded_fields_stay_in_range(deltas in proptest::collection::vec(any_delta(), 0..40)) {
      let mut r = PlayerResources::default();
      for d in &deltas {
        let prev_xp = r.xp;
        let prev_level = r.level;
        r = apply_consequences(&r, d);
        for v in [r.sanity, r.coffee, r.tech_debt, r.ai_trust, r.code_quality] {
          prop_assert!((STAT_MIN..=STAT_MAX).contains(&v));
        }
        prop_assert!(r.xp >= prev_xp);
        prop_assert!(r.level >= prev_level);
      }
    }
  }
}
