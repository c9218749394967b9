//! Loading game configuration (timer, starting resources, answer gate) from TOML.
//!
//! Every key is optional. Example:
//!
//! ```toml
//! [timer]
//! coffee_tick_ms = 2000
//! session_idle_secs = 3600
//!
//! [resources]
//! sanity = 100
//! coffee = 50
//!
//! [verification]
//! min_answer_chars = 10
//! ```

use serde::Deserialize;
use tracing::{error, info};

use crate::resources::PlayerResources;

#[derive(Clone, Debug, Deserialize, Default, PartialEq)]
pub struct GameConfig {
  #[serde(default)]
  pub timer: TimerCfg,
  #[serde(default)]
  pub resources: ResourcesCfg,
  #[serde(default)]
  pub verification: VerificationCfg,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimerCfg {
  /// Interval of the coffee regeneration tick.
  pub coffee_tick_ms: u64,
  /// Sessions untouched for this long are dropped by the ticker. 0 keeps them forever.
  pub session_idle_secs: u64,
}

impl Default for TimerCfg {
  fn default() -> Self { Self { coffee_tick_ms: 2000, session_idle_secs: 3600 } }
}

/// Starting resources. Missing keys keep the defaults.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResourcesCfg {
  pub sanity: i32,
  pub coffee: i32,
  pub xp: u32,
  pub level: u32,
  pub tech_debt: i32,
  pub ai_trust: i32,
  pub code_quality: i32,
}

impl Default for ResourcesCfg {
  fn default() -> Self {
    let r = PlayerResources::default();
    Self {
      sanity: r.sanity,
      coffee: r.coffee,
      xp: r.xp,
      level: r.level,
      tech_debt: r.tech_debt,
      ai_trust: r.ai_trust,
      code_quality: r.code_quality,
    }
  }
}

impl ResourcesCfg {
  /// Clamped starting resources; level is at least 1.
  pub fn to_resources(&self) -> PlayerResources {
    PlayerResources {
      sanity: self.sanity,
      coffee: self.coffee,
      xp: self.xp,
      level: self.level.max(1),
      tech_debt: self.tech_debt,
      ai_trust: self.ai_trust,
      code_quality: self.code_quality,
    }
    .normalized()
  }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct VerificationCfg {
  /// Free-text answers shorter than this are refused before scoring.
  pub min_answer_chars: usize,
}

impl Default for VerificationCfg {
  fn default() -> Self { Self { min_answer_chars: 10 } }
}

pub fn parse_game_config(s: &str) -> Result<GameConfig, toml::de::Error> {
  toml::from_str::<GameConfig>(s)
}

/// Attempt to load `GameConfig` from GAME_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_game_config_from_env() -> Option<GameConfig> {
  let path = std::env::var("GAME_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match parse_game_config(&s) {
      Ok(cfg) => {
        info!(target: "vibequest_backend", %path, "Loaded game config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "vibequest_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "vibequest_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_file_gives_defaults() {
    let cfg = parse_game_config("").unwrap();
    assert_eq!(cfg, GameConfig::default());
    assert_eq!(cfg.timer.coffee_tick_ms, 2000);
    assert_eq!(cfg.timer.session_idle_secs, 3600);
    assert_eq!(cfg.verification.min_answer_chars, 10);
    assert_eq!(cfg.resources.to_resources(), PlayerResources::default());
  }

  #[test]
  fn partial_sections_keep_other_defaults() {
    let cfg = parse_game_config("[resources]\ncoffee = 250\nlevel = 0\n\n[timer]\ncoffee_tick_ms = 500\n").unwrap();
    let r = cfg.resources.to_resources();
    assert_eq!(r.coffee, 100);
    assert_eq!(r.level, 1);
    assert_eq!(r.sanity, 100);
    assert_eq!(cfg.timer.coffee_tick_ms, 500);
    assert_eq!(cfg.timer.session_idle_secs, 3600);
  }

  #[test]
  fn bad_toml_is_an_error() {
    assert!(parse_game_config("[timer\ncoffee_tick_ms = ").is_err());
  }
}
