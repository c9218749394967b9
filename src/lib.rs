//! VibeQuest · learning-game engine
//!
//! A player picks a class, platform and stack, receives a generated curriculum of steps, and
//! works through it while decisions and comprehension checks move their stats around.
//!
//! - `curriculum`: deterministic step generation per (class, platform, stack)
//! - `challenges`: step-keyed and contextual decisions/verifications
//! - `resources`: stats and the single consequence applier
//! - `scoring`, `prompt`: answer and prompt heuristics
//! - `session`, `state`: per-player game state and the shared store
//! - `routes`, `protocol`: axum HTTP + WebSocket surface

pub mod challenges;
pub mod config;
pub mod curriculum;
pub mod domain;
pub mod error;
pub mod prompt;
pub mod protocol;
pub mod resources;
pub mod routes;
pub mod scoring;
pub mod session;
pub mod state;
pub mod telemetry;

pub use error::GameError;
pub use routes::build_router;
pub use state::AppState;
