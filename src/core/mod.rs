//! Core engine types: seats, RNG, errors, configuration.
//!
//! These building blocks know nothing about a particular ruleset.

pub mod config;
pub mod error;
pub mod rng;
pub mod seat;

pub use config::{MatchConfig, PlayerConfig, DEFAULT_ROUND_LIMIT};
pub use error::{EngineError, Result};
pub use rng::{MatchRng, MatchRngState};
pub use seat::{Seat, SeatMap};
