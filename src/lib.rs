//! # rps-engine
//!
//! A rules engine for Rock-Paper-Scissors and its Lizard-Spock extension.
//!
//! ## Design Principles
//!
//! 1. **Table-Driven**: The win relation is data. Built-in rulesets and
//!    custom catalogs go through the same validation.
//!
//! 2. **Explicit Configuration**: Each `Match` holds the catalog it was
//!    built with. Built-in catalogs are shared read-only; nothing global
//!    changes between games.
//!
//! 3. **Deterministic**: Automated seats draw from a seeded ChaCha8 RNG,
//!    so a seed reproduces a whole match.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, errors, configuration
//! - `catalog`: Choice catalogs, win relations, built-in rulesets
//! - `rules`: Participants, the match state machine, reports
//!
//! ## Example
//!
//! ```
//! use rps_engine::{Match, Ruleset, Seat};
//!
//! let mut game = Match::builder()
//!     .ruleset(Ruleset::Extended)
//!     .human("Ada")
//!     .human("Grace")
//!     .round_limit(1)
//!     .build()
//!     .unwrap();
//!
//! game.choose(Seat::First, "lizard").unwrap();
//! game.choose(Seat::Second, "spock").unwrap();
//! game.resolve_round().unwrap();
//! game.advance_round();
//!
//! assert!(game.is_finished());
//! assert_eq!(game.report_winner(), "Ada is the winner.");
//! ```

pub mod catalog;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    EngineError, MatchConfig, MatchRng, MatchRngState, PlayerConfig, Result, Seat, SeatMap,
};

pub use crate::catalog::{Catalog, CatalogSpec, ChoiceId, Comparison, Ruleset, WinRelation};

pub use crate::rules::{
    ChoiceSource, Match, MatchBuilder, MatchPhase, MatchResult, Participant, ParticipantView,
    Role, RoundOutcome, RoundRecord,
};
