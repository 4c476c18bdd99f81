//! Match rules: participants, round resolution and reports.
//!
//! Front ends drive a [`Match`] once per round:
//! 1. `choose` for human seats, `draw_automated` for the rest
//! 2. `resolve_round`, then render `report_round` / `report_score`
//! 3. `advance_round`, checking `is_finished` before the next round
//!
//! `reset` replays with the same configuration.

pub mod engine;
pub mod outcome;
pub mod participant;
pub mod report;

pub use engine::{Match, MatchBuilder, MatchPhase};
pub use outcome::{MatchResult, RoundOutcome, RoundRecord};
pub use participant::{ChoiceSource, Participant, ParticipantView, Role};
