//! Engine error type.
//!
//! Every fallible operation in the engine returns [`EngineError`]. No
//! operation mutates state on its failure path, so callers can recover by
//! fixing their input and retrying.

use thiserror::Error;

use super::seat::Seat;
use crate::rules::Role;

/// Errors raised by catalog construction and match play.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The catalog and its win relation disagree. Fatal to setup.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A name outside the active catalog was supplied.
    #[error("invalid choice '{name}': choice must be {allowed}")]
    InvalidChoice { name: String, allowed: String },

    /// Resolution attempted before both seats chose.
    #[error("round is incomplete: {seat} has not chosen")]
    IncompleteRound { seat: Seat },

    /// Round limit is not a positive integer.
    #[error("invalid round limit {0}: must be a positive integer")]
    InvalidRoundLimit(i64),

    /// Resolution attempted before any round limit was configured.
    #[error("round limit must be set before a round can be resolved")]
    RoundLimitUnset,

    /// The current round already has an outcome.
    #[error("round {round} has already been resolved")]
    RoundAlreadyResolved { round: u32 },

    /// The round limit has been reached.
    #[error("match is finished after {rounds} rounds")]
    MatchFinished { rounds: u32 },

    /// External input given to an automated seat, or a draw requested for a human seat.
    #[error("{seat} is {role} and cannot take that kind of choice")]
    RoleMismatch { seat: Seat, role: Role },

    /// The catalog cannot change once play has started.
    #[error("ruleset cannot change once the match has started")]
    RulesetLocked,

    /// The round limit cannot change while a match is in progress.
    #[error("round limit cannot change while a match is in progress")]
    RoundLimitLocked,
}

/// Engine result alias.
pub type Result<T> = std::result::Result<T, EngineError>;
