//! Round and match outcomes.

use serde::{Deserialize, Serialize};

use crate::catalog::ChoiceId;
use crate::core::seat::{Seat, SeatMap};

/// Outcome of a resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Both seats chose the same object.
    Draw,
    /// One seat's object defeated the other's.
    Decisive { winner: Seat },
}

impl RoundOutcome {
    /// The winning seat, if any.
    #[must_use]
    pub fn winner(self) -> Option<Seat> {
        match self {
            RoundOutcome::Draw => None,
            RoundOutcome::Decisive { winner } => Some(winner),
        }
    }

    #[must_use]
    pub fn is_draw(self) -> bool {
        self == RoundOutcome::Draw
    }
}

/// One resolved round, kept in the match history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Zero-based round index.
    pub round: u32,
    /// What each seat played.
    pub choices: SeatMap<ChoiceId>,
    pub outcome: RoundOutcome,
}

/// Standing of the match by score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// Strictly higher score.
    Winner(Seat),
    /// Equal scores.
    Draw,
}

impl MatchResult {
    /// Compare two scores.
    #[must_use]
    pub fn from_scores(scores: &SeatMap<u32>) -> Self {
        let (first, second) = (scores[Seat::First], scores[Seat::Second]);
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => MatchResult::Winner(Seat::First),
            std::cmp::Ordering::Less => MatchResult::Winner(Seat::Second),
            std::cmp::Ordering::Equal => MatchResult::Draw,
        }
    }

    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(self, seat: Seat) -> bool {
        self == MatchResult::Winner(seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_outcome_winner() {
        assert_eq!(RoundOutcome::Draw.winner(), None);
        assert!(RoundOutcome::Draw.is_draw());

        let decisive = RoundOutcome::Decisive { winner: Seat::Second };
        assert_eq!(decisive.winner(), Some(Seat::Second));
        assert!(!decisive.is_draw());
    }

    #[test]
    fn test_match_result_from_scores() {
        assert_eq!(
            MatchResult::from_scores(&SeatMap::from_pair(3, 1)),
            MatchResult::Winner(Seat::First)
        );
        assert_eq!(
            MatchResult::from_scores(&SeatMap::from_pair(0, 2)),
            MatchResult::Winner(Seat::Second)
        );
        assert_eq!(MatchResult::from_scores(&SeatMap::from_pair(2, 2)), MatchResult::Draw);
    }

    #[test]
    fn test_match_result_is_winner() {
        let result = MatchResult::Winner(Seat::First);
        assert!(result.is_winner(Seat::First));
        assert!(!result.is_winner(Seat::Second));
        assert!(!MatchResult::Draw.is_winner(Seat::First));
    }
}
