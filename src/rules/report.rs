//! Human-readable match reports.
//!
//! Reports never mutate the match. Front ends render them as-is.

use super::engine::Match;
use super::outcome::{MatchResult, RoundOutcome};
use crate::core::seat::Seat;

impl Match {
    /// What each seat played and who took the round.
    #[must_use]
    pub fn report_round(&self) -> String {
        let Some(outcome) = self.last_outcome() else {
            return "Round has not been played.".to_string();
        };

        let mut report = String::new();
        for seat in Seat::ALL {
            report.push_str(&format!(
                "{} chose {}.\n",
                self.participant(seat).name(),
                self.choice_name(seat).unwrap_or("nothing")
            ));
        }
        match outcome {
            RoundOutcome::Draw => report.push_str("Round was a draw."),
            RoundOutcome::Decisive { winner } => {
                report.push_str(&format!("{} won this round.", self.participant(winner).name()))
            }
        }
        report
    }

    /// Both current scores.
    #[must_use]
    pub fn report_score(&self) -> String {
        let lines: Vec<String> = Seat::ALL
            .iter()
            .map(|&seat| {
                let player = self.participant(seat);
                format!("{} has scored {}", player.name(), player.score())
            })
            .collect();
        format!("After {} rounds:\n{}", self.rounds_played(), lines.join("\n"))
    }

    /// Overall winner by score; equal scores are a draw.
    #[must_use]
    pub fn report_winner(&self) -> String {
        match self.standing() {
            MatchResult::Winner(seat) => format!("{} is the winner.", self.participant(seat).name()),
            MatchResult::Draw => "Game is drawn.".to_string(),
        }
    }
}
