//! Match state machine.
//!
//! ```text
//! NotStarted -> AwaitingChoices -> RoundOpen -> RoundResolved -> AwaitingChoices | Finished
//! ```
//!
//! - Choosing moves a round towards `RoundOpen`; the phase changes
//!   implicitly once both seats hold a choice.
//! - `resolve_round` scores the round. It does not clear choices or move
//!   the round counter.
//! - `advance_round` clears the round and increments the counter. Callers
//!   gate on `is_finished` before starting another round.
//!
//! Every failing call leaves the match exactly as it was.

use log::{debug, info, warn};
use std::sync::Arc;

use super::outcome::{MatchResult, RoundOutcome, RoundRecord};
use super::participant::{ChoiceSource, Participant, ParticipantView, Role};
use crate::catalog::{Catalog, ChoiceId, Comparison, Ruleset};
use crate::core::config::MatchConfig;
use crate::core::error::{EngineError, Result};
use crate::core::rng::{MatchRng, MatchRngState};
use crate::core::seat::{Seat, SeatMap};

/// Observable phase of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchPhase {
    /// Round 0 with nothing chosen yet.
    NotStarted,
    /// At least one seat still has to choose.
    AwaitingChoices,
    /// Both seats have chosen; the round can be resolved.
    RoundOpen,
    /// The round has an outcome and is waiting for `advance_round`.
    RoundResolved,
    /// The round limit has been reached.
    Finished,
}

/// A two-seat match over one catalog.
#[derive(Clone, Debug)]
pub struct Match {
    catalog: Arc<Catalog>,
    players: SeatMap<Participant>,
    round: u32,
    round_limit: Option<u32>,
    last_outcome: Option<RoundOutcome>,
    history: Vec<RoundRecord>,
    rng: MatchRng,
}

fn check_round_limit(rounds: i64) -> Result<u32> {
    u32::try_from(rounds)
        .ok()
        .filter(|&r| r > 0)
        .ok_or(EngineError::InvalidRoundLimit(rounds))
}

impl Match {
    /// Create a match with no round limit.
    pub fn new(catalog: Arc<Catalog>, first: Participant, second: Participant, rng: MatchRng) -> Self {
        Self {
            catalog,
            players: SeatMap::from_pair(first, second),
            round: 0,
            round_limit: None,
            last_outcome: None,
            history: Vec::new(),
            rng,
        }
    }

    /// Start building a match.
    #[must_use]
    pub fn builder() -> MatchBuilder {
        MatchBuilder::new()
    }

    /// Build a match from validated configuration.
    pub fn from_config(config: &MatchConfig) -> Result<Self> {
        let catalog = match &config.catalog {
            Some(spec) => Arc::new(Catalog::new(spec.clone())?),
            None => config.ruleset.catalog(),
        };

        let mut builder = MatchBuilder::new()
            .catalog(catalog)
            .round_limit(config.round_limit);
        for player in &config.players {
            builder = builder.participant(Participant::new(player.name.clone(), player.role));
        }
        if let Some(seed) = config.seed {
            builder = builder.seed(seed);
        }
        builder.build()
    }

    // === Configuration ===

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Swap the catalog. Only allowed before any choice has been made.
    pub fn change_catalog(&mut self, catalog: Arc<Catalog>) -> Result<()> {
        if self.phase() != MatchPhase::NotStarted {
            return Err(EngineError::RulesetLocked);
        }
        info!("switching catalog to {}", catalog.name());
        self.catalog = catalog;
        Ok(())
    }

    /// Set the round limit. Must be a positive integer.
    ///
    /// A configured limit only changes before play or once the match is
    /// finished; in between it fails with `RoundLimitLocked`.
    pub fn set_round_limit(&mut self, rounds: i64) -> Result<()> {
        let limit = check_round_limit(rounds)?;
        if self.round_limit.is_some()
            && !matches!(self.phase(), MatchPhase::NotStarted | MatchPhase::Finished)
        {
            return Err(EngineError::RoundLimitLocked);
        }
        self.round_limit = Some(limit);
        Ok(())
    }

    #[must_use]
    pub fn round_limit(&self) -> Option<u32> {
        self.round_limit
    }

    pub fn set_name(&mut self, seat: Seat, name: impl Into<String>) {
        self.players[seat].set_name(name);
    }

    // === Inspection ===

    #[must_use]
    pub fn participant(&self, seat: Seat) -> &Participant {
        &self.players[seat]
    }

    #[must_use]
    pub fn snapshot(&self, seat: Seat) -> ParticipantView {
        self.players[seat].snapshot()
    }

    /// Zero-based index of the current round.
    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.round
    }

    /// Rounds resolved so far, counting the current one once it has an outcome.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.round + u32::from(self.last_outcome.is_some())
    }

    #[must_use]
    pub fn last_outcome(&self) -> Option<RoundOutcome> {
        self.last_outcome
    }

    /// Every resolved round since the last reset.
    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    #[must_use]
    pub fn scores(&self) -> SeatMap<u32> {
        self.players.map(Participant::score)
    }

    /// Name of the object a seat has chosen this round.
    #[must_use]
    pub fn choice_name(&self, seat: Seat) -> Option<&str> {
        self.players[seat]
            .choice()
            .map(|id| self.catalog.choice_name(id))
    }

    /// Current standing by score, finished or not.
    #[must_use]
    pub fn standing(&self) -> MatchResult {
        MatchResult::from_scores(&self.scores())
    }

    /// Final result once the match is finished.
    #[must_use]
    pub fn result(&self) -> Option<MatchResult> {
        self.is_finished().then(|| self.standing())
    }

    /// True once the round counter reaches the limit.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.round_limit.map_or(false, |limit| self.round >= limit)
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        if self.is_finished() {
            return MatchPhase::Finished;
        }
        if self.last_outcome.is_some() {
            return MatchPhase::RoundResolved;
        }
        let chosen = self.players.iter().filter(|(_, p)| p.choice().is_some()).count();
        match (chosen, self.round) {
            (2, _) => MatchPhase::RoundOpen,
            (0, 0) => MatchPhase::NotStarted,
            _ => MatchPhase::AwaitingChoices,
        }
    }

    #[must_use]
    pub fn rng_state(&self) -> MatchRngState {
        self.rng.state()
    }

    // === Play ===

    /// Accept a human seat's choice by name.
    pub fn choose(&mut self, seat: Seat, name: &str) -> Result<ChoiceId> {
        self.submit(seat, ChoiceSource::Named(name))
    }

    /// Draw an automated seat's choice.
    pub fn draw(&mut self, seat: Seat) -> Result<ChoiceId> {
        self.submit(seat, ChoiceSource::Drawn)
    }

    /// Draw for every automated seat that has not chosen yet.
    pub fn draw_automated(&mut self) -> Result<()> {
        for seat in Seat::ALL {
            let player = &self.players[seat];
            if player.role() == Role::Automated && player.choice().is_none() {
                self.draw(seat)?;
            }
        }
        Ok(())
    }

    /// Produce a choice for `seat` from `source`.
    pub fn submit(&mut self, seat: Seat, source: ChoiceSource<'_>) -> Result<ChoiceId> {
        self.ensure_round_open()?;

        let player = &self.players[seat];
        if !player.accepts(source) {
            return Err(EngineError::RoleMismatch {
                seat,
                role: player.role(),
            });
        }

        match self.players[seat].produce_choice(source, &self.catalog, &mut self.rng) {
            Ok(choice) => {
                debug!(
                    "round {}: {} chose {}",
                    self.round,
                    self.players[seat].name(),
                    self.catalog.choice_name(choice)
                );
                Ok(choice)
            }
            Err(err) => {
                warn!("rejected choice for {}: {}", self.players[seat].name(), err);
                Err(err)
            }
        }
    }

    fn ensure_round_open(&self) -> Result<()> {
        if self.is_finished() {
            return Err(EngineError::MatchFinished { rounds: self.round });
        }
        if self.last_outcome.is_some() {
            return Err(EngineError::RoundAlreadyResolved { round: self.round });
        }
        Ok(())
    }

    /// Score the current round.
    ///
    /// Requires a round limit and a choice from both seats. The winner of
    /// a decisive round gains one point; a draw changes nothing.
    pub fn resolve_round(&mut self) -> Result<RoundOutcome> {
        if self.round_limit.is_none() {
            return Err(EngineError::RoundLimitUnset);
        }
        self.ensure_round_open()?;

        let mut choices = [ChoiceId::new(0); 2];
        for (seat, player) in self.players.iter() {
            choices[seat.index()] = player.choice().ok_or(EngineError::IncompleteRound { seat })?;
        }
        let [first, second] = choices;

        let outcome = match self.catalog.compare(first, second) {
            Comparison::Beats => RoundOutcome::Decisive { winner: Seat::First },
            Comparison::Loses => RoundOutcome::Decisive { winner: Seat::Second },
            Comparison::Ties => RoundOutcome::Draw,
        };
        if let Some(winner) = outcome.winner() {
            self.players[winner].record_win();
        }

        debug!(
            "round {}: {} vs {} -> {:?}",
            self.round,
            self.catalog.choice_name(first),
            self.catalog.choice_name(second),
            outcome
        );

        self.history.push(RoundRecord {
            round: self.round,
            choices: SeatMap::from_pair(first, second),
            outcome,
        });
        self.last_outcome = Some(outcome);
        Ok(outcome)
    }

    /// Clear both choices and the outcome, then move to the next round.
    pub fn advance_round(&mut self) {
        for (_, player) in self.players.iter_mut() {
            player.clear_choice();
        }
        self.last_outcome = None;
        self.round = self.round.saturating_add(1);

        if self.is_finished() {
            info!(
                "match finished after {} rounds: {:?}",
                self.round,
                self.standing()
            );
        }
    }

    /// Start over with the same catalog, limit and players.
    pub fn reset(&mut self) {
        for (_, player) in self.players.iter_mut() {
            player.clear_choice();
            player.reset_score();
        }
        self.round = 0;
        self.last_outcome = None;
        self.history.clear();
        info!("match reset");
    }
}

/// Builder for creating a Match.
pub struct MatchBuilder {
    catalog: Option<Arc<Catalog>>,
    players: Vec<Participant>,
    round_limit: Option<i64>,
    seed: Option<u64>,
    rng_state: Option<MatchRngState>,
}

impl Default for MatchBuilder {
    fn default() -> Self {
        Self {
            catalog: None,
            players: Vec::with_capacity(2),
            round_limit: None,
            seed: None,
            rng_state: None,
        }
    }
}

impl MatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a shared built-in ruleset.
    pub fn ruleset(self, ruleset: Ruleset) -> Self {
        self.catalog(ruleset.catalog())
    }

    pub fn catalog(mut self, catalog: Arc<Catalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Seat a participant. The first call fills `Seat::First`.
    pub fn participant(mut self, participant: Participant) -> Self {
        self.players.push(participant);
        self
    }

    pub fn human(self, name: impl Into<String>) -> Self {
        self.participant(Participant::human(name))
    }

    pub fn automated(self, name: impl Into<String>) -> Self {
        self.participant(Participant::automated(name))
    }

    pub fn round_limit(mut self, rounds: i64) -> Self {
        self.round_limit = Some(rounds);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Resume automated draws from a checkpoint. Takes precedence over `seed`.
    pub fn rng_state(mut self, state: MatchRngState) -> Self {
        self.rng_state = Some(state);
        self
    }

    /// Build the match.
    ///
    /// Without a catalog the shared classic ruleset is used; without a seed
    /// or checkpoint the RNG is seeded from entropy.
    pub fn build(self) -> Result<Match> {
        let player_count = self.players.len();
        let [first, second]: [Participant; 2] = self.players.try_into().map_err(|_| {
            EngineError::InvalidConfiguration(format!(
                "a match needs exactly two participants, got {}",
                player_count
            ))
        })?;

        let round_limit = self.round_limit.map(check_round_limit).transpose()?;
        let catalog = self.catalog.unwrap_or_else(|| Ruleset::Classic.catalog());
        let rng = match (&self.rng_state, self.seed) {
            (Some(state), _) => MatchRng::from_state(state),
            (None, Some(seed)) => MatchRng::new(seed),
            (None, None) => MatchRng::from_entropy(),
        };

        let mut game = Match::new(catalog, first, second, rng);
        game.round_limit = round_limit;
        debug!(
            "new match: {} vs {} over {} ({:?} rounds, seed {})",
            game.players[Seat::First].name(),
            game.players[Seat::Second].name(),
            game.catalog.name(),
            round_limit,
            game.rng.seed()
        );
        Ok(game)
    }
}
