//! Match configuration.
//!
//! Front ends collect these settings once before play:
//! - which ruleset (or a custom catalog) to use
//! - how many rounds to play
//! - who sits in each seat
//!
//! `MatchConfig` is plain serde data; `Match::from_config` validates it.

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogSpec, Ruleset};
use crate::rules::Role;

/// Default number of rounds offered to new players.
pub const DEFAULT_ROUND_LIMIT: i64 = 5;

/// Configuration for one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name.
    pub name: String,
    /// Who produces this seat's choices.
    pub role: Role,
}

impl PlayerConfig {
    /// A human-controlled seat.
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: Role::Human,
        }
    }

    /// An automated seat.
    pub fn automated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: Role::Automated,
        }
    }
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Built-in ruleset, ignored when `catalog` is set.
    pub ruleset: Ruleset,

    /// Custom catalog overriding `ruleset`.
    pub catalog: Option<CatalogSpec>,

    /// Number of rounds. Must be positive; kept signed so bad input can be reported.
    pub round_limit: i64,

    /// Seats in play order.
    pub players: [PlayerConfig; 2],

    /// RNG seed for automated seats. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            ruleset: Ruleset::Classic,
            catalog: None,
            round_limit: DEFAULT_ROUND_LIMIT,
            players: [PlayerConfig::human("Player"), PlayerConfig::automated("Computer")],
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a built-in ruleset.
    #[must_use]
    pub fn with_ruleset(mut self, ruleset: Ruleset) -> Self {
        self.ruleset = ruleset;
        self.catalog = None;
        self
    }

    /// Use a custom catalog.
    #[must_use]
    pub fn with_catalog(mut self, spec: CatalogSpec) -> Self {
        self.catalog = Some(spec);
        self
    }

    /// Set the round limit.
    #[must_use]
    pub fn with_round_limit(mut self, rounds: i64) -> Self {
        self.round_limit = rounds;
        self
    }

    /// Set both seats.
    #[must_use]
    pub fn with_players(mut self, first: PlayerConfig, second: PlayerConfig) -> Self {
        self.players = [first, second];
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.ruleset, Ruleset::Classic);
        assert_eq!(config.round_limit, 5);
        assert_eq!(config.players[0], PlayerConfig::human("Player"));
        assert_eq!(config.players[1], PlayerConfig::automated("Computer"));
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::new()
            .with_ruleset(Ruleset::Extended)
            .with_round_limit(3)
            .with_players(PlayerConfig::automated("Left"), PlayerConfig::human("Right"))
            .with_seed(8);

        assert_eq!(config.ruleset, Ruleset::Extended);
        assert_eq!(config.round_limit, 3);
        assert_eq!(config.players[1].role, Role::Human);
        assert_eq!(config.seed, Some(8));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: MatchConfig =
            serde_json::from_str(r#"{ "ruleset": "rpsls", "round_limit": 2 }"#).unwrap();

        assert_eq!(config.ruleset, Ruleset::Extended);
        assert_eq!(config.round_limit, 2);
        assert_eq!(config.players, MatchConfig::default().players);
    }

    #[test]
    fn test_json_round_trip() {
        let config = MatchConfig::new().with_seed(99).with_round_limit(7);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
