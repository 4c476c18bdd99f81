//! Standard rulesets.
//!
//! - `Classic`: rock, paper, scissors
//! - `Extended`: rock, paper, scissors, lizard, spock
//!
//! The catalogs are built once per process and shared read-only.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use super::registry::{Catalog, CatalogSpec};

/// Built-in ruleset selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ruleset {
    /// Rock, paper, scissors.
    #[default]
    #[serde(alias = "rps")]
    Classic,
    /// Rock, paper, scissors, lizard, spock.
    #[serde(alias = "rpsls")]
    Extended,
}

static CLASSIC: OnceLock<Arc<Catalog>> = OnceLock::new();
static EXTENDED: OnceLock<Arc<Catalog>> = OnceLock::new();

impl Ruleset {
    /// Short name used on the command line.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Ruleset::Classic => "rps",
            Ruleset::Extended => "rpsls",
        }
    }

    /// The win table for this ruleset.
    #[must_use]
    pub fn spec(self) -> CatalogSpec {
        match self {
            Ruleset::Classic => CatalogSpec::new("Rock, Paper, Scissors")
                .with_choice("rock", ["scissors"])
                .with_choice("paper", ["rock"])
                .with_choice("scissors", ["paper"]),
            Ruleset::Extended => CatalogSpec::new("Rock, Paper, Scissors, Lizard, Spock")
                .with_choice("rock", ["scissors", "lizard"])
                .with_choice("paper", ["rock", "spock"])
                .with_choice("scissors", ["paper", "lizard"])
                .with_choice("lizard", ["paper", "spock"])
                .with_choice("spock", ["rock", "scissors"]),
        }
    }

    /// Process-wide shared catalog for this ruleset.
    #[must_use]
    pub fn catalog(self) -> Arc<Catalog> {
        let cell = match self {
            Ruleset::Classic => &CLASSIC,
            Ruleset::Extended => &EXTENDED,
        };
        cell.get_or_init(|| {
            Arc::new(Catalog::new(self.spec()).expect("built-in win table is valid"))
        })
        .clone()
    }
}

impl std::fmt::Display for Ruleset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl FromStr for Ruleset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rps" | "classic" => Ok(Ruleset::Classic),
            "rpsls" | "extended" => Ok(Ruleset::Extended),
            other => Err(format!("unknown ruleset '{}', expected 'rps' or 'rpsls'", other)),
        }
    }
}
