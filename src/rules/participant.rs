//! Match participants.
//!
//! A participant is a display name, a role, the choice for the current
//! round (if any) and a running score. The role decides where a choice
//! comes from: a human supplies a name, an automated seat draws one.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ChoiceId};
use crate::core::error::Result;
use crate::core::rng::MatchRng;

/// Who produces a participant's choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Choices come from outside the engine and are validated.
    Human,
    /// Choices are drawn uniformly from the catalog.
    Automated,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Human => write!(f, "human"),
            Role::Automated => write!(f, "automated"),
        }
    }
}

/// Where a choice request gets its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceSource<'a> {
    /// A name typed or clicked by a human.
    Named(&'a str),
    /// A draw from the match RNG.
    Drawn,
}

/// One side of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    name: String,
    role: Role,
    choice: Option<ChoiceId>,
    score: u32,
}

impl Participant {
    /// Create a participant with no choice and a score of 0.
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            choice: None,
            score: 0,
        }
    }

    /// Create a human-controlled participant.
    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, Role::Human)
    }

    /// Create an automated participant.
    pub fn automated(name: impl Into<String>) -> Self {
        Self::new(name, Role::Automated)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn choice(&self) -> Option<ChoiceId> {
        self.choice
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Whether `source` is the kind of input this role accepts.
    #[must_use]
    pub fn accepts(&self, source: ChoiceSource<'_>) -> bool {
        matches!(
            (self.role, source),
            (Role::Human, ChoiceSource::Named(_)) | (Role::Automated, ChoiceSource::Drawn)
        )
    }

    /// Produce this round's choice and store it.
    ///
    /// The caller checks [`accepts`](Self::accepts) first. On error the
    /// current choice is left as it was.
    pub fn produce_choice(
        &mut self,
        source: ChoiceSource<'_>,
        catalog: &Catalog,
        rng: &mut MatchRng,
    ) -> Result<ChoiceId> {
        let choice = match source {
            ChoiceSource::Named(name) => catalog.validate(name)?,
            ChoiceSource::Drawn => catalog.random_choice(rng),
        };
        self.choice = Some(choice);
        Ok(choice)
    }

    /// Add one point for a decisive round.
    pub fn record_win(&mut self) {
        self.score += 1;
    }

    pub fn clear_choice(&mut self) {
        self.choice = None;
    }

    pub(crate) fn reset_score(&mut self) {
        self.score = 0;
    }

    /// Reporting view.
    #[must_use]
    pub fn snapshot(&self) -> ParticipantView {
        ParticipantView {
            name: self.name.clone(),
            role: self.role,
            score: self.score,
            has_choice: self.choice.is_some(),
        }
    }
}

/// Read-only summary of a participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantView {
    pub name: String,
    pub role: Role,
    pub score: u32,
    /// True once a choice is set for the current round. The choice itself stays hidden.
    pub has_choice: bool,
}

impl std::fmt::Display for ParticipantView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player: {}\nScore: {}\nObject chosen: {}",
            self.name, self.score, self.has_choice
        )
    }
}
