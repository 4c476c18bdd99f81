//! Choice catalog: the named objects of a ruleset and their win relation.
//!
//! ## Example
//!
//! ```
//! use rps_engine::catalog::{Catalog, CatalogSpec, Comparison};
//!
//! let spec = CatalogSpec::new("duel")
//!     .with_choice("rock", ["scissors"])
//!     .with_choice("paper", ["rock"])
//!     .with_choice("scissors", ["paper"]);
//! let catalog = Catalog::new(spec).unwrap();
//!
//! assert_eq!(catalog.compare_names("Rock", "scissors").unwrap(), Comparison::Beats);
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::choice::{ChoiceId, Comparison};
use super::normalize;
use super::relation::WinRelation;
use crate::core::error::{EngineError, Result};
use crate::core::rng::MatchRng;

/// Serializable description of a catalog.
///
/// `choices` fixes the display order; `wins` maps each choice to the
/// choices it defeats. Validation happens in [`Catalog::new`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSpec {
    /// Ruleset name (for display).
    pub name: String,
    /// Object names in display order.
    pub choices: Vec<String>,
    /// Each object mapped to the objects it defeats.
    pub wins: BTreeMap<String, Vec<String>>,
}

impl CatalogSpec {
    /// Create an empty spec.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a choice together with the choices it defeats.
    #[must_use]
    pub fn with_choice<I, S>(mut self, choice: impl Into<String>, defeats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let choice = choice.into();
        self.wins
            .insert(choice.clone(), defeats.into_iter().map(Into::into).collect());
        self.choices.push(choice);
        self
    }
}

/// Validated catalog of choosable objects.
///
/// Read-only once built; matches share it behind an `Arc`.
#[derive(Clone, Debug)]
pub struct Catalog {
    name: String,
    choices: Vec<String>,
    index: FxHashMap<String, ChoiceId>,
    relation: WinRelation,
}

impl Catalog {
    /// Build a catalog from its spec.
    ///
    /// Fails with `InvalidConfiguration` when the catalog is empty, a name
    /// repeats, or the win relation does not match the catalog.
    pub fn new(spec: CatalogSpec) -> Result<Self> {
        if spec.choices.is_empty() {
            return Err(EngineError::InvalidConfiguration(
                "catalog must contain at least one choice".to_string(),
            ));
        }
        if spec.choices.len() > u8::MAX as usize {
            return Err(EngineError::InvalidConfiguration(format!(
                "catalog has {} choices, at most {} are supported",
                spec.choices.len(),
                u8::MAX
            )));
        }

        let choices: Vec<String> = spec.choices.iter().map(|c| normalize(c)).collect();
        let mut index = FxHashMap::default();
        for (i, choice) in choices.iter().enumerate() {
            if choice.is_empty() {
                return Err(EngineError::InvalidConfiguration(
                    "choice names cannot be blank".to_string(),
                ));
            }
            if index.insert(choice.clone(), ChoiceId(i as u8)).is_some() {
                return Err(EngineError::InvalidConfiguration(format!(
                    "'{}' appears more than once in the catalog",
                    choice
                )));
            }
        }

        let relation = WinRelation::build(&choices, &index, &spec.wins)?;

        Ok(Self {
            name: spec.name,
            choices,
            index,
            relation,
        })
    }

    /// Ruleset name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Always false for a built catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Object names in display order.
    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Iterate over all choice IDs.
    pub fn ids(&self) -> impl Iterator<Item = ChoiceId> {
        (0..self.choices.len() as u8).map(ChoiceId)
    }

    /// Name of a choice.
    ///
    /// # Panics
    ///
    /// Panics if `id` belongs to a larger catalog.
    #[must_use]
    pub fn choice_name(&self, id: ChoiceId) -> &str {
        &self.choices[id.index()]
    }

    /// Look up a name without raising an error.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<ChoiceId> {
        self.index.get(&normalize(name)).copied()
    }

    /// Accept an externally supplied name.
    ///
    /// Matching ignores case and surrounding whitespace.
    pub fn validate(&self, name: &str) -> Result<ChoiceId> {
        self.lookup(name).ok_or_else(|| EngineError::InvalidChoice {
            name: name.to_string(),
            allowed: self.allowed_list(),
        })
    }

    /// Draw a choice uniformly at random.
    pub fn random_choice(&self, rng: &mut MatchRng) -> ChoiceId {
        // A built catalog is never empty.
        let i = rng.pick_index(self.choices.len()).unwrap_or(0);
        ChoiceId(i as u8)
    }

    /// Compare two choices from this catalog.
    ///
    /// # Panics
    ///
    /// Panics if either ID belongs to a larger catalog.
    #[must_use]
    pub fn compare(&self, a: ChoiceId, b: ChoiceId) -> Comparison {
        self.relation.compare(a, b)
    }

    /// Compare two names, validating both.
    pub fn compare_names(&self, a: &str, b: &str) -> Result<Comparison> {
        let a = self.validate(a)?;
        let b = self.validate(b)?;
        Ok(self.compare(a, b))
    }

    /// Objects defeated by `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` belongs to a larger catalog.
    #[must_use]
    pub fn defeats(&self, id: ChoiceId) -> &[ChoiceId] {
        self.relation.defeats(id)
    }

    /// The underlying win relation.
    #[must_use]
    pub fn relation(&self) -> &WinRelation {
        &self.relation
    }

    /// Names in verified circle order, if the table admits one.
    #[must_use]
    pub fn cyclic_order(&self) -> Option<Vec<&str>> {
        self.relation
            .cyclic_order()
            .map(|order| order.into_iter().map(|id| self.choice_name(id)).collect())
    }

    /// Rebuild the serializable spec.
    #[must_use]
    pub fn to_spec(&self) -> CatalogSpec {
        let wins: BTreeMap<String, Vec<String>> = self
            .ids()
            .map(|id| {
                let defeated: Vec<String> = self
                    .defeats(id)
                    .iter()
                    .map(|&d| self.choice_name(d).to_string())
                    .collect();
                (self.choice_name(id).to_string(), defeated)
            })
            .collect();
        CatalogSpec {
            name: self.name.clone(),
            choices: self.choices.clone(),
            wins,
        }
    }

    /// `'rock', 'paper' or 'scissors'`
    fn allowed_list(&self) -> String {
        let quoted: Vec<String> = self.choices.iter().map(|c| format!("'{}'", c)).collect();
        match quoted.split_last() {
            Some((last, rest)) if !rest.is_empty() => format!("{} or {}", rest.join(", "), last),
            Some((last, _)) => last.clone(),
            None => String::new(),
        }
    }
}
