//! Choice identifiers and pairwise comparison results.

use serde::{Deserialize, Serialize};

/// Index of an object within its catalog.
///
/// A `ChoiceId` is only meaningful for the catalog that produced it. IDs
/// come from [`Catalog`](super::Catalog) lookups and draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChoiceId(pub(crate) u8);

impl ChoiceId {
    #[must_use]
    pub(crate) const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw catalog index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Choice({})", self.0)
    }
}

/// Result of comparing one choice against another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    /// The first choice defeats the second.
    Beats,
    /// The first choice is defeated by the second.
    Loses,
    /// Both choices are the same object.
    Ties,
}

impl Comparison {
    /// The same comparison seen from the other side.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Comparison::Beats => Comparison::Loses,
            Comparison::Loses => Comparison::Beats,
            Comparison::Ties => Comparison::Ties,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_id() {
        let id = ChoiceId::new(4);
        assert_eq!(id.index(), 4);
        assert_eq!(format!("{}", id), "Choice(4)");
    }

    #[test]
    fn test_comparison_reverse() {
        assert_eq!(Comparison::Beats.reverse(), Comparison::Loses);
        assert_eq!(Comparison::Loses.reverse(), Comparison::Beats);
        assert_eq!(Comparison::Ties.reverse(), Comparison::Ties);
    }
}
