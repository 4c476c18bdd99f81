//! Win relation: which objects each object defeats.
//!
//! The relation is validated once at construction. After that every
//! ordered pair of distinct objects has exactly one winner, so comparison
//! never fails.
//!
//! ## Cyclic shortcut
//!
//! Balanced tables (3 and 5 objects) can be laid out on a circle where
//! each object beats the `(n - 1) / 2` objects behind it. When such an
//! order exists *and* agrees with every pair of the table, comparison can
//! use modular distance instead of a table lookup. The table stays the
//! source of truth: the shortcut is only enabled after it is verified.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::collections::BTreeMap;

use super::choice::{ChoiceId, Comparison};
use super::normalize;
use crate::core::error::{EngineError, Result};

/// Validated mapping from each object to the objects it defeats.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinRelation {
    /// Indexed by `ChoiceId`. SmallVec covers the standard tables without heap allocation.
    wins: Vec<SmallVec<[ChoiceId; 4]>>,
    /// Position of each object on the verified circle, if one exists.
    cycle: Option<Vec<u8>>,
}

impl WinRelation {
    /// Build and validate a relation over `choices`.
    ///
    /// `index` maps normalized names to their position in `choices`. Keys
    /// and values of `wins` are normalized before lookup.
    pub(crate) fn build(
        choices: &[String],
        index: &FxHashMap<String, ChoiceId>,
        wins: &BTreeMap<String, Vec<String>>,
    ) -> Result<Self> {
        let n = choices.len();
        let mut table: Vec<Option<SmallVec<[ChoiceId; 4]>>> = vec![None; n];

        for (key, defeated) in wins {
            let key = normalize(key);
            let attacker = *index.get(&key).ok_or_else(|| {
                EngineError::InvalidConfiguration(format!(
                    "win relation names '{}' which is not in the catalog",
                    key
                ))
            })?;
            if table[attacker.index()].is_some() {
                return Err(EngineError::InvalidConfiguration(format!(
                    "win relation lists '{}' more than once",
                    key
                )));
            }

            let mut row: SmallVec<[ChoiceId; 4]> = SmallVec::new();
            for name in defeated {
                let name = normalize(name);
                let target = *index.get(&name).ok_or_else(|| {
                    EngineError::InvalidConfiguration(format!(
                        "'{}' defeats '{}' which is not in the catalog",
                        key, name
                    ))
                })?;
                if target == attacker {
                    return Err(EngineError::InvalidConfiguration(format!(
                        "'{}' cannot defeat itself",
                        key
                    )));
                }
                if row.contains(&target) {
                    return Err(EngineError::InvalidConfiguration(format!(
                        "'{}' lists '{}' twice",
                        key, name
                    )));
                }
                row.push(target);
            }
            table[attacker.index()] = Some(row);
        }

        let wins: Vec<SmallVec<[ChoiceId; 4]>> = table
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                row.ok_or_else(|| {
                    EngineError::InvalidConfiguration(format!(
                        "'{}' has no entry in the win relation",
                        choices[i]
                    ))
                })
            })
            .collect::<Result<_>>()?;

        let mut relation = Self { wins, cycle: None };
        relation.check_pairs(choices)?;
        relation.cycle = relation.derive_cycle();
        Ok(relation)
    }

    /// Every distinct pair must be decided in exactly one direction.
    fn check_pairs(&self, choices: &[String]) -> Result<()> {
        let n = self.wins.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (ChoiceId(i as u8), ChoiceId(j as u8));
                match (self.table_beats(a, b), self.table_beats(b, a)) {
                    (true, true) => {
                        return Err(EngineError::InvalidConfiguration(format!(
                            "'{}' and '{}' defeat each other",
                            choices[i], choices[j]
                        )))
                    }
                    (false, false) => {
                        return Err(EngineError::InvalidConfiguration(format!(
                            "no outcome defined between '{}' and '{}'",
                            choices[i], choices[j]
                        )))
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Try to lay the objects on a circle that reproduces the table.
    ///
    /// Walks from object 0, each step taking the unplaced object that beats
    /// the current one and loses to every other unplaced object that also
    /// beats it. The candidate circle is then checked against every pair.
    fn derive_cycle(&self) -> Option<Vec<u8>> {
        let n = self.wins.len();
        if n % 2 == 0 {
            return None;
        }
        let half = (n - 1) / 2;
        if self.wins.iter().any(|row| row.len() != half) {
            return None;
        }

        let mut order: Vec<ChoiceId> = Vec::with_capacity(n);
        let mut placed = vec![false; n];
        order.push(ChoiceId(0));
        placed[0] = true;

        while order.len() < n {
            let current = *order.last()?;
            let beaters: SmallVec<[ChoiceId; 8]> = (0..n)
                .filter(|&j| !placed[j])
                .map(|j| ChoiceId(j as u8))
                .filter(|&j| self.table_beats(j, current))
                .collect();
            let next = beaters.iter().copied().find(|&candidate| {
                beaters
                    .iter()
                    .all(|&other| other == candidate || self.table_beats(other, candidate))
            })?;
            placed[next.index()] = true;
            order.push(next);
        }

        let mut positions = vec![0u8; n];
        for (pos, id) in order.iter().enumerate() {
            positions[id.index()] = pos as u8;
        }

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let (a, b) = (ChoiceId(i as u8), ChoiceId(j as u8));
                let by_distance = Self::distance_compare(&positions, a, b) == Comparison::Beats;
                if by_distance != self.table_beats(a, b) {
                    return None;
                }
            }
        }
        Some(positions)
    }

    fn distance_compare(positions: &[u8], a: ChoiceId, b: ChoiceId) -> Comparison {
        let n = positions.len();
        let half = (n - 1) / 2;
        let d = (positions[a.index()] as usize + n - positions[b.index()] as usize) % n;
        if d == 0 {
            Comparison::Ties
        } else if d <= half {
            Comparison::Beats
        } else {
            Comparison::Loses
        }
    }

    fn table_beats(&self, a: ChoiceId, b: ChoiceId) -> bool {
        self.wins[a.index()].contains(&b)
    }

    /// Compare two choices.
    ///
    /// # Panics
    ///
    /// Panics on an ID outside this relation.
    #[must_use]
    pub fn compare(&self, a: ChoiceId, b: ChoiceId) -> Comparison {
        if a == b {
            return Comparison::Ties;
        }
        match &self.cycle {
            Some(positions) => Self::distance_compare(positions, a, b),
            None => self.compare_by_table(a, b),
        }
    }

    /// Compare two choices using the table only.
    #[must_use]
    pub fn compare_by_table(&self, a: ChoiceId, b: ChoiceId) -> Comparison {
        if a == b {
            Comparison::Ties
        } else if self.table_beats(a, b) {
            Comparison::Beats
        } else {
            Comparison::Loses
        }
    }

    /// Objects defeated by `choice`.
    ///
    /// # Panics
    ///
    /// Panics on an ID outside this relation.
    #[must_use]
    pub fn defeats(&self, choice: ChoiceId) -> &[ChoiceId] {
        &self.wins[choice.index()]
    }

    /// Verified circle order, if the table admits one.
    ///
    /// Returns the choices in circle order starting from choice 0.
    #[must_use]
    pub fn cyclic_order(&self) -> Option<Vec<ChoiceId>> {
        let positions = self.cycle.as_ref()?;
        let mut order = vec![ChoiceId(0); positions.len()];
        for (i, &pos) in positions.iter().enumerate() {
            order[pos as usize] = ChoiceId(i as u8);
        }
        Some(order)
    }

    /// Number of objects covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.wins.len()
    }

    /// True if the relation covers no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(choices: &[&str], wins: &[(&str, Vec<&str>)]) -> Result<WinRelation> {
        let choices: Vec<String> = choices.iter().map(|c| c.to_string()).collect();
        let index: FxHashMap<String, ChoiceId> = choices
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), ChoiceId(i as u8)))
            .collect();
        let wins: BTreeMap<String, Vec<String>> = wins
            .iter()
            .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect()))
            .collect();
        WinRelation::build(&choices, &index, &wins)
    }

    fn classic() -> WinRelation {
        build(
            &["rock", "paper", "scissors"],
            &[("rock", vec!["scissors"]), ("paper", vec!["rock"]), ("scissors", vec!["paper"])],
        )
        .unwrap()
    }

    #[test]
    fn test_classic_compare() {
        let rel = classic();
        let (rock, paper, scissors) = (ChoiceId(0), ChoiceId(1), ChoiceId(2));

        assert_eq!(rel.compare(rock, scissors), Comparison::Beats);
        assert_eq!(rel.compare(scissors, rock), Comparison::Loses);
        assert_eq!(rel.compare(paper, rock), Comparison::Beats);
        assert_eq!(rel.compare(scissors, paper), Comparison::Beats);
        assert_eq!(rel.compare(paper, paper), Comparison::Ties);
    }

    #[test]
    fn test_classic_has_cycle() {
        let rel = classic();
        assert_eq!(
            rel.cyclic_order(),
            Some(vec![ChoiceId(0), ChoiceId(1), ChoiceId(2)])
        );
    }

    #[test]
    fn test_missing_key_rejected() {
        let err = build(
            &["rock", "paper", "scissors"],
            &[("rock", vec!["scissors"]), ("paper", vec!["rock"])],
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = build(
            &["rock", "paper"],
            &[("rock", vec![]), ("paper", vec!["rock"]), ("well", vec!["rock"])],
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_unknown_target_rejected() {
        let err = build(&["rock", "paper"], &[("rock", vec!["well"]), ("paper", vec!["rock"])]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_self_defeat_rejected() {
        let err = build(&["rock", "paper"], &[("rock", vec!["rock"]), ("paper", vec!["rock"])]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_mutual_defeat_rejected() {
        let err = build(&["rock", "paper"], &[("rock", vec!["paper"]), ("paper", vec!["rock"])]).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidConfiguration("'rock' and 'paper' defeat each other".to_string())
        );
    }

    #[test]
    fn test_undefined_pair_rejected() {
        let err = build(
            &["rock", "paper", "scissors"],
            &[("rock", vec!["scissors"]), ("paper", vec!["rock"]), ("scissors", vec![])],
        )
        .unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidConfiguration(
                "no outcome defined between 'paper' and 'scissors'".to_string()
            )
        );
    }

    #[test]
    fn test_duplicate_target_rejected() {
        let err = build(
            &["rock", "scissors"],
            &[("rock", vec!["scissors", "scissors"]), ("scissors", vec![])],
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_transitive_table_has_no_cycle() {
        // a > b > c and a > c: valid, but not a circle.
        let rel = build(
            &["a", "b", "c"],
            &[("a", vec!["b", "c"]), ("b", vec!["c"]), ("c", vec![])],
        )
        .unwrap();

        assert_eq!(rel.cyclic_order(), None);
        assert_eq!(rel.compare(ChoiceId(0), ChoiceId(2)), Comparison::Beats);
        assert_eq!(rel.compare(ChoiceId(2), ChoiceId(1)), Comparison::Loses);
    }

    #[test]
    fn test_single_object() {
        let rel = build(&["rock"], &[("rock", vec![])]).unwrap();
        assert_eq!(rel.len(), 1);
        assert_eq!(rel.compare(ChoiceId(0), ChoiceId(0)), Comparison::Ties);
    }
}
