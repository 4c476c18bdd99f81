//! Choice catalogs and win relations.
//!
//! A catalog is the ordered set of objects a ruleset offers together with
//! the relation saying which object defeats which. Catalogs are validated
//! when built and never change afterwards.

pub mod choice;
pub mod relation;
pub mod registry;
pub mod tables;

pub use choice::{ChoiceId, Comparison};
pub use registry::{Catalog, CatalogSpec};
pub use relation::WinRelation;
pub use tables::Ruleset;

/// Canonical form of an object name.
pub(crate) fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
