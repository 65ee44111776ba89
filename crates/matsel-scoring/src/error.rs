//! Error types for scoring.

use thiserror::Error;

use matsel_core::{Attribute, ToughnessClass};

/// Errors that abort a single `score`/`rank` call.
///
/// Silently defaulting a missing value would distort the ranking, so both
/// variants are fatal to the call they occur in.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    /// A categorical toughness value has no entry in the ordinal mapping.
    #[error("no ordinal mapping for toughness class '{class}' on material '{material}'")]
    UnmappedCategory {
        material: String,
        class: ToughnessClass,
    },

    /// A criterion needs an attribute the record does not carry.
    #[error("material '{material}' is missing attribute '{attribute}'")]
    MissingAttribute {
        material: String,
        attribute: Attribute,
    },
}
