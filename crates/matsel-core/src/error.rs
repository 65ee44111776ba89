//! Error types for matsel catalog and record construction.

use thiserror::Error;

use crate::material::Attribute;

/// Errors raised while building a single material record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MaterialError {
    /// A numeric property was non-finite or outside its valid range.
    #[error("invalid {attribute} for material '{material}': {value}")]
    InvalidProperty {
        /// Material being built.
        material: String,
        /// Offending attribute.
        attribute: Attribute,
        /// Value that failed validation.
        value: f64,
    },

    /// Material name was empty.
    #[error("material name must not be empty")]
    EmptyName,
}

/// Errors raised by catalog construction and lookup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// Two records in the same catalog share a name.
    #[error("duplicate material name '{0}' in catalog")]
    DuplicateName(String),

    /// Lookup of a name not present in the catalog.
    #[error("material '{0}' not found in catalog")]
    NotFound(String),
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
