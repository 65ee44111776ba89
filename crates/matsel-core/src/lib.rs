//! Matsel Core - Core types for material selection
//!
//! This crate provides the fundamental abstractions for matsel:
//! - Immutable material records and catalogs
//! - Attribute keys for uniform property access
//! - Constraint types for feasibility evaluation
//! - The shared error taxonomy

pub mod catalog;
pub mod constraint;
pub mod error;
pub mod material;

pub use catalog::MaterialCatalog;
pub use constraint::{Comparator, Constraint, ConstraintSet};
pub use error::{CatalogError, MaterialError};
pub use material::{Attribute, MaterialRecord, MaterialRecordBuilder, Toughness, ToughnessClass};
