//! The engine contract and its error taxonomy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use matsel_core::MaterialError;

use crate::properties::PropertyMap;

/// Errors crossing the engine boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// `constant()` was asked for a name the engine does not know.
    #[error("unknown constant '{0}'")]
    UnknownConstant(String),

    /// `material()` was asked for a material the engine does not know.
    #[error("unknown material '{0}'")]
    UnknownMaterial(String),

    /// An argument was outside the operation's domain.
    #[error("invalid argument for {operation}: {value}")]
    InvalidArgument {
        operation: &'static str,
        value: f64,
    },

    /// A material payload lacks a required property.
    #[error("material '{material}' payload is missing property '{property}'")]
    MissingProperty {
        material: String,
        property: &'static str,
    },

    /// A material payload carries a property of the wrong shape.
    #[error("material '{material}' payload has invalid property '{property}'")]
    InvalidProperty {
        material: String,
        property: String,
    },

    /// A payload produced a record that failed validation.
    #[error(transparent)]
    Material(#[from] MaterialError),
}

/// Result of a free-fall drop computation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct DropResult {
    /// Fall time, s.
    pub time: f64,
    /// Impact velocity, m/s.
    pub velocity: f64,
}

/// Result of a density-based material identification.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Identification {
    /// Name of the best-matching material.
    pub material: String,
    /// Match confidence in \[0, 100\].
    pub confidence: f64,
}

/// The external numerical engine, reduced to the four calls the selection
/// demos use. Implementations own their transport; callers only see
/// structured values.
pub trait NumericsEngine {
    /// A named physical constant.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnknownConstant`] if the name is unrecognized.
    fn constant(&self, name: &str) -> Result<f64, EngineError>;

    /// The property payload of a named material.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnknownMaterial`] if the name is unrecognized.
    fn material(&self, name: &str) -> Result<PropertyMap, EngineError>;

    /// Free-fall time and impact velocity from a drop height in meters.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidArgument`] if `height` is not positive.
    fn drop_test(&self, height: f64) -> Result<DropResult, EngineError>;

    /// Best density match, or `None` when nothing is close enough.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidArgument`] if `density` is not positive.
    fn identify(&self, density: f64) -> Result<Option<Identification>, EngineError>;
}
