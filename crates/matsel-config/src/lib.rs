//! Configuration system for matsel.
//!
//! Load a whole selection problem - materials, constraints, and weighted
//! criteria - from TOML or YAML without code changes. Constraints and
//! criteria are arrays, not maps, so the caller-specified evaluation order
//! survives deserialization.
//!
//! # Examples
//!
//! Load a selection problem from a TOML string:
//!
//! ```
//! use matsel_config::SelectionConfig;
//!
//! let config = SelectionConfig::from_toml_str(r#"
//!     [[materials]]
//!     name = "aluminum_7075"
//!     density = 2810.0
//!     strength = 505e6
//!     cost = 5.0
//!     toughness = "moderate"
//!
//!     [[constraints]]
//!     name = "min_strength"
//!     attribute = "strength"
//!     comparator = "at_least"
//!     threshold = 400e6
//!
//!     [[criteria]]
//!     name = "specific_strength"
//!     weight = 0.7
//!     source = "specific_strength"
//!     normalization = { reference = 400000.0 }
//! "#).unwrap();
//!
//! let catalog = config.catalog().unwrap();
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(config.constraint_set().len(), 1);
//! assert_eq!(config.criteria_set().len(), 1);
//! ```
//!
//! Use an empty config when the file is missing:
//!
//! ```
//! use matsel_config::SelectionConfig;
//!
//! let config = SelectionConfig::load("selection.toml").unwrap_or_default();
//! assert!(config.materials.is_empty());
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use matsel_core::{
    Attribute, CatalogError, Comparator, Constraint, ConstraintSet, MaterialCatalog,
    MaterialError, MaterialRecord, ToughnessClass,
};
use matsel_scoring::{Criterion, CriteriaSet, Normalization, OrdinalMap, ValueSource};

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Material(#[from] MaterialError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// A complete selection problem loaded from configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SelectionConfig {
    /// Material records, in catalog order.
    #[serde(default)]
    pub materials: Vec<MaterialConfig>,

    /// Named constraints, in evaluation order.
    #[serde(default)]
    pub constraints: Vec<ConstraintConfig>,

    /// Weighted criteria, in scoring order.
    #[serde(default)]
    pub criteria: Vec<CriterionConfig>,
}

impl SelectionConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Builds the catalog from the configured materials.
    pub fn catalog(&self) -> Result<MaterialCatalog, ConfigError> {
        let records = self
            .materials
            .iter()
            .map(MaterialConfig::record)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MaterialCatalog::new(records)?)
    }

    /// Builds the constraint set, preserving file order.
    pub fn constraint_set(&self) -> ConstraintSet {
        let mut set = ConstraintSet::new();
        for c in &self.constraints {
            set.insert(
                c.name.clone(),
                Constraint {
                    attribute: c.attribute,
                    comparator: c.comparator,
                    threshold: c.threshold,
                },
            );
        }
        set
    }

    /// Builds the criteria set, preserving file order.
    pub fn criteria_set(&self) -> CriteriaSet {
        let mut set = CriteriaSet::new();
        for c in &self.criteria {
            set = set.with(Criterion::new(
                c.name.clone(),
                c.weight,
                c.source.value_source(),
                c.normalization.normalization(),
            ));
        }
        set
    }
}

/// One material record in configuration form.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MaterialConfig {
    pub name: String,
    pub density: f64,
    pub strength: f64,
    pub cost: f64,

    /// Categorical toughness rating.
    #[serde(default)]
    pub toughness: Option<ToughnessClass>,

    /// Measured fracture toughness, Pa·√m. Mutually exclusive with
    /// `toughness`.
    #[serde(default)]
    pub fracture_toughness: Option<f64>,

    #[serde(default)]
    pub modulus: Option<f64>,

    #[serde(default)]
    pub thermal_conductivity: Option<f64>,

    #[serde(default)]
    pub specific_heat: Option<f64>,

    #[serde(default)]
    pub thermal_expansion: Option<f64>,
}

impl MaterialConfig {
    /// Builds the validated record.
    pub fn record(&self) -> Result<MaterialRecord, ConfigError> {
        let mut builder = MaterialRecord::builder(&self.name, self.density, self.strength, self.cost);
        match (self.toughness, self.fracture_toughness) {
            (Some(_), Some(_)) => {
                return Err(ConfigError::Invalid(format!(
                    "material '{}' sets both toughness and fracture_toughness",
                    self.name
                )));
            }
            (Some(class), None) => builder = builder.toughness_class(class),
            (None, Some(k1c)) => builder = builder.fracture_toughness(k1c),
            (None, None) => {}
        }
        if let Some(v) = self.modulus {
            builder = builder.modulus(v);
        }
        if let Some(v) = self.thermal_conductivity {
            builder = builder.thermal_conductivity(v);
        }
        if let Some(v) = self.specific_heat {
            builder = builder.specific_heat(v);
        }
        if let Some(v) = self.thermal_expansion {
            builder = builder.thermal_expansion(v);
        }
        Ok(builder.build()?)
    }
}

/// One named constraint in configuration form.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ConstraintConfig {
    pub name: String,
    pub attribute: Attribute,
    pub comparator: Comparator,
    pub threshold: f64,
}

/// One weighted criterion in configuration form.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CriterionConfig {
    pub name: String,
    pub weight: f64,
    pub source: SourceConfig,
    pub normalization: NormalizationConfig,
}

/// Criterion value source in configuration form.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceConfig {
    /// A numeric record attribute, e.g. `source = { attribute = "cost" }`.
    Attribute(Attribute),
    /// `source = "specific_strength"`.
    SpecificStrength,
    /// `source = "thermal_shock_resistance"`.
    ThermalShockResistance,
    /// Ordinal mapping for categorical toughness, e.g.
    /// `source = { toughness_rating = { brittle = 0.5, moderate = 0.7, good = 1.0 } }`.
    ToughnessRating(OrdinalMapConfig),
}

impl SourceConfig {
    fn value_source(&self) -> ValueSource {
        match self {
            SourceConfig::Attribute(a) => ValueSource::Attribute(*a),
            SourceConfig::SpecificStrength => ValueSource::SpecificStrength,
            SourceConfig::ThermalShockResistance => ValueSource::ThermalShockResistance,
            SourceConfig::ToughnessRating(map) => ValueSource::ToughnessRating(map.ordinal_map()),
        }
    }
}

/// Ordinal values per toughness class; omitted classes stay unmapped.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct OrdinalMapConfig {
    #[serde(default)]
    pub brittle: Option<f64>,
    #[serde(default)]
    pub moderate: Option<f64>,
    #[serde(default)]
    pub good: Option<f64>,
}

impl OrdinalMapConfig {
    fn ordinal_map(&self) -> OrdinalMap {
        let mut map = OrdinalMap::default();
        if let Some(v) = self.brittle {
            map = map.with(ToughnessClass::Brittle, v);
        }
        if let Some(v) = self.moderate {
            map = map.with(ToughnessClass::Moderate, v);
        }
        if let Some(v) = self.good {
            map = map.with(ToughnessClass::Good, v);
        }
        map
    }
}

/// Normalization in configuration form.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationConfig {
    /// `normalization = { reference = 400000.0 }`.
    Reference(f64),
    /// `normalization = { range = { lo = 50.0, hi = 0.0 } }`.
    Range { lo: f64, hi: f64 },
}

impl NormalizationConfig {
    fn normalization(&self) -> Normalization {
        match *self {
            NormalizationConfig::Reference(reference) => Normalization::Reference(reference),
            NormalizationConfig::Range { lo, hi } => Normalization::Range { lo, hi },
        }
    }
}

#[cfg(test)]
mod tests;
