//! Weighted criteria with explicit normalization.
//!
//! Raw engineering units differ by orders of magnitude across criteria
//! (Pa vs currency vs categorical ratings), so every criterion carries a
//! caller-supplied [`Normalization`]; there are no implicit divisors.

use matsel_core::{Attribute, MaterialRecord, Toughness, ToughnessClass};

use crate::error::ScoreError;

/// How a raw criterion value is brought onto a common scale.
///
/// # Example
///
/// ```
/// use matsel_scoring::Normalization;
///
/// // Specific strength scaled against a 400 kPa·m³/kg reference.
/// let by_reference = Normalization::Reference(400_000.0);
/// assert_eq!(by_reference.apply(200_000.0), 0.5);
///
/// // Cost rescaled into [0, 1] with cheaper = better: hi < lo inverts.
/// let cheaper_better = Normalization::Range { lo: 50.0, hi: 0.0 };
/// assert_eq!(cheaper_better.apply(40.0), 0.2);
/// assert_eq!(cheaper_better.apply(0.0), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalization {
    /// Divide by a reference constant.
    Reference(f64),
    /// Rescale linearly so `lo` maps to 0 and `hi` maps to 1.
    ///
    /// `hi < lo` inverts the scale, covering lower-is-better criteria.
    Range { lo: f64, hi: f64 },
}

impl Normalization {
    /// Applies the normalization to a raw value.
    pub fn apply(&self, value: f64) -> f64 {
        match *self {
            Normalization::Reference(reference) => value / reference,
            Normalization::Range { lo, hi } => (value - lo) / (hi - lo),
        }
    }
}

/// Ordinal values for categorical toughness ratings.
///
/// Scoring a class without an entry fails with
/// [`ScoreError::UnmappedCategory`]; a silent default would corrupt the
/// ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrdinalMap {
    brittle: Option<f64>,
    moderate: Option<f64>,
    good: Option<f64>,
}

impl OrdinalMap {
    /// A complete mapping for all three classes.
    pub fn new(brittle: f64, moderate: f64, good: f64) -> Self {
        Self {
            brittle: Some(brittle),
            moderate: Some(moderate),
            good: Some(good),
        }
    }

    /// Adds or replaces the entry for one class, builder style.
    pub fn with(mut self, class: ToughnessClass, value: f64) -> Self {
        match class {
            ToughnessClass::Brittle => self.brittle = Some(value),
            ToughnessClass::Moderate => self.moderate = Some(value),
            ToughnessClass::Good => self.good = Some(value),
        }
        self
    }

    /// Ordinal value for a class, if mapped.
    pub fn value(&self, class: ToughnessClass) -> Option<f64> {
        match class {
            ToughnessClass::Brittle => self.brittle,
            ToughnessClass::Moderate => self.moderate,
            ToughnessClass::Good => self.good,
        }
    }
}

/// Where a criterion's raw value comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueSource {
    /// A numeric attribute of the record.
    Attribute(Attribute),
    /// Strength divided by density, Pa·m³/kg.
    SpecificStrength,
    /// (strength × fracture toughness) / (modulus × thermal expansion).
    /// Higher is better. Requires a measured toughness.
    ThermalShockResistance,
    /// Categorical toughness mapped through an explicit ordinal table.
    ToughnessRating(OrdinalMap),
}

impl ValueSource {
    /// Extracts the raw value from a record.
    ///
    /// # Errors
    ///
    /// [`ScoreError::MissingAttribute`] when the record lacks a required
    /// attribute, [`ScoreError::UnmappedCategory`] when a toughness class
    /// has no ordinal entry.
    pub fn value(&self, material: &MaterialRecord) -> Result<f64, ScoreError> {
        match self {
            ValueSource::Attribute(attribute) => material.numeric(*attribute).ok_or_else(|| {
                ScoreError::MissingAttribute {
                    material: material.name().to_string(),
                    attribute: *attribute,
                }
            }),
            ValueSource::SpecificStrength => Ok(material.specific_strength()),
            ValueSource::ThermalShockResistance => {
                let k1c = match material.toughness() {
                    Some(Toughness::Fracture(k1c)) => k1c,
                    _ => {
                        return Err(missing(material, Attribute::Toughness));
                    }
                };
                let modulus = material
                    .modulus()
                    .ok_or_else(|| missing(material, Attribute::Modulus))?;
                let alpha = material
                    .thermal_expansion()
                    .ok_or_else(|| missing(material, Attribute::ThermalExpansion))?;
                Ok((material.strength() * k1c) / (modulus * alpha))
            }
            ValueSource::ToughnessRating(map) => match material.toughness() {
                Some(Toughness::Class(class)) => {
                    map.value(class).ok_or_else(|| ScoreError::UnmappedCategory {
                        material: material.name().to_string(),
                        class,
                    })
                }
                _ => Err(missing(material, Attribute::Toughness)),
            },
        }
    }
}

fn missing(material: &MaterialRecord, attribute: Attribute) -> ScoreError {
    ScoreError::MissingAttribute {
        material: material.name().to_string(),
        attribute,
    }
}

/// One weighted, normalized scoring criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct Criterion {
    /// Criterion name, for reporting.
    pub name: String,
    /// Non-negative, finite weight. Applied as given.
    pub weight: f64,
    /// Raw value source.
    pub source: ValueSource,
    /// Caller-supplied scale.
    pub normalization: Normalization,
}

impl Criterion {
    /// Creates a criterion.
    pub fn new(
        name: impl Into<String>,
        weight: f64,
        source: ValueSource,
        normalization: Normalization,
    ) -> Self {
        Self {
            name: name.into(),
            weight,
            source,
            normalization,
        }
    }
}

/// An ordered set of weighted criteria.
///
/// Weights are applied exactly as given; they need not sum to 1 and the
/// engine does not rescale them. Callers who want a weighted average own
/// the normalization of the weights themselves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CriteriaSet {
    criteria: Vec<Criterion>,
}

impl CriteriaSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a criterion, builder style.
    pub fn with(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    /// Iterates criteria in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Criterion> {
        self.criteria.iter()
    }

    /// Number of criteria.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// True if the set holds no criteria.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}
