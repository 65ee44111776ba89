//! Immutable material records.
//!
//! A [`MaterialRecord`] holds the physical and economic properties of one
//! candidate material, validated at construction. All values are SI:
//! density in kg/m³, strength and modulus in Pa, cost in currency/kg,
//! thermal conductivity in W/(m·K), specific heat in J/(kg·K), thermal
//! expansion in 1/K.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MaterialError;

/// Attribute keys for uniform numeric access to record properties.
///
/// # Example
///
/// ```
/// use matsel_core::{Attribute, MaterialRecord};
///
/// let mat = MaterialRecord::new("steel_4340", 7850.0, 860e6, 3.0).unwrap();
/// assert_eq!(mat.numeric(Attribute::Density), Some(7850.0));
/// assert_eq!(mat.numeric(Attribute::Modulus), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Mass density, kg/m³.
    Density,
    /// Yield/tensile strength, Pa.
    Strength,
    /// Cost per kilogram.
    Cost,
    /// Fracture toughness, Pa·√m (numeric only when measured, not rated).
    Toughness,
    /// Young's modulus, Pa.
    Modulus,
    /// Thermal conductivity, W/(m·K).
    ThermalConductivity,
    /// Specific heat capacity, J/(kg·K).
    SpecificHeat,
    /// Coefficient of thermal expansion, 1/K. May be negative.
    ThermalExpansion,
}

impl Attribute {
    /// Snake-case name used in configuration files and messages.
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Density => "density",
            Attribute::Strength => "strength",
            Attribute::Cost => "cost",
            Attribute::Toughness => "toughness",
            Attribute::Modulus => "modulus",
            Attribute::ThermalConductivity => "thermal_conductivity",
            Attribute::SpecificHeat => "specific_heat",
            Attribute::ThermalExpansion => "thermal_expansion",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Qualitative toughness rating used by datasheets without K1c values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToughnessClass {
    Brittle,
    Moderate,
    Good,
}

impl fmt::Display for ToughnessClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ToughnessClass::Brittle => "brittle",
            ToughnessClass::Moderate => "moderate",
            ToughnessClass::Good => "good",
        };
        f.write_str(s)
    }
}

/// Toughness is either a measured fracture toughness or a categorical rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Toughness {
    /// Measured fracture toughness K1c, Pa·√m.
    Fracture(f64),
    /// Categorical rating; scoring requires an explicit ordinal mapping.
    Class(ToughnessClass),
}

/// One candidate material with fixed properties.
///
/// Records are immutable once built; construct them through
/// [`MaterialRecord::new`] or [`MaterialRecord::builder`].
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialRecord {
    name: String,
    density: f64,
    strength: f64,
    cost: f64,
    toughness: Option<Toughness>,
    modulus: Option<f64>,
    thermal_conductivity: Option<f64>,
    specific_heat: Option<f64>,
    thermal_expansion: Option<f64>,
}

impl MaterialRecord {
    /// Creates a record with the three mandatory properties only.
    pub fn new(
        name: impl Into<String>,
        density: f64,
        strength: f64,
        cost: f64,
    ) -> Result<Self, MaterialError> {
        Self::builder(name, density, strength, cost).build()
    }

    /// Starts a builder for a record with optional properties.
    ///
    /// # Example
    ///
    /// ```
    /// use matsel_core::{MaterialRecord, ToughnessClass};
    ///
    /// let mat = MaterialRecord::builder("aluminum_7075", 2810.0, 505e6, 5.0)
    ///     .toughness_class(ToughnessClass::Moderate)
    ///     .modulus(71.7e9)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(mat.name(), "aluminum_7075");
    /// ```
    pub fn builder(
        name: impl Into<String>,
        density: f64,
        strength: f64,
        cost: f64,
    ) -> MaterialRecordBuilder {
        MaterialRecordBuilder {
            record: MaterialRecord {
                name: name.into(),
                density,
                strength,
                cost,
                toughness: None,
                modulus: None,
                thermal_conductivity: None,
                specific_heat: None,
                thermal_expansion: None,
            },
        }
    }

    /// Unique name within a catalog.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mass density, kg/m³.
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Yield/tensile strength, Pa.
    pub fn strength(&self) -> f64 {
        self.strength
    }

    /// Cost per kilogram.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Toughness, measured or rated, if known.
    pub fn toughness(&self) -> Option<Toughness> {
        self.toughness
    }

    /// Young's modulus, Pa, if known.
    pub fn modulus(&self) -> Option<f64> {
        self.modulus
    }

    /// Thermal conductivity, W/(m·K), if known.
    pub fn thermal_conductivity(&self) -> Option<f64> {
        self.thermal_conductivity
    }

    /// Specific heat capacity, J/(kg·K), if known.
    pub fn specific_heat(&self) -> Option<f64> {
        self.specific_heat
    }

    /// Coefficient of thermal expansion, 1/K, if known.
    pub fn thermal_expansion(&self) -> Option<f64> {
        self.thermal_expansion
    }

    /// Numeric value of an attribute, if the record carries one.
    ///
    /// A categorical toughness rating has no numeric value; constraints on
    /// [`Attribute::Toughness`] only see measured fracture toughness.
    pub fn numeric(&self, attribute: Attribute) -> Option<f64> {
        match attribute {
            Attribute::Density => Some(self.density),
            Attribute::Strength => Some(self.strength),
            Attribute::Cost => Some(self.cost),
            Attribute::Toughness => match self.toughness {
                Some(Toughness::Fracture(k1c)) => Some(k1c),
                _ => None,
            },
            Attribute::Modulus => self.modulus,
            Attribute::ThermalConductivity => self.thermal_conductivity,
            Attribute::SpecificHeat => self.specific_heat,
            Attribute::ThermalExpansion => self.thermal_expansion,
        }
    }

    /// Strength divided by density, Pa·m³/kg. A strength-to-weight metric.
    pub fn specific_strength(&self) -> f64 {
        self.strength / self.density
    }
}

/// Builder for [`MaterialRecord`]; validates all values on `build`.
#[derive(Debug, Clone)]
pub struct MaterialRecordBuilder {
    record: MaterialRecord,
}

impl MaterialRecordBuilder {
    /// Sets a measured fracture toughness, Pa·√m.
    pub fn fracture_toughness(mut self, k1c: f64) -> Self {
        self.record.toughness = Some(Toughness::Fracture(k1c));
        self
    }

    /// Sets a categorical toughness rating.
    pub fn toughness_class(mut self, class: ToughnessClass) -> Self {
        self.record.toughness = Some(Toughness::Class(class));
        self
    }

    /// Sets Young's modulus, Pa.
    pub fn modulus(mut self, modulus: f64) -> Self {
        self.record.modulus = Some(modulus);
        self
    }

    /// Sets thermal conductivity, W/(m·K).
    pub fn thermal_conductivity(mut self, k: f64) -> Self {
        self.record.thermal_conductivity = Some(k);
        self
    }

    /// Sets specific heat capacity, J/(kg·K).
    pub fn specific_heat(mut self, cp: f64) -> Self {
        self.record.specific_heat = Some(cp);
        self
    }

    /// Sets the coefficient of thermal expansion, 1/K.
    pub fn thermal_expansion(mut self, alpha: f64) -> Self {
        self.record.thermal_expansion = Some(alpha);
        self
    }

    /// Validates and returns the record.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::InvalidProperty`] for a non-finite value,
    /// a non-positive density or strength, or a negative cost, toughness,
    /// modulus, conductivity, or specific heat. Thermal expansion only has
    /// to be finite; some materials contract on heating.
    pub fn build(self) -> Result<MaterialRecord, MaterialError> {
        let r = self.record;
        if r.name.is_empty() {
            return Err(MaterialError::EmptyName);
        }
        Self::check(&r.name, Attribute::Density, r.density, true)?;
        Self::check(&r.name, Attribute::Strength, r.strength, true)?;
        Self::check_non_negative(&r.name, Attribute::Cost, r.cost)?;
        if let Some(Toughness::Fracture(k1c)) = r.toughness {
            Self::check_non_negative(&r.name, Attribute::Toughness, k1c)?;
        }
        if let Some(v) = r.modulus {
            Self::check_non_negative(&r.name, Attribute::Modulus, v)?;
        }
        if let Some(v) = r.thermal_conductivity {
            Self::check_non_negative(&r.name, Attribute::ThermalConductivity, v)?;
        }
        if let Some(v) = r.specific_heat {
            Self::check_non_negative(&r.name, Attribute::SpecificHeat, v)?;
        }
        if let Some(v) = r.thermal_expansion {
            if !v.is_finite() {
                return Err(MaterialError::InvalidProperty {
                    material: r.name,
                    attribute: Attribute::ThermalExpansion,
                    value: v,
                });
            }
        }
        Ok(r)
    }

    fn check(
        name: &str,
        attribute: Attribute,
        value: f64,
        strictly_positive: bool,
    ) -> Result<(), MaterialError> {
        let ok = value.is_finite() && if strictly_positive { value > 0.0 } else { value >= 0.0 };
        if ok {
            Ok(())
        } else {
            Err(MaterialError::InvalidProperty {
                material: name.to_string(),
                attribute,
                value,
            })
        }
    }

    fn check_non_negative(
        name: &str,
        attribute: Attribute,
        value: f64,
    ) -> Result<(), MaterialError> {
        Self::check(name, attribute, value, false)
    }
}
