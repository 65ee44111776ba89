//! Structured material payloads.
//!
//! The original demos parsed the engine's text output with ad hoc string
//! handling; the boundary here returns typed values instead, and
//! [`record_from_properties`] turns a payload into a validated
//! [`MaterialRecord`] without any text scraping.

use serde::{Deserialize, Serialize};

use matsel_core::{MaterialRecord, ToughnessClass};

use crate::client::EngineError;

/// One property value of an engine payload.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Numeric property, SI units.
    Number(f64),
    /// Categorical property, e.g. a toughness rating.
    Text(String),
}

/// An ordered name → value payload for one material.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PropertyMap {
    entries: Vec<(String, PropertyValue)>,
}

impl PropertyMap {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a numeric property, builder style.
    pub fn with_number(mut self, name: impl Into<String>, value: f64) -> Self {
        self.entries.push((name.into(), PropertyValue::Number(value)));
        self
    }

    /// Adds a categorical property, builder style.
    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((name.into(), PropertyValue::Text(value.into())));
        self
    }

    /// Looks up a property by name.
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Numeric value of a property, if present and numeric.
    pub fn number(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Some(PropertyValue::Number(v)) => Some(*v),
            _ => None,
        }
    }

    /// Iterates `(name, value)` pairs in payload order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

/// Builds a validated record from an engine payload.
///
/// `density`, `strength`, and `cost` are required numbers; `modulus`,
/// `thermal_conductivity`, `specific_heat`, and `thermal_expansion` are
/// optional numbers; `toughness` may be a number (measured K1c) or one of
/// the rating strings `brittle`/`moderate`/`good`.
///
/// # Example
///
/// ```
/// use matsel_engine::{record_from_properties, PropertyMap};
///
/// let payload = PropertyMap::new()
///     .with_number("density", 2810.0)
///     .with_number("strength", 505e6)
///     .with_number("cost", 5.0)
///     .with_text("toughness", "moderate");
/// let record = record_from_properties("aluminum_7075", &payload).unwrap();
/// assert_eq!(record.density(), 2810.0);
/// ```
pub fn record_from_properties(
    name: &str,
    properties: &PropertyMap,
) -> Result<MaterialRecord, EngineError> {
    let density = required(name, properties, "density")?;
    let strength = required(name, properties, "strength")?;
    let cost = required(name, properties, "cost")?;

    let mut builder = MaterialRecord::builder(name, density, strength, cost);
    if let Some(v) = properties.number("modulus") {
        builder = builder.modulus(v);
    }
    if let Some(v) = properties.number("thermal_conductivity") {
        builder = builder.thermal_conductivity(v);
    }
    if let Some(v) = properties.number("specific_heat") {
        builder = builder.specific_heat(v);
    }
    if let Some(v) = properties.number("thermal_expansion") {
        builder = builder.thermal_expansion(v);
    }
    match properties.get("toughness") {
        Some(PropertyValue::Number(k1c)) => builder = builder.fracture_toughness(*k1c),
        Some(PropertyValue::Text(rating)) => {
            let class = match rating.as_str() {
                "brittle" => ToughnessClass::Brittle,
                "moderate" => ToughnessClass::Moderate,
                "good" => ToughnessClass::Good,
                other => {
                    return Err(EngineError::InvalidProperty {
                        material: name.to_string(),
                        property: format!("toughness '{other}'"),
                    });
                }
            };
            builder = builder.toughness_class(class);
        }
        None => {}
    }
    Ok(builder.build()?)
}

fn required(name: &str, properties: &PropertyMap, property: &'static str) -> Result<f64, EngineError> {
    match properties.get(property) {
        Some(PropertyValue::Number(v)) => Ok(*v),
        Some(PropertyValue::Text(_)) => Err(EngineError::InvalidProperty {
            material: name.to_string(),
            property: property.to_string(),
        }),
        None => Err(EngineError::MissingProperty {
            material: name.to_string(),
            property,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matsel_core::Toughness;

    #[test]
    fn test_full_payload_round_trip() {
        let payload = PropertyMap::new()
            .with_number("density", 7850.0)
            .with_number("strength", 860e6)
            .with_number("cost", 3.0)
            .with_number("toughness", 50e6)
            .with_number("modulus", 205e9);
        let record = record_from_properties("steel_4340", &payload).unwrap();
        assert_eq!(record.toughness(), Some(Toughness::Fracture(50e6)));
        assert_eq!(record.modulus(), Some(205e9));
    }

    #[test]
    fn test_missing_required_property() {
        let payload = PropertyMap::new().with_number("density", 2700.0);
        let err = record_from_properties("aluminum_6061", &payload).unwrap_err();
        assert_eq!(
            err,
            EngineError::MissingProperty {
                material: "aluminum_6061".to_string(),
                property: "strength",
            }
        );
    }

    #[test]
    fn test_unrecognized_toughness_rating() {
        let payload = PropertyMap::new()
            .with_number("density", 1600.0)
            .with_number("strength", 600e6)
            .with_number("cost", 40.0)
            .with_text("toughness", "squishy");
        assert!(record_from_properties("carbon_fiber", &payload).is_err());
    }

    #[test]
    fn test_invalid_value_propagates_validation() {
        let payload = PropertyMap::new()
            .with_number("density", -1.0)
            .with_number("strength", 1e6)
            .with_number("cost", 1.0);
        let err = record_from_properties("antimatter", &payload).unwrap_err();
        assert!(matches!(err, EngineError::Material(_)));
    }
}
