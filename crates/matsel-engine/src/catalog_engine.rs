//! Catalog-backed reference engine.

use matsel_core::{MaterialCatalog, Toughness};

use crate::client::{DropResult, EngineError, Identification, NumericsEngine};
use crate::properties::PropertyMap;

/// Standard gravity, m/s².
const STANDARD_GRAVITY: f64 = 9.80665;

/// Relative density tolerance for identification.
const IDENTIFY_TOLERANCE: f64 = 0.2;

/// A local [`NumericsEngine`] backed by a material catalog and a fixed
/// physical-constants table. Useful as a test double and for demos that
/// should run without the external engine installed.
///
/// # Example
///
/// ```
/// use matsel_core::MaterialCatalog;
/// use matsel_engine::{CatalogEngine, NumericsEngine};
///
/// let engine = CatalogEngine::new(MaterialCatalog::builtin());
/// assert_eq!(engine.constant("g").unwrap(), 9.80665);
///
/// let guess = engine.identify(2815.0).unwrap().unwrap();
/// assert_eq!(guess.material, "aluminum_7075");
/// assert!(guess.confidence > 99.0);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogEngine {
    catalog: MaterialCatalog,
}

impl CatalogEngine {
    /// Wraps a catalog.
    pub fn new(catalog: MaterialCatalog) -> Self {
        Self { catalog }
    }

    /// The backing catalog.
    pub fn catalog(&self) -> &MaterialCatalog {
        &self.catalog
    }
}

impl NumericsEngine for CatalogEngine {
    fn constant(&self, name: &str) -> Result<f64, EngineError> {
        match name {
            "g" => Ok(STANDARD_GRAVITY),
            "c" => Ok(299_792_458.0),
            "R" => Ok(8.314_462_618),
            "N_A" => Ok(6.022_140_76e23),
            "k_B" => Ok(1.380_649e-23),
            "h" => Ok(6.626_070_15e-34),
            "sigma" => Ok(5.670_374_419e-8),
            _ => Err(EngineError::UnknownConstant(name.to_string())),
        }
    }

    fn material(&self, name: &str) -> Result<PropertyMap, EngineError> {
        let record = self
            .catalog
            .get(name)
            .map_err(|_| EngineError::UnknownMaterial(name.to_string()))?;
        let mut payload = PropertyMap::new()
            .with_number("density", record.density())
            .with_number("strength", record.strength())
            .with_number("cost", record.cost());
        match record.toughness() {
            Some(Toughness::Fracture(k1c)) => payload = payload.with_number("toughness", k1c),
            Some(Toughness::Class(class)) => {
                payload = payload.with_text("toughness", class.to_string())
            }
            None => {}
        }
        if let Some(v) = record.modulus() {
            payload = payload.with_number("modulus", v);
        }
        if let Some(v) = record.thermal_conductivity() {
            payload = payload.with_number("thermal_conductivity", v);
        }
        if let Some(v) = record.specific_heat() {
            payload = payload.with_number("specific_heat", v);
        }
        if let Some(v) = record.thermal_expansion() {
            payload = payload.with_number("thermal_expansion", v);
        }
        Ok(payload)
    }

    fn drop_test(&self, height: f64) -> Result<DropResult, EngineError> {
        if !(height.is_finite() && height > 0.0) {
            return Err(EngineError::InvalidArgument {
                operation: "drop",
                value: height,
            });
        }
        let time = (2.0 * height / STANDARD_GRAVITY).sqrt();
        Ok(DropResult {
            time,
            velocity: STANDARD_GRAVITY * time,
        })
    }

    fn identify(&self, density: f64) -> Result<Option<Identification>, EngineError> {
        if !(density.is_finite() && density > 0.0) {
            return Err(EngineError::InvalidArgument {
                operation: "identify",
                value: density,
            });
        }
        let mut best: Option<Identification> = None;
        for record in self.catalog.iter() {
            let tolerance = record.density() * IDENTIFY_TOLERANCE;
            let diff = (record.density() - density).abs();
            if diff > tolerance {
                continue;
            }
            let confidence = (1.0 - diff / tolerance) * 100.0;
            if best.as_ref().map_or(true, |b| confidence > b.confidence) {
                best = Some(Identification {
                    material: record.name().to_string(),
                    confidence,
                });
            }
        }
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::record_from_properties;
    use matsel_test::aerospace_catalog;

    fn engine() -> CatalogEngine {
        CatalogEngine::new(aerospace_catalog())
    }

    #[test]
    fn test_unknown_constant() {
        assert_eq!(
            engine().constant("planck_length").unwrap_err(),
            EngineError::UnknownConstant("planck_length".to_string())
        );
    }

    #[test]
    fn test_material_payload_rebuilds_record() {
        let engine = engine();
        let payload = engine.material("steel_4340").unwrap();
        let record = record_from_properties("steel_4340", &payload).unwrap();
        assert_eq!(record, *engine.catalog().get("steel_4340").unwrap());
    }

    #[test]
    fn test_unknown_material() {
        assert!(matches!(
            engine().material("unobtainium"),
            Err(EngineError::UnknownMaterial(_))
        ));
    }

    #[test]
    fn test_drop_kinematics() {
        let result = engine().drop_test(20.0).unwrap();
        // t = sqrt(2·20/9.80665) ≈ 2.0196 s, v = g·t ≈ 19.81 m/s
        assert!((result.time - 2.0196).abs() < 1e-3);
        assert!((result.velocity - 19.81).abs() < 1e-2);
    }

    #[test]
    fn test_drop_rejects_non_positive_height() {
        assert!(engine().drop_test(0.0).is_err());
        assert!(engine().drop_test(-3.0).is_err());
    }

    #[test]
    fn test_identify_exact_density() {
        let guess = engine().identify(7850.0).unwrap().unwrap();
        assert_eq!(guess.material, "steel_4340");
        assert!((guess.confidence - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_identify_nothing_close() {
        // An order of magnitude denser than anything in the catalog.
        assert_eq!(engine().identify(60_000.0).unwrap(), None);
    }

    #[test]
    fn test_identify_rejects_non_positive_density() {
        assert!(engine().identify(-1.0).is_err());
    }
}
