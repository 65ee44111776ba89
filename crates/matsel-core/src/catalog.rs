//! Immutable, insertion-ordered material catalogs.

use std::collections::HashMap;

use crate::error::CatalogError;
use crate::material::{MaterialRecord, ToughnessClass};

/// A fixed table of material records with unique names.
///
/// Catalogs are built once and never mutated; every analysis is a pure
/// function over a catalog reference. Iteration order is insertion order,
/// which also serves as the deterministic tie-break order for rankings.
///
/// # Example
///
/// ```
/// use matsel_core::{MaterialCatalog, MaterialRecord};
///
/// let catalog = MaterialCatalog::new(vec![
///     MaterialRecord::new("aluminum_7075", 2810.0, 505e6, 5.0).unwrap(),
///     MaterialRecord::new("steel_4340", 7850.0, 860e6, 3.0).unwrap(),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get("steel_4340").unwrap().density(), 7850.0);
/// assert!(catalog.get("unobtainium").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MaterialCatalog {
    records: Vec<MaterialRecord>,
    index: HashMap<String, usize>,
}

impl MaterialCatalog {
    /// Builds a catalog from records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateName`] if two records share a name.
    /// No partial catalog is returned.
    pub fn new(records: Vec<MaterialRecord>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if index.insert(record.name().to_string(), i).is_some() {
                return Err(CatalogError::DuplicateName(record.name().to_string()));
            }
        }
        Ok(Self { records, index })
    }

    /// The engineering materials used across the worked examples.
    ///
    /// Property values follow the ASM/MMPDS figures of the original
    /// material database; materials without a measured fracture toughness
    /// carry a categorical rating instead.
    pub fn builtin() -> Self {
        let records = vec![
            MaterialRecord::builder("aluminum_6061", 2700.0, 276e6, 2.5)
                .fracture_toughness(29e6)
                .modulus(68.9e9)
                .thermal_conductivity(167.0)
                .specific_heat(896.0)
                .thermal_expansion(23.6e-6)
                .build(),
            MaterialRecord::builder("aluminum_7075", 2810.0, 505e6, 5.0)
                .toughness_class(ToughnessClass::Moderate)
                .modulus(71.7e9)
                .thermal_conductivity(130.0)
                .specific_heat(960.0)
                .thermal_expansion(23.4e-6)
                .build(),
            MaterialRecord::builder("mild_steel", 7850.0, 250e6, 0.8)
                .toughness_class(ToughnessClass::Good)
                .modulus(200e9)
                .thermal_conductivity(50.0)
                .specific_heat(490.0)
                .thermal_expansion(12e-6)
                .build(),
            MaterialRecord::builder("steel_4340", 7850.0, 860e6, 3.0)
                .fracture_toughness(50e6)
                .modulus(205e9)
                .thermal_conductivity(44.5)
                .specific_heat(475.0)
                .thermal_expansion(12.3e-6)
                .build(),
            MaterialRecord::builder("titanium_6al4v", 4430.0, 880e6, 25.0)
                .fracture_toughness(75e6)
                .modulus(113.8e9)
                .thermal_conductivity(6.7)
                .specific_heat(526.0)
                .thermal_expansion(8.6e-6)
                .build(),
            MaterialRecord::builder("magnesium_az31", 1740.0, 220e6, 7.0)
                .toughness_class(ToughnessClass::Moderate)
                .modulus(45e9)
                .thermal_conductivity(96.0)
                .specific_heat(1000.0)
                .thermal_expansion(26e-6)
                .build(),
            MaterialRecord::builder("carbon_fiber", 1600.0, 600e6, 40.0)
                .fracture_toughness(10e6)
                .modulus(70e9)
                .thermal_expansion(-0.5e-6)
                .build(),
            MaterialRecord::builder("fiberglass", 1850.0, 300e6, 15.0)
                .toughness_class(ToughnessClass::Good)
                .modulus(72e9)
                .build(),
            MaterialRecord::builder("copper", 8960.0, 70e6, 6.0)
                .toughness_class(ToughnessClass::Good)
                .modulus(117e9)
                .thermal_conductivity(385.0)
                .specific_heat(385.0)
                .thermal_expansion(16.5e-6)
                .build(),
        ];
        let records = records
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .expect("builtin material table is valid");
        Self::new(records).expect("builtin material names are unique")
    }

    /// Looks up a record by name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the name is absent.
    pub fn get(&self, name: &str) -> Result<&MaterialRecord, CatalogError> {
        self.index
            .get(name)
            .map(|&i| &self.records[i])
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    /// All records, in insertion order.
    pub fn all(&self) -> &[MaterialRecord] {
        &self.records
    }

    /// Records matching a predicate, in insertion order.
    pub fn filter<'a, P>(&'a self, predicate: P) -> Vec<&'a MaterialRecord>
    where
        P: Fn(&MaterialRecord) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).collect()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, MaterialRecord> {
        self.records.iter()
    }
}
