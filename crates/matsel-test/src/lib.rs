//! Shared test fixtures for matsel crates.
//!
//! This crate provides small, well-known catalogs and constraint sets used
//! across the workspace's tests. It depends only on `matsel-core` so every
//! other crate can consume it as a dev-dependency without cycles.
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! matsel-test = { workspace = true }
//! ```

use matsel_core::{
    Attribute, Constraint, ConstraintSet, MaterialCatalog, MaterialRecord, ToughnessClass,
};

/// Five aerospace alloys with strength, density, and cost.
///
/// The classic airframe shortlist: under the [`airframe_constraints`]
/// only aluminum 7075 is feasible (steel fails density, titanium fails
/// cost, aluminum 6061 and magnesium fail strength).
pub fn aerospace_catalog() -> MaterialCatalog {
    let records = vec![
        MaterialRecord::new("aluminum_7075", 2810.0, 505e6, 5.0),
        MaterialRecord::new("steel_4340", 7850.0, 860e6, 3.0),
        MaterialRecord::new("titanium_6al4v", 4430.0, 880e6, 25.0),
        MaterialRecord::new("aluminum_6061", 2700.0, 276e6, 2.5),
        MaterialRecord::new("magnesium_az31", 1740.0, 220e6, 7.0),
    ];
    build(records)
}

/// Four structural candidates used by the cost-sweep tests.
pub fn structural_catalog() -> MaterialCatalog {
    let records = vec![
        MaterialRecord::new("aluminum_6061", 2700.0, 276e6, 2.5),
        MaterialRecord::new("aluminum_7075", 2810.0, 505e6, 5.0),
        MaterialRecord::new("steel_4340", 7850.0, 860e6, 3.0),
        MaterialRecord::new("titanium_6al4v", 4430.0, 880e6, 25.0),
    ];
    build(records)
}

/// Quench-scenario materials with full thermal property sets.
///
/// Strength, modulus, fracture toughness, and expansion coefficients match
/// the thermal-shock worked example; steel has the best thermal shock
/// resistance parameter, glass the worst.
pub fn thermal_catalog() -> MaterialCatalog {
    let records = vec![
        MaterialRecord::builder("glass", 2500.0, 50e6, 1.0)
            .fracture_toughness(0.7e6)
            .modulus(70e9)
            .thermal_expansion(9e-6)
            .build(),
        MaterialRecord::builder("steel", 7850.0, 400e6, 0.8)
            .fracture_toughness(50e6)
            .modulus(200e9)
            .thermal_expansion(12e-6)
            .build(),
        MaterialRecord::builder("ceramic", 3900.0, 300e6, 10.0)
            .fracture_toughness(4e6)
            .modulus(300e9)
            .thermal_expansion(8e-6)
            .build(),
    ];
    let records = records
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .expect("thermal fixture records are valid");
    MaterialCatalog::new(records).expect("thermal fixture names are unique")
}

/// The drone-arm candidates with categorical toughness ratings.
pub fn drone_arm_catalog() -> MaterialCatalog {
    let records = vec![
        MaterialRecord::builder("carbon_fiber", 1600.0, 600e6, 40.0)
            .toughness_class(ToughnessClass::Brittle)
            .build(),
        MaterialRecord::builder("aluminum_7075", 2810.0, 505e6, 5.0)
            .toughness_class(ToughnessClass::Moderate)
            .build(),
        MaterialRecord::builder("fiberglass", 1850.0, 300e6, 15.0)
            .toughness_class(ToughnessClass::Good)
            .build(),
    ];
    let records = records
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .expect("drone-arm fixture records are valid");
    MaterialCatalog::new(records).expect("drone-arm fixture names are unique")
}

/// Airframe baseline: strength ≥ 400 MPa, density ≤ 5000 kg/m³, cost ≤ 10/kg.
pub fn airframe_constraints() -> ConstraintSet {
    ConstraintSet::new()
        .with("min_strength", Constraint::at_least(Attribute::Strength, 400e6))
        .with("max_density", Constraint::at_most(Attribute::Density, 5000.0))
        .with("max_cost", Constraint::at_most(Attribute::Cost, 10.0))
}

fn build(records: Vec<Result<MaterialRecord, matsel_core::MaterialError>>) -> MaterialCatalog {
    let records = records
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .expect("fixture records are valid");
    MaterialCatalog::new(records).expect("fixture names are unique")
}
