//! Tests for selection configuration.

use super::*;

const AIRFRAME_TOML: &str = r#"
    [[materials]]
    name = "aluminum_7075"
    density = 2810.0
    strength = 505e6
    cost = 5.0
    toughness = "moderate"

    [[materials]]
    name = "steel_4340"
    density = 7850.0
    strength = 860e6
    cost = 3.0
    fracture_toughness = 50e6

    [[constraints]]
    name = "min_strength"
    attribute = "strength"
    comparator = "at_least"
    threshold = 400e6

    [[constraints]]
    name = "max_density"
    attribute = "density"
    comparator = "at_most"
    threshold = 5000.0

    [[criteria]]
    name = "specific_strength"
    weight = 0.7
    source = "specific_strength"
    normalization = { reference = 400000.0 }

    [[criteria]]
    name = "cost"
    weight = 0.1
    source = { attribute = "cost" }
    normalization = { range = { lo = 50.0, hi = 0.0 } }

    [[criteria]]
    name = "toughness"
    weight = 0.2
    source = { toughness_rating = { brittle = 0.5, moderate = 0.7, good = 1.0 } }
    normalization = { reference = 1.0 }
"#;

#[test]
fn test_toml_parsing() {
    let config = SelectionConfig::from_toml_str(AIRFRAME_TOML).unwrap();
    assert_eq!(config.materials.len(), 2);
    assert_eq!(config.constraints.len(), 2);
    assert_eq!(config.criteria.len(), 3);

    let catalog = config.catalog().unwrap();
    let steel = catalog.get("steel_4340").unwrap();
    assert_eq!(
        steel.toughness(),
        Some(matsel_core::Toughness::Fracture(50e6))
    );
}

#[test]
fn test_constraint_order_preserved() {
    let config = SelectionConfig::from_toml_str(AIRFRAME_TOML).unwrap();
    let set = config.constraint_set();
    let names: Vec<_> = set.iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["min_strength", "max_density"]);
    assert_eq!(set.get("max_density").unwrap().comparator, Comparator::AtMost);
}

#[test]
fn test_criteria_conversion() {
    let config = SelectionConfig::from_toml_str(AIRFRAME_TOML).unwrap();
    let criteria = config.criteria_set();
    let first = criteria.iter().next().unwrap();
    assert_eq!(first.name, "specific_strength");
    assert_eq!(first.normalization, Normalization::Reference(400_000.0));
    assert_eq!(first.source, ValueSource::SpecificStrength);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        materials:
          - name: titanium_6al4v
            density: 4430.0
            strength: 8.8e8
            cost: 25.0
        constraints:
          - name: max_cost
            attribute: cost
            comparator: at_most
            threshold: 10.0
        criteria:
          - name: cheap
            weight: 1.0
            source:
              attribute: cost
            normalization:
              range:
                lo: 50.0
                hi: 0.0
    "#;

    let config = SelectionConfig::from_yaml_str(yaml).unwrap();
    let catalog = config.catalog().unwrap();
    assert_eq!(catalog.get("titanium_6al4v").unwrap().strength(), 8.8e8);
    assert_eq!(config.constraint_set().len(), 1);
    assert_eq!(config.criteria_set().len(), 1);
}

#[test]
fn test_duplicate_material_rejected() {
    let toml = r#"
        [[materials]]
        name = "aluminum_7075"
        density = 2810.0
        strength = 505e6
        cost = 5.0

        [[materials]]
        name = "aluminum_7075"
        density = 2810.0
        strength = 505e6
        cost = 5.0
    "#;
    let config = SelectionConfig::from_toml_str(toml).unwrap();
    assert!(matches!(
        config.catalog(),
        Err(ConfigError::Catalog(CatalogError::DuplicateName(_)))
    ));
}

#[test]
fn test_conflicting_toughness_rejected() {
    let toml = r#"
        [[materials]]
        name = "carbon_fiber"
        density = 1600.0
        strength = 600e6
        cost = 40.0
        toughness = "brittle"
        fracture_toughness = 10e6
    "#;
    let config = SelectionConfig::from_toml_str(toml).unwrap();
    assert!(matches!(config.catalog(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_invalid_property_rejected() {
    let toml = r#"
        [[materials]]
        name = "void"
        density = -1.0
        strength = 1e6
        cost = 1.0
    "#;
    let config = SelectionConfig::from_toml_str(toml).unwrap();
    assert!(matches!(config.catalog(), Err(ConfigError::Material(_))));
}

#[test]
fn test_empty_config() {
    let config = SelectionConfig::from_toml_str("").unwrap();
    assert!(config.catalog().unwrap().is_empty());
    assert!(config.constraint_set().is_empty());
    assert!(config.criteria_set().is_empty());
}
