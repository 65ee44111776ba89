//! Constraint evaluation over a catalog.
//!
//! Every constraint is checked for every material; violations are collected
//! rather than short-circuited, because relaxation guidance needs every
//! failure reason, not just the first.

use rayon::prelude::*;
use tracing::debug;

use matsel_core::{ConstraintSet, MaterialCatalog, MaterialRecord};

use crate::report::{EvaluationReport, MaterialEvaluation, Violation, ViolationReason};

/// Evaluates every material in the catalog against every constraint.
///
/// The report preserves catalog order; violations within a material follow
/// constraint-set order. An attribute absent on a record is reported as a
/// [`ViolationReason::MissingAttribute`] violation, never silently skipped.
///
/// # Example
///
/// ```
/// use matsel_core::{Attribute, Constraint, ConstraintSet, MaterialCatalog, MaterialRecord};
/// use matsel_scoring::evaluate;
///
/// let catalog = MaterialCatalog::new(vec![
///     MaterialRecord::new("aluminum_7075", 2810.0, 505e6, 5.0).unwrap(),
///     MaterialRecord::new("titanium_6al4v", 4430.0, 880e6, 25.0).unwrap(),
/// ])
/// .unwrap();
/// let constraints = ConstraintSet::new()
///     .with("max_cost", Constraint::at_most(Attribute::Cost, 10.0));
///
/// let report = evaluate(&catalog, &constraints);
/// assert!(report.passed("aluminum_7075"));
/// assert!(!report.passed("titanium_6al4v"));
/// ```
pub fn evaluate(catalog: &MaterialCatalog, constraints: &ConstraintSet) -> EvaluationReport {
    let entries: Vec<MaterialEvaluation> = catalog
        .all()
        .par_iter()
        .map(|material| evaluate_material(material, constraints))
        .collect();
    let report = EvaluationReport::new(entries);
    debug!(
        materials = catalog.len(),
        constraints = constraints.len(),
        feasible = report.feasible_count(),
        "constraint evaluation complete"
    );
    report
}

fn evaluate_material(material: &MaterialRecord, constraints: &ConstraintSet) -> MaterialEvaluation {
    let mut violations = Vec::new();
    for (name, constraint) in constraints.iter() {
        match material.numeric(constraint.attribute) {
            Some(actual) => {
                if !constraint.satisfied_by(actual) {
                    violations.push(Violation {
                        constraint: name.to_string(),
                        reason: ViolationReason::Gap(constraint.gap(actual)),
                    });
                }
            }
            None => violations.push(Violation {
                constraint: name.to_string(),
                reason: ViolationReason::MissingAttribute,
            }),
        }
    }
    MaterialEvaluation {
        material: material.name().to_string(),
        passed: violations.is_empty(),
        violations,
    }
}

/// Feasible materials sorted descending by a caller-supplied key.
///
/// Only materials passing every constraint are returned. The sort is
/// stable, so equal keys keep catalog order.
///
/// # Example
///
/// ```
/// use matsel_core::{ConstraintSet, MaterialCatalog, MaterialRecord};
/// use matsel_scoring::rank_feasible;
///
/// let catalog = MaterialCatalog::new(vec![
///     MaterialRecord::new("steel_4340", 7850.0, 860e6, 3.0).unwrap(),
///     MaterialRecord::new("aluminum_7075", 2810.0, 505e6, 5.0).unwrap(),
/// ])
/// .unwrap();
///
/// // No constraints: rank the whole catalog by specific strength.
/// let ranked = rank_feasible(&catalog, &ConstraintSet::new(), |m| m.specific_strength());
/// assert_eq!(ranked[0].name(), "aluminum_7075");
/// ```
pub fn rank_feasible<'a, K>(
    catalog: &'a MaterialCatalog,
    constraints: &ConstraintSet,
    key: K,
) -> Vec<&'a MaterialRecord>
where
    K: Fn(&MaterialRecord) -> f64,
{
    let report = evaluate(catalog, constraints);
    let mut feasible: Vec<&MaterialRecord> = catalog
        .iter()
        .filter(|m| report.passed(m.name()))
        .collect();
    feasible.sort_by(|a, b| key(b).total_cmp(&key(a)));
    feasible
}

#[cfg(test)]
mod tests {
    use super::*;
    use matsel_core::{Attribute, Constraint};
    use matsel_test::{aerospace_catalog, airframe_constraints, drone_arm_catalog};

    #[test]
    fn test_airframe_shortlist_feasible_set() {
        let report = evaluate(&aerospace_catalog(), &airframe_constraints());
        assert_eq!(report.feasible(), vec!["aluminum_7075"]);
    }

    #[test]
    fn test_violations_are_complete() {
        let report = evaluate(&aerospace_catalog(), &airframe_constraints());

        // Steel fails density only.
        let steel = report.get("steel_4340").unwrap();
        assert_eq!(steel.violations.len(), 1);
        assert_eq!(steel.violations[0].constraint, "max_density");
        assert_eq!(steel.violations[0].reason, ViolationReason::Gap(2850.0));

        // Titanium fails cost only.
        let ti = report.get("titanium_6al4v").unwrap();
        assert_eq!(ti.violations.len(), 1);
        assert_eq!(ti.violations[0].reason, ViolationReason::Gap(15.0));

        // Aluminum 6061 fails strength only: 124 MPa short.
        let al = report.get("aluminum_6061").unwrap();
        assert_eq!(al.violations.len(), 1);
        assert_eq!(al.violations[0].constraint, "min_strength");
        assert_eq!(al.violations[0].reason, ViolationReason::Gap(124e6));
    }

    #[test]
    fn test_every_failure_reported_not_just_first() {
        // Tighten all three constraints so titanium fails all of them.
        let constraints = ConstraintSet::new()
            .with("min_strength", Constraint::at_least(Attribute::Strength, 900e6))
            .with("max_density", Constraint::at_most(Attribute::Density, 3000.0))
            .with("max_cost", Constraint::at_most(Attribute::Cost, 5.0));
        let report = evaluate(&aerospace_catalog(), &constraints);
        let ti = report.get("titanium_6al4v").unwrap();
        assert_eq!(ti.violations.len(), 3);
        let order: Vec<_> = ti.violations.iter().map(|v| v.constraint.as_str()).collect();
        assert_eq!(order, vec!["min_strength", "max_density", "max_cost"]);
    }

    #[test]
    fn test_missing_attribute_is_violation() {
        // The aerospace fixture records carry no modulus.
        let constraints =
            ConstraintSet::new().with("min_modulus", Constraint::at_least(Attribute::Modulus, 70e9));
        let report = evaluate(&aerospace_catalog(), &constraints);
        for entry in report.iter() {
            assert!(!entry.passed);
            assert_eq!(entry.violations[0].reason, ViolationReason::MissingAttribute);
        }
    }

    #[test]
    fn test_categorical_toughness_has_no_numeric_value() {
        let constraints = ConstraintSet::new()
            .with("min_toughness", Constraint::at_least(Attribute::Toughness, 20e6));
        let report = evaluate(&drone_arm_catalog(), &constraints);
        // All three fixture materials are rated, not measured.
        assert_eq!(report.feasible_count(), 0);
        assert_eq!(
            report.get("carbon_fiber").unwrap().violations[0].reason,
            ViolationReason::MissingAttribute
        );
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let catalog = aerospace_catalog();
        let constraints = airframe_constraints();
        assert_eq!(
            evaluate(&catalog, &constraints),
            evaluate(&catalog, &constraints)
        );
    }

    #[test]
    fn test_empty_constraint_set_passes_everything() {
        let report = evaluate(&aerospace_catalog(), &ConstraintSet::new());
        assert_eq!(report.feasible_count(), 5);
    }

    #[test]
    fn test_rank_feasible_by_specific_strength() {
        // Relax the cost cap so titanium joins aluminum 7075.
        let mut constraints = airframe_constraints();
        constraints.set_threshold("max_cost", 25.0);
        let catalog = aerospace_catalog();
        let ranked = rank_feasible(&catalog, &constraints, |m| m.specific_strength());
        let names: Vec<_> = ranked.iter().map(|m| m.name()).collect();
        // Titanium: 880e6/4430 ≈ 198.6 kPa·m³/kg beats 7075's ≈ 179.7.
        assert_eq!(names, vec!["titanium_6al4v", "aluminum_7075"]);
    }

    #[test]
    fn test_rank_feasible_ties_keep_catalog_order() {
        let catalog = aerospace_catalog();
        let ranked = rank_feasible(&catalog, &ConstraintSet::new(), |_| 1.0);
        let names: Vec<_> = ranked.iter().map(|m| m.name()).collect();
        assert_eq!(
            names,
            vec![
                "aluminum_7075",
                "steel_4340",
                "titanium_6al4v",
                "aluminum_6061",
                "magnesium_az31"
            ]
        );
    }
}
