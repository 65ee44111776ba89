//! Weighted composite scoring.

use rayon::prelude::*;
use tracing::debug;

use matsel_core::{MaterialCatalog, MaterialRecord};

use crate::criteria::CriteriaSet;
use crate::error::ScoreError;

/// Weighted composite score of one material: `Σ wᵢ · normᵢ(fᵢ(m))`.
///
/// # Errors
///
/// Fails on the first criterion whose value cannot be extracted; a partial
/// score would silently distort rankings.
///
/// # Example
///
/// ```
/// use matsel_core::{Attribute, MaterialRecord};
/// use matsel_scoring::{score, CriteriaSet, Criterion, Normalization, ValueSource};
///
/// let mat = MaterialRecord::new("aluminum_7075", 2810.0, 505e6, 5.0).unwrap();
/// let criteria = CriteriaSet::new().with(Criterion::new(
///     "cheap",
///     1.0,
///     ValueSource::Attribute(Attribute::Cost),
///     Normalization::Range { lo: 50.0, hi: 0.0 },
/// ));
/// assert!((score(&mat, &criteria).unwrap() - 0.9).abs() < 1e-12);
/// ```
pub fn score(material: &MaterialRecord, criteria: &CriteriaSet) -> Result<f64, ScoreError> {
    let mut total = 0.0;
    for criterion in criteria.iter() {
        let raw = criterion.source.value(material)?;
        total += criterion.weight * criterion.normalization.apply(raw);
    }
    Ok(total)
}

/// Scores the whole catalog and sorts descending.
///
/// Ties keep catalog order (stable sort). Any extraction failure aborts
/// the whole ranking.
pub fn rank<'a>(
    catalog: &'a MaterialCatalog,
    criteria: &CriteriaSet,
) -> Result<Vec<(&'a MaterialRecord, f64)>, ScoreError> {
    let mut scored: Vec<(&MaterialRecord, f64)> = catalog
        .all()
        .par_iter()
        .map(|m| score(m, criteria).map(|s| (m, s)))
        .collect::<Result<_, _>>()?;
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    if let Some((best, top)) = scored.first() {
        debug!(material = best.name(), score = top, "ranking complete");
    }
    Ok(scored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{Criterion, Normalization, OrdinalMap, ValueSource};
    use matsel_core::Attribute;
    use matsel_test::{drone_arm_catalog, thermal_catalog};

    /// Specific strength 70%, toughness rating 20%, cost 10% - the racing
    /// drone arm trade-off, with the normalizations spelled out.
    fn drone_arm_criteria() -> CriteriaSet {
        CriteriaSet::new()
            .with(Criterion::new(
                "specific_strength",
                0.7,
                ValueSource::SpecificStrength,
                Normalization::Reference(400_000.0),
            ))
            .with(Criterion::new(
                "toughness",
                0.2,
                ValueSource::ToughnessRating(OrdinalMap::new(0.5, 0.7, 1.0)),
                Normalization::Reference(1.0),
            ))
            .with(Criterion::new(
                "cost",
                0.1,
                ValueSource::Attribute(Attribute::Cost),
                Normalization::Range { lo: 50.0, hi: 0.0 },
            ))
    }

    #[test]
    fn test_drone_arm_scores() {
        let catalog = drone_arm_catalog();
        let criteria = drone_arm_criteria();

        // carbon fiber: 0.7·(375000/400000) + 0.2·0.5 + 0.1·(10/50)
        let cf = score(catalog.get("carbon_fiber").unwrap(), &criteria).unwrap();
        assert!((cf - (0.7 * 0.9375 + 0.2 * 0.5 + 0.1 * 0.2)).abs() < 1e-9);

        let ranked = rank(&catalog, &criteria).unwrap();
        let names: Vec<_> = ranked.iter().map(|(m, _)| m.name()).collect();
        assert_eq!(names, vec!["carbon_fiber", "fiberglass", "aluminum_7075"]);
    }

    #[test]
    fn test_unmapped_category_aborts_rank() {
        let catalog = drone_arm_catalog();
        let criteria = CriteriaSet::new().with(Criterion::new(
            "toughness",
            1.0,
            // brittle is deliberately left unmapped
            ValueSource::ToughnessRating(
                OrdinalMap::default()
                    .with(matsel_core::ToughnessClass::Moderate, 0.7)
                    .with(matsel_core::ToughnessClass::Good, 1.0),
            ),
            Normalization::Reference(1.0),
        ));
        let err = rank(&catalog, &criteria).unwrap_err();
        assert_eq!(
            err,
            ScoreError::UnmappedCategory {
                material: "carbon_fiber".to_string(),
                class: matsel_core::ToughnessClass::Brittle,
            }
        );
    }

    #[test]
    fn test_missing_attribute_aborts_score() {
        let catalog = drone_arm_catalog();
        let criteria = CriteriaSet::new().with(Criterion::new(
            "stiffness",
            1.0,
            ValueSource::Attribute(Attribute::Modulus),
            Normalization::Reference(200e9),
        ));
        assert!(score(catalog.get("carbon_fiber").unwrap(), &criteria).is_err());
    }

    #[test]
    fn test_thermal_shock_ranking() {
        let catalog = thermal_catalog();
        let criteria = CriteriaSet::new().with(Criterion::new(
            "thermal_shock",
            1.0,
            ValueSource::ThermalShockResistance,
            Normalization::Reference(1e6),
        ));
        let ranked = rank(&catalog, &criteria).unwrap();
        let names: Vec<_> = ranked.iter().map(|(m, _)| m.name()).collect();
        // Steel's high toughness dominates; glass is worst.
        assert_eq!(names, vec!["steel", "ceramic", "glass"]);
    }

    #[test]
    fn test_empty_criteria_scores_zero() {
        let catalog = drone_arm_catalog();
        let s = score(catalog.get("fiberglass").unwrap(), &CriteriaSet::new()).unwrap();
        assert_eq!(s, 0.0);
    }

    #[test]
    fn test_weights_applied_as_given() {
        let catalog = drone_arm_catalog();
        let criteria = CriteriaSet::new().with(Criterion::new(
            "cost_x2",
            2.0,
            ValueSource::Attribute(Attribute::Cost),
            Normalization::Reference(10.0),
        ));
        // aluminum_7075: 2.0 · (5 / 10)
        let s = score(catalog.get("aluminum_7075").unwrap(), &criteria).unwrap();
        assert!((s - 1.0).abs() < 1e-12);
    }
}
