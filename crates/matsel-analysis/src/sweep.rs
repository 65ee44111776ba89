//! Constraint sensitivity sweeps.

use thiserror::Error;
use tracing::debug;

use matsel_core::{ConstraintSet, MaterialCatalog};
use matsel_scoring::evaluate;

/// Errors raised by [`sweep`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    /// The varying constraint name is not in the base set.
    #[error("constraint '{0}' is not in the base set")]
    UnknownConstraint(String),
}

/// Feasible count at one swept threshold value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    /// Threshold the varying constraint was set to.
    pub value: f64,
    /// Materials passing the whole modified constraint set.
    pub feasible_count: usize,
}

/// Re-evaluates feasibility across a sweep of one constraint's threshold.
///
/// For each value, the base set is copied, the named constraint's threshold
/// replaced, and the catalog re-evaluated. Results follow the
/// caller-supplied value order - it is not sorted, so asymmetric or
/// non-monotonic sweeps are expressed as given.
///
/// # Errors
///
/// Returns [`SweepError::UnknownConstraint`] if `varying` is not a name in
/// `base`.
///
/// # Example
///
/// ```
/// use matsel_core::{Attribute, Constraint, ConstraintSet, MaterialCatalog, MaterialRecord};
/// use matsel_analysis::sweep;
///
/// let catalog = MaterialCatalog::new(vec![
///     MaterialRecord::new("steel_4340", 7850.0, 860e6, 3.0).unwrap(),
///     MaterialRecord::new("titanium_6al4v", 4430.0, 880e6, 25.0).unwrap(),
/// ])
/// .unwrap();
/// let base = ConstraintSet::new()
///     .with("max_cost", Constraint::at_most(Attribute::Cost, 10.0));
///
/// let points = sweep(&catalog, &base, "max_cost", &[5.0, 25.0]).unwrap();
/// assert_eq!(points[0].feasible_count, 1);
/// assert_eq!(points[1].feasible_count, 2);
/// ```
pub fn sweep(
    catalog: &MaterialCatalog,
    base: &ConstraintSet,
    varying: &str,
    values: &[f64],
) -> Result<Vec<SweepPoint>, SweepError> {
    if base.get(varying).is_none() {
        return Err(SweepError::UnknownConstraint(varying.to_string()));
    }
    let points = values
        .iter()
        .map(|&value| {
            let mut constraints = base.clone();
            constraints.set_threshold(varying, value);
            let feasible_count = evaluate(catalog, &constraints).feasible_count();
            SweepPoint {
                value,
                feasible_count,
            }
        })
        .collect();
    debug!(constraint = varying, points = values.len(), "sensitivity sweep complete");
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use matsel_core::{Attribute, Constraint};
    use matsel_test::{airframe_constraints, structural_catalog};

    #[test]
    fn test_cost_sweep_counts() {
        // Titanium only becomes feasible once the cost cap reaches 25.
        let points = sweep(
            &structural_catalog(),
            &airframe_constraints(),
            "max_cost",
            &[5.0, 10.0, 15.0, 20.0, 25.0],
        )
        .unwrap();
        let counts: Vec<_> = points.iter().map(|p| p.feasible_count).collect();
        assert_eq!(counts, vec![1, 1, 1, 1, 2]);
    }

    #[test]
    fn test_value_order_preserved() {
        let points = sweep(
            &structural_catalog(),
            &airframe_constraints(),
            "max_cost",
            &[25.0, 5.0, 25.0],
        )
        .unwrap();
        let values: Vec<_> = points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![25.0, 5.0, 25.0]);
        assert_eq!(points[0].feasible_count, 2);
        assert_eq!(points[1].feasible_count, 1);
    }

    #[test]
    fn test_loosening_at_most_never_shrinks_feasible_set() {
        // Single-constraint set so no other constraint interferes.
        let base = ConstraintSet::new()
            .with("max_cost", Constraint::at_most(Attribute::Cost, 5.0));
        let points = sweep(
            &structural_catalog(),
            &base,
            "max_cost",
            &[2.0, 3.0, 5.0, 10.0, 30.0],
        )
        .unwrap();
        for pair in points.windows(2) {
            assert!(pair[1].feasible_count >= pair[0].feasible_count);
        }
    }

    #[test]
    fn test_unknown_constraint() {
        let err = sweep(
            &structural_catalog(),
            &airframe_constraints(),
            "max_mass",
            &[1.0],
        )
        .unwrap_err();
        assert_eq!(err, SweepError::UnknownConstraint("max_mass".to_string()));
    }

    #[test]
    fn test_base_set_is_untouched() {
        let base = airframe_constraints();
        let before = base.clone();
        sweep(&structural_catalog(), &base, "max_cost", &[25.0]).unwrap();
        assert_eq!(base, before);
    }

    #[test]
    fn test_strength_sweep() {
        // Relaxing min_strength below 276 MPa admits aluminum 6061 too.
        let points = sweep(
            &structural_catalog(),
            &airframe_constraints(),
            "min_strength",
            &[300e6, 276e6, 250e6],
        )
        .unwrap();
        let counts: Vec<_> = points.iter().map(|p| p.feasible_count).collect();
        assert_eq!(counts, vec![1, 2, 2]);
    }
}
