//! Constraint types for feasibility evaluation.
//!
//! A [`Constraint`] is a named predicate over one attribute; a
//! [`ConstraintSet`] keeps constraints in the caller-specified order so
//! violation reports and sweeps are deterministic.

use serde::{Deserialize, Serialize};

use crate::material::Attribute;

/// Comparison direction of a constraint threshold.
///
/// `Exactly` compares floats without an epsilon; the caller opted into
/// equality semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    /// Attribute must be ≥ threshold.
    AtLeast,
    /// Attribute must be ≤ threshold.
    AtMost,
    /// Attribute must equal the threshold.
    Exactly,
}

/// A predicate over one material attribute.
///
/// # Example
///
/// ```
/// use matsel_core::{Attribute, Comparator, Constraint};
///
/// let c = Constraint::at_least(Attribute::Strength, 400e6);
/// assert_eq!(c.comparator, Comparator::AtLeast);
/// assert!(c.satisfied_by(505e6));
/// assert!(!c.satisfied_by(276e6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Constraint {
    /// Attribute the threshold applies to.
    pub attribute: Attribute,
    /// Comparison direction.
    pub comparator: Comparator,
    /// Threshold value in the attribute's SI unit.
    pub threshold: f64,
}

impl Constraint {
    /// Lower-bound constraint: attribute ≥ threshold.
    pub fn at_least(attribute: Attribute, threshold: f64) -> Self {
        Self {
            attribute,
            comparator: Comparator::AtLeast,
            threshold,
        }
    }

    /// Upper-bound constraint: attribute ≤ threshold.
    pub fn at_most(attribute: Attribute, threshold: f64) -> Self {
        Self {
            attribute,
            comparator: Comparator::AtMost,
            threshold,
        }
    }

    /// Equality constraint: attribute = threshold.
    pub fn exactly(attribute: Attribute, threshold: f64) -> Self {
        Self {
            attribute,
            comparator: Comparator::Exactly,
            threshold,
        }
    }

    /// Whether a value satisfies this constraint.
    pub fn satisfied_by(&self, actual: f64) -> bool {
        match self.comparator {
            Comparator::AtLeast => actual >= self.threshold,
            Comparator::AtMost => actual <= self.threshold,
            Comparator::Exactly => actual == self.threshold,
        }
    }

    /// Signed gap for a failing value.
    ///
    /// `threshold - actual` for ≥ (the shortfall), `actual - threshold`
    /// for ≤ and = (the excess). Positive for ≥/≤ failures.
    pub fn gap(&self, actual: f64) -> f64 {
        match self.comparator {
            Comparator::AtLeast => self.threshold - actual,
            Comparator::AtMost | Comparator::Exactly => actual - self.threshold,
        }
    }
}

/// An ordered set of named constraints, evaluated as a conjunction.
///
/// Insertion order is the evaluation and reporting order.
///
/// # Example
///
/// ```
/// use matsel_core::{Attribute, Constraint, ConstraintSet};
///
/// let constraints = ConstraintSet::new()
///     .with("min_strength", Constraint::at_least(Attribute::Strength, 400e6))
///     .with("max_density", Constraint::at_most(Attribute::Density, 5000.0))
///     .with("max_cost", Constraint::at_most(Attribute::Cost, 10.0));
///
/// assert_eq!(constraints.len(), 3);
/// assert!(constraints.get("max_cost").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintSet {
    entries: Vec<(String, Constraint)>,
}

impl ConstraintSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named constraint, builder style.
    ///
    /// Re-using a name replaces the existing constraint in place, keeping
    /// its position.
    pub fn with(mut self, name: impl Into<String>, constraint: Constraint) -> Self {
        self.insert(name, constraint);
        self
    }

    /// Adds or replaces a named constraint.
    pub fn insert(&mut self, name: impl Into<String>, constraint: Constraint) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = constraint,
            None => self.entries.push((name, constraint)),
        }
    }

    /// Looks up a constraint by name.
    pub fn get(&self, name: &str) -> Option<&Constraint> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    /// Replaces the threshold of a named constraint.
    ///
    /// Returns false if the name is not present.
    pub fn set_threshold(&mut self, name: &str, threshold: f64) -> bool {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, c)) => {
                c.threshold = threshold;
                true
            }
            None => false,
        }
    }

    /// Iterates `(name, constraint)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Constraint)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), c))
    }

    /// Number of constraints.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the set holds no constraints.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
