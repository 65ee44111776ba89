//! Evaluation result types.

use std::slice;

/// Why a material failed one constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationReason {
    /// Signed gap between threshold and actual value: `threshold - actual`
    /// for ≥ constraints, `actual - threshold` for ≤ and =.
    Gap(f64),
    /// The constraint references an attribute absent on the record.
    MissingAttribute,
}

/// One failed constraint for one material.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Name of the violated constraint within its set.
    pub constraint: String,
    /// Failure reason.
    pub reason: ViolationReason,
}

/// Pass/fail result for one material.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialEvaluation {
    /// Material name.
    pub material: String,
    /// True iff `violations` is empty.
    pub passed: bool,
    /// All failed constraints, in constraint-set order. Never truncated.
    pub violations: Vec<Violation>,
}

/// Evaluation results for a whole catalog, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationReport {
    entries: Vec<MaterialEvaluation>,
}

impl EvaluationReport {
    pub(crate) fn new(entries: Vec<MaterialEvaluation>) -> Self {
        Self { entries }
    }

    /// Result for one material, if it was part of the evaluated catalog.
    pub fn get(&self, material: &str) -> Option<&MaterialEvaluation> {
        self.entries.iter().find(|e| e.material == material)
    }

    /// True if the named material passed every constraint.
    pub fn passed(&self, material: &str) -> bool {
        self.get(material).is_some_and(|e| e.passed)
    }

    /// Names of all passing materials, in catalog order.
    pub fn feasible(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.passed)
            .map(|e| e.material.as_str())
            .collect()
    }

    /// Number of passing materials.
    pub fn feasible_count(&self) -> usize {
        self.entries.iter().filter(|e| e.passed).count()
    }

    /// Iterates per-material results in catalog order.
    pub fn iter(&self) -> slice::Iter<'_, MaterialEvaluation> {
        self.entries.iter()
    }

    /// Number of evaluated materials.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no materials were evaluated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
