//! Pareto-frontier computation.
//!
//! Dominance is the standard rule: A dominates B iff A is at least as good
//! as B on every objective and strictly better on at least one, with
//! "better" read through each objective's direction. Candidates equal on
//! all objectives are mutually non-dominating and both stay on the
//! frontier.
//!
//! The frontier is computed with O(n²) pairwise comparisons. Catalogs hold
//! tens of materials, so simplicity wins over an output-sensitive
//! algorithm here.

use rayon::prelude::*;
use smallvec::SmallVec;
use tracing::debug;

use matsel_core::MaterialRecord;
use matsel_scoring::{ScoreError, ValueSource};

/// Whether smaller or larger objective values are better.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Minimize,
    Maximize,
}

/// One objective of a multi-objective trade-off.
#[derive(Debug, Clone, PartialEq)]
pub struct Objective {
    /// Raw value source, shared with the scoring engine.
    pub source: ValueSource,
    /// Optimization direction.
    pub direction: Direction,
}

impl Objective {
    /// Objective where smaller values are better.
    pub fn minimize(source: ValueSource) -> Self {
        Self {
            source,
            direction: Direction::Minimize,
        }
    }

    /// Objective where larger values are better.
    pub fn maximize(source: ValueSource) -> Self {
        Self {
            source,
            direction: Direction::Maximize,
        }
    }
}

/// A material together with its extracted objective vector.
#[derive(Debug, Clone, PartialEq)]
pub struct ParetoCandidate<'a> {
    /// The candidate material.
    pub material: &'a MaterialRecord,
    /// Objective values, in objective order.
    pub values: SmallVec<[f64; 4]>,
}

/// The non-dominated set, in candidate order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParetoFrontier<'a> {
    members: Vec<ParetoCandidate<'a>>,
}

impl<'a> ParetoFrontier<'a> {
    /// Frontier materials, in candidate order.
    pub fn members(&self) -> Vec<&'a MaterialRecord> {
        self.members.iter().map(|c| c.material).collect()
    }

    /// Frontier candidates with their objective vectors.
    pub fn candidates(&self) -> &[ParetoCandidate<'a>] {
        &self.members
    }

    /// True if the named material is on the frontier.
    pub fn contains(&self, material: &str) -> bool {
        self.members.iter().any(|c| c.material.name() == material)
    }

    /// Number of frontier members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True if the frontier is empty (only for an empty candidate set).
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Frontier members ordered ascending by one objective.
    ///
    /// Ties keep candidate order (stable sort). Useful for presenting the
    /// frontier along one axis, e.g. ascending cost.
    ///
    /// # Panics
    ///
    /// Panics if `objective_index` is not a valid objective position.
    pub fn sort_by_objective(&self, objective_index: usize) -> Vec<&ParetoCandidate<'a>> {
        let mut sorted: Vec<&ParetoCandidate<'a>> = self.members.iter().collect();
        sorted.sort_by(|a, b| a.values[objective_index].total_cmp(&b.values[objective_index]));
        sorted
    }
}

/// Computes the Pareto frontier of `candidates` over `objectives`.
///
/// # Errors
///
/// Propagates the first value-extraction failure; a frontier over an
/// incomplete objective matrix would be meaningless.
///
/// # Example
///
/// ```
/// use matsel_core::{Attribute, MaterialCatalog, MaterialRecord};
/// use matsel_analysis::{pareto_frontier, Objective};
/// use matsel_scoring::ValueSource;
///
/// let catalog = MaterialCatalog::new(vec![
///     MaterialRecord::new("steel_4340", 7850.0, 860e6, 3.0).unwrap(),
///     MaterialRecord::new("aluminum_7075", 2810.0, 505e6, 5.0).unwrap(),
///     MaterialRecord::new("magnesium_az31", 1740.0, 220e6, 7.0).unwrap(),
/// ])
/// .unwrap();
/// let candidates: Vec<_> = catalog.iter().collect();
/// let objectives = [
///     Objective::minimize(ValueSource::Attribute(Attribute::Cost)),
///     Objective::maximize(ValueSource::SpecificStrength),
/// ];
///
/// let frontier = pareto_frontier(&candidates, &objectives).unwrap();
/// // Aluminum 7075 dominates magnesium: cheaper and stronger per kg.
/// assert!(frontier.contains("steel_4340"));
/// assert!(frontier.contains("aluminum_7075"));
/// assert!(!frontier.contains("magnesium_az31"));
/// ```
pub fn pareto_frontier<'a>(
    candidates: &[&'a MaterialRecord],
    objectives: &[Objective],
) -> Result<ParetoFrontier<'a>, ScoreError> {
    let vectors: Vec<ParetoCandidate<'a>> = candidates
        .iter()
        .map(|&material| {
            let values = objectives
                .iter()
                .map(|o| o.source.value(material))
                .collect::<Result<SmallVec<[f64; 4]>, _>>()?;
            Ok(ParetoCandidate { material, values })
        })
        .collect::<Result<_, ScoreError>>()?;

    let members: Vec<ParetoCandidate<'a>> = vectors
        .par_iter()
        .enumerate()
        .filter(|(i, candidate)| {
            !vectors
                .iter()
                .enumerate()
                .any(|(j, other)| j != *i && dominates(&other.values, &candidate.values, objectives))
        })
        .map(|(_, candidate)| candidate.clone())
        .collect();

    debug!(
        candidates = candidates.len(),
        frontier = members.len(),
        "pareto frontier computed"
    );
    Ok(ParetoFrontier { members })
}

/// True iff vector `a` dominates vector `b`.
fn dominates(a: &[f64], b: &[f64], objectives: &[Objective]) -> bool {
    let mut strictly_better = false;
    for ((&va, &vb), objective) in a.iter().zip(b.iter()).zip(objectives.iter()) {
        let (better, worse) = match objective.direction {
            Direction::Minimize => (va < vb, va > vb),
            Direction::Maximize => (va > vb, va < vb),
        };
        if worse {
            return false;
        }
        if better {
            strictly_better = true;
        }
    }
    strictly_better
}
