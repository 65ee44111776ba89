//! Constraint evaluation and weighted scoring over material catalogs.
//!
//! Two independent engines over `matsel-core` catalogs:
//! - [`evaluator`] - conjunction of named constraints with complete
//!   violation reporting (no early exit, so relaxation guidance sees every
//!   failure reason)
//! - [`scorer`] - weighted composite scores with explicit, caller-supplied
//!   normalization per criterion
//!
//! Both are pure functions; nothing mutates the catalog.

pub mod criteria;
pub mod error;
pub mod evaluator;
pub mod report;
pub mod scorer;

pub use criteria::{Criterion, CriteriaSet, Normalization, OrdinalMap, ValueSource};
pub use error::ScoreError;
pub use evaluator::{evaluate, rank_feasible};
pub use report::{EvaluationReport, MaterialEvaluation, Violation, ViolationReason};
pub use scorer::{rank, score};
