//! matsel - Constraint-Based Material Selection
//!
//! Filter a catalog of engineering materials against multi-criterion
//! constraints, score candidates with explicit normalization, and compute
//! Pareto-optimal trade-off sets.
//!
//! # Example
//!
//! ```rust
//! use matsel::prelude::*;
//!
//! let catalog = MaterialCatalog::builtin();
//! let constraints = ConstraintSet::new()
//!     .with("min_strength", Constraint::at_least(Attribute::Strength, 400e6))
//!     .with("max_cost", Constraint::at_most(Attribute::Cost, 10.0));
//!
//! let report = evaluate(&catalog, &constraints);
//! assert!(report.passed("aluminum_7075"));
//! assert!(!report.passed("titanium_6al4v"));
//! ```

// Domain model
pub use matsel_core::{
    Attribute, CatalogError, Comparator, Constraint, ConstraintSet, MaterialCatalog,
    MaterialError, MaterialRecord, MaterialRecordBuilder, Toughness, ToughnessClass,
};

// Constraint evaluation and scoring
pub use matsel_scoring::{
    evaluate, rank, rank_feasible, score, CriteriaSet, Criterion, EvaluationReport,
    MaterialEvaluation, Normalization, OrdinalMap, ScoreError, ValueSource, Violation,
    ViolationReason,
};

// Trade-off analysis
pub use matsel_analysis::{
    pareto_frontier, sweep, Direction, Objective, ParetoCandidate, ParetoFrontier, SweepError,
    SweepPoint,
};

// Engine boundary
pub use matsel_engine::{
    record_from_properties, CatalogEngine, DropResult, EngineError, Identification,
    NumericsEngine, PropertyMap, PropertyValue,
};

// Configuration
pub use matsel_config::{ConfigError, SelectionConfig};

pub mod prelude {
    pub use matsel_core::{
        Attribute, Comparator, Constraint, ConstraintSet, MaterialCatalog, MaterialRecord,
        Toughness, ToughnessClass,
    };
    pub use matsel_scoring::{
        evaluate, rank, rank_feasible, score, CriteriaSet, Criterion, Normalization, OrdinalMap,
        ValueSource,
    };
    pub use matsel_analysis::{pareto_frontier, sweep, Direction, Objective};
}
