//! Trade-off analysis over material catalogs.
//!
//! - [`pareto`] - non-dominated frontier over direction-tagged objectives
//! - [`sweep`] - feasibility counts across a one-constraint sweep
//!
//! Like the rest of the workspace, everything here is a pure function over
//! an immutable catalog.

pub mod pareto;
pub mod sweep;

pub use pareto::{pareto_frontier, Direction, Objective, ParetoCandidate, ParetoFrontier};
pub use sweep::{sweep, SweepError, SweepPoint};
