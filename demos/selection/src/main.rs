//! Material Selection Example
//!
//! Walks the full selection workflow over the builtin catalog: feasibility
//! filtering with complete violation reporting, ranking by specific
//! strength, the cost-vs-performance Pareto frontier, and a cost-cap
//! sensitivity sweep.
//!
//! Run with `RUST_LOG=debug` to see the library's evaluation logging.

use matsel::prelude::*;
use matsel::ViolationReason;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let catalog = MaterialCatalog::builtin();
    let constraints = ConstraintSet::new()
        .with("min_strength", Constraint::at_least(Attribute::Strength, 400e6))
        .with("max_density", Constraint::at_most(Attribute::Density, 5000.0))
        .with("max_cost", Constraint::at_most(Attribute::Cost, 10.0));

    println!("Constraints: strength >= 400 MPa, density <= 5000 kg/m3, cost <= 10/kg");
    println!();

    let report = evaluate(&catalog, &constraints);
    for entry in report.iter() {
        if entry.passed {
            println!("{:<16} PASS", entry.material);
        } else {
            let reasons: Vec<String> = entry
                .violations
                .iter()
                .map(|v| match v.reason {
                    ViolationReason::Gap(gap) => format!("{} (gap {:.3e})", v.constraint, gap),
                    ViolationReason::MissingAttribute => {
                        format!("{} (attribute missing)", v.constraint)
                    }
                })
                .collect();
            println!("{:<16} FAIL  {}", entry.material, reasons.join(", "));
        }
    }
    println!();

    let ranked = rank_feasible(&catalog, &constraints, |m| m.specific_strength());
    println!("Feasible materials by specific strength:");
    for (i, material) in ranked.iter().enumerate() {
        println!(
            "  {}. {:<16} {:.1} Pa·m3/kg",
            i + 1,
            material.name(),
            material.specific_strength()
        );
    }
    println!();

    let candidates: Vec<_> = catalog.iter().collect();
    let objectives = [
        Objective::minimize(ValueSource::Attribute(Attribute::Cost)),
        Objective::maximize(ValueSource::SpecificStrength),
    ];
    match pareto_frontier(&candidates, &objectives) {
        Ok(frontier) => {
            println!("Pareto frontier (cost vs specific strength), ascending cost:");
            for candidate in frontier.sort_by_objective(0) {
                println!(
                    "  {:<16} cost {:>5.2}/kg, {:.1} Pa·m3/kg",
                    candidate.material.name(),
                    candidate.values[0],
                    candidate.values[1]
                );
            }
        }
        Err(err) => println!("frontier unavailable: {err}"),
    }
    println!();

    match sweep(&catalog, &constraints, "max_cost", &[5.0, 10.0, 15.0, 20.0, 25.0]) {
        Ok(points) => {
            println!("Sensitivity to the cost cap:");
            for point in points {
                println!("  cost <= {:>5.1}: {} feasible", point.value, point.feasible_count);
            }
        }
        Err(err) => println!("sweep unavailable: {err}"),
    }
}
