//! catalog-check: consistency checks for the control catalog + weight table
//!
//! Usage:
//!   catalog-check           # human-readable report
//!   catalog-check --json    # machine-readable summary
//!   catalog-check -q        # quiet: exit 0 if clean, 1 if problems
//!
//! Verifies level counts, identifier uniqueness and shape, domain codes, and
//! weight values. Also lists catalog identifiers with no weight-table entry:
//! those deduct at the default weight of 1 during SPRS scoring, so a growing
//! list means the CMMC/NIST numbering gap is widening.

use std::collections::BTreeSet;
use std::env;
use std::process;

use scoring_engine::catalog;
use scoring_engine::types::AssessmentLevel;
use scoring_engine::weights;

fn well_formed_catalog_id(id: &str) -> bool {
    let mut parts = id.split('.');
    let domain = parts.next().unwrap_or("");
    let level = parts.next().unwrap_or("");
    let number = parts.next().unwrap_or("");
    parts.next().is_none()
        && domain.len() == 2
        && domain.chars().all(|c| c.is_ascii_uppercase())
        && matches!(level, "1" | "2")
        && !number.is_empty()
        && number.chars().all(|c| c.is_ascii_digit())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let quiet = args.iter().any(|a| a == "-q" || a == "--quiet");
    let json = args.iter().any(|a| a == "--json");

    let mut problems: Vec<String> = Vec::new();

    let level1 = catalog::controls_for_level(AssessmentLevel::Level1);
    if level1.len() != 17 {
        problems.push(format!("level1 catalog has {} controls, expected 17", level1.len()));
    }

    let level2 = catalog::controls_for_level(AssessmentLevel::Level2);
    let mut seen = BTreeSet::new();
    for control in &level2 {
        if !seen.insert(control.id) {
            problems.push(format!("duplicate catalog id {}", control.id));
        }
        if !well_formed_catalog_id(control.id) {
            problems.push(format!("malformed catalog id {}", control.id));
        }
        if catalog::domain_name(control.domain).is_none() {
            problems.push(format!("unknown domain {} on {}", control.domain, control.id));
        }
    }

    let mut weight_ids = BTreeSet::new();
    for (id, weight) in weights::DOD_SCORE_VALUES {
        if !weight_ids.insert(*id) {
            problems.push(format!("duplicate weight-table id {}", id));
        }
        if !matches!(*weight, 1 | 3 | 5) {
            problems.push(format!("weight {} on {} is not a published value", weight, id));
        }
    }

    // Catalog ids absent from the weight table (expected for CMMC-style ids;
    // reported so the gap stays visible, not counted as a problem).
    let unweighted: Vec<&str> = level2
        .iter()
        .map(|control| control.id)
        .filter(|id| !weight_ids.contains(id))
        .collect();

    if quiet {
        process::exit(if problems.is_empty() { 0 } else { 1 });
    }

    if json {
        let summary = serde_json::json!({
            "level1Controls": level1.len(),
            "level2Controls": level2.len(),
            "weightEntries": weights::DOD_SCORE_VALUES.len(),
            "maxPossibleScore": weights::max_possible_score(),
            "unweightedCatalogIds": unweighted,
            "problems": problems,
        });
        println!("{}", summary);
        process::exit(if problems.is_empty() { 0 } else { 1 });
    }

    println!("level1 controls:   {}", level1.len());
    println!("level2 controls:   {}", level2.len());
    println!("weight entries:    {}", weights::DOD_SCORE_VALUES.len());
    println!("max deduction sum: {}", weights::max_possible_score());

    if !unweighted.is_empty() {
        println!(
            "{} catalog ids score at default weight {} (no table entry):",
            unweighted.len(),
            weights::DEFAULT_WEIGHT
        );
        for id in &unweighted {
            println!("  ~ {}", id);
        }
    }

    if problems.is_empty() {
        println!("No problems.");
        process::exit(0);
    }

    for problem in &problems {
        println!("! {}", problem);
    }
    process::exit(1);
}
