/*!
 * Safety Check - Main Entry Point
 *
 * Thin front-end over the safety checker:
 * - Reads a JSON snapshot (path argument, or stdin when absent)
 * - Runs the Banker's Algorithm safety scan
 * - Renders the need matrix, availability, and verdict
 */

use banker::{InstanceCount, SafetyChecker};
use log::info;
use miette::{IntoDiagnostic, WrapErr};
use serde::Deserialize;
use std::io::Read;

/// Snapshot format accepted at the boundary
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
struct Snapshot {
    total: Vec<InstanceCount>,
    allocation: Vec<Vec<InstanceCount>>,
    max_claim: Vec<Vec<InstanceCount>>,
}

fn main() -> miette::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let snapshot = read_snapshot()?;
    info!(
        "Loaded snapshot: {} processes, {} resource types",
        snapshot.allocation.len(),
        snapshot.total.len()
    );

    let checker = SafetyChecker::new(snapshot.total, snapshot.allocation, snapshot.max_claim)?;

    println!("Process        Need");
    for (pid, need_row) in checker.need().iter().enumerate() {
        println!("{:<14} {}", pid, render_counts(need_row));
    }
    println!("Available      {}", render_counts(checker.available()));

    let result = checker.check();
    println!("{}", result);

    Ok(())
}

fn render_counts(counts: &[InstanceCount]) -> String {
    let rendered: Vec<String> = counts.iter().map(|count| count.to_string()).collect();
    rendered.join(" ")
}

/// Read the snapshot from the path argument, or stdin when none is given
fn read_snapshot() -> miette::Result<Snapshot> {
    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to read snapshot file: {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .into_diagnostic()
                .wrap_err("failed to read snapshot from stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw)
        .into_diagnostic()
        .wrap_err("snapshot is not valid JSON")
}
