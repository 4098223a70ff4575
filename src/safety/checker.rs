/*!
 * Safety Checker
 * Banker's Algorithm safety scan over a fixed allocation snapshot
 */

use super::types::SafetyResult;
use super::validation;
use crate::core::types::{BankerResult, InstanceCount, Pid};
use log::{debug, info};

/// Deadlock-avoidance safety checker
///
/// Owns one validated snapshot of a resource allocation state: the total
/// instance vector, the allocation and max claim matrices, and the derived
/// need matrix and initial availability. A snapshot is immutable once
/// constructed; `check` works on its own copies, so one checker can serve
/// repeated scans, including from multiple threads.
#[derive(Debug, Clone)]
pub struct SafetyChecker {
    total: Vec<InstanceCount>,
    allocation: Vec<Vec<InstanceCount>>,
    max_claim: Vec<Vec<InstanceCount>>,
    need: Vec<Vec<InstanceCount>>,
    available: Vec<InstanceCount>,
}

impl SafetyChecker {
    /// Build a checker from a snapshot of the system state
    ///
    /// Validates every precondition before deriving anything: at least one
    /// resource type, consistent matrix dimensions, non-negative counts, no
    /// allocation above its claim, no resource allocated past its total.
    pub fn new(
        total: Vec<InstanceCount>,
        allocation: Vec<Vec<InstanceCount>>,
        max_claim: Vec<Vec<InstanceCount>>,
    ) -> BankerResult<Self> {
        validation::validate_dimensions(&total, &allocation, &max_claim)?;
        validation::validate_entries(&total, &allocation, &max_claim)?;
        validation::validate_claims(&allocation, &max_claim)?;
        validation::validate_totals(&total, &allocation)?;

        let need = derive_need(&allocation, &max_claim);
        let available = derive_available(&total, &allocation);

        Ok(Self {
            total,
            allocation,
            max_claim,
            need,
            available,
        })
    }

    /// Number of processes in the snapshot
    pub fn process_count(&self) -> usize {
        self.allocation.len()
    }

    /// Number of resource types in the snapshot
    pub fn resource_count(&self) -> usize {
        self.total.len()
    }

    /// Total declared instances per resource type
    pub fn total(&self) -> &[InstanceCount] {
        &self.total
    }

    /// Instances currently held, per process
    pub fn allocation(&self) -> &[Vec<InstanceCount>] {
        &self.allocation
    }

    /// Maximum instances each process may ever request
    pub fn max_claim(&self) -> &[Vec<InstanceCount>] {
        &self.max_claim
    }

    /// Derived need matrix (`max_claim - allocation`, per process)
    pub fn need(&self) -> &[Vec<InstanceCount>] {
        &self.need
    }

    /// Resource instances not allocated to any process
    pub fn available(&self) -> &[InstanceCount] {
        &self.available
    }

    /// Run the safety scan
    ///
    /// Sweeps unfinished processes in ascending pid order, finishing every
    /// process whose remaining need fits within the available pool and
    /// releasing its full allocation back to the pool. The state is safe
    /// when all processes finish; it is unsafe when a full sweep finishes
    /// none. Each sweep either finishes a process or ends the scan, so
    /// `process_count` sweeps is a hard ceiling.
    pub fn check(&self) -> SafetyResult {
        let processes = self.process_count();
        let mut available = self.available.clone();
        let mut finished = vec![false; processes];
        let mut sequence: Vec<Pid> = Vec::with_capacity(processes);

        for pass in 0..processes {
            let mut progressed = false;

            for pid in 0..processes {
                if finished[pid] || !self.can_finish(pid, &available) {
                    continue;
                }

                finished[pid] = true;
                progressed = true;
                sequence.push(pid as Pid);

                // A granted process runs to completion and releases everything it holds
                for (pool, &held) in available.iter_mut().zip(&self.allocation[pid]) {
                    *pool += held;
                }

                debug!(
                    "Process {} finished on pass {} (available now {:?})",
                    pid, pass, available
                );
            }

            if sequence.len() == processes || !progressed {
                break;
            }
        }

        let safe = sequence.len() == processes;
        info!(
            "Safety scan complete: safe={}, finished {}/{} processes",
            safe,
            sequence.len(),
            processes
        );

        SafetyResult { safe, sequence }
    }

    /// Whether a process's remaining need fits within the available pool
    ///
    /// Short-circuits on the first deficient resource type; a single
    /// shortfall blocks the process.
    fn can_finish(&self, pid: usize, available: &[InstanceCount]) -> bool {
        self.need[pid]
            .iter()
            .zip(available)
            .all(|(&needed, &free)| needed <= free)
    }
}

fn derive_need(
    allocation: &[Vec<InstanceCount>],
    max_claim: &[Vec<InstanceCount>],
) -> Vec<Vec<InstanceCount>> {
    allocation
        .iter()
        .zip(max_claim)
        .map(|(held_row, claimed_row)| {
            held_row
                .iter()
                .zip(claimed_row)
                .map(|(&held, &claimed)| claimed - held)
                .collect()
        })
        .collect()
}

fn derive_available(
    total: &[InstanceCount],
    allocation: &[Vec<InstanceCount>],
) -> Vec<InstanceCount> {
    total
        .iter()
        .enumerate()
        .map(|(resource, &declared)| {
            let allocated: InstanceCount = allocation.iter().map(|row| row[resource]).sum();
            declared - allocated
        })
        .collect()
}

/// Validate a snapshot and run one safety scan
pub fn check_safety(
    total: Vec<InstanceCount>,
    allocation: Vec<Vec<InstanceCount>>,
    max_claim: Vec<Vec<InstanceCount>>,
) -> BankerResult<SafetyResult> {
    Ok(SafetyChecker::new(total, allocation, max_claim)?.check())
}
