/*!
 * Safety Checker Property Tests
 * Invariants of the safety scan over arbitrary valid snapshots
 */

use banker::{check_safety, InstanceCount, SafetyChecker};
use proptest::collection::vec;
use proptest::prelude::*;

const MAX_PROCESSES: usize = 6;
const MAX_RESOURCES: usize = 4;
const MAX_CLAIM: InstanceCount = 10;
const MAX_SLACK: InstanceCount = 5;

#[derive(Debug, Clone)]
struct Snapshot {
    total: Vec<InstanceCount>,
    allocation: Vec<Vec<InstanceCount>>,
    max_claim: Vec<Vec<InstanceCount>>,
}

/// Generate a snapshot that satisfies every input precondition: allocations
/// are clamped to their claims, and totals cover the allocation column sums
/// plus some spare instances.
fn arb_snapshot() -> impl Strategy<Value = Snapshot> {
    (1..=MAX_RESOURCES, 0..=MAX_PROCESSES).prop_flat_map(|(resources, processes)| {
        (
            vec(vec(0..=MAX_CLAIM, resources), processes),
            vec(vec(0..=MAX_CLAIM, resources), processes),
            vec(0..=MAX_SLACK, resources),
        )
            .prop_map(move |(raw_allocation, max_claim, slack)| {
                let allocation: Vec<Vec<InstanceCount>> = raw_allocation
                    .iter()
                    .zip(&max_claim)
                    .map(|(raw_row, claim_row)| {
                        raw_row
                            .iter()
                            .zip(claim_row)
                            .map(|(&held, &claimed)| held.min(claimed))
                            .collect()
                    })
                    .collect();

                let total = (0..resources)
                    .map(|resource| {
                        let allocated: InstanceCount =
                            allocation.iter().map(|row| row[resource]).sum();
                        allocated + slack[resource]
                    })
                    .collect();

                Snapshot {
                    total,
                    allocation,
                    max_claim,
                }
            })
    })
}

proptest! {
    #[test]
    fn valid_snapshots_never_error(snapshot in arb_snapshot()) {
        let result = check_safety(snapshot.total, snapshot.allocation, snapshot.max_claim);
        prop_assert!(result.is_ok());
    }

    #[test]
    fn safe_sequences_are_permutations(snapshot in arb_snapshot()) {
        let processes = snapshot.allocation.len();
        let result = check_safety(snapshot.total, snapshot.allocation, snapshot.max_claim)
            .expect("generated snapshot is valid");

        if result.safe {
            let mut seen = vec![false; processes];
            for &pid in &result.sequence {
                prop_assert!(!seen[pid as usize], "process {} finished twice", pid);
                seen[pid as usize] = true;
            }
            prop_assert_eq!(result.sequence.len(), processes);
        } else {
            prop_assert!(result.sequence.len() < processes);
        }
    }

    #[test]
    fn sequences_replay_without_shortfall(snapshot in arb_snapshot()) {
        let checker = SafetyChecker::new(snapshot.total, snapshot.allocation, snapshot.max_claim)
            .expect("generated snapshot is valid");
        let result = checker.check();

        // Replay the reported order against the snapshot: every granted
        // process must fit within the pool at its turn, and releases only
        // ever grow the pool.
        let mut available = checker.available().to_vec();
        for &pid in &result.sequence {
            let pid = pid as usize;
            for resource in 0..checker.resource_count() {
                prop_assert!(checker.need()[pid][resource] <= available[resource]);
                prop_assert!(available[resource] >= checker.available()[resource]);
                available[resource] += checker.allocation()[pid][resource];
            }
        }
    }

    #[test]
    fn repeated_scans_are_identical(snapshot in arb_snapshot()) {
        let checker = SafetyChecker::new(snapshot.total, snapshot.allocation, snapshot.max_claim)
            .expect("generated snapshot is valid");

        prop_assert_eq!(checker.check(), checker.check());
    }

    #[test]
    fn processes_with_full_claims_always_finish(snapshot in arb_snapshot()) {
        // A process already holding its full claim needs nothing, so the
        // scan must always grant it.
        let fully_claimed: Vec<usize> = snapshot
            .allocation
            .iter()
            .zip(&snapshot.max_claim)
            .enumerate()
            .filter(|(_, (held, claimed))| held == claimed)
            .map(|(pid, _)| pid)
            .collect();

        let result = check_safety(snapshot.total, snapshot.allocation, snapshot.max_claim)
            .expect("generated snapshot is valid");

        for pid in fully_claimed {
            prop_assert!(result.sequence.contains(&(pid as u32)));
        }
    }
}
