/*!
 * Input Validation
 * Eager precondition checks for safety-check snapshots
 */

use crate::core::errors::{InvalidInput, MatrixKind};
use crate::core::types::{BankerResult, InstanceCount, Pid};

/// Validate matrix shapes against the declared resource count
///
/// Runs first: the remaining checks index rows by resource and rely on
/// every row having the right width.
pub(super) fn validate_dimensions(
    total: &[InstanceCount],
    allocation: &[Vec<InstanceCount>],
    max_claim: &[Vec<InstanceCount>],
) -> BankerResult<()> {
    if total.is_empty() {
        return Err(InvalidInput::NoResources);
    }

    if allocation.len() != max_claim.len() {
        return Err(InvalidInput::ProcessCountMismatch {
            allocation_rows: allocation.len(),
            max_claim_rows: max_claim.len(),
        });
    }

    check_row_widths(allocation, MatrixKind::Allocation, total.len())?;
    check_row_widths(max_claim, MatrixKind::MaxClaim, total.len())?;

    Ok(())
}

fn check_row_widths(
    matrix: &[Vec<InstanceCount>],
    kind: MatrixKind,
    expected: usize,
) -> BankerResult<()> {
    for (row, entries) in matrix.iter().enumerate() {
        if entries.len() != expected {
            return Err(InvalidInput::DimensionMismatch {
                matrix: kind,
                row,
                found: entries.len(),
                expected,
            });
        }
    }
    Ok(())
}

/// Validate that every declared count is non-negative
pub(super) fn validate_entries(
    total: &[InstanceCount],
    allocation: &[Vec<InstanceCount>],
    max_claim: &[Vec<InstanceCount>],
) -> BankerResult<()> {
    for (resource, &declared) in total.iter().enumerate() {
        if declared < 0 {
            return Err(InvalidInput::NegativeTotal { resource, declared });
        }
    }

    check_matrix_entries(allocation, MatrixKind::Allocation)?;
    check_matrix_entries(max_claim, MatrixKind::MaxClaim)?;

    Ok(())
}

fn check_matrix_entries(matrix: &[Vec<InstanceCount>], kind: MatrixKind) -> BankerResult<()> {
    for (row, entries) in matrix.iter().enumerate() {
        for (resource, &value) in entries.iter().enumerate() {
            if value < 0 {
                return Err(InvalidInput::NegativeEntry {
                    matrix: kind,
                    pid: row as Pid,
                    resource,
                    value,
                });
            }
        }
    }
    Ok(())
}

/// Validate that no process holds more of a resource than it ever claims
///
/// Guarantees the derived need matrix is non-negative.
pub(super) fn validate_claims(
    allocation: &[Vec<InstanceCount>],
    max_claim: &[Vec<InstanceCount>],
) -> BankerResult<()> {
    for (row, (held_row, claimed_row)) in allocation.iter().zip(max_claim).enumerate() {
        for (resource, (&held, &claimed)) in held_row.iter().zip(claimed_row).enumerate() {
            if held > claimed {
                return Err(InvalidInput::AllocationExceedsClaim {
                    pid: row as Pid,
                    resource,
                    held,
                    claimed,
                });
            }
        }
    }
    Ok(())
}

/// Validate that allocation column sums stay within the declared totals
///
/// Guarantees the derived availability vector is non-negative.
pub(super) fn validate_totals(
    total: &[InstanceCount],
    allocation: &[Vec<InstanceCount>],
) -> BankerResult<()> {
    for (resource, &declared) in total.iter().enumerate() {
        let allocated: InstanceCount = allocation.iter().map(|row| row[resource]).sum();
        if allocated > declared {
            return Err(InvalidInput::AllocationExceedsTotal {
                resource,
                allocated,
                total: declared,
            });
        }
    }
    Ok(())
}
