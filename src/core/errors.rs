/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::types::{InstanceCount, Pid, ResourceId};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which input matrix a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixKind {
    Allocation,
    MaxClaim,
}

impl fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixKind::Allocation => write!(f, "allocation"),
            MatrixKind::MaxClaim => write!(f, "max claim"),
        }
    }
}

/// Input validation errors with serialization support
///
/// One variant per violated precondition so callers can report exactly which
/// constraint failed. All of these are raised eagerly at construction; the
/// safety scan itself cannot fail.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum InvalidInput {
    #[error("no resource types declared")]
    #[diagnostic(
        code(safety::no_resources),
        help("A safety check needs at least one resource type. Check the total instance vector.")
    )]
    NoResources,

    #[error("allocation matrix has {allocation_rows} rows but max claim matrix has {max_claim_rows}")]
    #[diagnostic(
        code(safety::process_count_mismatch),
        help("Both matrices must describe the same processes, one row per process.")
    )]
    ProcessCountMismatch {
        allocation_rows: usize,
        max_claim_rows: usize,
    },

    #[error("{matrix} matrix row {row} has {found} entries, expected {expected}")]
    #[diagnostic(
        code(safety::dimension_mismatch),
        help("Every matrix row must have exactly one entry per declared resource type.")
    )]
    DimensionMismatch {
        matrix: MatrixKind,
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("resource {resource} declares a negative total of {declared} instances")]
    #[diagnostic(
        code(safety::negative_total),
        help("Total instance counts must be non-negative.")
    )]
    NegativeTotal {
        resource: ResourceId,
        declared: InstanceCount,
    },

    #[error("{matrix} entry for process {pid}, resource {resource} is negative ({value})")]
    #[diagnostic(
        code(safety::negative_entry),
        help("Allocation and max claim entries must be non-negative.")
    )]
    NegativeEntry {
        matrix: MatrixKind,
        pid: Pid,
        resource: ResourceId,
        value: InstanceCount,
    },

    #[error("process {pid} holds {held} instances of resource {resource} but claims at most {claimed}")]
    #[diagnostic(
        code(safety::allocation_exceeds_claim),
        help("A process cannot hold more of a resource than its declared maximum claim.")
    )]
    AllocationExceedsClaim {
        pid: Pid,
        resource: ResourceId,
        held: InstanceCount,
        claimed: InstanceCount,
    },

    #[error("{allocated} instances of resource {resource} are allocated but only {total} exist")]
    #[diagnostic(
        code(safety::allocation_exceeds_total),
        help("The allocation column sum for a resource cannot exceed its declared total.")
    )]
    AllocationExceedsTotal {
        resource: ResourceId,
        allocated: InstanceCount,
        total: InstanceCount,
    },
}
