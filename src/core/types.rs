/*!
 * Core Types
 * Common types used across the crate
 */

/// Process identifier: the row index of a process in the input matrices
pub type Pid = u32;

/// Resource type identifier: the column index of a resource type
pub type ResourceId = usize;

/// Resource instance count
///
/// Signed so that negative inputs crossing the boundary are representable
/// and can be rejected with a diagnostic instead of a decode failure.
pub type InstanceCount = i64;

/// Common result type for checker operations
pub type BankerResult<T> = Result<T, super::errors::InvalidInput>;
