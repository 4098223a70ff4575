/*!
 * Banker Library
 * Deadlock-avoidance safety checking exposed as a library
 */

pub mod core;
pub mod safety;

// Re-exports
pub use crate::core::errors::{InvalidInput, MatrixKind};
pub use crate::core::types::{BankerResult, InstanceCount, Pid, ResourceId};
pub use crate::safety::{check_safety, SafetyChecker, SafetyResult};
