/*!
 * Safety Module
 * Deadlock-avoidance safety checking via the Banker's Algorithm
 */

mod checker;
mod types;
mod validation;

pub use checker::{check_safety, SafetyChecker};
pub use types::SafetyResult;
