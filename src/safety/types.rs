/*!
 * Safety Types
 * Verdict types produced by the safety scan
 */

use crate::core::types::Pid;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a safety scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SafetyResult {
    /// Whether a full completion order exists
    pub safe: bool,
    /// Processes in the order they were granted a finish: a permutation of
    /// all process ids when safe, otherwise the partial prefix reached
    /// before the scan stalled
    pub sequence: Vec<Pid>,
}

impl SafetyResult {
    /// Check whether the scanned state was safe
    pub fn is_safe(&self) -> bool {
        self.safe
    }
}

impl fmt::Display for SafetyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<String> = self.sequence.iter().map(|pid| pid.to_string()).collect();
        if self.safe {
            write!(f, "Safe state (sequence: {})", ids.join(" "))
        } else {
            write!(f, "Not Safe state (finished before stall: {})", ids.join(" "))
        }
    }
}
