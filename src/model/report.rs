use serde::Serialize;
use std::fmt;

use super::commit::ObjectId;

/// Metrics produced by one analysis run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub head: ObjectId,
    pub density: f64,
    /// Head first, ending at a root (or just `[head]`)
    pub critical_path: Vec<ObjectId>,
    pub bottlenecks: Vec<ObjectId>,
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "branch density: {:.4}", self.density)?;
        writeln!(f, "critical path: {} commits", self.critical_path.len())?;
        write!(f, "bottlenecks: {}", self.bottlenecks.len())
    }
}
