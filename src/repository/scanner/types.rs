//! Types produced by a DAG build

use crate::model::CommitDag;

/// Per-run counters of what the enumeration found and skipped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Commits parsed into the table
    pub commits: usize,
    /// Trees, blobs, tags and unknown types
    pub non_commits: usize,
    /// Objects that vanished between listing and reading
    pub not_found: usize,
    /// Objects that failed to read, inflate or parse
    pub corrupt: usize,
    /// Directory entries that could not be turned into an object id
    pub skipped_entries: usize,
}

impl BuildStats {
    /// Every object file that was attempted
    pub fn objects_seen(&self) -> usize {
        self.commits + self.non_commits + self.not_found + self.corrupt
    }

    pub fn failures(&self) -> usize {
        self.not_found + self.corrupt
    }
}

/// A fully populated DAG plus the statistics of building it
#[derive(Debug, Default)]
pub struct DagBuild {
    pub dag: CommitDag,
    pub stats: BuildStats,
}
