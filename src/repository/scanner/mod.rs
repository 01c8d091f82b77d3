//! Commit DAG builder
//!
//! Reads every loose object in the store and assembles the commit DAG.
//!
//! # Architecture
//!
//! - **listing**: enumerates `objects/xx/` directories into object ids
//! - **progress**: progress reporting abstraction
//! - **types**: build statistics and output
//! - **DagBuilder**: reads, filters and links commits
//!
//! Objects that are missing, corrupt or not commits are logged and counted,
//! never fatal. Only failing to list the objects directory aborts a build.

mod listing;
mod progress;
mod types;

pub use listing::list_object_ids;
pub use progress::{IndicatifProgress, NoopProgress, ProgressHandle, ProgressReporter, VerboseProgress};
pub use types::{BuildStats, DagBuild};

use anyhow::Result;
use std::time::Instant;

use crate::model::CommitDag;

use super::error::RepoError;
use super::object_store::ObjectStore;

/// Builds the commit DAG from a loose object store
pub struct DagBuilder {
    store: ObjectStore,
    verbose: bool,
    profile: bool,
}

impl DagBuilder {
    pub fn new(store: ObjectStore) -> Self {
        Self {
            store,
            verbose: true,
            profile: false,
        }
    }

    /// Create a quiet builder (no progress bar or phase messages)
    pub fn quiet(store: ObjectStore) -> Self {
        Self {
            store,
            verbose: false,
            profile: false,
        }
    }

    /// Create a profiling builder (phase timings, no progress bar)
    pub fn profiling(store: ObjectStore) -> Self {
        Self {
            store,
            verbose: true,
            profile: true,
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_profiling(&self) -> bool {
        self.profile
    }

    pub fn store(&self) -> &ObjectStore {
        &self.store
    }

    /// Enumerate the store and build the DAG
    pub fn build(&self) -> Result<DagBuild> {
        let progress: Box<dyn ProgressReporter> = if self.profile {
            Box::new(NoopProgress)
        } else {
            Box::new(VerboseProgress::new(self.verbose))
        };
        self.build_with_progress(progress.as_ref())
    }

    /// Build the DAG reporting progress to `progress`
    pub fn build_with_progress(&self, progress: &dyn ProgressReporter) -> Result<DagBuild> {
        let total_start = Instant::now();

        // Phase 1: List loose objects
        self.log("Listing loose objects...");
        let phase_start = Instant::now();
        let (ids, skipped_entries) = list_object_ids(self.store.objects_dir())?;
        self.profile_phase(&format!("List objects ({} files)", ids.len()), phase_start);

        // Phase 2: Read, filter and link commits
        self.log("Reading commits...");
        let phase_start = Instant::now();
        let mut dag = CommitDag::new();
        let mut stats = BuildStats {
            skipped_entries,
            ..Default::default()
        };

        let pb = progress.start("Reading", ids.len() as u64);
        for id in ids {
            pb.inc(1);

            if dag.contains(id.as_str()) {
                continue;
            }

            match self.store.read_commit(&id) {
                Ok(record) => {
                    dag.insert_commit(id, record);
                    stats.commits += 1;
                }
                Err(RepoError::NotACommit { .. }) => {
                    stats.non_commits += 1;
                }
                Err(e @ RepoError::ObjectNotFound { .. }) => {
                    tracing::warn!("Skipping object: {}", e);
                    stats.not_found += 1;
                }
                Err(e) => {
                    tracing::warn!("Skipping object: {}", e);
                    stats.corrupt += 1;
                }
            }
        }
        pb.finish();
        self.profile_phase(
            &format!(
                "Read {} objects ({} commits, {} edges)",
                stats.objects_seen(),
                stats.commits,
                dag.graph().edge_count()
            ),
            phase_start,
        );

        if stats.failures() > 0 {
            tracing::warn!(
                "{} objects could not be read ({} missing, {} corrupt)",
                stats.failures(),
                stats.not_found,
                stats.corrupt
            );
        }
        self.log(&format!(
            "Found {} commits among {} objects",
            stats.commits,
            stats.objects_seen()
        ));

        if self.profile {
            tracing::info!(profile = true, "TOTAL build time: {:?}", total_start.elapsed());
        }

        Ok(DagBuild { dag, stats })
    }

    fn log(&self, msg: &str) {
        if self.verbose {
            tracing::info!("{}", msg);
        }
    }

    fn profile_phase(&self, name: &str, start: Instant) {
        if self.profile {
            tracing::info!(profile = true, "{}: {:?}", name, start.elapsed());
        }
    }
}
