//! One analysis run: build the DAG, resolve HEAD, compute metrics.

use anyhow::{Context, Result};
use std::path::Path;
use std::time::Instant;

use crate::metrics::{self, DEFAULT_TOP_K};
use crate::model::{AnalysisReport, CommitDag, ObjectId};
use crate::repository::{resolve_head, DagBuild, DagBuilder, GitDir, ObjectStore};
use crate::util::{format_path, short_id};

/// How chatty the DAG build is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Progress bar and phase messages
    #[default]
    Verbose,
    /// Nothing but warnings
    Quiet,
    /// Phase timings instead of a progress bar
    Profiling,
}

/// Analysis settings for one repository
#[derive(Debug, Clone)]
pub struct Analyzer {
    git_dir: GitDir,
    top_k: usize,
    mode: OutputMode,
}

impl Analyzer {
    pub fn new(git_dir: GitDir) -> Self {
        Self {
            git_dir,
            top_k: DEFAULT_TOP_K,
            mode: OutputMode::default(),
        }
    }

    /// Open a worktree or bare repository
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let git_dir = GitDir::discover(path)
            .with_context(|| format!("Failed to open git repository at {}", path.display()))?;
        Ok(Self::new(git_dir))
    }

    /// Number of bottlenecks to report
    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k = k;
        self
    }

    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn git_dir(&self) -> &GitDir {
        &self.git_dir
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    fn builder(&self) -> DagBuilder {
        let store = ObjectStore::new(self.git_dir.objects_dir());
        match self.mode {
            OutputMode::Verbose => DagBuilder::new(store),
            OutputMode::Quiet => DagBuilder::quiet(store),
            OutputMode::Profiling => DagBuilder::profiling(store),
        }
    }

    /// Read every loose object into a commit DAG
    pub fn build_dag(&self) -> Result<DagBuild> {
        self.builder()
            .build()
            .context("Failed to build commit DAG")
    }

    pub fn head(&self) -> Result<ObjectId> {
        resolve_head(&self.git_dir).context("Failed to resolve HEAD")
    }

    /// Full analysis; only DAG listing and HEAD resolution can fail
    pub fn analyze(&self) -> Result<AnalysisReport> {
        let build = self.build_dag()?;
        let head = self.head()?;
        let phase_start = Instant::now();
        let report = self.report(&build.dag, head);
        if self.mode == OutputMode::Profiling {
            tracing::info!(profile = true, "Compute metrics: {:?}", phase_start.elapsed());
        }
        tracing::debug!("Critical path: {}", format_path(&report.critical_path, 10));
        Ok(report)
    }

    /// Compute the metrics for an already built DAG
    pub fn report(&self, dag: &CommitDag, head: ObjectId) -> AnalysisReport {
        if !dag.contains(head.as_str()) {
            tracing::warn!("HEAD {} is not among the parsed commits", short_id(&head));
        }
        AnalysisReport {
            density: metrics::branch_density(dag, &head),
            critical_path: metrics::critical_path(dag, &head),
            bottlenecks: metrics::bottlenecks(dag, self.top_k),
            head,
        }
    }
}
