// Library crate: loose-object commit DAG reconstruction and metrics

pub mod analyzer;
pub mod metrics;
pub mod model;
pub mod repository;
pub mod util;

pub use analyzer::{Analyzer, OutputMode};
pub use model::{AnalysisReport, CommitDag, CommitRecord, ObjectId};
