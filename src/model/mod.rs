mod commit;
mod graph;
mod report;

pub use commit::{CommitRecord, ObjectId, ObjectKind, StoredObject};
pub use graph::{CommitDag, CommitGraph};
pub use report::AnalysisReport;

#[cfg(test)]
pub(crate) use graph::test_support;
