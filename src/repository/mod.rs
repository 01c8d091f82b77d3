mod commit_parser;
mod error;
mod head;
mod layout;
mod object_store;
mod scanner;

pub use commit_parser::{parse_commit, CommitParseError};
pub use error::RepoError;
pub use head::resolve_head;
pub use layout::{GitDir, RESERVED_OBJECT_DIRS};
pub use object_store::ObjectStore;
pub use scanner::{
    list_object_ids, BuildStats, DagBuild, DagBuilder, IndicatifProgress, NoopProgress,
    ProgressHandle, ProgressReporter, VerboseProgress,
};
