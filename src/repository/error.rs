//! Typed failures of the repository layer

use std::io;
use std::path::PathBuf;

use crate::model::ObjectId;

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// No loose object file at the expected path
    #[error("object {id} not found at {}", path.display())]
    ObjectNotFound { id: ObjectId, path: PathBuf },

    /// The object could not be read, inflated, or its header parsed
    #[error("object {id} is corrupt: {reason}")]
    ObjectCorrupt { id: ObjectId, reason: String },

    /// The object exists but its type tag is not "commit"
    #[error("object {id} is a {kind}, not a commit")]
    NotACommit { id: ObjectId, kind: String },

    /// HEAD (or the ref it points to) could not be read
    #[error("cannot resolve HEAD from {}: {source}", path.display())]
    HeadUnresolved {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The path is neither a worktree with `.git` nor a bare repository
    #[error("not a git repository: {}", .0.display())]
    NotARepository(PathBuf),
}

impl RepoError {
    pub(crate) fn corrupt(id: &ObjectId, reason: impl Into<String>) -> Self {
        Self::ObjectCorrupt {
            id: id.clone(),
            reason: reason.into(),
        }
    }
}
