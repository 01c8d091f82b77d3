//! Loose object reader
//!
//! A loose object lives at `objects/<first two hex chars>/<remaining chars>`
//! and holds a single zlib stream inflating to `<type> <len>\0<content>`.
//! Packed storage is not read.

use flate2::read::ZlibDecoder;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::model::{CommitRecord, ObjectId, ObjectKind, StoredObject};

use super::commit_parser::parse_commit;
use super::error::RepoError;

/// Read-only access to the loose objects under an `objects/` directory
#[derive(Debug, Clone)]
pub struct ObjectStore {
    objects_dir: PathBuf,
}

impl ObjectStore {
    pub fn new(objects_dir: impl Into<PathBuf>) -> Self {
        Self {
            objects_dir: objects_dir.into(),
        }
    }

    pub fn objects_dir(&self) -> &Path {
        &self.objects_dir
    }

    /// Path where the loose object for `id` is expected
    pub fn object_path(&self, id: &ObjectId) -> Option<PathBuf> {
        let (dir, file) = id.loose_path_parts()?;
        Some(self.objects_dir.join(dir).join(file))
    }

    /// Read and inflate one object
    pub fn read(&self, id: &ObjectId) -> Result<StoredObject, RepoError> {
        let path = self.object_path(id).ok_or_else(|| RepoError::ObjectNotFound {
            id: id.clone(),
            path: self.objects_dir.join(id.as_str()),
        })?;

        let compressed = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(RepoError::ObjectNotFound {
                    id: id.clone(),
                    path,
                });
            }
            Err(e) => return Err(RepoError::corrupt(id, format!("read failed: {e}"))),
        };

        let mut inflated = Vec::with_capacity(compressed.len() * 2);
        ZlibDecoder::new(compressed.as_slice())
            .read_to_end(&mut inflated)
            .map_err(|e| RepoError::corrupt(id, format!("inflate failed: {e}")))?;

        split_header(id, inflated)
    }

    /// Read an object and parse it as a commit
    pub fn read_commit(&self, id: &ObjectId) -> Result<CommitRecord, RepoError> {
        let object = self.read(id)?;
        if object.kind != ObjectKind::Commit {
            return Err(RepoError::NotACommit {
                id: id.clone(),
                kind: object.kind.to_string(),
            });
        }
        parse_commit(&object.content).map_err(|e| RepoError::corrupt(id, e.to_string()))
    }
}

/// Split `<type> <len>\0<content>` at the first NUL
fn split_header(id: &ObjectId, mut inflated: Vec<u8>) -> Result<StoredObject, RepoError> {
    let nul = inflated
        .iter()
        .position(|&b| b == 0)
        .ok_or_else(|| RepoError::corrupt(id, "missing header terminator"))?;

    let header = std::str::from_utf8(&inflated[..nul])
        .map_err(|_| RepoError::corrupt(id, "header is not ASCII"))?;
    let tag = header
        .split_whitespace()
        .next()
        .ok_or_else(|| RepoError::corrupt(id, "empty header"))?;
    let kind = ObjectKind::parse(tag);

    let content = inflated.split_off(nul + 1);
    Ok(StoredObject { kind, content })
}
