//! HEAD resolution
//!
//! Follows at most one `ref: ` indirection. A symbolic ref whose target file
//! does not exist (e.g. an unborn branch or a packed ref) resolves to the
//! HEAD text itself. Chains of symbolic refs are not followed.

use std::io;

use crate::model::ObjectId;

use super::error::RepoError;
use super::layout::GitDir;

const SYMREF_PREFIX: &str = "ref: ";

/// Resolve the id of the checked-out commit
pub fn resolve_head(git_dir: &GitDir) -> Result<ObjectId, RepoError> {
    let head_path = git_dir.head_path();
    let head = std::fs::read_to_string(&head_path).map_err(|source| RepoError::HeadUnresolved {
        path: head_path.clone(),
        source,
    })?;
    let head = head.trim();

    if let Some(target) = head.strip_prefix(SYMREF_PREFIX) {
        let ref_path = git_dir.ref_path(target);
        match std::fs::read_to_string(&ref_path) {
            Ok(content) => return Ok(ObjectId::from(content.trim())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("{} does not exist, using HEAD verbatim", ref_path.display());
            }
            Err(source) => {
                return Err(RepoError::HeadUnresolved {
                    path: ref_path,
                    source,
                });
            }
        }
    }

    Ok(ObjectId::from(head))
}
