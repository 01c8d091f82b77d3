//! Commit object text parser
//!
//! Headers come first, one per line. The first empty line ends them and
//! everything after it (blank lines included) is the message.

use crate::model::{CommitRecord, ObjectId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommitParseError {
    #[error("commit text is not valid UTF-8")]
    InvalidUtf8,

    #[error("`{0}` header has no value")]
    MissingToken(&'static str),
}

/// Parse the content of an object already known to be a commit
pub fn parse_commit(content: &[u8]) -> Result<CommitRecord, CommitParseError> {
    let text = std::str::from_utf8(content).map_err(|_| CommitParseError::InvalidUtf8)?;

    let mut record = CommitRecord::default();
    let mut in_message = false;

    for raw_line in text.split_inclusive('\n') {
        if in_message {
            record.message.push_str(raw_line);
            continue;
        }

        let line = raw_line.strip_suffix('\n').unwrap_or(raw_line);
        if line.is_empty() {
            in_message = true;
        } else if let Some(rest) = line.strip_prefix("parent ") {
            record.parents.push(first_token(rest, "parent")?);
        } else if let Some(rest) = line.strip_prefix("tree ") {
            record.tree = Some(first_token(rest, "tree")?);
        } else if let Some(rest) = line.strip_prefix("author ") {
            record.author = rest.to_string();
        } else if let Some(rest) = line.strip_prefix("committer ") {
            record.committer = rest.to_string();
        }
    }

    Ok(record)
}

fn first_token(rest: &str, header: &'static str) -> Result<ObjectId, CommitParseError> {
    rest.split_whitespace()
        .next()
        .map(ObjectId::from)
        .ok_or(CommitParseError::MissingToken(header))
}
