use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

/// Content-address of a stored object (40 hex characters for a well-formed id).
///
/// Ids are never validated: a malformed `parent` token is carried through
/// unchanged and later shows up as a dangling parent.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Subdirectory and file name of the loose object for this id.
    ///
    /// Returns `None` when the id is too short to be split.
    pub fn loose_path_parts(&self) -> Option<(&str, &str)> {
        if self.0.len() <= 2 || !self.0.is_char_boundary(2) {
            return None;
        }
        Some(self.0.split_at(2))
    }
}

impl Borrow<str> for ObjectId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ObjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Type tag found in a loose object header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectKind {
    Commit,
    Tree,
    Blob,
    Tag,
    Other(String),
}

impl ObjectKind {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "commit" => Self::Commit,
            "tree" => Self::Tree,
            "blob" => Self::Blob,
            "tag" => Self::Tag,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Commit => "commit",
            Self::Tree => "tree",
            Self::Blob => "blob",
            Self::Tag => "tag",
            Self::Other(tag) => tag,
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decompressed object: its type tag and the bytes after the header
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub kind: ObjectKind,
    pub content: Vec<u8>,
}

/// Parsed commit object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitRecord {
    /// Parents in the order their `parent` lines appear
    pub parents: Vec<ObjectId>,
    pub tree: Option<ObjectId>,
    pub author: String,
    pub committer: String,
    /// Everything after the first empty line, terminators included
    pub message: String,
}

impl CommitRecord {
    #[inline]
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// First line of the message
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}
