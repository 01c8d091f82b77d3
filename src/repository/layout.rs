//! On-disk layout of a git directory

use std::path::{Path, PathBuf};

use super::error::RepoError;

/// Object subdirectories that never hold loose objects
pub const RESERVED_OBJECT_DIRS: [&str; 2] = ["info", "pack"];

/// Resolved git directory (`.git` of a worktree, or a bare repository)
#[derive(Debug, Clone)]
pub struct GitDir {
    root: PathBuf,
}

impl GitDir {
    /// Use `path` as the git directory without checking it
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { root: path.into() }
    }

    /// Find the git directory for a worktree or bare repository path
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, RepoError> {
        let path = path.as_ref();
        let dot_git = path.join(".git");
        if dot_git.is_dir() {
            return Ok(Self::at(dot_git));
        }
        if path.join("objects").is_dir() && path.join("HEAD").is_file() {
            return Ok(Self::at(path));
        }
        Err(RepoError::NotARepository(path.to_path_buf()))
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn objects_dir(&self) -> PathBuf {
        self.root.join("objects")
    }

    pub fn head_path(&self) -> PathBuf {
        self.root.join("HEAD")
    }

    /// Path of a ref named relative to the git directory (e.g. `refs/heads/main`)
    pub fn ref_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}
