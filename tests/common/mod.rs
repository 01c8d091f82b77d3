// Shared test fixtures for integration tests
// Functions here are used across different test files
#![allow(dead_code)]

use git2::{Oid, Repository, Signature};
use repodag::repository::{DagBuild, DagBuilder, NoopProgress, ObjectStore};
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary git repository (no commits yet)
pub fn create_test_repo() -> (TempDir, PathBuf, Repository) {
    let dir = TempDir::new().unwrap();
    let repo_path = dir.path().to_path_buf();
    let repo = Repository::init(&repo_path).unwrap();

    // Configure git user for commits
    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Test User").unwrap();
    config.set_str("user.email", "test@example.com").unwrap();

    (dir, repo_path, repo)
}

/// Write a flat tree containing the given files
pub fn write_tree(repo: &Repository, files: &[(&str, &[u8])]) -> Oid {
    let mut builder = repo.treebuilder(None).unwrap();
    for (name, content) in files {
        let blob = repo.blob(content).unwrap();
        builder.insert(*name, blob, 0o100644).unwrap();
    }
    builder.write().unwrap()
}

/// Create a commit with explicit parents, optionally moving a ref
pub fn commit_with_parents(
    repo: &Repository,
    update_ref: Option<&str>,
    files: &[(&str, &[u8])],
    message: &str,
    parents: &[Oid],
) -> Oid {
    let sig = Signature::now("Test User", "test@example.com").unwrap();
    let tree = repo.find_tree(write_tree(repo, files)).unwrap();
    let parent_commits: Vec<_> = parents
        .iter()
        .map(|oid| repo.find_commit(*oid).unwrap())
        .collect();
    let parent_refs: Vec<_> = parent_commits.iter().collect();

    repo.commit(update_ref, &sig, &sig, message, &tree, &parent_refs)
        .unwrap()
}

/// Commit on top of HEAD (or as a root commit) and advance HEAD
pub fn add_commit(repo: &Repository, files: &[(&str, &[u8])], message: &str) -> Oid {
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<Oid> = parent.iter().map(|c| c.id()).collect();
    commit_with_parents(repo, Some("HEAD"), files, message, &parents)
}

/// Create a commit that is not reachable from any ref
pub fn detached_commit(repo: &Repository, message: &str, parents: &[Oid]) -> Oid {
    let content = message.as_bytes();
    commit_with_parents(repo, None, &[("file.txt", content)], message, parents)
}

/// Point HEAD directly at a commit
pub fn detach_head_at(repo: &Repository, oid: Oid) {
    repo.set_head_detached(oid).unwrap();
}

/// Path of the loose object file for `oid`
pub fn loose_object_path(repo: &Repository, oid: Oid) -> PathBuf {
    let hex = oid.to_string();
    repo.path().join("objects").join(&hex[..2]).join(&hex[2..])
}

/// Replace a loose object's bytes (objects are written read-only)
pub fn corrupt_object(repo: &Repository, oid: Oid) {
    let path = loose_object_path(repo, oid);
    std::fs::remove_file(&path).unwrap();
    std::fs::write(&path, b"definitely not zlib").unwrap();
}

/// Build the DAG from the repository's object store without output
pub fn build_dag(repo: &Repository) -> DagBuild {
    DagBuilder::quiet(ObjectStore::new(repo.path().join("objects")))
        .build_with_progress(&NoopProgress)
        .unwrap()
}
