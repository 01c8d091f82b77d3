// Shared benchmark helpers
#![allow(dead_code)]

use git2::{Oid, Repository, Signature};
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary git repository for benchmarks
pub fn create_bench_repo() -> (TempDir, PathBuf, Repository) {
    let dir = TempDir::new().unwrap();
    let repo_path = dir.path().to_path_buf();
    let repo = Repository::init(&repo_path).unwrap();

    // Configure git user for commits
    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Bench User").unwrap();
    config.set_str("user.email", "bench@example.com").unwrap();

    (dir, repo_path, repo)
}

/// Create a commit holding a single file with the given parents
pub fn commit(repo: &Repository, update_ref: Option<&str>, message: &str, parents: &[Oid]) -> Oid {
    let sig = Signature::now("Bench User", "bench@example.com").unwrap();
    let blob = repo.blob(message.as_bytes()).unwrap();
    let mut builder = repo.treebuilder(None).unwrap();
    builder.insert("file.txt", blob, 0o100644).unwrap();
    let tree = repo.find_tree(builder.write().unwrap()).unwrap();

    let parent_commits: Vec<_> = parents.iter().map(|p| repo.find_commit(*p).unwrap()).collect();
    let parent_refs: Vec<_> = parent_commits.iter().collect();
    repo.commit(update_ref, &sig, &sig, message, &tree, &parent_refs).unwrap()
}

/// Mainline of `commits` commits with a two-commit side branch merged every `merge_every`
pub fn generate_history(repo: &Repository, commits: usize, merge_every: usize) -> Oid {
    let mut tip = commit(repo, Some("HEAD"), "root", &[]);
    for i in 1..commits {
        if merge_every > 0 && i % merge_every == 0 {
            let side1 = commit(repo, None, &format!("side {} a", i), &[tip]);
            let side2 = commit(repo, None, &format!("side {} b", i), &[side1]);
            let main = commit(repo, Some("HEAD"), &format!("main {}", i), &[tip]);
            tip = commit(repo, Some("HEAD"), &format!("merge {}", i), &[main, side2]);
        } else {
            tip = commit(repo, Some("HEAD"), &format!("commit {}", i), &[tip]);
        }
    }
    tip
}
