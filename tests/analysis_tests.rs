// End-to-end analysis tests
// Full pipeline from a git repo on disk to the metrics report

mod common;

use git2::Oid;
use repodag::repository::GitDir;
use repodag::{Analyzer, ObjectId, OutputMode};

fn id(oid: Oid) -> ObjectId {
    ObjectId::from(oid.to_string())
}

#[test]
fn test_linear_history() {
    let (_dir, repo_path, repo) = common::create_test_repo();
    let c1 = common::add_commit(&repo, &[("f.txt", b"1")], "first");
    let c2 = common::add_commit(&repo, &[("f.txt", b"2")], "second");
    let c3 = common::add_commit(&repo, &[("f.txt", b"3")], "third");

    let report = Analyzer::open(&repo_path)
        .unwrap()
        .with_mode(OutputMode::Quiet)
        .analyze()
        .unwrap();

    assert_eq!(report.head, id(c3));
    assert_eq!(report.critical_path, vec![id(c3), id(c2), id(c1)]);
    assert!(report.bottlenecks.is_empty());
    let expected = (1.0 / 1.0 + 1.0 / 2.0) / 3.0;
    assert!((report.density - expected).abs() < 1e-12);
}

#[test]
fn test_single_commit() {
    let (_dir, repo_path, repo) = common::create_test_repo();
    let root = common::add_commit(&repo, &[("f.txt", b"1")], "only");

    let report = Analyzer::open(&repo_path)
        .unwrap()
        .with_mode(OutputMode::Quiet)
        .analyze()
        .unwrap();

    assert_eq!(report.critical_path, vec![id(root)]);
    assert_eq!(report.density, 0.0);
}

#[test]
fn test_critical_path_avoids_merges() {
    let (_dir, repo_path, repo) = common::create_test_repo();
    // root <- x, A = merge(root, x); root <- C <- B; head = merge(A, B)
    let root = common::add_commit(&repo, &[("f.txt", b"root")], "root");
    let x = common::detached_commit(&repo, "x", &[root]);
    let a = common::commit_with_parents(&repo, Some("HEAD"), &[("f.txt", b"A")], "A", &[root, x]);
    let c = common::detached_commit(&repo, "C", &[root]);
    let b = common::detached_commit(&repo, "B", &[c]);
    let head = common::commit_with_parents(&repo, Some("HEAD"), &[("f.txt", b"H")], "H", &[a, b]);

    let report = Analyzer::open(&repo_path)
        .unwrap()
        .with_mode(OutputMode::Quiet)
        .analyze()
        .unwrap();

    assert_eq!(report.critical_path, vec![id(head), id(b), id(c), id(root)]);
    // root has three children: x, A and C
    assert_eq!(report.bottlenecks, vec![id(root)]);
}

#[test]
fn test_bottlenecks_rank_by_child_count() {
    let (_dir, repo_path, repo) = common::create_test_repo();
    let root = common::add_commit(&repo, &[("f.txt", b"root")], "root");
    let hub = common::add_commit(&repo, &[("f.txt", b"hub")], "hub");
    let s1 = common::detached_commit(&repo, "s1", &[hub]);
    let s2 = common::detached_commit(&repo, "s2", &[hub]);
    let m1 = common::commit_with_parents(&repo, Some("HEAD"), &[("f.txt", b"m1")], "m1", &[hub, s1]);
    let _m2 = common::commit_with_parents(&repo, Some("HEAD"), &[("f.txt", b"m2")], "m2", &[m1, s2]);

    let analyzer = Analyzer::open(&repo_path).unwrap().with_mode(OutputMode::Quiet);
    let report = analyzer.analyze().unwrap();

    // hub: s1, s2, m1 -> 3; root: hub -> 1
    assert_eq!(report.bottlenecks, vec![id(hub)]);
    assert!(!report.bottlenecks.contains(&id(root)));

    let limited = analyzer.with_top_k(0).analyze().unwrap();
    assert!(limited.bottlenecks.is_empty());
}

#[test]
fn test_detached_head() {
    let (_dir, repo_path, repo) = common::create_test_repo();
    let c1 = common::add_commit(&repo, &[("f.txt", b"1")], "first");
    let _c2 = common::add_commit(&repo, &[("f.txt", b"2")], "second");
    common::detach_head_at(&repo, c1);

    let report = Analyzer::open(&repo_path)
        .unwrap()
        .with_mode(OutputMode::Quiet)
        .analyze()
        .unwrap();

    assert_eq!(report.head, id(c1));
    assert_eq!(report.critical_path, vec![id(c1)]);
}

#[test]
fn test_missing_head_is_fatal() {
    let (_dir, _repo_path, repo) = common::create_test_repo();
    common::add_commit(&repo, &[("f.txt", b"1")], "first");
    std::fs::remove_file(repo.path().join("HEAD")).unwrap();

    let analyzer = Analyzer::new(GitDir::at(repo.path())).with_mode(OutputMode::Quiet);
    assert!(analyzer.analyze().is_err());
}

#[test]
fn test_open_rejects_plain_directory() {
    let dir = tempfile::TempDir::new().unwrap();
    assert!(Analyzer::open(dir.path()).is_err());
}

#[test]
fn test_bare_repository() {
    let dir = tempfile::TempDir::new().unwrap();
    let repo = git2::Repository::init_bare(dir.path()).unwrap();
    let root = common::commit_with_parents(&repo, Some("HEAD"), &[("f.txt", b"1")], "root", &[]);

    let report = Analyzer::open(dir.path())
        .unwrap()
        .with_mode(OutputMode::Quiet)
        .analyze()
        .unwrap();
    assert_eq!(report.head, id(root));
}

#[test]
fn test_report_serializes_for_collaborators() {
    let (_dir, repo_path, repo) = common::create_test_repo();
    let c1 = common::add_commit(&repo, &[("f.txt", b"1")], "first");

    let report = Analyzer::open(&repo_path)
        .unwrap()
        .with_mode(OutputMode::Quiet)
        .analyze()
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["head"], c1.to_string());
    assert_eq!(json["critical_path"][0], c1.to_string());
    assert!(json["bottlenecks"].as_array().unwrap().is_empty());
    assert_eq!(json["density"], 0.0);
}
