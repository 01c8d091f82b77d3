use rustc_hash::{FxHashMap, FxHashSet};

use super::commit::{CommitRecord, ObjectId};

/// Forward (commit -> parents) and reverse (parent -> children) adjacency.
///
/// Every edge `c -> p` in `forward` is mirrored by `p -> c` in `reverse`.
/// Parents that were never parsed (dangling parents) can be keys in
/// `reverse` without having a commit record.
#[derive(Debug, Default)]
pub struct CommitGraph {
    forward: FxHashMap<ObjectId, Vec<ObjectId>>,
    reverse: FxHashMap<ObjectId, Vec<ObjectId>>,
}

impl CommitGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `commit` with its ordered parents, mirroring each edge
    fn link(&mut self, commit: &ObjectId, parents: &[ObjectId]) {
        let edges = self.forward.entry(commit.clone()).or_default();
        for parent in parents {
            edges.push(parent.clone());
            self.reverse
                .entry(parent.clone())
                .or_default()
                .push(commit.clone());
        }
    }

    /// Parents of `id`, empty when unknown
    pub fn parents(&self, id: &str) -> &[ObjectId] {
        self.forward.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Children of `id` in insertion order, empty when unknown
    pub fn children(&self, id: &str) -> &[ObjectId] {
        self.reverse.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn forward(&self) -> &FxHashMap<ObjectId, Vec<ObjectId>> {
        &self.forward
    }

    pub fn reverse(&self) -> &FxHashMap<ObjectId, Vec<ObjectId>> {
        &self.reverse
    }

    pub fn edge_count(&self) -> usize {
        self.forward.values().map(Vec::len).sum()
    }
}

/// Commit table plus graph for a single analysis run.
///
/// Built once, then only read by the metric functions.
#[derive(Debug, Default)]
pub struct CommitDag {
    commits: FxHashMap<ObjectId, CommitRecord>,
    graph: CommitGraph,
}

impl CommitDag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parsed commit and its edges.
    ///
    /// Returns `false` (and changes nothing) if the id is already present.
    pub fn insert_commit(&mut self, id: ObjectId, record: CommitRecord) -> bool {
        if self.commits.contains_key(&id) {
            return false;
        }
        self.graph.link(&id, &record.parents);
        self.commits.insert(id, record);
        true
    }

    pub fn commit(&self, id: &str) -> Option<&CommitRecord> {
        self.commits.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.commits.contains_key(id)
    }

    pub fn commits(&self) -> &FxHashMap<ObjectId, CommitRecord> {
        &self.commits
    }

    pub fn graph(&self) -> &CommitGraph {
        &self.graph
    }

    #[inline]
    pub fn parents(&self, id: &str) -> &[ObjectId] {
        self.graph.parents(id)
    }

    #[inline]
    pub fn children(&self, id: &str) -> &[ObjectId] {
        self.graph.children(id)
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Commits in the table with no forward edges
    pub fn roots(&self) -> FxHashSet<&ObjectId> {
        self.commits
            .keys()
            .filter(|id| self.graph.parents(id.as_str()).is_empty())
            .collect()
    }

    /// 1 for a merge commit, 0 otherwise (dangling parents included)
    #[inline]
    pub fn merge_debt(&self, id: &str) -> u32 {
        match self.commits.get(id) {
            Some(record) if record.is_merge() => 1,
            _ => 0,
        }
    }

    /// Parents referenced by some commit but missing from the table
    pub fn dangling_parents(&self) -> Vec<&ObjectId> {
        let mut dangling: Vec<&ObjectId> = self
            .graph
            .reverse
            .keys()
            .filter(|id| !self.commits.contains_key(id.as_str()))
            .collect();
        dangling.sort();
        dangling
    }
}
