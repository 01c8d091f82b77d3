//! Merge bottleneck ranking

use rustc_hash::FxHashMap;

use crate::model::{CommitDag, ObjectId};

pub const DEFAULT_TOP_K: usize = 5;

/// Number of distinct commits naming each id as a parent
pub fn indegrees(dag: &CommitDag) -> FxHashMap<&ObjectId, usize> {
    let mut indegrees = FxHashMap::default();
    for parents in dag.graph().forward().values() {
        for (i, parent) in parents.iter().enumerate() {
            // A parent repeated within one commit counts once
            if parents[..i].contains(parent) {
                continue;
            }
            *indegrees.entry(parent).or_insert(0) += 1;
        }
    }
    indegrees
}

/// Up to `k` ids with indegree >= 2, highest indegree first.
///
/// Equal indegrees are ordered by id, descending.
pub fn bottlenecks(dag: &CommitDag, k: usize) -> Vec<ObjectId> {
    let mut ranked: Vec<(usize, &ObjectId)> = indegrees(dag)
        .into_iter()
        .filter(|&(_, indegree)| indegree >= 2)
        .map(|(id, indegree)| (indegree, id))
        .collect();
    ranked.sort_unstable_by(|a, b| b.cmp(a));
    ranked.into_iter().take(k).map(|(_, id)| id.clone()).collect()
}
