//! Critical path search
//!
//! Dijkstra over parent edges from head, stopping at the first root popped.
//! Entering a merge commit costs 1, any other commit costs 0, so the path
//! found crosses the fewest merges rather than the fewest commits.
//!
//! The heap key is `(distance, id)`: on equal distance the lexicographically
//! smallest id is expanded first, which keeps the result deterministic.

use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::model::{CommitDag, ObjectId};

/// Path from `head` to a root crossing the fewest merges.
///
/// Falls back to `[head]` when the DAG has no roots or none is reachable.
/// Dangling parents are dead ends: they cost 0 but are never roots.
pub fn critical_path(dag: &CommitDag, head: &ObjectId) -> Vec<ObjectId> {
    let roots = dag.roots();
    if roots.is_empty() {
        return vec![head.clone()];
    }

    let mut distances: FxHashMap<&ObjectId, u32> = FxHashMap::default();
    let mut previous: FxHashMap<&ObjectId, &ObjectId> = FxHashMap::default();
    let mut finalized: FxHashSet<&ObjectId> = FxHashSet::default();
    let mut heap = BinaryHeap::new();

    distances.insert(head, 0);
    heap.push(Reverse((0u32, head)));

    while let Some(Reverse((distance, current))) = heap.pop() {
        if !finalized.insert(current) {
            continue;
        }

        if roots.contains(current) {
            return trace_back(&previous, current);
        }

        for parent in dag.parents(current.as_str()) {
            if finalized.contains(parent) {
                continue;
            }
            let candidate = distance + dag.merge_debt(parent.as_str());
            let improves = distances.get(parent).is_none_or(|&known| candidate < known);
            if improves {
                distances.insert(parent, candidate);
                previous.insert(parent, current);
                heap.push(Reverse((candidate, parent)));
            }
        }
    }

    vec![head.clone()]
}

fn trace_back(previous: &FxHashMap<&ObjectId, &ObjectId>, end: &ObjectId) -> Vec<ObjectId> {
    let mut path = vec![end.clone()];
    let mut node = end;
    while let Some(&prev) = previous.get(node) {
        path.push(prev.clone());
        node = prev;
    }
    path.reverse();
    path
}

/// Number of merge commits on a path (the path's total weight)
pub fn merge_count(dag: &CommitDag, path: &[ObjectId]) -> u32 {
    path.iter().skip(1).map(|id| dag.merge_debt(id.as_str())).sum()
}
