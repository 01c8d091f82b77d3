//! Depth from head and branch density

use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, VecDeque};

use crate::model::{CommitDag, ObjectId};

/// Breadth-first depth of every ancestor reachable from `head`.
///
/// `head` is always at depth 0, even when it is not in the DAG. The first
/// visit wins, so each depth is the shortest number of parent hops.
pub fn depths(dag: &CommitDag, head: &ObjectId) -> FxHashMap<ObjectId, usize> {
    let mut depths = FxHashMap::default();
    depths.insert(head.clone(), 0);

    let mut queue = VecDeque::from([head.clone()]);
    while let Some(current) = queue.pop_front() {
        let next_depth = depths[&current] + 1;
        for parent in dag.parents(current.as_str()) {
            if !depths.contains_key(parent) {
                depths.insert(parent.clone(), next_depth);
                queue.push_back(parent.clone());
            }
        }
    }

    depths
}

/// Number of commits at each depth, ascending by depth
pub fn level_counts(depths: &FxHashMap<ObjectId, usize>) -> BTreeMap<usize, usize> {
    let mut levels = BTreeMap::new();
    for &depth in depths.values() {
        *levels.entry(depth).or_insert(0) += 1;
    }
    levels
}

/// Sum of `count / level` over levels above 0, divided by the number of levels.
///
/// Shallow levels weigh more than deep ones. 0.0 when there are no levels.
pub fn branch_density(dag: &CommitDag, head: &ObjectId) -> f64 {
    density_of_levels(&level_counts(&depths(dag, head)))
}

pub fn density_of_levels(levels: &BTreeMap<usize, usize>) -> f64 {
    if levels.is_empty() {
        return 0.0;
    }

    let sum: f64 = levels
        .iter()
        .filter(|(level, _)| **level > 0)
        .map(|(&level, &count)| count as f64 / level as f64)
        .sum();
    sum / levels.len() as f64
}
