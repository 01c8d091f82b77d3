//! Graph metrics over a built [`CommitDag`](crate::model::CommitDag)
//!
//! All functions are total: a sparse or disconnected DAG yields the
//! fallback values (0.0 density, `[head]` path, short bottleneck list).

mod bottleneck;
mod critical_path;
mod depth;

pub use bottleneck::{bottlenecks, indegrees, DEFAULT_TOP_K};
pub use critical_path::{critical_path, merge_count};
pub use depth::{branch_density, density_of_levels, depths, level_counts};
