//! Breadth-first search over an adjacency oracle
//!
//! Nodes are plain `Copy` values (coordinates, indices). The graph is never
//! materialised: `adjacency(node)` is asked for a node's neighbours each time
//! the node is expanded, so callers can encode any connectivity rule in a
//! closure.
//!
//! # Example
//!
//! ```
//! use aoc23_solutions::utils::bfs;
//!
//! // a ring of six nodes
//! let ring = |n: u8| [(n + 1) % 6, (n + 5) % 6];
//! let dist = bfs::distances(0u8, ring);
//! assert_eq!(dist[&3], 3);
//! assert_eq!(bfs::distance_between(0u8, 4, ring), Some(2));
//! ```

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// Hop counts from `start` to every node reachable from it.
///
/// A node's distance is fixed the first time it is dequeued; since the queue
/// is processed level by level that is also its shortest distance. Nodes that
/// cannot be reached are absent from the map.
pub fn distances<N, F, I>(start: N, mut adjacency: F) -> HashMap<N, usize>
where
    N: Copy + Eq + Hash,
    F: FnMut(N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut dist = HashMap::new();
    let mut queue = VecDeque::from([(start, 0usize)]);

    while let Some((node, depth)) = queue.pop_front() {
        match dist.entry(node) {
            // already settled at this depth or better
            Entry::Occupied(_) => continue,
            Entry::Vacant(slot) => {
                slot.insert(depth);
            }
        }

        for next in adjacency(node) {
            if !dist.contains_key(&next) {
                queue.push_back((next, depth + 1));
            }
        }
    }

    log::debug!("bfs settled {} nodes", dist.len());
    dist
}

/// Hop count from `start` to `target`, stopping as soon as `target` is
/// dequeued. `None` when `target` is unreachable.
pub fn distance_between<N, F, I>(start: N, target: N, mut adjacency: F) -> Option<usize>
where
    N: Copy + Eq + Hash,
    F: FnMut(N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut settled = HashSet::new();
    let mut queue = VecDeque::from([(start, 0usize)]);

    while let Some((node, depth)) = queue.pop_front() {
        if node == target {
            return Some(depth);
        }
        if !settled.insert(node) {
            continue;
        }

        for next in adjacency(node) {
            if !settled.contains(&next) {
                queue.push_back((next, depth + 1));
            }
        }
    }

    None
}
