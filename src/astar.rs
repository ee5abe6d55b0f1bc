//! A best-first search engine in the spirit of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html),
//! restricted to unit edge costs. Nodes are expanded in order of estimated total cost, with
//! ties broken by insertion order so that results are reproducible.
use fxhash::{FxBuildHasher, FxHashMap, FxHashSet};
use indexmap::IndexMap;
use log::debug;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::{BuildHasher, Hash};

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Result of a search. Not finding the goal is an ordinary outcome, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome<N, C> {
    /// A path from start to goal, both inclusive, together with its cost.
    Found { path: Vec<N>, cost: C },
    /// The frontier ran empty before the goal was reached.
    Unreachable,
}

impl<N, C: Copy> SearchOutcome<N, C> {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }
    pub fn path(&self) -> Option<&[N]> {
        match self {
            SearchOutcome::Found { path, .. } => Some(path),
            SearchOutcome::Unreachable => None,
        }
    }
    pub fn cost(&self) -> Option<C> {
        match self {
            SearchOutcome::Found { cost, .. } => Some(*cost),
            SearchOutcome::Unreachable => None,
        }
    }
    pub fn into_path(self) -> Option<Vec<N>> {
        match self {
            SearchOutcome::Found { path, .. } => Some(path),
            SearchOutcome::Unreachable => None,
        }
    }
}

/// A frontier entry (f, sequence, node).
struct FrontierEntry<N, C> {
    estimated_cost: C,
    sequence: usize,
    node: N,
}

impl<N, C: PartialEq> Eq for FrontierEntry<N, C> {}

impl<N, C: PartialEq> PartialEq for FrontierEntry<N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.sequence == other.sequence
    }
}

impl<N, C: Ord> PartialOrd for FrontierEntry<N, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, C: Ord> Ord for FrontierEntry<N, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so that the max-heap pops the smallest estimated cost, and among equal
        // estimates the entry that was inserted first.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Walks the predecessor links back from `goal` until a node without predecessor (the start)
/// is met and returns the visited nodes in start to goal order.
pub fn reconstruct_path<N, S>(came_from: &IndexMap<N, N, S>, goal: N) -> Vec<N>
where
    N: Eq + Hash + Clone,
    S: BuildHasher,
{
    let mut path: Vec<N> =
        std::iter::successors(Some(goal), |node| came_from.get(node).cloned()).collect();
    path.reverse();
    path
}

/// Runs A* from `start` with unit cost per step. `successors` lists the nodes reachable in one
/// step, `heuristic` estimates the remaining cost and must not overestimate it for the result to
/// be optimal, and `success` recognises the goal.
///
/// All bookkeeping (cost tables, predecessors, frontier) lives and dies within one call.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> SearchOutcome<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + One + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut g_score: FxHashMap<N, C> = FxHashMap::default();
    let mut f_score: FxHashMap<N, C> = FxHashMap::default();
    let mut came_from: FxIndexMap<N, N> = FxIndexMap::default();
    let mut in_frontier: FxHashSet<N> = FxHashSet::default();
    let mut frontier = BinaryHeap::new();
    let mut sequence = 0;
    let mut expanded = 0;
    let mut delayed = 0;

    let start_estimate = heuristic(start);
    g_score.insert(start.clone(), C::zero());
    f_score.insert(start.clone(), start_estimate);
    frontier.push(FrontierEntry {
        estimated_cost: start_estimate,
        sequence,
        node: start.clone(),
    });
    in_frontier.insert(start.clone());

    while let Some(FrontierEntry {
        estimated_cost,
        node,
        ..
    }) = frontier.pop()
    {
        in_frontier.remove(&node);
        let Some(&current_g) = g_score.get(&node) else {
            continue;
        };
        // The entry keeps the estimate it was pushed with; the cost tables hold the current one.
        if f_score.get(&node).is_some_and(|&f| f < estimated_cost) {
            delayed += 1;
        }
        if success(&node) {
            debug!(
                "Goal reached after expanding {} nodes ({} pushes, {} with outdated estimate)",
                expanded,
                sequence + 1,
                delayed
            );
            let path = reconstruct_path(&came_from, node);
            return SearchOutcome::Found {
                path,
                cost: current_g,
            };
        }
        expanded += 1;
        for successor in successors(&node) {
            let tentative_g = current_g + C::one();
            let improves = g_score
                .get(&successor)
                .map_or(true, |&known| tentative_g < known);
            if !improves {
                continue;
            }
            let estimate = tentative_g + heuristic(&successor);
            came_from.insert(successor.clone(), node.clone());
            g_score.insert(successor.clone(), tentative_g);
            f_score.insert(successor.clone(), estimate);
            if !in_frontier.contains(&successor) {
                sequence += 1;
                frontier.push(FrontierEntry {
                    estimated_cost: estimate,
                    sequence,
                    node: successor.clone(),
                });
                in_frontier.insert(successor);
            }
        }
    }
    debug!(
        "Frontier exhausted after expanding {} nodes ({} pushes)",
        expanded,
        sequence + 1
    );
    SearchOutcome::Unreachable
}
