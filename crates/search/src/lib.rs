use std::{cmp::Ordering, collections::BinaryHeap};

use shared::domain::Chapter;
use thiserror::Error;
use tracing::{debug, trace};

mod node;
mod problem;
mod reach;

pub use node::{Node, SearchTree};
pub use problem::{SearchState, SelectionProblem, DEFAULT_TOLERANCE};

pub type NodeId = usize;

pub const DEFAULT_MAX_SOLUTIONS: usize = 10;
pub const DEFAULT_MAX_EXPANSIONS: usize = 10_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("chapter catalogue is empty")]
    EmptyCatalogue,
    #[error("verse goal must be positive, got {0}")]
    InvalidGoal(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Stop once this many goal nodes have been collected.
    pub max_solutions: usize,
    /// Stop once this many nodes have been expanded.
    pub max_expansions: usize,
    /// Nodes deeper than this are not expanded, so a selection holds at most
    /// `max_depth + 1` chapters.
    pub max_depth: Option<usize>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_solutions: DEFAULT_MAX_SOLUTIONS,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub chapters: Vec<Chapter>,
    pub verses: u32,
    pub words: u32,
}

impl Selection {
    pub fn names(&self) -> Vec<String> {
        self.chapters
            .iter()
            .map(|chapter| chapter.name.clone())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best: Option<Selection>,
    pub solutions_found: usize,
    pub expanded: usize,
    pub budget_exhausted: bool,
}

#[derive(Debug, PartialEq, Eq)]
struct FrontierEntry {
    f: u64,
    g: u64,
    seq: u64,
    node: NodeId,
}

// BinaryHeap pops the greatest entry: lowest f first, then the node with the
// most verses already covered, then the most recently pushed.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| self.g.cmp(&other.g))
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* over chapter subsets.
///
/// Goal nodes are collected instead of expanded. Among collected goals the one
/// closest to the target wins, ties going to the smaller word count. Children
/// that can no longer reach the goal window are never generated, so a greedy
/// dive always ends on a goal when one exists. If the expansion budget runs
/// out first, goal nodes still waiting in the frontier are considered too.
pub fn search(problem: &SelectionProblem, limits: &SearchLimits) -> SearchOutcome {
    if !problem.can_complete(&problem.initial_state()) {
        debug!(goal = problem.goal(), "goal window unreachable with this catalogue");
        return SearchOutcome {
            best: None,
            solutions_found: 0,
            expanded: 0,
            budget_exhausted: false,
        };
    }

    let mut tree = SearchTree::default();
    let mut frontier = BinaryHeap::new();
    let mut seq = 0u64;

    let root = tree.push(Node::root(problem.initial_state()));
    frontier.push(FrontierEntry {
        f: 0,
        g: 0,
        seq,
        node: root,
    });

    let mut best: Option<NodeId> = None;
    let mut solutions_found = 0usize;
    let mut expanded = 0usize;
    let mut budget_exhausted = false;
    let expand_ceiling = problem.goal().saturating_add(problem.tolerance());

    while let Some(entry) = frontier.pop() {
        if solutions_found >= limits.max_solutions {
            break;
        }

        let node = tree.get(entry.node);
        trace!(action = ?node.action, depth = node.depth, f = node.f, "popped node");

        if problem.is_goal(&node.state) {
            solutions_found += 1;
            debug!(
                verses = node.state.verses,
                words = node.state.words,
                depth = node.depth,
                "goal reached"
            );
            if improves_on(problem, &tree, best, entry.node) {
                best = Some(entry.node);
            }
            continue;
        }

        if limits.max_depth.is_some_and(|max| node.depth > max) {
            continue;
        }
        // Verse totals only grow, so nothing below this node can become a goal.
        if node.state.verses > expand_ceiling {
            continue;
        }

        if expanded >= limits.max_expansions {
            budget_exhausted = true;
            break;
        }
        expanded += 1;

        let children = problem.expand(entry.node, node);
        for child in children {
            let (f, g) = (child.f, child.g);
            let id = tree.push(child);
            seq += 1;
            frontier.push(FrontierEntry {
                f,
                g,
                seq,
                node: id,
            });
        }
    }

    if budget_exhausted {
        for entry in frontier {
            if problem.is_goal(&tree.get(entry.node).state)
                && improves_on(problem, &tree, best, entry.node)
            {
                best = Some(entry.node);
            }
        }
    }

    let best = best.map(|id| {
        let node = tree.get(id);
        Selection {
            chapters: tree
                .solution_path(id)
                .into_iter()
                .map(|position| problem.chapters()[position].clone())
                .collect(),
            verses: node.state.verses,
            words: node.state.words,
        }
    });

    debug!(
        goal = problem.goal(),
        solutions_found,
        expanded,
        generated = tree.len(),
        budget_exhausted,
        "search finished"
    );

    SearchOutcome {
        best,
        solutions_found,
        expanded,
        budget_exhausted,
    }
}

fn improves_on(
    problem: &SelectionProblem,
    tree: &SearchTree,
    best: Option<NodeId>,
    candidate: NodeId,
) -> bool {
    let Some(best) = best else {
        return true;
    };
    let (best, candidate) = (&tree.get(best).state, &tree.get(candidate).state);
    (problem.distance(candidate), candidate.words) < (problem.distance(best), best.words)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
