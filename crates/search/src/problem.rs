use std::sync::Arc;

use shared::domain::Chapter;

use crate::{node::Node, reach::ReachTable, NodeId, SearchError};

pub const DEFAULT_TOLERANCE: u32 = 5;

/// Running totals for a partial selection.
///
/// `last` is the catalogue position of the most recently selected chapter.
/// The full selection is recovered by walking parent links in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchState {
    pub verses: u32,
    pub words: u32,
    pub last: Option<usize>,
}

/// Pick a set of chapters whose verse total lands in `[goal, goal + tolerance]`.
#[derive(Debug, Clone)]
pub struct SelectionProblem {
    goal: u32,
    tolerance: u32,
    chapters: Arc<[Chapter]>,
    reach: ReachTable,
}

impl SelectionProblem {
    pub fn new(goal: u32, tolerance: u32, chapters: Arc<[Chapter]>) -> Result<Self, SearchError> {
        if goal == 0 {
            return Err(SearchError::InvalidGoal(goal));
        }
        if chapters.is_empty() {
            return Err(SearchError::EmptyCatalogue);
        }
        let total: u64 = chapters.iter().map(|chapter| u64::from(chapter.verses)).sum();
        let cap = u64::from(goal.saturating_add(tolerance)).min(total) as u32;
        let reach = ReachTable::build(&chapters, cap);
        Ok(Self {
            goal,
            tolerance,
            chapters,
            reach,
        })
    }

    pub fn goal(&self) -> u32 {
        self.goal
    }

    pub fn tolerance(&self) -> u32 {
        self.tolerance
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn initial_state(&self) -> SearchState {
        SearchState::default()
    }

    pub fn is_goal(&self, state: &SearchState) -> bool {
        state.verses >= self.goal && state.verses <= self.goal.saturating_add(self.tolerance)
    }

    /// Whether some set of the chapters still on offer can bring `state` into
    /// the goal window. Goal states count, via the empty set.
    pub fn can_complete(&self, state: &SearchState) -> bool {
        let ceiling = self.goal.saturating_add(self.tolerance);
        if state.verses > ceiling {
            return false;
        }
        let start = state.last.map_or(0, |last| last + 1);
        self.reach.any_in(
            start,
            self.goal.saturating_sub(state.verses),
            ceiling - state.verses,
        )
    }

    /// Upper bound on a child's verse total before it is pruned.
    pub fn overshoot_limit(&self) -> u32 {
        self.goal.saturating_add(self.tolerance.saturating_mul(2))
    }

    /// Catalogue positions that may extend `state`.
    ///
    /// Only positions after the last selected one are offered, so a set of
    /// chapters is generated once rather than once per ordering.
    pub fn valid_actions(&self, state: &SearchState) -> std::ops::Range<usize> {
        let start = state.last.map_or(0, |last| last + 1);
        start.min(self.chapters.len())..self.chapters.len()
    }

    pub fn heuristic(&self, state: &SearchState) -> u64 {
        let verses = u64::from(state.verses);
        let goal = u64::from(self.goal);
        if verses > goal {
            (verses - goal) * 2
        } else {
            goal - verses
        }
    }

    pub fn expand(&self, parent_id: NodeId, parent: &Node) -> Vec<Node> {
        let limit = self.overshoot_limit();
        self.valid_actions(&parent.state)
            .filter_map(|position| {
                let chapter = &self.chapters[position];
                let state = SearchState {
                    verses: parent.state.verses.saturating_add(chapter.verses),
                    words: parent.state.words.saturating_add(chapter.words),
                    last: Some(position),
                };
                if state.verses > limit || !self.can_complete(&state) {
                    return None;
                }
                let g = parent.g + u64::from(chapter.verses);
                let f = g + self.heuristic(&state);
                Some(Node {
                    state,
                    parent: Some(parent_id),
                    action: Some(position),
                    g,
                    f,
                    depth: parent.depth + 1,
                })
            })
            .collect()
    }

    /// Distance from the goal, used to rank collected solutions.
    pub fn distance(&self, state: &SearchState) -> u32 {
        state.verses.abs_diff(self.goal)
    }
}
