//! Best-first search over board states.
//!
//! The frontier always yields the lowest-scored candidate (FIFO among
//! equal scores); already-expanded boards are suppressed through a
//! structurally-hashed visited set. The guiding score is not admissible,
//! so the returned move sequence is a solution but not necessarily a
//! shortest one.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::heuristic::heuristic;
use crate::{Board, Direction, Puzzle};

type IndexSet<K> = indexmap::IndexSet<K, fxhash::FxBuildHasher>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// The board the search terminated on; equal to the puzzle's target.
    pub board: Board,
    /// Moves transforming the start board into `board`, in order.
    pub moves: Vec<Direction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SearchError {
    /// The frontier emptied before the target was reached.
    NoSolution,
    /// The expansion cap was hit before the target was reached.
    LimitReached,
}

#[derive(PartialEq, Eq)]
struct Node {
    score: u32,
    seq: u64,
    board: Board,
    moves: Vec<Direction>,
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap: lowest score first, then insertion order.
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Searches for a move sequence transforming `puzzle.start` into
/// `puzzle.target`, expanding at most `max_expansions` states when a cap
/// is given. `on_step` is invoked once per expanded state.
///
/// An unsolvable puzzle exhausts its reachable state space and reports
/// `NoSolution`; on larger boards that can take a long time and a lot of
/// memory, which is what `max_expansions` guards against.
pub fn best_first(
    puzzle: &Puzzle,
    max_expansions: Option<usize>,
    mut on_step: impl FnMut(),
) -> Result<Solution, SearchError> {
    if puzzle.start == puzzle.target {
        return Ok(Solution {
            board: puzzle.start.clone(),
            moves: Vec::new(),
        });
    }

    let mut visited = IndexSet::default();
    let mut frontier = BinaryHeap::new();
    let mut seq = 0u64;

    for (dir, next) in puzzle.start.successors() {
        frontier.push(Node {
            score: heuristic(&next, &puzzle.target),
            seq,
            board: next,
            moves: vec![dir],
        });
        seq += 1;
    }

    while let Some(node) = frontier.pop() {
        if node.board == puzzle.target {
            return Ok(Solution {
                board: node.board,
                moves: node.moves,
            });
        }

        if !visited.insert(node.board.clone()) {
            continue;
        }
        if max_expansions.map_or(false, |cap| visited.len() > cap) {
            return Err(SearchError::LimitReached);
        }
        on_step();

        for (dir, next) in node.board.successors() {
            if visited.contains(&next) {
                continue;
            }
            let mut moves = node.moves.clone();
            moves.push(dir);
            frontier.push(Node {
                score: heuristic(&next, &puzzle.target),
                seq,
                board: next,
                moves,
            });
            seq += 1;
        }
    }

    Err(SearchError::NoSolution)
}
