//! Scoring of candidate boards against a target.
//!
//! The combined score is the empty slot's Manhattan displacement plus
//! the count of out-of-place cells. It is not an admissible bound on the
//! remaining move count, so a search guided by it finds a solution, not
//! necessarily a shortest one.
//!
//! Both boards handed to these functions must share one dimension.

use crate::Board;

/// City-block distance between the empty slot's position in `current`
/// and its position in `expected`. Only the empty slot is measured.
pub fn manhattan_distance(current: &Board, expected: &Board) -> u32 {
    let from = current.empty_pos();
    let to = expected.empty_pos();
    u32::from(from.0.abs_diff(to.0)) + u32::from(from.1.abs_diff(to.1))
}

/// Number of cells whose tile differs between the two boards, the empty
/// slot included.
pub fn out_of_place(current: &Board, expected: &Board) -> u32 {
    current
        .tiles()
        .iter()
        .zip(expected.tiles())
        .filter(|(a, b)| a != b)
        .count() as u32
}

/// Combined incorrectness estimate used to order the search frontier.
pub fn heuristic(current: &Board, expected: &Board) -> u32 {
    manhattan_distance(current, expected) + out_of_place(current, expected)
}
