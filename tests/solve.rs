use anyhow::{bail, ensure, Context};
use common::*;
use npuzzle_solver::{solve, Puzzle};

mod common;

fn main() {
    run_tests("solve", |content| {
        let input = content
            .split_once(SEPARATOR)
            .map_or(content, |(input, _)| input)
            .trim();
        let puzzle = input.parse::<Puzzle>().context("Invalid puzzle")?;

        let solution = match solve::best_first(&puzzle, None, || {}) {
            Ok(solution) => solution,
            Err(err) => bail!("Search failed: {err:?}"),
        };

        // Validate by replaying from the start board.
        let mut board = puzzle.start.clone();
        for (&dir, i) in solution.moves.iter().zip(1..) {
            board = board
                .slide(dir)
                .with_context(|| format!("Illegal move {i} in solution"))?;
        }
        ensure!(board == puzzle.target, "Replayed moves miss the target");
        ensure!(board == solution.board, "Reported final board mismatch");

        Ok(format!("{input}\n\n{SEPARATOR}{board}\n"))
    });
}
