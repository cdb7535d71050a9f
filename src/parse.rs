use std::str::FromStr;

use anyhow::{ensure, Context, Result};

use crate::{Board, Puzzle, Tile};

impl FromStr for Board {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tiles = s
            .split_whitespace()
            .map(|tok| {
                tok.parse::<Tile>()
                    .with_context(|| format!("Invalid tile: {tok:?}"))
            })
            .collect::<Result<Vec<_>>>()?;
        Board::from_tiles(tiles)
    }
}

impl FromStr for Puzzle {
    type Err = anyhow::Error;

    /// One or two boards separated by a blank line. The second board is
    /// the target; with only one, the canonical solved board is assumed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut blocks = s.split("\n\n").map(str::trim).filter(|block| !block.is_empty());

        let start = blocks
            .next()
            .context("Missing start board")?
            .parse::<Board>()
            .context("Invalid start board")?;
        let target = match blocks.next() {
            Some(block) => block.parse::<Board>().context("Invalid target board")?,
            None => Board::solved(start.dim()),
        };
        ensure!(blocks.next().is_none(), "Expected at most two boards");
        ensure!(
            start.dim() == target.dim(),
            "Start is {0}x{0} but target is {1}x{1}",
            start.dim(),
            target.dim(),
        );

        Ok(Puzzle { start, target })
    }
}
