use std::fmt;

use crate::{Board, Direction};

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (loc, tile) in self.tiles().iter().enumerate() {
            if loc != 0 {
                if loc % self.dim() as usize == 0 {
                    "\n".fmt(f)?;
                } else {
                    " ".fmt(f)?;
                }
            }
            tile.fmt(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Up => "up",
        }
        .fmt(f)
    }
}
