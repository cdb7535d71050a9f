use anyhow::{bail, ensure, Context, Result};
use console::{Key, Term};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use npuzzle_solver::solve::{self, SearchError};
use npuzzle_solver::{Direction, Puzzle};

enum Action {
    Exit,
    Go(Direction),
    Undo,
    Reset,
}

impl TryFrom<Key> for Action {
    type Error = ();

    fn try_from(key: Key) -> Result<Self, Self::Error> {
        Ok(match key {
            Key::ArrowLeft | Key::Char('a') => Self::Go(Direction::Left),
            Key::ArrowRight | Key::Char('d') => Self::Go(Direction::Right),
            Key::ArrowUp | Key::Char('w') => Self::Go(Direction::Up),
            Key::ArrowDown | Key::Char('s') => Self::Go(Direction::Down),
            Key::Escape | Key::Char('q') => Self::Exit,
            Key::Char('z') => Self::Undo,
            Key::Char('r') => Self::Reset,
            _ => return Err(()),
        })
    }
}

fn main() -> Result<()> {
    let mut play_mode = false;
    let mut limit = None;
    let mut files = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--play" => play_mode = true,
            "--limit" => {
                let value = args.next().context("--limit needs a value")?;
                limit = Some(value.parse::<usize>().context("Invalid --limit value")?);
            }
            _ => files.push(arg),
        }
    }
    ensure!(!files.is_empty(), "Missing puzzle file argument");

    if play_mode {
        ensure!(files.len() == 1, "--play takes a single puzzle file");
        return play(&load(&files[0])?);
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template(
        "{spinner} expanded {pos} states ({per_sec})",
    )?);

    let reports = files
        .par_iter()
        .map(|path| (path, solve_file(path, limit, &pb)))
        .collect::<Vec<_>>();
    pb.finish_and_clear();

    let mut failed = false;
    for (path, report) in reports {
        match report {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("{path}: {err:#}");
                failed = true;
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
    Ok(())
}

fn load(path: &str) -> Result<Puzzle> {
    let data =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    data.parse::<Puzzle>()
        .with_context(|| format!("Failed to parse {path}"))
}

fn solve_file(path: &str, limit: Option<usize>, pb: &ProgressBar) -> Result<String> {
    let puzzle = load(path)?;

    let solution = match solve::best_first(&puzzle, limit, || pb.inc(1)) {
        Ok(solution) => solution,
        Err(SearchError::NoSolution) => bail!("No solution reachable from the start board"),
        Err(SearchError::LimitReached) => bail!("Expansion limit reached without a solution"),
    };

    let mut text = format!("{path}:\n{}\n\n", puzzle.start);
    if solution.moves.is_empty() {
        text.push_str("already solved");
    } else {
        let moves = solution
            .moves
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ");
        text.push_str(&format!("solved in {} moves:\n{moves}", solution.moves.len()));
    }
    Ok(text)
}

fn play(puzzle: &Puzzle) -> Result<()> {
    let mut board = puzzle.start.clone();
    let mut history = Vec::new();

    let term = Term::stderr();
    loop {
        eprintln!("{board}\n");
        if board == puzzle.target {
            eprintln!("Solved in {} moves", history.len());
            return Ok(());
        }

        let action = loop {
            if let Ok(action) = Action::try_from(term.read_key()?) {
                break action;
            }
        };

        match action {
            Action::Exit => return Ok(()),
            Action::Go(dir) => {
                if let Some(next) = board.slide(dir) {
                    history.push(board);
                    board = next;
                }
            }
            Action::Undo => {
                if let Some(last) = history.pop() {
                    board = last;
                }
            }
            Action::Reset => {
                history.push(std::mem::replace(&mut board, puzzle.start.clone()));
            }
        }
    }
}
