//! Play command - interactive game against the AI

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output,
    config::{Difficulty, GameConfig},
    controller::{GameController, Phase},
    tictactoe::{BoardSize, Symbol},
};

#[derive(Parser, Debug, Default)]
#[command(about = "Play against the AI in the terminal")]
pub struct PlayArgs {
    /// Board size: 3x3, 5x5 or 9x9
    #[arg(long, short = 's')]
    pub size: Option<BoardSize>,

    /// AI difficulty: easy, medium, hard or impossible
    #[arg(long, short = 'd')]
    pub difficulty: Option<Difficulty>,

    /// Your mark (`x` or `o`)
    #[arg(long)]
    pub symbol: Option<Symbol>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Search depth for hard and impossible, instead of the per-size default
    #[arg(long)]
    pub depth: Option<u32>,

    /// JSON config file; flags given on the command line take precedence
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

/// A line typed at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 0-based cell
    Move { row: usize, col: usize },
    Reset,
    Quit,
}

/// Parse `row col` (1-based, space or comma separated), `r` or `q`
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Some(Command::Quit),
        "r" | "reset" => return Some(Command::Reset),
        _ => {}
    }

    let mut parts = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() || row == 0 || col == 0 {
        return None;
    }
    Some(Command::Move {
        row: row - 1,
        col: col - 1,
    })
}

/// Merge the config file (if any) with command-line overrides
pub fn resolve_config(args: &PlayArgs) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(size) = args.size {
        config.size = size;
    }
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(symbol) = args.symbol {
        config.human_symbol = symbol;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(depth) = args.depth {
        config.search_depth = Some(depth);
    }

    config.validate()?;
    Ok(config)
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    tracing::debug!(?config, "starting interactive game");

    let mut game = GameController::new(config)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut game, stdin.lock(), stdout.lock())
}

/// Drive one terminal session until `q` or end of input
pub fn run_session<R: BufRead, W: Write>(
    game: &mut GameController,
    input: R,
    mut out: W,
) -> Result<()> {
    let config = game.config().clone();
    writeln!(
        out,
        "{} board, {} in a row wins. You play {}, the AI ({}) plays {}.",
        config.size,
        config.win_length(),
        config.human_symbol,
        config.difficulty,
        config.ai_symbol()
    )?;
    writeln!(
        out,
        "Enter moves as `row col` (1-based), `r` to start over, `q` to quit."
    )?;
    write!(out, "\n{}", output::render_board(game.board()))?;
    prompt(&mut out)?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Reset) => {
                game.reset();
                writeln!(out, "New game.")?;
            }
            Some(Command::Move { row, col }) => {
                if matches!(game.phase(), Phase::GameOver(_)) {
                    writeln!(out, "The game is over; `r` starts a new one.")?;
                } else if !game.submit_human_move(row, col).accepted {
                    writeln!(out, "Cell {} {} is not available.", row + 1, col + 1)?;
                } else if let Some(mv) = game.request_ai_move() {
                    writeln!(out, "AI plays {} {}", mv.row + 1, mv.col + 1)?;
                }
            }
            None => {
                writeln!(
                    out,
                    "Could not read `{}`; expected `row col`, `r` or `q`.",
                    line.trim()
                )?;
                prompt(&mut out)?;
                continue;
            }
        }

        write!(out, "\n{}", output::render_board(game.board()))?;
        if let Phase::GameOver(outcome) = game.phase() {
            writeln!(out, "{}", output::describe_outcome(outcome))?;
        }
        prompt(&mut out)?;
    }

    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(game: &mut GameController, input: &str) -> String {
        let mut out = Vec::new();
        run_session(game, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("q"), Some(Command::Quit));
        assert_eq!(parse_command(" R "), Some(Command::Reset));
        assert_eq!(parse_command("2 3"), Some(Command::Move { row: 1, col: 2 }));
        assert_eq!(parse_command("1,1"), Some(Command::Move { row: 0, col: 0 }));
        assert_eq!(parse_command("0 1"), None);
        assert_eq!(parse_command("1"), None);
        assert_eq!(parse_command("1 2 3"), None);
        assert_eq!(parse_command("a b"), None);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        GameConfig::new(BoardSize::Nine)
            .with_difficulty(Difficulty::Easy)
            .with_seed(1)
            .save(&path)
            .unwrap();

        let args = PlayArgs {
            difficulty: Some(Difficulty::Medium),
            config: Some(path),
            ..PlayArgs::default()
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.size, BoardSize::Nine);
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.seed, Some(1));
    }

    #[test]
    fn test_zero_depth_rejected() {
        let args = PlayArgs {
            depth: Some(0),
            ..PlayArgs::default()
        };
        assert!(resolve_config(&args).is_err());
    }

    #[test]
    fn test_session_move_and_ai_reply() {
        let mut game =
            GameController::new(GameConfig::default().with_difficulty(Difficulty::Hard)).unwrap();
        let text = session(&mut game, "2 2\nq\n");

        assert!(text.contains("You play X"));
        assert!(text.contains("AI plays"));
        assert_eq!(game.board().occupied_count(), 2);
    }

    #[test]
    fn test_session_rejects_bad_input_and_resets() {
        let mut game = GameController::new(
            GameConfig::default()
                .with_difficulty(Difficulty::Easy)
                .with_seed(3),
        )
        .unwrap();
        let text = session(&mut game, "4 4\nhello\n1 1\nr\n");

        assert!(text.contains("Cell 4 4 is not available."));
        assert!(text.contains("Could not read `hello`"));
        assert!(text.contains("New game."));
        assert_eq!(game.board().occupied_count(), 0);
    }
}
