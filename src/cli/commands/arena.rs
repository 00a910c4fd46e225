//! Arena command - round robin between difficulty levels

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    arena::{Arena, ArenaResult, ProgressObserver, TracingObserver},
    cli::output,
    config::Difficulty,
    tictactoe::BoardSize,
};

#[derive(Parser, Debug)]
#[command(about = "Let difficulty levels play each other")]
pub struct ArenaArgs {
    /// Entrants (easy, medium, hard, impossible); all four when omitted
    #[arg(value_name = "DIFFICULTY")]
    pub entrants: Vec<Difficulty>,

    /// Board size: 3x3, 5x5 or 9x9
    #[arg(long, short = 's', default_value = "3x3")]
    pub size: BoardSize,

    /// Number of games per matchup
    #[arg(long, short = 'g', default_value_t = 10)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Search depth for hard and impossible, instead of the per-size default
    #[arg(long)]
    pub depth: Option<u32>,

    /// Save the full result as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Export the head-to-head table as CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

pub fn execute(args: ArenaArgs) -> Result<()> {
    let entrants = if args.entrants.is_empty() {
        Difficulty::ALL.to_vec()
    } else {
        args.entrants.clone()
    };

    println!("Arena on {} with {} entrants:", args.size, entrants.len());
    for (i, difficulty) in entrants.iter().enumerate() {
        println!("  {}: {difficulty}", i + 1);
    }
    println!("\nGames per matchup: {}", args.games);

    let mut arena = Arena::new(args.size, entrants).with_observer(Box::new(TracingObserver::new()));
    if let Some(seed) = args.seed {
        arena = arena.with_seed(seed);
    }
    if let Some(depth) = args.depth {
        arena = arena.with_search_depth(depth);
    }
    if !args.no_progress {
        arena = arena.with_observer(Box::new(ProgressObserver::new()));
    }

    let result = arena.run_round_robin(args.games)?;
    print_result(&result);

    if let Some(path) = &args.json {
        result.save_json(path)?;
        println!("\nResults saved to: {}", path.display());
    }
    if let Some(path) = &args.csv {
        result.export_csv(path)?;
        println!("Results exported to: {}", path.display());
    }

    Ok(())
}

fn print_result(result: &ArenaResult) {
    output::print_section("Arena Results");
    output::print_kv("Board", &result.board_size.to_string());
    output::print_kv("Total games", &result.total_games.to_string());

    println!("\nHead-to-Head Results:");
    println!("(Format: Player1 vs Player2 | W-D-L from Player1's perspective)");
    println!();
    for m in &result.head_to_head {
        let games = m.games().max(1);
        println!(
            "{} vs {} | {}-{}-{} ({} wins)",
            result.entrants[m.first],
            result.entrants[m.second],
            m.wins,
            m.draws,
            m.losses,
            output::format_percent(m.wins as f64 / games as f64)
        );
    }

    println!("\nOverall Win Rates:");
    for (i, name) in result.entrants.iter().enumerate() {
        println!("  {name}: {}", output::format_percent(result.win_rate(i)));
    }
}
