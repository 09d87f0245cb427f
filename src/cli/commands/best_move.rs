//! Best-move command - Ask the engine for a move on a given board

use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};
use log::warn;
use rand::{SeedableRng, random, rngs::StdRng};

use crate::{
    cli::{
        config::FileConfig,
        output::{format_number, print_kv, print_section, render_board},
    },
    engine::{ChoiceSource, Difficulty, Pruning, Search, choose, evaluate_moves_with, pick_best},
    tictactoe::{Board, LineAnalyzer, Outcome, Player, detect},
};

/// Search mode selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PruningArg {
    On,
    Off,
}

impl From<PruningArg> for Pruning {
    fn from(arg: PruningArg) -> Self {
        match arg {
            PruningArg::On => Pruning::AlphaBeta,
            PruningArg::Off => Pruning::Disabled,
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Show the engine's move for a board")]
pub struct BestMoveArgs {
    /// Board as nine cells in row-major order, e.g. `XX.OO....`
    /// (`.`, `_` or `-` for empty; `/` and spaces are ignored)
    pub board: String,

    /// Mark the engine plays (inferred from piece counts when omitted)
    #[arg(long)]
    pub ai: Option<Player>,

    /// Mark that opened the game, used to infer the side to move
    #[arg(long, default_value = "x")]
    pub first: Player,

    /// Playing strength
    #[arg(long, short = 'd', value_enum, default_value_t = Difficulty::Hard)]
    pub difficulty: Difficulty,

    /// Random seed for Easy/Medium
    #[arg(long)]
    pub seed: Option<u64>,

    /// Alpha-beta pruning for the score table
    #[arg(long, value_enum, default_value_t = PruningArg::On)]
    pub pruning: PruningArg,
}

pub fn execute(args: BestMoveArgs, config: &FileConfig) -> Result<()> {
    let mut board = Board::from_string(&args.board)?;
    if let Err(e) = board.validate() {
        warn!("board {} is not reachable in a legal game: {e}", board.encode());
    }

    let ai = match args.ai {
        Some(ai) => ai,
        None => board
            .side_to_move(args.first)
            .map_err(|e| anyhow!("{e}; pass --ai to choose the engine's mark"))?,
    };
    let human = ai.opponent();

    print_section("Position");
    println!("{}", render_board(&board, detect(&board).line));
    println!();
    print_kv("Engine plays", &ai.to_string());
    print_kv("Difficulty", args.difficulty.as_str());

    let detection = detect(&board);
    if detection.outcome != Outcome::Ongoing {
        let verdict = match detection.outcome {
            Outcome::Win(winner) => format!("{winner} has already won"),
            _ => "board is full".to_string(),
        };
        println!("\nNo move: {verdict}");
        return Ok(());
    }

    let threats = LineAnalyzer::winning_moves(board.cells(), ai);
    let blocks = LineAnalyzer::winning_moves(board.cells(), human);
    print_kv("Winning cells", &format_cells(&threats));
    print_kv("Cells to block", &format_cells(&blocks));

    let mut search = Search::new(args.pruning.into());
    let scores = evaluate_moves_with(&mut search, &mut board, ai, human);

    println!("\n=== Move Scores ===");
    for entry in &scores {
        println!("  cell {}: {:+}", entry.position, entry.score);
    }
    print_kv("Nodes searched", &format_number(search.nodes_visited() as usize));
    if let Some(best) = pick_best(&scores) {
        print_kv("Optimal cell", &best.position.to_string());
    }

    let seed = args.seed.or(config.common.seed).unwrap_or_else(random);
    let mut rng = StdRng::seed_from_u64(seed);
    let choice = choose(&mut board, ai, human, args.difficulty, &mut rng)
        .ok_or_else(|| anyhow!("no empty cell on {}", board.encode()))?;

    let source = match choice.source {
        ChoiceSource::Optimal => "optimal",
        ChoiceSource::Random => "random",
    };
    println!("\n=== Engine Move ===");
    println!("{} ({source}, seed {seed})", choice.position);

    Ok(())
}

fn format_cells(cells: &[usize]) -> String {
    if cells.is_empty() {
        return "none".to_string();
    }
    cells
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
