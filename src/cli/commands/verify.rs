//! Verify command - Self-check the engine against exhaustive minimax
//!
//! Three checks run in order:
//! 1. Every reachable decision board (both openers) scores the same with and
//!    without alpha-beta pruning, and yields the same best move.
//! 2. Seeded random mid-game boards pass the same comparison.
//! 3. Hard against Hard ends in a draw whichever mark opens.

use anyhow::{Result, anyhow};
use clap::Parser;
use log::{info, warn};
use rand::{Rng, SeedableRng, random, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    cli::{
        config::FileConfig,
        output::{create_spinner, format_number, print_kv, print_section},
    },
    engine::{Difficulty, Pruning, Search, Sides, best_move_with},
    pipeline::{EngineAgent, Series, SeriesConfig},
    tictactoe::{Board, Player, decision_states},
};

#[derive(Parser, Debug)]
#[command(about = "Check pruned search against exhaustive minimax")]
pub struct VerifyArgs {
    /// Number of random mid-game boards to compare
    #[arg(long, short = 'n', default_value_t = 200)]
    pub samples: usize,

    /// Random seed for the sampled boards
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Outcome of a verification run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyReport {
    pub boards_checked: usize,
    pub nodes_pruned: u64,
    pub nodes_exhaustive: u64,
    /// Encodings of boards where the two searches disagreed
    pub mismatches: Vec<String>,
    pub hard_self_play_draws: bool,
}

impl VerifyReport {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty() && self.hard_self_play_draws
    }
}

pub fn execute(args: VerifyArgs, config: &FileConfig) -> Result<()> {
    let seed = args.seed.or(config.common.seed).unwrap_or_else(random);

    let spinner = if config.common.progress {
        Some(create_spinner("Comparing pruned and exhaustive search...")?)
    } else {
        None
    };
    let report = verify(args.samples, seed)?;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    print_section("Engine Verification");
    print_kv("Boards checked", &format_number(report.boards_checked));
    print_kv("Sample seed", &seed.to_string());
    print_kv("Nodes (pruned)", &format_number(report.nodes_pruned as usize));
    print_kv(
        "Nodes (exhaustive)",
        &format_number(report.nodes_exhaustive as usize),
    );
    if report.nodes_exhaustive > 0 {
        let saved = 1.0 - report.nodes_pruned as f64 / report.nodes_exhaustive as f64;
        print_kv("Pruning saves", &format!("{:.1}%", saved * 100.0));
    }
    print_kv(
        "Hard vs Hard",
        if report.hard_self_play_draws {
            "always draws"
        } else {
            "DECISIVE"
        },
    );

    if report.passed() {
        println!("\n✓ All checks passed");
        Ok(())
    } else {
        for board in &report.mismatches {
            println!("  mismatch on {board}");
        }
        Err(anyhow!(
            "verification failed on {} board(s)",
            report.mismatches.len()
        ))
    }
}

/// Run every check; `samples` random boards are drawn from `seed`
pub fn verify(samples: usize, seed: u64) -> crate::Result<VerifyReport> {
    let mut report = VerifyReport::default();
    let mut pruned = Search::new(Pruning::AlphaBeta);
    let mut exhaustive = Search::new(Pruning::Disabled);

    for first in [Player::X, Player::O] {
        for state in decision_states(first) {
            compare(&mut report, &mut pruned, &mut exhaustive, state.board, state.to_move);
        }
    }
    info!(
        "reachable boards agree ({} checked, {} mismatches)",
        report.boards_checked,
        report.mismatches.len()
    );

    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..samples {
        let (board, to_move) = random_midgame(&mut rng);
        compare(&mut report, &mut pruned, &mut exhaustive, board, to_move);
    }

    report.nodes_pruned = pruned.nodes_visited();
    report.nodes_exhaustive = exhaustive.nodes_visited();
    report.hard_self_play_draws = hard_self_play_draws()?;
    Ok(report)
}

fn compare(
    report: &mut VerifyReport,
    pruned: &mut Search,
    exhaustive: &mut Search,
    mut board: Board,
    to_move: Player,
) {
    let before = board;
    let sides = Sides::new(to_move, to_move.opponent());

    let fast = pruned.root_score(&mut board, true, sides);
    let slow = exhaustive.root_score(&mut board, true, sides);
    let fast_move = best_move_with(pruned, &mut board, sides.searching, sides.other);
    let slow_move = best_move_with(exhaustive, &mut board, sides.searching, sides.other);

    report.boards_checked += 1;
    if fast != slow || fast_move != slow_move || board != before {
        warn!(
            "search disagreement on {}: score {fast} vs {slow}, move {fast_move:?} vs {slow_move:?}",
            before.encode()
        );
        report.mismatches.push(before.encode());
    }
}

/// A board reached by random alternating play from X, stopped before the game ends
fn random_midgame<R: Rng>(rng: &mut R) -> (Board, Player) {
    let mut board = Board::new();
    let mut to_move = Player::X;
    let plies = rng.random_range(0..=7);

    for _ in 0..plies {
        let empty = board.empty_positions();
        let pos = empty[rng.random_range(0..empty.len())];
        let next = board.with_move(pos, to_move);
        match next {
            Ok(next) if !next.is_terminal() => {
                board = next;
                to_move = to_move.opponent();
            }
            _ => break,
        }
    }

    (board, to_move)
}

fn hard_self_play_draws() -> crate::Result<bool> {
    let mut all_draws = true;
    for first in [Player::X, Player::O] {
        let config = SeriesConfig {
            num_games: 1,
            seed: Some(0),
            first_player: first,
        };
        let mut x = EngineAgent::with_seed("hard-X".to_string(), Difficulty::Hard, 0);
        let mut o = EngineAgent::with_seed("hard-O".to_string(), Difficulty::Hard, 1);
        let result = Series::new(config).run(&mut x, &mut o)?;
        all_draws &= result.draws == result.total_games;
    }
    Ok(all_draws)
}
