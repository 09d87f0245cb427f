//! Series command - Play many games between two agents and report the tally

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use crate::{
    cli::{
        config::FileConfig,
        output::{format_number, print_kv, print_section},
    },
    pipeline::{
        AgentKind, JsonlObserver, MetricsObserver, ProgressObserver, Series, SeriesConfig,
    },
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Play a series of games between two agents")]
pub struct SeriesArgs {
    /// Agent playing X (easy, medium, hard, random)
    #[arg(long, value_enum)]
    pub x: Option<AgentKind>,

    /// Agent playing O (easy, medium, hard, random)
    #[arg(long, value_enum)]
    pub o: Option<AgentKind>,

    /// Number of games
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Which mark opens every game
    #[arg(long)]
    pub first: Option<Player>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the aggregated result as JSON
    #[arg(long, short = 'o')]
    pub export: Option<PathBuf>,

    /// Write every game as one JSON line
    #[arg(long)]
    pub jsonl: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

pub fn execute(args: SeriesArgs, config: &FileConfig) -> Result<()> {
    let defaults = &config.series;
    let x_kind = args.x.unwrap_or(defaults.x);
    let o_kind = args.o.unwrap_or(defaults.o);
    let games = args.games.unwrap_or(defaults.games);
    if games == 0 {
        return Err(anyhow!("--games must be at least 1"));
    }

    let series_config = SeriesConfig {
        num_games: games,
        seed: args.seed.or(config.common.seed),
        first_player: args.first.unwrap_or(defaults.first),
    };

    let mut x_agent = x_kind.into_boxed_agent(format!("{x_kind}-X"));
    let mut o_agent = o_kind.into_boxed_agent(format!("{o_kind}-O"));

    println!(
        "{} (X) vs {} (O), {} games, {} moves first",
        x_kind,
        o_kind,
        format_number(games),
        series_config.first_player
    );

    let metrics = Arc::new(Mutex::new(MetricsObserver::new()));
    let mut series =
        Series::new(series_config).with_observer(Box::new(Arc::clone(&metrics)));
    if config.common.progress && !args.no_progress {
        series = series.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.jsonl {
        let observer = JsonlObserver::new(path)
            .with_context(|| format!("creating {}", path.display()))?;
        series = series.with_observer(Box::new(observer));
    }

    let result = series.run(x_agent.as_mut(), o_agent.as_mut())?;

    print_section("Series Results");
    print_kv("Total games", &format_number(result.total_games));
    print_kv(
        "X wins",
        &format!("{} ({:.1}%)", result.x_wins, result.x_win_rate * 100.0),
    );
    print_kv(
        "O wins",
        &format!("{} ({:.1}%)", result.o_wins, result.o_win_rate * 100.0),
    );
    print_kv(
        "Draws",
        &format!("{} ({:.1}%)", result.draws, result.draw_rate * 100.0),
    );

    let summary = metrics
        .lock()
        .map_err(|_| anyhow!("metrics observer lock poisoned"))?
        .summary();
    print_kv("Avg game length", &format!("{:.2} moves", summary.avg_game_length));
    if let (Some(shortest), Some(longest)) = (summary.shortest_game, summary.longest_game) {
        print_kv("Shortest/longest", &format!("{shortest}/{longest} moves"));
    }

    if let Some(path) = &args.export {
        result
            .save(path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("\n✓ Results saved to: {}", path.display());
    }
    if let Some(path) = &args.jsonl {
        println!("✓ Games written to: {}", path.display());
    }

    Ok(())
}
