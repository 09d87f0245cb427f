//! Series runs with observers, exports and agent selection

use std::sync::{Arc, Mutex};

use noughts::{
    engine::Difficulty,
    pipeline::{
        Agent, AgentKind, EngineAgent, GameObservation, JsonlObserver, MetricsObserver,
        RandomAgent, Series, SeriesConfig, SeriesResult,
    },
    tictactoe::{Board, Outcome, Player},
};

fn config(num_games: usize, seed: u64, first_player: Player) -> SeriesConfig {
    SeriesConfig {
        num_games,
        seed: Some(seed),
        first_player,
    }
}

#[test]
fn hard_engine_never_loses_to_random_play_either_side() {
    for first in [Player::X, Player::O] {
        let mut random = RandomAgent::new("random".to_string());
        let mut hard = EngineAgent::new("hard".to_string(), Difficulty::Hard);

        let as_o = Series::new(config(40, 7, first))
            .run(&mut random, &mut hard)
            .unwrap();
        assert_eq!(as_o.x_wins, 0, "{first} opening: {as_o:?}");

        let as_x = Series::new(config(40, 8, first))
            .run(&mut hard, &mut random)
            .unwrap();
        assert_eq!(as_x.o_wins, 0, "{first} opening: {as_x:?}");
        assert!(as_x.x_wins > 0);
    }
}

#[test]
fn seeded_series_are_reproducible() {
    let run = || {
        let mut x = AgentKind::Easy.into_boxed_agent("easy".to_string());
        let mut o = AgentKind::Random.into_boxed_agent("random".to_string());
        Series::new(config(25, 99, Player::X))
            .run(x.as_mut(), o.as_mut())
            .unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn shared_metrics_observer_sees_every_game() {
    let metrics = Arc::new(Mutex::new(MetricsObserver::new()));
    let mut series =
        Series::new(config(12, 5, Player::O)).with_observer(Box::new(Arc::clone(&metrics)));

    let mut x = RandomAgent::with_seed("x".to_string(), 1);
    let mut o = RandomAgent::with_seed("o".to_string(), 2);
    let result = series.run(&mut x, &mut o).unwrap();

    let summary = metrics.lock().unwrap().summary();
    assert_eq!(summary.total_games, 12);
    assert_eq!(summary.x_wins, result.x_wins);
    assert_eq!(summary.o_wins, result.o_wins);
    assert_eq!(summary.draws, result.draws);
    assert!(summary.shortest_game.unwrap() >= 5);
    assert!(summary.longest_game.unwrap() <= 9);
}

#[test]
fn jsonl_log_replays_to_the_recorded_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games.jsonl");

    let mut series = Series::new(config(6, 21, Player::X))
        .with_observer(Box::new(JsonlObserver::new(&path).unwrap()));
    let mut x = EngineAgent::with_seed("medium".to_string(), Difficulty::Medium, 0);
    let mut o = RandomAgent::with_seed("random".to_string(), 0);
    series.run(&mut x, &mut o).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let games: Vec<GameObservation> = content
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(games.len(), 6);

    for (index, game) in games.iter().enumerate() {
        assert_eq!(game.game_num, index);
        assert_eq!(game.total_moves, game.steps.len());
        assert_eq!(game.steps[0].board, ".........");

        let mut board = Board::new();
        for step in &game.steps {
            assert_eq!(board.encode(), step.board);
            board.place(step.move_position, step.player).unwrap();
        }
        assert_eq!(noughts::detect(&board).outcome, game.outcome);
        assert_ne!(game.outcome, Outcome::Ongoing);
    }
}

#[test]
fn result_round_trips_through_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.json");

    let result = SeriesResult::new(10, 6, 1, 3);
    result.save(&path).unwrap();
    let loaded = SeriesResult::load(&path).unwrap();

    assert_eq!(loaded, result);
    assert_eq!(loaded.wins_for(Player::X), 6);
    assert!((loaded.draw_rate - 0.3).abs() < 1e-12);
}

/// Always answers cell 0, legal or not
struct Stubborn;

impl Agent for Stubborn {
    fn select_move(
        &mut self,
        _board: &Board,
        _me: Player,
        _opponent: Player,
    ) -> noughts::Result<usize> {
        Ok(0)
    }

    fn name(&self) -> &str {
        "stubborn"
    }
}

#[test]
fn illegal_agent_move_aborts_the_series() {
    let mut x = Stubborn;
    let mut o = Stubborn;
    let err = Series::new(config(1, 0, Player::X))
        .run(&mut x, &mut o)
        .unwrap_err();
    assert!(err.to_string().contains("illegal cell 0"));
}
