//! The Hard engine never loses, whatever the opponent does

use noughts::{
    engine::{Difficulty, best_move, choose_move},
    pipeline::{EngineAgent, Series, SeriesConfig},
    tictactoe::{Board, Outcome, Player, detect},
};

#[derive(Debug, Default)]
struct Tally {
    finished_games: usize,
    engine_wins: usize,
    draws: usize,
    engine_losses: usize,
}

/// Branch over every human reply; the engine answers with its best move
fn explore(board: &mut Board, to_move: Player, engine: Player, tally: &mut Tally) {
    match detect(board).outcome {
        Outcome::Win(winner) if winner == engine => {
            tally.finished_games += 1;
            tally.engine_wins += 1;
            return;
        }
        Outcome::Win(_) => {
            tally.finished_games += 1;
            tally.engine_losses += 1;
            return;
        }
        Outcome::Draw => {
            tally.finished_games += 1;
            tally.draws += 1;
            return;
        }
        Outcome::Ongoing => {}
    }

    if to_move == engine {
        let before = *board;
        let pos = best_move(board, engine, engine.opponent()).expect("ongoing board has a move");
        assert_eq!(*board, before, "best_move must restore the board");
        let mut next = board.with_move(pos, engine).unwrap();
        explore(&mut next, engine.opponent(), engine, tally);
    } else {
        for pos in board.empty_positions() {
            let mut next = board.with_move(pos, to_move).unwrap();
            explore(&mut next, engine, engine, tally);
        }
    }
}

#[test]
fn hard_engine_never_loses_any_line_of_play() {
    for engine in [Player::X, Player::O] {
        for first in [Player::X, Player::O] {
            let mut tally = Tally::default();
            explore(&mut Board::new(), first, engine, &mut tally);

            assert_eq!(
                tally.engine_losses, 0,
                "engine {engine} lost with {first} opening: {tally:?}"
            );
            assert!(tally.finished_games > 0);
            assert_eq!(
                tally.finished_games,
                tally.engine_wins + tally.draws,
                "every line must finish"
            );
            assert!(tally.engine_wins > 0, "a careless opponent should be punished");
        }
    }
}

#[test]
fn hard_against_hard_is_always_a_draw() {
    for first in [Player::X, Player::O] {
        let config = SeriesConfig {
            num_games: 2,
            seed: Some(3),
            first_player: first,
        };
        let mut x = EngineAgent::new("hard-X".to_string(), Difficulty::Hard);
        let mut o = EngineAgent::new("hard-O".to_string(), Difficulty::Hard);
        let result = Series::new(config).run(&mut x, &mut o).unwrap();
        assert_eq!(result.draws, 2, "{first} opening: {result:?}");
    }
}

#[test]
fn immediate_win_is_taken_over_block() {
    // O holds 3 and 4, X threatens 2: finishing the middle row beats blocking.
    let mut board = Board::from_string("XX.OO....").unwrap();
    assert_eq!(best_move(&mut board, Player::O, Player::X), Some(5));
}

#[test]
fn open_threat_is_blocked() {
    let mut board = Board::from_string("XX..O....").unwrap();
    assert_eq!(best_move(&mut board, Player::O, Player::X), Some(2));
}

#[test]
fn empty_board_opens_in_the_corner() {
    for ai in [Player::X, Player::O] {
        let mut board = Board::new();
        assert_eq!(best_move(&mut board, ai, ai.opponent()), Some(0));
    }
}

#[test]
fn full_board_has_no_move_at_any_level() {
    let mut board = Board::from_string("XOXXOOOXX").unwrap();
    let mut rng = rand::rng();
    for level in Difficulty::ALL {
        assert_eq!(
            choose_move(&mut board, Player::X, Player::O, level, &mut rng),
            None
        );
    }
}

#[test]
fn marks_are_symmetric() {
    // Swapping every mark swaps the engine's answer's owner but not its cell.
    let mut x_board = Board::from_string("O.X.X....").unwrap();
    let mut o_board = Board::from_string("X.O.O....").unwrap();
    assert_eq!(
        best_move(&mut x_board, Player::O, Player::X),
        best_move(&mut o_board, Player::X, Player::O)
    );
}
