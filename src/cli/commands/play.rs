//! Play command - Interactive match against the engine on the terminal

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use log::debug;
use rand::{SeedableRng, random, rngs::StdRng};

use crate::{
    cli::{config::FileConfig, output::render_board},
    engine::{Difficulty, RandomSource},
    session::{Match, Phase, TurnReport},
    tictactoe::{Outcome, Player},
    types::Position,
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive match against the engine")]
pub struct PlayArgs {
    /// Engine strength (overrides the config file)
    #[arg(long, short = 'd', value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Mark you play (overrides the config file)
    #[arg(long)]
    pub human: Option<Player>,

    /// Mark that opens every board (overrides the config file)
    #[arg(long)]
    pub first: Option<Player>,

    /// Random seed for Easy/Medium
    #[arg(long)]
    pub seed: Option<u64>,
}

/// One line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(Position),
    Restart,
    NewMatch,
    SetDifficulty(Difficulty),
    Help,
    Quit,
}

impl Command {
    /// Parse a line typed at the prompt.
    ///
    /// # Errors
    ///
    /// Returns the cell or difficulty parse error for unrecognised input.
    pub fn parse(line: &str) -> crate::Result<Self> {
        let line = line.trim();
        let mut words = line.split_whitespace();
        match words.next().map(str::to_ascii_lowercase).as_deref() {
            Some("r" | "restart") => Ok(Command::Restart),
            Some("n" | "new") => Ok(Command::NewMatch),
            Some("q" | "quit" | "exit") => Ok(Command::Quit),
            Some("h" | "help" | "?") | None => Ok(Command::Help),
            Some("d" | "difficulty") => {
                let level = words.next().unwrap_or_default();
                Ok(Command::SetDifficulty(level.parse()?))
            }
            Some(_) => Ok(Command::Place(line.parse()?)),
        }
    }
}

pub fn execute(args: PlayArgs, config: &FileConfig) -> Result<()> {
    let mut play = config.play.clone();
    if let Some(difficulty) = args.difficulty {
        play.difficulty = difficulty;
    }
    if let Some(human) = args.human {
        play.human = human;
    }
    if let Some(first) = args.first {
        play.first = first;
    }

    let seed = args.seed.or(config.common.seed).unwrap_or_else(random);
    debug!("play session seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = Match::new(play.to_match_config())?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(&mut session, &mut rng, stdin.lock(), &mut stdout)
}

/// Drive a match from line-based input until `q` or end of input
pub fn run<R, I, W>(session: &mut Match, rng: &mut R, input: I, out: &mut W) -> Result<()>
where
    R: RandomSource + ?Sized,
    I: BufRead,
    W: Write,
{
    let config = *session.config();
    writeln!(
        out,
        "You are {}, the engine is {} ({}). {} moves first.",
        config.human, config.ai, config.difficulty, config.first
    )?;
    print_help(out)?;

    let mut lines = input.lines();
    loop {
        if session.phase() == Phase::WaitingForAi {
            let report = session.play_ai(rng)?;
            writeln!(out, "\nEngine plays {}", report.position)?;
            announce(session, &report, out)?;
            continue;
        }

        writeln!(out, "\n{}", render_board(session.board(), None))?;
        match session.phase() {
            Phase::Terminal(_) => write!(out, "Board over. r = next board, n = new match > ")?,
            _ => write!(out, "Your move (0-8) > ")?,
        }
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let command = match Command::parse(&line?) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };

        match command {
            Command::Place(position) => match session.play_human(position.value()) {
                Ok(report) => announce(session, &report, out)?,
                Err(e) => writeln!(out, "{e}")?,
            },
            Command::Restart => {
                session.restart_board();
                writeln!(out, "New board.")?;
            }
            Command::NewMatch => {
                session.reset_match();
                writeln!(out, "New match, score cleared.")?;
            }
            Command::SetDifficulty(level) => {
                session.set_difficulty(level);
                writeln!(out, "Difficulty set to {level}.")?;
            }
            Command::Help => print_help(out)?,
            Command::Quit => break,
        }
    }

    let score = session.scoreboard();
    writeln!(
        out,
        "Final score: you {} / engine {} / ties {}",
        score.human, score.ai, score.ties
    )?;
    Ok(())
}

fn announce<W: Write>(session: &Match, report: &TurnReport, out: &mut W) -> io::Result<()> {
    let verdict = match report.outcome {
        Outcome::Ongoing => return Ok(()),
        Outcome::Win(winner) if winner == session.config().human => "You win!",
        Outcome::Win(_) => "The engine wins.",
        Outcome::Draw => "It's a tie.",
    };

    writeln!(out, "\n{}", render_board(session.board(), report.win_line))?;
    let score = session.scoreboard();
    writeln!(
        out,
        "{verdict} Score: you {} / engine {} / ties {}",
        score.human, score.ai, score.ties
    )
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Commands: 0-8 place a mark, r restart board, n new match, d <easy|medium|hard>, q quit"
    )
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::session::MatchConfig;

    fn run_script(config: MatchConfig, script: &str) -> (Match, String) {
        let mut session = Match::new(config).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut out = Vec::new();
        run(&mut session, &mut rng, Cursor::new(script), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Command::parse(" 4 ").unwrap(),
            Command::Place(Position::new(4).unwrap())
        );
        assert_eq!(Command::parse("R").unwrap(), Command::Restart);
        assert_eq!(Command::parse("n").unwrap(), Command::NewMatch);
        assert_eq!(Command::parse("q").unwrap(), Command::Quit);
        assert_eq!(Command::parse("").unwrap(), Command::Help);
        assert_eq!(
            Command::parse("d impossible").unwrap(),
            Command::SetDifficulty(Difficulty::Hard)
        );
        assert!(Command::parse("9").is_err());
        assert!(Command::parse("d brutal").is_err());
        assert!(Command::parse("x").is_err());
    }

    #[test]
    fn test_engine_wins_when_human_ignores_threats() {
        // Hard X opens at 0 and takes 1; O never blocks cell 2.
        let config = MatchConfig::new(Player::O).with_first(Player::X);
        let (session, output) = run_script(config, "3\n6\nq\n");

        assert!(output.contains("Engine plays 0"));
        assert!(output.contains("The engine wins."));
        assert_eq!(session.scoreboard().ai, 1);
        assert!(output.contains("Final score: you 0 / engine 1 / ties 0"));
    }

    #[test]
    fn test_invalid_input_keeps_session_alive() {
        let (session, output) = run_script(MatchConfig::default(), "9\nabc\n4\n4\n");

        assert!(output.contains("position 9 is out of bounds"));
        assert!(output.contains("already occupied"));
        assert_eq!(session.history().moves.len(), 2);
    }

    #[test]
    fn test_restart_and_difficulty_change() {
        let (session, output) = run_script(MatchConfig::default(), "4\nd easy\nr\n");

        assert!(output.contains("Difficulty set to easy."));
        assert_eq!(session.difficulty(), Difficulty::Easy);
        assert_eq!(session.board().empty_positions().len(), 9);
        assert_eq!(session.phase(), Phase::WaitingForHuman);
    }

    #[test]
    fn test_move_after_board_over_is_rejected() {
        let config = MatchConfig::new(Player::O).with_first(Player::X);
        let (_, output) = run_script(config, "3\n6\n5\nq\n");
        assert!(output.contains("game already over"));
    }
}
