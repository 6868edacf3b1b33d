//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: one letter per line.

use crate::core::Letter;
use crate::game::{GuessOutcome, Session};
use crate::output::write_board;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// What the player typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Guess(Letter),
    Quit,
    Invalid,
    Empty,
}

fn parse_command(input: &str) -> Command {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "" => Command::Empty,
        "quit" | "exit" => Command::Quit,
        _ => {
            let mut chars = input.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Letter::try_from(c).map_or(Command::Invalid, Command::Guess),
                _ => Command::Invalid,
            }
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple<R: Rng>(session: &mut Session<R>) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_simple_with(session, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the line-mode game against any reader and writer
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple_with<R: Rng, I: BufRead, W: Write>(
    session: &mut Session<R>,
    input: &mut I,
    out: &mut W,
) -> Result<()> {
    writeln!(
        out,
        "Type a letter and press Enter to guess. Type 'quit' to exit."
    )?;

    loop {
        write_board(out, &session.board(), session.catalog())?;

        if session.game().is_over() {
            writeln!(
                out,
                "\n  The word was {}.",
                session.game().target().text().to_uppercase().bright_yellow().bold()
            )?;
            let stats = session.stats();
            writeln!(
                out,
                "  Games: {} | Win Rate: {:.0}%",
                stats.total_games,
                stats.win_rate()
            )?;

            match prompt(input, out, "Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => {
                    session.new_game();
                    writeln!(out, "\n🔄 New game started!")?;
                    continue;
                }
                _ => break,
            }
        }

        let Some(line) = prompt(input, out, "Guess a letter")? else {
            break;
        };

        match parse_command(&line) {
            Command::Quit => break,
            Command::Empty => {}
            Command::Invalid => {
                writeln!(out, "{}", "❌ Enter a single letter from A to Z".red())?;
            }
            Command::Guess(letter) => match session.guess(letter) {
                GuessOutcome::Repeated => {
                    writeln!(out, "You already tried {}.", letter.to_uppercase())?;
                }
                GuessOutcome::Correct | GuessOutcome::Wrong | GuessOutcome::Ignored => {
                    if let Some(line) = session.board().announcement.last_guess {
                        writeln!(out, "{line}")?;
                    }
                }
            },
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Read one trimmed, lowercased line; `None` at end of input
fn prompt<I: BufRead, W: Write>(input: &mut I, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "\n{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LANGUAGES;
    use crate::core::TargetWord;
    use crate::wordlists::WordPool;
    use rand::{SeedableRng, rngs::StdRng};

    fn session(word: &str) -> Session<StdRng> {
        let pool = WordPool::new(vec![TargetWord::new(word).unwrap()]).unwrap();
        Session::new(pool, StdRng::seed_from_u64(0), LANGUAGES)
    }

    fn play(session: &mut Session<StdRng>, script: &str) -> String {
        let mut input = script.as_bytes();
        let mut out = Vec::new();
        run_simple_with(session, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command(" EXIT "), Command::Quit);
        assert_eq!(parse_command(""), Command::Empty);
        assert_eq!(parse_command("ab"), Command::Invalid);
        assert_eq!(parse_command("7"), Command::Invalid);
        assert_eq!(
            parse_command("Q"),
            Command::Guess(Letter::new('q').unwrap())
        );
    }

    #[test]
    fn winning_script() {
        let mut session = session("go");
        let text = play(&mut session, "g\no\nno\n");

        assert!(text.contains("Correct! The letter g is in the word."));
        assert!(text.contains("You win!"));
        assert!(text.contains("Thanks for playing"));
        assert_eq!(session.stats().games_won, 1);
    }

    #[test]
    fn losing_script() {
        let mut session = session("go");
        let text = play(&mut session, "q\nw\ne\nr\nt\ny\nu\ni\nn\n");

        assert!(text.contains("Sorry, the letter q is not in the word."));
        assert!(text.contains("Game over!"));
        assert!(session.game().is_lost());
        assert_eq!(session.stats().total_games, 1);
    }

    #[test]
    fn repeated_and_invalid_input() {
        let mut session = session("go");
        let text = play(&mut session, "z\nz\n42\nquit\n");

        assert!(text.contains("You already tried Z."));
        assert!(text.contains("Enter a single letter"));
        assert_eq!(session.game().guessed().len(), 1);
    }

    #[test]
    fn play_again_starts_fresh_game() {
        let mut session = session("go");
        play(&mut session, "g\no\nyes\nquit\n");

        assert_eq!(session.stats().total_games, 1);
        assert!(session.game().guessed().is_empty());
        assert!(!session.game().is_over());
    }

    #[test]
    fn end_of_input_quits() {
        let mut session = session("go");
        let text = play(&mut session, "g\n");
        assert!(text.contains("Thanks for playing"));
    }
}
