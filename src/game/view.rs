//! Board view model
//!
//! `Board::from_game` is a pure function of the game state. It produces
//! everything a front end needs to draw, without knowing how it is drawn:
//! the TUI and the line-mode game both render the same `Board`.

use super::state::{Game, GameStatus};
use crate::catalog::{Language, Rgb, allowed_wrong_guesses, farewell_text};
use crate::core::Letter;

pub const TITLE: &str = "Assembly: Endgame";
pub const WIN_TITLE: &str = "You win!";
pub const WIN_MESSAGE: &str = "Well done! 🎉";
pub const LOSS_TITLE: &str = "Game over!";
pub const LOSS_MESSAGE: &str = "You lose! Better start learning Assembly 😭";

/// Subtitle under the title, with the attempt count taken from the catalog
#[must_use]
pub fn subtitle(catalog: &[Language]) -> String {
    format!(
        "Guess the word within {} attempts to keep the programming world safe from Assembly!",
        allowed_wrong_guesses(catalog)
    )
}

/// One language chip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub name: &'static str,
    pub background: Rgb,
    pub foreground: Rgb,
    pub lost: bool,
}

/// One character slot of the word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Uppercase letter if revealed
    pub letter: Option<char>,
    /// Revealed only because the game was lost
    pub missed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Unused,
    Correct,
    Wrong,
}

/// One key of the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub letter: Letter,
    pub state: KeyState,
    /// Already guessed; pressing it again does nothing
    pub used: bool,
    /// Game is over; no key can be pressed
    pub disabled: bool,
}

/// Banner above the chips
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Empty,
    Farewell(String),
    Won,
    Lost,
}

impl Banner {
    /// Heading line, if the banner has one
    #[must_use]
    pub const fn title(&self) -> Option<&str> {
        match self {
            Self::Won => Some(WIN_TITLE),
            Self::Lost => Some(LOSS_TITLE),
            Self::Empty | Self::Farewell(_) => None,
        }
    }

    /// Body line, if the banner has one
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Farewell(text) => Some(text.as_str()),
            Self::Won => Some(WIN_MESSAGE),
            Self::Lost => Some(LOSS_MESSAGE),
        }
    }
}

/// Decorative overlay for the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Confetti,
    Tears,
}

/// Plain-text restatement of the board for screen readers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    /// Whether the last guess hit, once anything has been guessed
    pub last_guess: Option<String>,
    pub attempts: String,
    pub word: String,
}

impl Announcement {
    fn from_game(game: &Game) -> Self {
        let last_guess = game.last_guessed().map(|letter| {
            if game.target().contains(letter) {
                format!("Correct! The letter {letter} is in the word.")
            } else {
                format!("Sorry, the letter {letter} is not in the word.")
            }
        });

        let tokens: Vec<String> = game
            .target()
            .letters()
            .map(|letter| {
                if game.is_guessed(letter) {
                    format!("{letter}.")
                } else {
                    "blank.".to_string()
                }
            })
            .collect();

        Self {
            last_guess,
            attempts: format!("You have {} attempts left.", game.guesses_left()),
            word: format!("Current word: {}", tokens.join(" ")),
        }
    }

    /// All lines in reading order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.last_guess
            .as_deref()
            .into_iter()
            .chain([self.attempts.as_str(), self.word.as_str()])
    }
}

/// Everything a front end draws for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub status: GameStatus,
    pub chips: Vec<Chip>,
    pub slots: Vec<Slot>,
    pub keys: Vec<Key>,
    pub banner: Banner,
    pub announcement: Announcement,
    /// Wrong guesses remaining before the game is lost
    pub guesses_left: usize,
    /// "You have N guesses left." while the game is running
    pub attempts_left: Option<String>,
    pub show_new_game: bool,
    pub effect: Effect,
}

impl Board {
    /// Derive the board for `game`, using `catalog` for the chips
    #[must_use]
    pub fn from_game(game: &Game, catalog: &[Language]) -> Self {
        let status = game.status();
        let is_lost = status == GameStatus::Lost;
        let wrong = game.wrong_guess_count();

        let chips = catalog
            .iter()
            .enumerate()
            .map(|(index, language)| Chip {
                name: language.name,
                background: language.background,
                foreground: language.foreground,
                lost: index < wrong,
            })
            .collect();

        let slots = game
            .target()
            .letters()
            .map(|letter| {
                let guessed = game.is_guessed(letter);
                Slot {
                    letter: (guessed || is_lost).then(|| letter.to_uppercase()),
                    missed: is_lost && !guessed,
                }
            })
            .collect();

        let keys = Letter::all()
            .map(|letter| {
                let used = game.is_guessed(letter);
                let state = match (used, game.target().contains(letter)) {
                    (false, _) => KeyState::Unused,
                    (true, true) => KeyState::Correct,
                    (true, false) => KeyState::Wrong,
                };
                Key {
                    letter,
                    state,
                    used,
                    disabled: status.is_over(),
                }
            })
            .collect();

        Self {
            status,
            chips,
            slots,
            keys,
            banner: banner_for(game, status, catalog),
            announcement: Announcement::from_game(game),
            guesses_left: game.guesses_left(),
            attempts_left: (!status.is_over())
                .then(|| format!("You have {} guesses left.", game.guesses_left())),
            show_new_game: status.is_over(),
            effect: match status {
                GameStatus::Playing => Effect::None,
                GameStatus::Won => Effect::Confetti,
                GameStatus::Lost => Effect::Tears,
            },
        }
    }

    /// The word as shown on the board, `_` for hidden slots
    #[must_use]
    pub fn word_line(&self) -> String {
        self.slots
            .iter()
            .map(|slot| slot.letter.unwrap_or('_').to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn banner_for(game: &Game, status: GameStatus, catalog: &[Language]) -> Banner {
    match status {
        GameStatus::Won => Banner::Won,
        GameStatus::Lost => Banner::Lost,
        GameStatus::Playing if game.is_last_guess_incorrect() => game
            .wrong_guess_count()
            .checked_sub(1)
            .and_then(|index| catalog.get(index))
            .map_or(Banner::Empty, |language| {
                Banner::Farewell(farewell_text(language.name))
            }),
        GameStatus::Playing => Banner::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LANGUAGES;
    use crate::core::TargetWord;

    fn played(word: &str, letters: &str) -> Game {
        let mut game = Game::with_catalog(TargetWord::new(word).unwrap(), LANGUAGES);
        for c in letters.chars() {
            game.guess(Letter::new(c).unwrap());
        }
        game
    }

    fn board_after(word: &str, letters: &str) -> Board {
        Board::from_game(&played(word, letters), LANGUAGES)
    }

    fn key(board: &Board, c: char) -> Key {
        board.keys[Letter::new(c).unwrap().index()]
    }

    #[test]
    fn fresh_board() {
        let board = board_after("react", "");
        assert_eq!(board.chips.len(), 9);
        assert!(board.chips.iter().all(|chip| !chip.lost));
        assert_eq!(board.slots.len(), 5);
        assert!(board.slots.iter().all(|slot| slot.letter.is_none()));
        assert_eq!(board.keys.len(), 26);
        assert!(board.keys.iter().all(|k| k.state == KeyState::Unused && !k.disabled));
        assert_eq!(board.banner, Banner::Empty);
        assert_eq!(board.attempts_left.as_deref(), Some("You have 8 guesses left."));
        assert!(!board.show_new_game);
        assert_eq!(board.effect, Effect::None);
        assert_eq!(board.word_line(), "_ _ _ _ _");
    }

    #[test]
    fn chips_are_lost_in_catalog_order() {
        let board = board_after("react", "zq");
        let lost: Vec<bool> = board.chips.iter().map(|chip| chip.lost).collect();
        assert_eq!(lost[..3], [true, true, false]);
        assert_eq!(board.chips[0].name, "HTML");
        assert_eq!(board.chips[0].background, LANGUAGES[0].background);
    }

    #[test]
    fn correct_letters_are_revealed_uppercase() {
        let board = board_after("react", "a");
        assert_eq!(board.slots[2].letter, Some('A'));
        assert!(board.slots.iter().all(|slot| !slot.missed));
        assert_eq!(board.word_line(), "_ _ A _ _");
    }

    #[test]
    fn keys_mark_correct_and_wrong() {
        let board = board_after("react", "az");
        assert_eq!(key(&board, 'a').state, KeyState::Correct);
        assert_eq!(key(&board, 'z').state, KeyState::Wrong);
        assert_eq!(key(&board, 'b').state, KeyState::Unused);
        assert!(key(&board, 'a').used);
        assert!(!key(&board, 'b').used);
    }

    #[test]
    fn wrong_guess_shows_farewell_for_latest_lost_language() {
        let board = board_after("react", "z");
        assert_eq!(board.banner, Banner::Farewell(farewell_text("HTML")));

        let board = board_after("react", "zq");
        assert_eq!(board.banner, Banner::Farewell(farewell_text("CSS")));
        assert_eq!(board.banner.message(), Some("Adios, CSS"));
        assert_eq!(board.banner.title(), None);
    }

    #[test]
    fn correct_guess_clears_farewell() {
        let board = board_after("react", "zr");
        assert_eq!(board.banner, Banner::Empty);
    }

    #[test]
    fn won_board() {
        let board = board_after("go", "go");
        assert_eq!(board.status, GameStatus::Won);
        assert_eq!(board.banner, Banner::Won);
        assert_eq!(board.banner.title(), Some("You win!"));
        assert_eq!(board.banner.message(), Some("Well done! 🎉"));
        assert_eq!(board.effect, Effect::Confetti);
        assert!(board.show_new_game);
        assert!(board.attempts_left.is_none());
        assert!(board.keys.iter().all(|k| k.disabled));
    }

    #[test]
    fn lost_board_reveals_missed_letters() {
        let board = board_after("go", "qwertyui");
        assert_eq!(board.status, GameStatus::Lost);
        assert_eq!(board.banner, Banner::Lost);
        assert_eq!(
            board.banner.message(),
            Some("You lose! Better start learning Assembly 😭")
        );
        assert_eq!(board.effect, Effect::Tears);
        assert_eq!(board.word_line(), "G O");
        assert!(board.slots.iter().all(|slot| slot.missed));
        assert_eq!(board.chips.iter().filter(|chip| chip.lost).count(), 8);
        assert!(!board.chips[8].lost);
        assert!(board.keys.iter().all(|k| k.disabled));
    }

    #[test]
    fn lost_board_does_not_mark_guessed_letters_missed() {
        let board = board_after("react", "rqwsdfghj");
        assert_eq!(board.status, GameStatus::Lost);
        assert_eq!(board.slots[0], Slot { letter: Some('R'), missed: false });
        assert_eq!(board.slots[1], Slot { letter: Some('E'), missed: true });
    }

    #[test]
    fn announcement_before_any_guess() {
        let board = board_after("go", "");
        assert_eq!(board.announcement.last_guess, None);
        let lines: Vec<&str> = board.announcement.lines().collect();
        assert_eq!(
            lines,
            ["You have 8 attempts left.", "Current word: blank. blank."]
        );
    }

    #[test]
    fn announcement_after_guesses() {
        let board = board_after("react", "rz");
        assert_eq!(
            board.announcement.last_guess.as_deref(),
            Some("Sorry, the letter z is not in the word.")
        );
        assert_eq!(board.announcement.attempts, "You have 7 attempts left.");
        assert_eq!(
            board.announcement.word,
            "Current word: r. blank. blank. blank. blank."
        );

        let board = board_after("react", "t");
        assert_eq!(
            board.announcement.last_guess.as_deref(),
            Some("Correct! The letter t is in the word.")
        );
    }

    #[test]
    fn subtitle_uses_catalog_size() {
        assert_eq!(
            subtitle(LANGUAGES),
            "Guess the word within 8 attempts to keep the programming world safe from Assembly!"
        );
    }
}
