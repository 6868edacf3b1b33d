//! End-to-end games through the public API

use assembly_endgame::catalog::{LANGUAGES, allowed_wrong_guesses, farewell_text};
use assembly_endgame::commands::{SimulationConfig, run_simulation};
use assembly_endgame::core::{Letter, TargetWord};
use assembly_endgame::game::{Banner, Board, Effect, Game, GameStatus, GuessOutcome, Session};
use assembly_endgame::solver::{FrequencyStrategy, StrategyType};
use assembly_endgame::wordlists::{WordPool, loader::load_from_file};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::io::Write;

fn letter(c: char) -> Letter {
    Letter::new(c).unwrap()
}

fn game(word: &str) -> Game {
    Game::with_catalog(TargetWord::new(word).unwrap(), LANGUAGES)
}

#[test]
fn eight_misses_lose_and_reveal_the_word() {
    let mut game = game("go");
    for c in "qwertyui".chars() {
        assert_eq!(game.guess(letter(c)), GuessOutcome::Wrong);
    }

    assert_eq!(allowed_wrong_guesses(LANGUAGES), 8);
    assert_eq!(game.status(), GameStatus::Lost);

    let board = Board::from_game(&game, LANGUAGES);
    assert_eq!(board.banner, Banner::Lost);
    assert_eq!(board.effect, Effect::Tears);
    assert_eq!(board.word_line(), "G O");
    assert!(board.slots.iter().all(|slot| slot.missed));
    assert_eq!(board.chips.iter().filter(|chip| chip.lost).count(), 8);
    assert!(!board.chips[8].lost);
    assert!(board.show_new_game);
}

#[test]
fn farewell_follows_the_latest_miss() {
    let mut game = game("react");
    game.guess(letter('z'));
    game.guess(letter('x'));

    let board = Board::from_game(&game, LANGUAGES);
    assert_eq!(board.banner, Banner::Farewell(farewell_text("CSS")));

    // A correct guess clears the farewell
    game.guess(letter('r'));
    assert_eq!(Board::from_game(&game, LANGUAGES).banner, Banner::Empty);
}

#[test]
fn session_plays_several_games_from_a_file_pool() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "go\n\nC\nnot-a-word\n").unwrap();

    let words = load_from_file(file.path()).unwrap();
    let mut session = Session::new(
        WordPool::new(words).unwrap(),
        StdRng::seed_from_u64(11),
        LANGUAGES,
    );

    for _ in 0..3 {
        let target = session.game().target().clone();
        assert!(["go", "c"].contains(&target.text()));
        for l in target.letters() {
            session.guess(l);
        }
        assert!(session.game().is_won());
        session.new_game();
    }

    assert_eq!(session.stats().total_games, 3);
    assert_eq!(session.stats().games_won, 3);
}

#[test]
fn invariants_hold_for_random_guess_sequences() {
    let pool = WordPool::embedded();
    let mut rng = StdRng::seed_from_u64(2024);
    let allowed = allowed_wrong_guesses(LANGUAGES);

    for _ in 0..2000 {
        let target = pool.random_word(&mut rng);
        let mut game = Game::with_catalog(target.clone(), LANGUAGES);
        let mut tried: Vec<Letter> = Vec::new();

        for _ in 0..40 {
            let l = Letter::all().nth(rng.random_range(0..26)).unwrap();
            let was_over = game.is_over();
            let before = game.guessed().len();
            let outcome = game.guess(l);

            if was_over {
                assert_eq!(outcome, GuessOutcome::Ignored);
                assert_eq!(game.guessed().len(), before);
                continue;
            }
            if tried.contains(&l) {
                assert_eq!(outcome, GuessOutcome::Repeated);
                assert_eq!(game.guessed().len(), before);
            } else {
                tried.push(l);
            }

            let wrong = tried.iter().filter(|&&t| !target.contains(t)).count();
            let covered = target.letters().all(|t| tried.contains(&t));
            assert_eq!(game.wrong_guess_count(), wrong);
            assert_eq!(game.guessed().len(), tried.len());
            assert_eq!(game.is_won(), covered);
            assert_eq!(game.is_lost(), wrong >= allowed);
            assert_eq!(game.is_over(), covered || wrong >= allowed);

            let board = Board::from_game(&game, LANGUAGES);
            let lost_chips = board.chips.iter().filter(|chip| chip.lost).count();
            assert_eq!(lost_chips, wrong.min(LANGUAGES.len()));
            assert_eq!(board.show_new_game, game.is_over());
        }
    }
}

#[test]
fn seeded_simulation_is_reproducible() {
    let pool = WordPool::embedded();
    let config = SimulationConfig::new(40, 99);

    let first = run_simulation(&FrequencyStrategy, &pool, LANGUAGES, &config);
    let second = run_simulation(&FrequencyStrategy, &pool, LANGUAGES, &config);
    assert_eq!(first.wins, second.wins);
    assert_eq!(first.hardest_words, second.hardest_words);
    assert_eq!(first.wins + first.losses, 40);
}

#[test]
fn candidate_strategy_beats_random_on_embedded_words() {
    let pool = WordPool::embedded();
    let config = SimulationConfig::new(200, 5);

    let smart = StrategyType::from_name("candidates", pool.words());
    let random = StrategyType::from_name("random", pool.words());
    let smart = run_simulation(&smart, &pool, LANGUAGES, &config);
    let random = run_simulation(&random, &pool, LANGUAGES, &config);

    assert!(smart.wins >= random.wins);
}
