//! TUI application state and logic

use super::effects::EffectLayer;
use super::rendering::{key_rects, new_game_rect, screen_layout};
use crate::core::Letter;
use crate::game::Session;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Position, Rect},
};
use std::io;
use std::time::Duration;

/// How often the screen is redrawn while no input arrives
const TICK: Duration = Duration::from_millis(50);

/// Keys per keyboard row, used by up/down navigation
const ROW_LEN: usize = 13;

/// Application state
pub struct App<R: Rng> {
    pub session: Session<R>,
    /// Index (0–25) of the highlighted on-screen key
    pub cursor: usize,
    pub effects: EffectLayer,
    pub should_quit: bool,
    /// Screen area of the last draw, for mouse hit-testing
    pub area: Rect,
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(session: Session<R>) -> Self {
        Self {
            session,
            cursor: 0,
            effects: EffectLayer::default(),
            should_quit: false,
            area: Rect::default(),
        }
    }

    /// The letter under the keyboard cursor
    #[must_use]
    pub fn cursor_letter(&self) -> Option<Letter> {
        Letter::all().nth(self.cursor)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c)
                if c.is_ascii_alphabetic()
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if let Ok(letter) = Letter::try_from(c) {
                    self.cursor = letter.index();
                    self.session.guess(letter);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            KeyCode::Left => self.cursor = (self.cursor + 25) % 26,
            KeyCode::Right => self.cursor = (self.cursor + 1) % 26,
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(ROW_LEN),
            KeyCode::Down => self.cursor = (self.cursor + ROW_LEN).min(25),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let position = Position::new(mouse.column, mouse.row);
        let layout = screen_layout(self.area);

        if self.session.game().is_over() {
            if new_game_rect(layout.footer).contains(position) {
                self.start_new_game();
            }
            return;
        }

        let hit = key_rects(layout.keyboard)
            .iter()
            .position(|rect| rect.contains(position));
        if let Some(index) = hit {
            self.cursor = index;
            self.activate();
        }
    }

    /// Advance animations to match the current game state
    pub fn tick(&mut self) {
        let effect = self.session.board().effect;
        self.effects.sync(effect, self.session.rng());
    }

    /// Enter/Space/click: guess the highlighted key, or start over once the
    /// game has ended
    fn activate(&mut self) {
        if self.session.game().is_over() {
            self.start_new_game();
        } else if let Some(letter) = self.cursor_letter() {
            self.session.guess(letter);
        }
    }

    fn start_new_game(&mut self) {
        self.session.new_game();
        self.cursor = 0;
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling. The terminal is restored first.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    tracing::debug!("starting interactive session");

    loop {
        app.tick();
        terminal.draw(|f| {
            app.area = f.area();
            super::rendering::ui(f, &app);
        })?;

        if !event::poll(TICK)? {
            continue;
        }

        match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    let stats = app.session.stats();
    tracing::info!(
        games = stats.total_games,
        won = stats.games_won,
        "interactive session ended"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LANGUAGES;
    use crate::core::TargetWord;
    use crate::game::Effect;
    use crate::interactive::effects::Overlay;
    use crate::wordlists::WordPool;
    use rand::{SeedableRng, rngs::StdRng};

    fn new_app(word: &str) -> App<StdRng> {
        let pool = WordPool::new(vec![TargetWord::new(word).unwrap()]).unwrap();
        let mut app = App::new(Session::new(pool, StdRng::seed_from_u64(4), LANGUAGES));
        app.area = Rect::new(0, 0, 80, 40);
        app
    }

    fn press(app: &mut App<StdRng>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn click(app: &mut App<StdRng>, rect: Rect) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: rect.x,
            row: rect.y,
            modifiers: KeyModifiers::NONE,
        });
    }

    #[test]
    fn typing_guesses_and_moves_cursor() {
        let mut app = new_app("go");
        press(&mut app, KeyCode::Char('G'));
        assert!(app.session.game().is_guessed(Letter::new('g').unwrap()));
        assert_eq!(app.cursor, 6);
    }

    #[test]
    fn arrows_wrap_and_clamp() {
        let mut app = new_app("go");
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor, 25);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.cursor, 0);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor, 13);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor, 25);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.cursor, 12);
    }

    #[test]
    fn enter_guesses_cursor_letter() {
        let mut app = new_app("go");
        app.cursor = 14;
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.game().last_guessed(), Letter::new('o').ok());
    }

    #[test]
    fn enter_after_game_over_starts_new_game() {
        let mut app = new_app("go");
        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('o'));
        assert!(app.session.game().is_won());

        press(&mut app, KeyCode::Char(' '));
        assert!(!app.session.game().is_over());
        assert!(app.session.game().guessed().is_empty());
        assert_eq!(app.session.stats().total_games, 1);
    }

    #[test]
    fn quit_keys() {
        let mut app = new_app("go");
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = new_app("go");
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn modifier_chords_are_not_guesses() {
        let mut app = new_app("go");
        app.handle_key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('g'), KeyModifiers::ALT));
        assert!(app.session.game().guessed().is_empty());
        assert!(!app.should_quit);

        app.handle_key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT));
        assert_eq!(app.session.game().guessed().len(), 1);
    }

    #[test]
    fn clicking_a_key_guesses_it() {
        let mut app = new_app("go");
        let rects = key_rects(screen_layout(app.area).keyboard);
        click(&mut app, rects[6]);
        assert_eq!(app.session.game().last_guessed(), Letter::new('g').ok());
        assert_eq!(app.cursor, 6);
    }

    #[test]
    fn new_game_button_only_works_when_over() {
        let mut app = new_app("go");
        let button = new_game_rect(screen_layout(app.area).footer);
        press(&mut app, KeyCode::Char('g'));
        click(&mut app, button);
        assert_eq!(app.session.game().guessed().len(), 1);

        press(&mut app, KeyCode::Char('o'));
        click(&mut app, button);
        assert!(app.session.game().guessed().is_empty());
    }

    #[test]
    fn tick_follows_game_effect() {
        let mut app = new_app("go");
        app.tick();
        assert_eq!(app.effects.overlay(), &Overlay::None);

        for c in "qwertyui".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        app.tick();
        assert_eq!(app.effects.overlay().effect(), Effect::Tears);
    }
}
