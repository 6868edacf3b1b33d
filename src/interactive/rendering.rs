//! TUI rendering with ratatui
//!
//! Draws the board view model. Screen geometry lives in `screen_layout` and
//! `key_rects` so mouse hit-testing and drawing agree on where keys are.

use super::app::App;
use super::effects::ParticleGlyph;
use crate::catalog::Rgb;
use crate::game::{Banner, Board, GameStatus, Key, KeyState, view};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

const KEYS_PER_ROW: u16 = 13;
const KEY_WIDTH: u16 = 3;
const KEY_STRIDE: u16 = 4;
const NEW_GAME_LABEL: &str = " ⏎ New Game ";

/// Named regions of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub banner: Rect,
    pub chips: Rect,
    pub word: Rect,
    pub keyboard: Rect,
    pub footer: Rect,
    pub announcement: Rect,
    pub status: Rect,
}

#[must_use]
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(4), // Status banner
            Constraint::Length(4), // Language chips
            Constraint::Length(3), // Word
            Constraint::Length(4), // Keyboard
            Constraint::Length(3), // Attempts / new game
            Constraint::Min(3),    // Announcement
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        banner: chunks[1],
        chips: chunks[2],
        word: chunks[3],
        keyboard: chunks[4],
        footer: chunks[5],
        announcement: chunks[6],
        status: chunks[7],
    }
}

/// Cell rectangles of the 26 keys inside the keyboard block
///
/// Keys that do not fit are clipped to an empty rectangle.
#[must_use]
pub fn key_rects(keyboard: Rect) -> Vec<Rect> {
    let inner = Block::default().borders(Borders::ALL).inner(keyboard);
    let row_width = KEYS_PER_ROW * KEY_STRIDE - 1;
    let left = inner.x + inner.width.saturating_sub(row_width) / 2;

    (0..26u16)
        .map(|i| Rect {
            x: left + (i % KEYS_PER_ROW) * KEY_STRIDE,
            y: inner.y + i / KEYS_PER_ROW,
            width: KEY_WIDTH,
            height: 1,
        })
        .map(|rect| rect.intersection(inner))
        .collect()
}

/// Where the New Game button sits inside the footer
#[must_use]
pub fn new_game_rect(footer: Rect) -> Rect {
    let inner = Block::default().borders(Borders::ALL).inner(footer);
    let width = (NEW_GAME_LABEL.chars().count() as u16).min(inner.width);
    Rect {
        x: inner.x + (inner.width - width) / 2,
        y: inner.y,
        width,
        height: inner.height.min(1),
    }
}

const fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App<impl rand::Rng>) {
    let board = app.session.board();
    let layout = screen_layout(f.area());

    render_header(f, app, layout.header);
    render_banner(f, &board, layout.banner);
    render_chips(f, &board, layout.chips);
    render_word(f, &board, layout.word);
    render_keyboard(f, app, &board, layout.keyboard);
    render_footer(f, &board, layout.footer);
    render_announcement(f, &board, layout.announcement);
    render_status(f, app, layout.status);

    render_particles(f, app);
}

fn border_color(board: &Board) -> Color {
    match board.status {
        GameStatus::Playing => Color::Cyan,
        GameStatus::Won => Color::Green,
        GameStatus::Lost => Color::Red,
    }
}

fn render_header(f: &mut Frame, app: &App<impl rand::Rng>, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            view::TITLE,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            view::subtitle(app.session.catalog()),
            Style::default().fg(Color::Gray),
        )),
    ];

    let header = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_banner(f: &mut Frame, board: &Board, area: Rect) {
    let (bg, fg) = match board.banner {
        Banner::Empty => (Color::Reset, Color::Reset),
        Banner::Farewell(_) => (Color::Rgb(0x7A, 0x5E, 0xA7), Color::Rgb(0xF9, 0xF4, 0xDA)),
        Banner::Won => (Color::Rgb(0x10, 0xA9, 0x5B), Color::Rgb(0xF9, 0xF4, 0xDA)),
        Banner::Lost => (Color::Rgb(0xBA, 0x2A, 0x2A), Color::Rgb(0xF9, 0xF4, 0xDA)),
    };

    let mut lines = Vec::new();
    if let Some(title) = board.banner.title() {
        lines.push(Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }
    if let Some(message) = board.banner.message() {
        let style = if matches!(board.banner, Banner::Farewell(_)) {
            Style::default().add_modifier(Modifier::ITALIC)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(message.to_string(), style)));
    }

    let banner = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(bg).fg(fg))
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(banner, area);
}

fn render_chips(f: &mut Frame, board: &Board, area: Rect) {
    let mut spans = Vec::with_capacity(board.chips.len() * 2);
    for chip in &board.chips {
        let span = if chip.lost {
            Span::styled(
                format!(" 💀 {} ", chip.name),
                Style::default()
                    .fg(Color::DarkGray)
                    .bg(Color::Black)
                    .add_modifier(Modifier::CROSSED_OUT | Modifier::DIM),
            )
        } else {
            Span::styled(
                format!(" {} ", chip.name),
                Style::default()
                    .fg(color(chip.foreground))
                    .bg(color(chip.background))
                    .add_modifier(Modifier::BOLD),
            )
        };
        spans.push(span);
        spans.push(Span::raw(" "));
    }

    let chips = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Languages ")
                .borders(Borders::ALL),
        );
    f.render_widget(chips, area);
}

fn render_word(f: &mut Frame, board: &Board, area: Rect) {
    let spans: Vec<Span> = board
        .slots
        .iter()
        .flat_map(|slot| {
            let style = if slot.missed {
                Style::default()
                    .fg(Color::Red)
                    .bg(Color::Rgb(0x32, 0x32, 0x32))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(Color::Rgb(0xF9, 0xF4, 0xDA))
                    .bg(Color::Rgb(0x32, 0x32, 0x32))
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            };
            let letter = slot.letter.unwrap_or(' ');
            [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
        })
        .collect();

    let word = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color(board))),
        );
    f.render_widget(word, area);
}

fn render_keyboard(f: &mut Frame, app: &App<impl rand::Rng>, board: &Board, area: Rect) {
    let block = Block::default()
        .title(" Keyboard ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    f.render_widget(block, area);

    for (index, (key, rect)) in board.keys.iter().zip(key_rects(area)).enumerate() {
        let style = key_style(*key, index == app.cursor);
        let label = Paragraph::new(format!(" {} ", key.letter.to_uppercase())).style(style);
        f.render_widget(label, rect);
    }
}

/// Style of one key; a used key under the cursor is only underlined since
/// pressing it again does nothing
fn key_style(key: Key, selected: bool) -> Style {
    let mut style = match key.state {
        KeyState::Correct => Style::default().fg(Color::Black).bg(Color::Rgb(0x10, 0xA9, 0x5B)),
        KeyState::Wrong => Style::default().fg(Color::White).bg(Color::Rgb(0xEC, 0x5D, 0x49)),
        KeyState::Unused => Style::default().fg(Color::Black).bg(Color::Rgb(0xFC, 0xBA, 0x29)),
    };
    if key.disabled {
        style = style.add_modifier(Modifier::DIM);
    } else if selected && key.used {
        style = style.add_modifier(Modifier::UNDERLINED);
    } else if selected {
        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    }
    style
}

fn render_footer(f: &mut Frame, board: &Board, area: Rect) {
    let block = Block::default().borders(Borders::ALL).border_type(BorderType::Rounded);
    f.render_widget(block, area);

    if board.show_new_game {
        let button = Paragraph::new(NEW_GAME_LABEL).style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(0x11, 0xB5, 0xE5))
                .add_modifier(Modifier::BOLD),
        );
        f.render_widget(button, new_game_rect(area));
    } else if let Some(attempts) = &board.attempts_left {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let text = Paragraph::new(attempts.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        f.render_widget(text, inner);
    }
}

fn render_announcement(f: &mut Frame, board: &Board, area: Rect) {
    let items: Vec<ListItem> = board
        .announcement
        .lines()
        .map(|line| ListItem::new(line.to_string()).style(Style::default().fg(Color::Gray)))
        .collect();

    let list = List::new(items).block(Block::default().title(" Status ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, app: &App<impl rand::Rng>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats = app.session.stats();
    let stats_text = format!(
        "Games: {} | Wins: {} | Win Rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[0]);

    let help_text = if app.session.game().is_over() {
        "Enter/Space: New Game | Esc: Quit"
    } else {
        "A-Z: Guess | ←→↑↓ + Enter: Pick key | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

fn render_particles(f: &mut Frame, app: &App<impl rand::Rng>) {
    let area = f.area();
    let buf = f.buffer_mut();
    for particle in app.effects.particles(area.width, area.height) {
        let x = area.x + particle.x;
        let y = area.y + particle.y;
        match particle.glyph {
            ParticleGlyph::Emoji(glyph) => {
                buf.set_string(x, y, glyph, Style::default());
            }
            ParticleGlyph::Char(glyph, rgb) => {
                buf.set_string(x, y, glyph.to_string(), Style::default().fg(color(rgb)));
            }
        }
    }
}
