//! Display functions for the line-mode board and command results

use super::formatters::{chip_label, key_text, lives_bar, slot_text};
use crate::catalog::{Language, allowed_wrong_guesses};
use crate::commands::SimulationResult;
use crate::game::{Board, GameStatus, view};
use colored::Colorize;
use std::io::{self, Write};

/// Write the whole board as colored text
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_board<W: Write>(out: &mut W, board: &Board, catalog: &[Language]) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {}", view::TITLE.bright_cyan().bold())?;
    writeln!(out, " {}", view::subtitle(catalog).bright_black())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    if let Some(title) = board.banner.title() {
        let title = if board.status == GameStatus::Won {
            title.green().bold()
        } else {
            title.red().bold()
        };
        writeln!(out, "\n  {title}")?;
    }
    if let Some(message) = board.banner.message() {
        writeln!(out, "  {}", message.italic())?;
    }

    writeln!(out)?;
    let chips: Vec<String> = board.chips.iter().map(|c| chip_label(c).to_string()).collect();
    for row in chips.chunks(5) {
        writeln!(out, "  {}", row.join(" "))?;
    }

    writeln!(out)?;
    let slots: String = board.slots.iter().map(|&s| slot_text(s).to_string()).collect();
    writeln!(out, "  {slots}")?;

    writeln!(out)?;
    for row in board.keys.chunks(13) {
        let keys: Vec<String> = row.iter().map(|&k| key_text(k).to_string()).collect();
        writeln!(out, "  {}", keys.join(" "))?;
    }

    if let Some(attempts) = &board.attempts_left {
        let bar = lives_bar(board.guesses_left, allowed_wrong_guesses(catalog));
        writeln!(out, "\n  [{}] {attempts}", bar.green())?;
    }

    Ok(())
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult, strategy_name: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {strategy_name}");
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate).bright_yellow().bold()
    );
    println!(
        "   Won / lost:       {} / {}",
        result.wins.to_string().green(),
        result.losses.to_string().red()
    );
    println!(
        "   Avg wrong:        {:.2}",
        result.average_wrong_guesses
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if !result.wrong_distribution.is_empty() {
        println!(
            "\n📈 {}",
            "Wrong guesses in won games:".bright_cyan().bold()
        );
        for (&wrong, &count) in &result.wrong_distribution {
            let pct = count as f64 / result.wins.max(1) as f64 * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {wrong}: {bar} {count:5} ({pct:5.1}%)");
        }
    }

    if !result.hardest_words.is_empty() {
        println!("\n💀 {}", "Words that beat the strategy:".bright_red().bold());
        println!("   {}", result.hardest_words.join(", "));
    }
}
