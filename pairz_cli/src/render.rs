//! Terminal rendering: leveled messages, the admin roster table, and the
//! pairing report. Layout math (column widths, padding) stays here in Rust
//! with `unicode-width`; the library only hands over finalized strings.

use colored::*;
use pairz_lib::error::Result;
use pairz_lib::messages::{CmdMessage, MessageLevel};
use pairz_lib::model::Player;
use pairz_lib::pairing::{Band, PairingRow};
use pairz_lib::presenter::Presenter;
use unicode_width::UnicodeWidthStr;

const TABLE_HEADERS: [&str; 3] = ["Bracket Category", "Player 1 (White)", "Player 2 (Black)"];
const BYE_CELL: &str = "BYE (No Opponent)";

pub fn print_menu() {
    println!();
    println!("{}", "=== CHESS TOURNAMENT SYSTEM ===".bold());
    println!("1. Register new player");
    println!("2. Generate match pairings");
    println!("3. View all players (admin only)");
    println!("4. Exit");
}

pub fn print_message(message: &CmdMessage) {
    match message.level {
        MessageLevel::Info => println!("{}", message.content),
        MessageLevel::Success => println!("{}", message.content.green()),
        MessageLevel::Warning => println!("{}", message.content.yellow()),
        MessageLevel::Error => eprintln!("{}", message.content.red()),
    }
}

pub fn print_players(players: &[Player]) {
    if players.is_empty() {
        print_message(&CmdMessage::info("No players registered."));
        return;
    }

    println!();
    println!("{}", "--- Registered Players (Admin) ---".bold());
    println!("{:<5} {:<6} {:<20} {:<6}", "ID", "Title", "Name", "ELO");
    println!("{}", "-".repeat(45));
    for player in players {
        let title = if player.title.is_none() {
            String::new()
        } else {
            player.title.to_string()
        };
        println!(
            "{:<5} {:<6} {:<20} {:<6}",
            player.id, title, player.name, player.elo
        );
    }
    println!("{}", "-".repeat(45));
}

/// Prints the pairing report: per-band console sections, then the rendered
/// table unless plain mode is on. One `present` call per generation.
pub struct SessionPresenter {
    plain: bool,
}

impl SessionPresenter {
    pub fn new(plain: bool) -> Self {
        Self { plain }
    }
}

impl Presenter for SessionPresenter {
    fn present(&mut self, rows: &[PairingRow]) -> Result<()> {
        println!();
        println!("{}", "=== TOURNAMENT PAIRINGS GENERATED ===".bold());

        let mut current: Option<Band> = None;
        for row in rows {
            if current != Some(row.bracket) {
                current = Some(row.bracket);
                println!();
                println!(">> {} Bracket:", row.bracket.label().cyan());
            }
            match &row.black {
                Some(black) => println!("   {}  VS  {}", row.white, black),
                None => println!("   {} gets a BYE (No Match)", row.white),
            }
        }

        if !self.plain {
            println!();
            print!("{}", render_table(rows));
        }
        Ok(())
    }
}

/// Box-drawn pairing table, the console stand-in for a graphical
/// matchmaking board. Widths are display widths, not byte or char counts.
pub fn render_table(rows: &[PairingRow]) -> String {
    let cells: Vec<[String; 3]> = rows
        .iter()
        .map(|row| {
            [
                row.bracket.label().to_string(),
                row.white.clone(),
                row.black.clone().unwrap_or_else(|| BYE_CELL.to_string()),
            ]
        })
        .collect();

    let mut widths = [0usize; 3];
    for (i, header) in TABLE_HEADERS.iter().enumerate() {
        widths[i] = header.width();
    }
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let mut out = String::new();
    push_rule(&mut out, &widths);
    push_line(&mut out, &widths, TABLE_HEADERS);
    push_rule(&mut out, &widths);
    for row in &cells {
        push_line(
            &mut out,
            &widths,
            [row[0].as_str(), row[1].as_str(), row[2].as_str()],
        );
    }
    push_rule(&mut out, &widths);
    out
}

fn push_rule(out: &mut String, widths: &[usize; 3]) {
    for width in widths {
        out.push('+');
        out.push_str(&"-".repeat(width + 2));
    }
    out.push_str("+\n");
}

fn push_line(out: &mut String, widths: &[usize; 3], cols: [&str; 3]) {
    for (i, cell) in cols.iter().enumerate() {
        out.push_str("| ");
        out.push_str(cell);
        out.push_str(&" ".repeat(widths[i] - cell.width() + 1));
    }
    out.push_str("|\n");
}
