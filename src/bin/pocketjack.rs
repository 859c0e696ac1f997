//! Terminal front-end for the blackjack engine.
//!
//! Reads single-key commands from stdin (H hit, S stand, Y new game, N quit)
//! and projects the table's positioned draw commands onto plain lines of
//! text. Set `BLACKJACK_DEBUG=1` to see the engine's trace lines on stderr.

use std::io::{self, BufRead};
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Metadata, Record};
use pocketjack::{Action, Card, Game, GameOptions, Surface, action_for_key, view};

/// Forwards engine log records to stderr.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        eprintln!("{}", record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Collects positioned draw commands and prints them as lines, top to
/// bottom, left to right. A crude projection of the 800x560 table onto a
/// terminal.
struct TerminalSurface {
    items: Vec<(u32, u32, String)>,
}

impl TerminalSurface {
    const fn new() -> Self {
        Self { items: Vec::new() }
    }

    fn flush(&mut self) {
        self.items.sort_by_key(|&(y, x, _)| (y, x));

        println!();
        let mut current_row = None;
        let mut line = String::new();
        for (y, _, text) in &self.items {
            if current_row != Some(*y) {
                if !line.is_empty() {
                    println!("{line}");
                    line.clear();
                }
                current_row = Some(*y);
            } else {
                line.push_str("   ");
            }
            line.push_str(text);
        }
        if !line.is_empty() {
            println!("{line}");
        }
    }
}

impl Surface for TerminalSurface {
    fn clear(&mut self) {
        self.items.clear();
    }

    fn draw_message(&mut self, msg: &str, x: u32, y: u32) {
        self.items.push((y, x, msg.to_string()));
    }

    fn draw_card(&mut self, card: Card, x: u32, y: u32) {
        self.items.push((y, x, format_card(card)));
    }
}

fn format_card(card: Card) -> String {
    let text = format!("[{card}]");
    if card.suit.is_red() {
        colorize(&text, "31")
    } else {
        text
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn redraw(surface: &mut TerminalSurface, game: &Game) {
    view::draw_table(surface, game);
    surface.flush();
}

fn main() {
    if std::env::var_os("BLACKJACK_DEBUG").is_some()
        && log::set_logger(&LOGGER).is_ok()
    {
        log::set_max_level(LevelFilter::Debug);
    }

    println!("Blackjack ([H]it, [S]tand, [Y] new game, [N] quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);
    let mut surface = TerminalSurface::new();

    if let Err(err) = game.new_round() {
        println!("Deal error: {err}");
        return;
    }
    redraw(&mut surface, &game);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let Some(key) = line.trim().chars().next() else {
            continue;
        };
        let Some(action) = action_for_key(key, game.phase) else {
            continue;
        };

        let step = match action {
            Action::Hit => game.hit().map(|_| ()).map_err(|err| err.to_string()),
            Action::Stand => game.stand().map(|_| ()).map_err(|err| err.to_string()),
            Action::NewGame => game.new_round().map(|_| ()).map_err(|err| err.to_string()),
            Action::Quit => {
                println!("Goodbye.");
                break;
            }
        };
        if let Err(err) = step {
            println!("Action error: {err}");
        }

        redraw(&mut surface, &game);
    }
}
