//! CLI darts scorer example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use dartrs::{
    DEFAULT_STARTING_SCORE, GameState, Match, MatchOptions, Redo, RosterEntry, ScoreEvent,
    TurnStatus, Undo,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const CENTER: f64 = 200.0;
const RADIUS: f64 = 180.0;

fn main() {
    env_logger::init();

    println!("Darts CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Match::new(MatchOptions::default(), seed);
    let mut aim = ChaCha8Rng::seed_from_u64(seed);

    loop {
        let names = prompt_raw("Player names (comma separated): ");
        if names.eq_ignore_ascii_case("q") || names.eq_ignore_ascii_case("quit") {
            return;
        }
        let roster: Vec<RosterEntry> = names
            .split(',')
            .map(|name| RosterEntry::new(name.trim()))
            .collect();

        let Some(starting_score) = prompt_score(&format!(
            "Starting score (blank for {DEFAULT_STARTING_SCORE}): "
        )) else {
            return;
        };

        match game.start_game(&roster, starting_score) {
            Ok(()) => break,
            Err(err) => println!("Setup error: {err}"),
        }
    }

    loop {
        let state = game.snapshot();
        print_table(&state);

        if state.game_over {
            println!("Game over. [u]ndo, [r]edo or [q]uit");
        } else {
            println!("{}", format_actions(&game));
        }

        let input = prompt_line("Throw: ");
        match input.as_str() {
            "q" | "quit" => return,
            "u" | "undo" => match game.undo() {
                Undo::Nothing => println!("Nothing to undo."),
                Undo::Throw(event) => println!("Removed {event}."),
                Undo::Turn { player, status } => {
                    println!("Reopened {status:?} turn of {}.", name_of(&state, player));
                }
            },
            "r" | "redo" => match game.redo() {
                Redo::Nothing => println!("Nothing to redo."),
                Redo::Turn { player, status } => {
                    println!("Closed {status:?} turn of {} again.", name_of(&state, player));
                }
            },
            "a" | "auto" => {
                let x = aim.random_range(CENTER - RADIUS * 1.1..CENTER + RADIUS * 1.1);
                let y = aim.random_range(CENTER - RADIUS * 1.1..CENTER + RADIUS * 1.1);
                match game.tap(x, y, CENTER, CENTER, RADIUS, now_millis()) {
                    Ok((event, result)) => {
                        println!("Tap at ({x:.0}, {y:.0}) scored {event}.");
                        report(&state, result.player, result.status, result.remaining);
                    }
                    Err(err) => println!("Throw error: {err}"),
                }
            }
            shorthand => match ScoreEvent::parse(shorthand, now_millis()) {
                Ok(event) => match game.add_throw(event) {
                    Ok(result) => report(&state, result.player, result.status, result.remaining),
                    Err(err) => println!("Throw error: {err}"),
                },
                Err(err) => println!("Input error: {err}"),
            },
        }
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as u64)
}

fn prompt_line(prompt: &str) -> String {
    prompt_raw(prompt).to_lowercase()
}

fn prompt_raw(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_score(prompt: &str) -> Option<u32> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        if input.is_empty() {
            return Some(DEFAULT_STARTING_SCORE);
        }
        match input.parse::<u32>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn name_of(state: &GameState, player: usize) -> &str {
    state
        .standings
        .get(player)
        .map_or("?", |standing| standing.player.name.as_str())
}

fn report(state: &GameState, player: usize, status: TurnStatus, remaining: u32) {
    let name = name_of(state, player);
    match status {
        TurnStatus::Open => {}
        TurnStatus::Complete => println!("{name} ends the turn on {remaining}."),
        TurnStatus::Bust => println!("{}", colorize(&format!("{name} busts!"), "31")),
        TurnStatus::Win => println!("{}", colorize(&format!("{name} checks out!"), "32")),
    }
}

fn print_table(state: &GameState) {
    println!();
    for (index, standing) in state.standings.iter().enumerate() {
        let marker = if state.current_player == Some(index) {
            "*"
        } else {
            " "
        };
        let remaining = if standing.player.active {
            standing.remaining.to_string()
        } else {
            colorize("out", "90")
        };
        println!("{marker} {:<12} {remaining}", standing.player.name);
    }

    if let Some(turn) = &state.open_turn {
        let throws: Vec<String> = turn
            .throws()
            .iter()
            .map(|throw| throw.event.to_string())
            .collect();
        println!(
            "\n{} to throw: [{}] ({} scored)",
            name_of(state, turn.player()),
            throws.join(" "),
            turn.subtotal()
        );
    }

    if let Some(last) = state.closed_turns.first() {
        let throws: Vec<String> = last
            .throws()
            .iter()
            .map(|throw| throw.event.to_string())
            .collect();
        println!(
            "Last turn: {} [{}] {:?}",
            name_of(state, last.player()),
            throws.join(" "),
            last.status()
        );
    }
    println!();
}

fn format_actions(game: &Match) -> String {
    let parts = [
        format_action("T20/D16/19/B/OB/-", "", true),
        format_action("auto", "a", true),
        format_action("undo", "u", game.can_undo()),
        format_action("redo", "r", game.can_redo()),
        format_action("quit", "q", true),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = if key.is_empty() {
        label.to_string()
    } else {
        format!("[{key}]{label}")
    };
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
