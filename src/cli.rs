use crate::debug_log;
use crate::game_state::{GameInterface, UserAction};
use crate::generator::{BaseString, DEFAULT_BASE_LENGTH};
use crate::leaderboard::{LEADERBOARD_CAPACITY, Leaderboard};
use crate::session::SubmitOutcome;
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Find words hidden in a string of random letters
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list (defaults to the built-in list)
    #[arg(short = 'i', long = "dictionary")]
    pub dictionary_path: Option<PathBuf>,

    /// Number of letters in the base string
    #[arg(short = 'l', long = "length", default_value_t = DEFAULT_BASE_LENGTH)]
    pub length: usize,

    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Draw new letters after every submitted word
    #[arg(long)]
    pub reshuffle: bool,

    /// Write logs to this file instead of stderr
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

const CMD_QUIT: &str = ":quit";
const CMD_NEW: &str = ":new";
const CMD_SCORES: &str = ":scores";

pub(crate) fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase())
}

/// Turns one line of player input into an action. Words are trimmed and
/// lowercased; anything that is not `a..=z` afterwards is rejected.
pub fn parse_input(line: &str) -> Option<UserAction> {
    let input = line.trim().to_lowercase();
    match input.as_str() {
        CMD_QUIT => Some(UserAction::Exit),
        CMD_NEW => Some(UserAction::Reset),
        CMD_SCORES => Some(UserAction::ShowScores),
        _ if is_valid_word(&input) => Some(UserAction::Submit(input)),
        _ => None,
    }
}

pub fn read_action<R: BufRead>(reader: &mut R) -> Option<UserAction> {
    println!("\nEnter a word ({CMD_NEW} for new letters, {CMD_SCORES} for the leaderboard, {CMD_QUIT} to quit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => return Some(UserAction::Exit),
        Ok(_) => {}
        Err(e) => {
            debug_log!("read_action() - Failed to read input: {}", e);
            return Some(UserAction::Exit);
        }
    }

    let action = parse_input(&input);
    if action.is_none() {
        println!("Invalid input. Please enter a single word using the letters a-z.");
    }
    action
}

/// One line per leaderboard slot, filled through the positional queries.
pub fn format_leaderboard(leaderboard: &Leaderboard) -> Vec<String> {
    (0..LEADERBOARD_CAPACITY)
        .map(|position| match leaderboard.entry_at(position) {
            Some(word) => format!(
                "{:>2}. {:<20} {:>3}",
                position + 1,
                word,
                leaderboard.score_at(position)
            ),
            None => format!("{:>2}. {:<20} {:>3}", position + 1, "-", "-"),
        })
        .collect()
}

pub fn display_base(base: &BaseString) {
    println!("Your letters: {}", spaced_letters(base));
}

pub fn spaced_letters(base: &BaseString) -> String {
    base.as_str()
        .chars()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn display_outcome(word: &str, outcome: &SubmitOutcome) {
    println!("{word}: {outcome}");
}

pub fn display_leaderboard(leaderboard: &Leaderboard) {
    println!("Leaderboard ({}/{LEADERBOARD_CAPACITY}):", leaderboard.len());
    for line in format_leaderboard(leaderboard) {
        println!("{line}");
    }
}

pub fn display_reset_message(base: &BaseString) {
    println!("New letters drawn.");
    display_base(base);
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// Line-based interface over any buffered reader.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_base(&mut self, base: &BaseString) {
        display_base(base);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        read_action(&mut self.reader)
    }

    fn display_outcome(&mut self, word: &str, outcome: &SubmitOutcome) {
        display_outcome(word, outcome);
    }

    fn display_leaderboard(&mut self, leaderboard: &Leaderboard) {
        display_leaderboard(leaderboard);
    }

    fn display_reset_message(&mut self, base: &BaseString) {
        display_reset_message(base);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
