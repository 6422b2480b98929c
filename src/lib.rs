// Library interface for word-hunt
// The game engine lives in dictionary/generator/validator/leaderboard/session;
// the remaining modules are the interactive shell around it.

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod game_state;
pub mod generator;
pub mod leaderboard;
pub mod logging;
pub mod session;
pub mod tui;
pub mod validator;

// Re-export commonly used items for easier testing
pub use dictionary::{Dictionary, DictionaryError, load_dictionary_from_file, load_dictionary_from_str};
pub use game_state::{GameInterface, UserAction, game_loop};
pub use generator::{BaseString, DEFAULT_BASE_LENGTH, RandomStringGenerator, generate_base_string};
pub use leaderboard::{LEADERBOARD_CAPACITY, Leaderboard, Placement, ScoreEntry};
pub use session::{Clock, GameSession, ManualClock, SubmitOutcome, SystemClock};
pub use validator::{Verdict, validate};
