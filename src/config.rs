use crate::cli::Cli;
use crate::generator::DEFAULT_BASE_LENGTH;
use std::path::PathBuf;
use thiserror::Error;

const APP_DIR: &str = "word-hunt";
const LOG_FILE: &str = "word-hunt.log";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base string length must be at least 1, got {0}")]
    InvalidBaseLength(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterfaceKind {
    Cli,
    Tui,
}

/// Resolved runtime settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub dictionary_path: Option<PathBuf>,
    pub base_length: usize,
    pub interface: InterfaceKind,
    pub reshuffle_after_submit: bool,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            base_length: DEFAULT_BASE_LENGTH,
            interface: InterfaceKind::Cli,
            reshuffle_after_submit: false,
            log_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        if cli.length == 0 {
            return Err(ConfigError::InvalidBaseLength(cli.length));
        }

        let interface = if cli.tui {
            InterfaceKind::Tui
        } else {
            InterfaceKind::Cli
        };

        // The TUI owns the terminal, so its logs need somewhere else to go
        let log_path = match (&cli.log_file, interface) {
            (Some(path), _) => Some(path.clone()),
            (None, InterfaceKind::Tui) => default_log_path(),
            (None, InterfaceKind::Cli) => None,
        };

        Ok(Self {
            dictionary_path: cli.dictionary_path.clone(),
            base_length: cli.length,
            interface,
            reshuffle_after_submit: cli.reshuffle,
            log_path,
        })
    }
}

pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR).join(LOG_FILE))
}
