use anyhow::Context;
use std::io;
use word_hunt::cli::{CliInterface, parse_cli};
use word_hunt::config::{GameConfig, InterfaceKind};
use word_hunt::dictionary::{embedded_dictionary, load_dictionary_from_file};
use word_hunt::game_state::game_loop;
use word_hunt::logging;
use word_hunt::session::GameSession;
use word_hunt::tui::TuiInterface;

fn main() -> anyhow::Result<()> {
    let cli = parse_cli();
    let config = GameConfig::from_cli(&cli)?;
    logging::init(config.log_path.as_deref()).context("failed to set up logging")?;
    log::info!("Starting with {:?}", config);

    let dictionary = match &config.dictionary_path {
        Some(path) => load_dictionary_from_file(path)?,
        None => embedded_dictionary(),
    };
    log::info!("Dictionary ready with {} words", dictionary.len());

    let mut session = GameSession::new(&dictionary, config.base_length);

    match config.interface {
        InterfaceKind::Cli => {
            println!("Loaded {} words.", dictionary.len());
            let stdin = io::stdin();
            let mut interface = CliInterface::new(stdin.lock());
            game_loop(&mut session, &mut interface, config.reshuffle_after_submit);
        }
        InterfaceKind::Tui => {
            let mut interface = TuiInterface::new().context("failed to initialize terminal")?;
            game_loop(&mut session, &mut interface, config.reshuffle_after_submit);
        }
    }

    Ok(())
}
