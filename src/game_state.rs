use crate::generator::BaseString;
use crate::leaderboard::Leaderboard;
use crate::session::{Clock, GameSession, SubmitOutcome};
use crate::{debug_log, info_log};
use rand::Rng;

/// What the player asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserAction {
    /// A sanitized lowercase word.
    Submit(String),
    Reset,
    ShowScores,
    Exit,
}

/// Presentation surface driven by [`game_loop`].
///
/// Implementations only render session state; they never mutate it.
pub trait GameInterface {
    fn display_base(&mut self, base: &BaseString);

    /// Blocks for the next action. `None` means the input was unusable and the
    /// loop should ask again.
    fn read_action(&mut self) -> Option<UserAction>;

    fn display_outcome(&mut self, word: &str, outcome: &SubmitOutcome);
    fn display_leaderboard(&mut self, leaderboard: &Leaderboard);
    fn display_reset_message(&mut self, base: &BaseString);
    fn display_exit_message(&mut self);
}

pub fn game_loop<R, C, I>(session: &mut GameSession<'_, R, C>, interface: &mut I, reshuffle: bool)
where
    R: Rng,
    C: Clock,
    I: GameInterface + ?Sized,
{
    info_log!(
        "Starting game loop ({} dictionary words, reshuffle={})",
        session.dictionary().len(),
        reshuffle
    );
    interface.display_base(session.base());
    interface.display_leaderboard(session.leaderboard());

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("Action: {:?}", action);

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::Reset => {
                session.reset();
                interface.display_reset_message(session.base());
            }
            UserAction::ShowScores => interface.display_leaderboard(session.leaderboard()),
            UserAction::Submit(word) => {
                let outcome = session.submit(&word);
                interface.display_outcome(&word, &outcome);
                if outcome.is_inserted() {
                    interface.display_leaderboard(session.leaderboard());
                }
                if reshuffle {
                    session.reset();
                    interface.display_reset_message(session.base());
                }
            }
        }
    }
}
