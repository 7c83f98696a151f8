use tandem_core::model::{Player, QUESTION_SLOTS};
use tandem_core::questionnaire::Destination;

use crate::session_service::SessionService;

/// Which of the two setup screens is submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSlot {
    First,
    Second,
}

/// Raw contents of a player setup form: one name field and a fixed number of
/// question fields, all pre-populated empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSetupForm {
    pub name: String,
    pub questions: [String; QUESTION_SLOTS],
}

impl Default for PlayerSetupForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            questions: std::array::from_fn(|_| String::new()),
        }
    }
}

impl PlayerSetupForm {
    /// Builds the player record. The name is kept verbatim; blank question
    /// slots are dropped by `Player::new`.
    #[must_use]
    pub fn into_player(self) -> Player {
        Player::new(self.name, self.questions)
    }
}

/// Saves a submitted setup form and returns where to go next: the second
/// setup screen after player one, the first question after player two.
pub fn submit(session: &SessionService, slot: PlayerSlot, form: PlayerSetupForm) -> Destination {
    let player = form.into_player();
    match slot {
        PlayerSlot::First => {
            session.save_first_player(player);
            Destination::PlayerTwoSetup
        }
        PlayerSlot::Second => {
            session.save_second_player(player);
            Destination::Question(0)
        }
    }
}
