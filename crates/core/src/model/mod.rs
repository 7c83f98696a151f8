mod player;
mod session;
mod settings;

pub use player::{Player, QUESTION_SLOTS};
pub use session::SessionStore;
pub use settings::{QuizSettings, SettingsError, DEFAULT_QUESTION_DURATION_MS};
