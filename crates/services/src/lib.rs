#![forbid(unsafe_code)]

pub mod onboarding;
pub mod questionnaire;
pub mod session_service;
pub mod summary;
pub mod timer;

pub use tandem_core::Clock;

pub use onboarding::{PlayerSetupForm, PlayerSlot};
pub use questionnaire::{QuestionnaireScreen, ScreenCommands, TimerCommand};
pub use session_service::SessionService;
pub use summary::{summary_rows, SummaryRow};
pub use timer::run_countdown;
