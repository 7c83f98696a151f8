use services::{QuestionnaireScreen, ScreenCommands, SessionService};
use tandem_core::questionnaire::QuestionnaireEvent;

/// View-model for one question screen: the services-level screen driver
/// plus display formatting.
pub struct QuestionnaireVm {
    screen: QuestionnaireScreen,
}

impl QuestionnaireVm {
    /// Enters the screen for `index`. The returned commands are the caller's
    /// to interpret (full-duration timer start or, when the index is out of
    /// range, a summary navigation).
    #[must_use]
    pub fn enter(
        session: SessionService,
        index: usize,
        duration_secs: u32,
    ) -> (Self, ScreenCommands) {
        let (screen, commands) = QuestionnaireScreen::enter(session, index, duration_secs);
        (Self { screen }, commands)
    }

    pub fn dispatch(&mut self, event: QuestionnaireEvent) -> ScreenCommands {
        self.screen.handle(event)
    }

    #[must_use]
    pub fn question_text(&self) -> Option<String> {
        self.screen.question_text()
    }

    /// 1-based "Question N" heading.
    #[must_use]
    pub fn heading(&self) -> String {
        let number = self.screen.index().map_or(0, |index| index + 1);
        format!("Question {number}")
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        self.screen.draft()
    }

    #[must_use]
    pub fn seconds_remaining(&self) -> u32 {
        self.screen.seconds_remaining()
    }

    #[must_use]
    pub fn timer_label(&self) -> String {
        format!("Time remaining: {} seconds", self.screen.seconds_remaining())
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.screen.can_go_previous()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.screen.is_finished()
    }
}
