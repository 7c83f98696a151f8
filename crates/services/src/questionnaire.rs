use tandem_core::questionnaire::{
    Destination, Effect, QuestionnaireEngine, QuestionnaireEvent,
};

use crate::session_service::SessionService;

/// Timer instruction surfaced to the screen's owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Start { seconds: u32 },
    Cancel,
}

/// What the caller still has to interpret after an event: at most one timer
/// instruction and at most one navigation.
///
/// Contract: the timer instruction is handled **before** the navigation, so
/// a countdown scoped to the screen can never outlive it and fire a
/// duplicate save after the user has already moved away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenCommands {
    pub timer: Option<TimerCommand>,
    pub navigate: Option<Destination>,
}

/// One question screen: a [`QuestionnaireEngine`] bound to the session
/// store.
///
/// Store effects (answer saves) are applied immediately; timer and
/// navigation effects are returned as [`ScreenCommands`] because only the
/// platform layer owns the countdown task and the navigator.
pub struct QuestionnaireScreen {
    session: SessionService,
    engine: QuestionnaireEngine,
}

impl QuestionnaireScreen {
    /// Enters the question screen for `index`, seeding the draft from the
    /// stored answer. Out-of-range indices produce a `Summary` navigation
    /// and no timer.
    #[must_use]
    pub fn enter(
        session: SessionService,
        index: usize,
        duration_secs: u32,
    ) -> (Self, ScreenCommands) {
        let total = session.question_count();
        let saved = session.answer(index);
        let (engine, effects) = QuestionnaireEngine::enter(index, total, saved, duration_secs);
        let mut screen = Self { session, engine };
        let commands = screen.apply(effects);
        (screen, commands)
    }

    pub fn handle(&mut self, event: QuestionnaireEvent) -> ScreenCommands {
        let effects = self.engine.handle(event);
        self.apply(effects)
    }

    fn apply(&mut self, effects: Vec<Effect>) -> ScreenCommands {
        let mut commands = ScreenCommands::default();
        for effect in effects {
            match effect {
                Effect::SaveAnswer { index, text } => self.session.save_answer(index, text),
                Effect::StartTimer { seconds } => {
                    commands.timer = Some(TimerCommand::Start { seconds });
                }
                Effect::CancelTimer => commands.timer = Some(TimerCommand::Cancel),
                Effect::Replace(destination) => commands.navigate = Some(destination),
            }
        }
        commands
    }

    /// Text of the question being shown, if the screen is active.
    #[must_use]
    pub fn question_text(&self) -> Option<String> {
        self.engine.index().and_then(|index| self.session.question(index))
    }

    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.engine.index()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.engine.total()
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        self.engine.draft()
    }

    #[must_use]
    pub fn seconds_remaining(&self) -> u32 {
        self.engine.seconds_remaining()
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.engine.can_go_previous()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.engine.is_finished()
    }
}
