//! The questionnaire state machine.
//!
//! A pure `(state, event) -> effects` transition function: no timers, no
//! rendering, no navigation stack. The caller interprets the returned
//! [`Effect`]s: saving answers into the session store, starting/cancelling
//! the countdown task, and asking the navigator to replace the current
//! screen. The timer must be torn down before any navigation side effect so
//! that a stale countdown can never fire a duplicate save or navigation.

//
// ─── EVENTS & EFFECTS ──────────────────────────────────────────────────────────
//

/// Abstract navigation targets, interpreted by the platform navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    PlayerOneSetup,
    PlayerTwoSetup,
    Question(usize),
    Summary,
}

/// Everything that can happen on an active question screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionnaireEvent {
    /// The answer field changed.
    DraftEdited(String),
    /// One second of the countdown elapsed.
    Tick,
    /// The countdown ran out.
    TimerExpired,
    /// The Next button was pressed.
    Next,
    /// The Previous button was pressed (only offered past the first question).
    Previous,
}

/// Side effects requested by a transition, in the order they must run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SaveAnswer { index: usize, text: String },
    StartTimer { seconds: u32 },
    CancelTimer,
    /// Navigate, replacing the questionnaire's history entry so Back cannot
    /// return into a screen that was already left.
    Replace(Destination),
}

//
// ─── STATE MACHINE ─────────────────────────────────────────────────────────────
//

/// Ephemeral per-screen state. Created on entry, discarded on leave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionnaireState {
    Active {
        index: usize,
        draft: String,
        seconds_remaining: u32,
    },
    /// Past the last question. Never rendered: entering it immediately
    /// requests the summary screen.
    Finished,
}

/// Drives one question screen through its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionnaireEngine {
    total: usize,
    duration_secs: u32,
    state: QuestionnaireState,
}

impl QuestionnaireEngine {
    /// Enters the screen for `index`.
    ///
    /// Out-of-range indices (including the `total == 0` case) transition
    /// straight to `Finished` and route to the summary without starting a
    /// timer. Otherwise the draft seeds from the previously saved answer and
    /// a fresh full-duration countdown is requested; re-entering a question
    /// never carries over a partially elapsed timer.
    #[must_use]
    pub fn enter(
        index: usize,
        total: usize,
        saved_draft: String,
        duration_secs: u32,
    ) -> (Self, Vec<Effect>) {
        if index >= total {
            let engine = Self {
                total,
                duration_secs,
                state: QuestionnaireState::Finished,
            };
            return (engine, vec![Effect::Replace(Destination::Summary)]);
        }

        let engine = Self {
            total,
            duration_secs,
            state: QuestionnaireState::Active {
                index,
                draft: saved_draft,
                seconds_remaining: duration_secs,
            },
        };
        let effects = vec![Effect::StartTimer {
            seconds: duration_secs,
        }];
        (engine, effects)
    }

    /// Applies an event and returns the effects the caller must interpret.
    ///
    /// Events arriving after the screen has finished are ignored; whichever
    /// of timer expiry and manual navigation happens first wins, the loser
    /// produces nothing.
    pub fn handle(&mut self, event: QuestionnaireEvent) -> Vec<Effect> {
        let QuestionnaireState::Active {
            index,
            draft,
            seconds_remaining,
        } = &mut self.state
        else {
            return Vec::new();
        };
        let index = *index;

        match event {
            QuestionnaireEvent::DraftEdited(text) => {
                *draft = text;
                Vec::new()
            }
            QuestionnaireEvent::Tick => {
                *seconds_remaining = seconds_remaining.saturating_sub(1);
                Vec::new()
            }
            QuestionnaireEvent::TimerExpired => {
                // Auto-commit. The countdown completed on its own, so there
                // is no timer left to cancel.
                let text = draft.clone();
                self.leave(index + 1);
                vec![
                    Effect::SaveAnswer { index, text },
                    Effect::Replace(Destination::Question(index + 1)),
                ]
            }
            QuestionnaireEvent::Next => {
                let text = draft.clone();
                self.leave(index + 1);
                vec![
                    Effect::SaveAnswer { index, text },
                    Effect::CancelTimer,
                    Effect::Replace(Destination::Question(index + 1)),
                ]
            }
            QuestionnaireEvent::Previous => {
                if index == 0 {
                    return Vec::new();
                }
                let text = draft.clone();
                self.leave(index - 1);
                vec![
                    Effect::SaveAnswer { index, text },
                    Effect::CancelTimer,
                    Effect::Replace(Destination::Question(index - 1)),
                ]
            }
        }
    }

    // The screen instance is torn down once a Replace effect is interpreted;
    // the destination screen re-enters with its own engine. Only the
    // past-the-end transition is observable here.
    fn leave(&mut self, next_index: usize) {
        if next_index >= self.total {
            self.state = QuestionnaireState::Finished;
        }
    }

    #[must_use]
    pub fn state(&self) -> &QuestionnaireState {
        &self.state
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.state, QuestionnaireState::Finished)
    }

    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match &self.state {
            QuestionnaireState::Active { index, .. } => Some(*index),
            QuestionnaireState::Finished => None,
        }
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        match &self.state {
            QuestionnaireState::Active { draft, .. } => draft,
            QuestionnaireState::Finished => "",
        }
    }

    #[must_use]
    pub fn seconds_remaining(&self) -> u32 {
        match &self.state {
            QuestionnaireState::Active {
                seconds_remaining, ..
            } => *seconds_remaining,
            QuestionnaireState::Finished => 0,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.index().is_some_and(|index| index > 0)
    }
}
