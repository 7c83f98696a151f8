use thiserror::Error;

/// Default time allowed per question, in milliseconds.
pub const DEFAULT_QUESTION_DURATION_MS: u64 = 5_000;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("question duration must be greater than zero")]
    ZeroDuration,
}

/// Tunables for a play-through. Currently a single knob: how long each
/// question stays on screen before its answer is auto-committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    question_duration_ms: u64,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            question_duration_ms: DEFAULT_QUESTION_DURATION_MS,
        }
    }
}

impl QuizSettings {
    /// Builds settings from a millisecond duration.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::ZeroDuration` for `0`.
    pub fn from_millis(question_duration_ms: u64) -> Result<Self, SettingsError> {
        if question_duration_ms == 0 {
            return Err(SettingsError::ZeroDuration);
        }

        Ok(Self {
            question_duration_ms,
        })
    }

    #[must_use]
    pub fn question_duration_ms(&self) -> u64 {
        self.question_duration_ms
    }

    /// Whole seconds on the countdown. Sub-second durations round down to
    /// zero, which means the first timer expiry commits immediately.
    #[must_use]
    pub fn question_duration_secs(&self) -> u32 {
        u32::try_from(self.question_duration_ms / 1_000).unwrap_or(u32::MAX)
    }
}
