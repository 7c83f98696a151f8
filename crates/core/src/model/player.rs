/// Number of question fields offered on each player setup screen.
pub const QUESTION_SLOTS: usize = 5;

/// A participant: a display name and the questions they contributed.
///
/// Immutable once constructed. The name is kept verbatim (no trimming, an
/// empty name is allowed); question slots that are blank or whitespace-only
/// are dropped at construction time, preserving the order of the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    name: String,
    questions: Vec<String>,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>, slots: impl IntoIterator<Item = String>) -> Self {
        let questions = slots
            .into_iter()
            .filter(|slot| !slot.trim().is_empty())
            .collect();

        Self {
            name: name.into(),
            questions,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn questions(&self) -> &[String] {
        &self.questions
    }
}
