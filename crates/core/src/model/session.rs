use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::model::Player;

/// In-memory state for one play-through: both players, the merged question
/// list, and the answers recorded so far.
///
/// Constructed once at app start and passed by handle into each screen;
/// there is no persistence, a process restart resets everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStore {
    player1: Player,
    player2: Player,
    merged_questions: Vec<String>,
    answers: BTreeMap<usize, String>,
    started_at: DateTime<Utc>,
}

impl SessionStore {
    #[must_use]
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            player1: Player::default(),
            player2: Player::default(),
            merged_questions: Vec::new(),
            answers: BTreeMap::new(),
            started_at,
        }
    }

    /// Stores player one and recomputes the merged question list.
    pub fn save_first_player(&mut self, player: Player) {
        self.player1 = player;
        self.merge_questions();
    }

    /// Stores player two and recomputes the merged question list.
    ///
    /// Saving player two before player one merges against the default
    /// (zero-question) player; the merge never fails, it just produces an
    /// incomplete list.
    pub fn save_second_player(&mut self, player: Player) {
        self.player2 = player;
        self.merge_questions();
    }

    // Invariant: merged_questions == player1.questions ++ player2.questions.
    fn merge_questions(&mut self) {
        self.merged_questions = self
            .player1
            .questions()
            .iter()
            .chain(self.player2.questions())
            .cloned()
            .collect();
    }

    /// Upserts the answer for a question index.
    ///
    /// Out-of-range indices are stored anyway; the questionnaire engine
    /// guarantees validity and the store must never fail.
    pub fn save_answer(&mut self, index: usize, text: impl Into<String>) {
        self.answers.insert(index, text.into());
    }

    /// Returns the stored answer, or the empty string when none was recorded.
    #[must_use]
    pub fn answer(&self, index: usize) -> &str {
        self.answers.get(&index).map_or("", String::as_str)
    }

    /// Presence-aware answer lookup: `None` means "never answered", which is
    /// distinct from a stored empty string.
    #[must_use]
    pub fn answer_opt(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    /// Read-only view of every recorded answer, keyed by question index.
    #[must_use]
    pub fn answers(&self) -> &BTreeMap<usize, String> {
        &self.answers
    }

    #[must_use]
    pub fn player1(&self) -> &Player {
        &self.player1
    }

    #[must_use]
    pub fn player2(&self) -> &Player {
        &self.player2
    }

    #[must_use]
    pub fn merged_questions(&self) -> &[String] {
        &self.merged_questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&str> {
        self.merged_questions.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.merged_questions.len()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}
