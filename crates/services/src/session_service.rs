use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use tandem_core::Clock;
use tandem_core::model::{Player, SessionStore};

/// Cloneable handle over the one in-memory [`SessionStore`].
///
/// Created once at app start by the composition root and passed into each
/// screen through context; none of its operations can fail. The store is
/// only ever mutated from the UI-driven control flow, the lock exists so the
/// handle is `Send + Sync` for the context layer.
#[derive(Clone)]
pub struct SessionService {
    store: Arc<RwLock<SessionStore>>,
}

impl SessionService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            store: Arc::new(RwLock::new(SessionStore::new(clock.now()))),
        }
    }

    // A panic while holding the lock cannot leave the store half-written
    // (every mutation is a single insert or field swap), so a poisoned lock
    // is safe to recover.
    fn read(&self) -> RwLockReadGuard<'_, SessionStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn save_first_player(&self, player: Player) {
        self.write().save_first_player(player);
    }

    pub fn save_second_player(&self, player: Player) {
        self.write().save_second_player(player);
    }

    pub fn save_answer(&self, index: usize, text: impl Into<String>) {
        self.write().save_answer(index, text);
    }

    /// Stored answer for `index`, or the empty string when absent.
    #[must_use]
    pub fn answer(&self, index: usize) -> String {
        self.read().answer(index).to_string()
    }

    /// Presence-aware answer lookup; `None` has never been answered.
    #[must_use]
    pub fn answer_opt(&self, index: usize) -> Option<String> {
        self.read().answer_opt(index).map(ToString::to_string)
    }

    /// Snapshot of every recorded answer, keyed by question index.
    #[must_use]
    pub fn all_answers(&self) -> BTreeMap<usize, String> {
        self.read().answers().clone()
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<String> {
        self.read().question(index).map(ToString::to_string)
    }

    #[must_use]
    pub fn merged_questions(&self) -> Vec<String> {
        self.read().merged_questions().to_vec()
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.read().question_count()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.read().started_at()
    }
}
