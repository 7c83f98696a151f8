use std::sync::Arc;

use services::SessionService;
use tandem_core::model::QuizSettings;

/// What the views need from the composition root: the one session handle,
/// the tunables, and the process-termination collaborator.
pub trait UiApp: Send + Sync {
    fn session(&self) -> SessionService;
    fn settings(&self) -> QuizSettings;

    /// Terminate the application. Only the summary screen's Close action
    /// calls this.
    fn request_exit(&self);
}

#[derive(Clone)]
pub struct AppContext {
    session: SessionService,
    settings: QuizSettings,
    app: Arc<dyn UiApp>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session: app.session(),
            settings: app.settings(),
            app: Arc::clone(app),
        }
    }

    #[must_use]
    pub fn session(&self) -> SessionService {
        self.session.clone()
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    pub fn request_exit(&self) {
        self.app.request_exit();
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
