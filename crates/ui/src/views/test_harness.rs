use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::Router;

use services::{Clock, SessionService};
use tandem_core::model::QuizSettings;
use tandem_core::time::fixed_now;

use crate::context::{UiApp, build_app_context};
use crate::routes::Route;
use crate::views::{OnboardingTestHandles, QuestionnaireTestHandles, SummaryTestHandles};

#[derive(Clone)]
struct TestApp {
    session: SessionService,
    settings: QuizSettings,
    exited: Arc<AtomicBool>,
}

impl UiApp for TestApp {
    fn session(&self) -> SessionService {
        self.session.clone()
    }

    fn settings(&self) -> QuizSettings {
        self.settings
    }

    fn request_exit(&self) {
        self.exited.store(true, Ordering::SeqCst);
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    onboarding: OnboardingTestHandles,
    questionnaire: QuestionnaireTestHandles,
    summary: SummaryTestHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for HarnessProps {}

// The real router over the real routes, so redirects and history
// replacement behave as they do in the app.
#[component]
fn AppHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.onboarding.clone());
    use_context_provider(|| props.questionnaire.clone());
    use_context_provider(|| props.summary.clone());
    rsx! { Router::<Route> {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub session: SessionService,
    pub exited: Arc<AtomicBool>,
    pub onboarding: OnboardingTestHandles,
    pub questionnaire: QuestionnaireTestHandles,
    pub summary: SummaryTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Flush queued events and renders; navigation needs a second pass.
    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness() -> ViewHarness {
    setup_view_harness_with_settings(QuizSettings::default())
}

pub fn setup_view_harness_with_settings(settings: QuizSettings) -> ViewHarness {
    let session = SessionService::new(Clock::fixed(fixed_now()));
    let exited = Arc::new(AtomicBool::new(false));
    let onboarding = OnboardingTestHandles::default();
    let questionnaire = QuestionnaireTestHandles::default();
    let summary = SummaryTestHandles::default();

    let app = Arc::new(TestApp {
        session: session.clone(),
        settings,
        exited: Arc::clone(&exited),
    });

    let dom = VirtualDom::new_with_props(
        AppHarness,
        HarnessProps {
            app,
            onboarding: onboarding.clone(),
            questionnaire: questionnaire.clone(),
            summary: summary.clone(),
        },
    );

    ViewHarness {
        dom,
        session,
        exited,
        onboarding,
        questionnaire,
        summary,
    }
}
