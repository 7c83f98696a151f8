use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use tandem_core::questionnaire::Destination;

use crate::views::{PlayerOneSetupView, PlayerTwoSetupView, QuestionnaireView, SummaryView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", PlayerOneSetupView)] PlayerOneSetup {},
        #[route("/setup/2", PlayerTwoSetupView)] PlayerTwoSetup {},
        #[route("/question/:question_index", QuestionnaireView)] Questionnaire { question_index: usize },
        #[route("/summary", SummaryView)] Summary {},
}

/// Maps the engine's abstract destinations onto concrete routes. The
/// navigator interprets the engine's effects; the engine never sees routes.
#[must_use]
pub fn route_for(destination: Destination) -> Route {
    match destination {
        Destination::PlayerOneSetup => Route::PlayerOneSetup {},
        Destination::PlayerTwoSetup => Route::PlayerTwoSetup {},
        Destination::Question(question_index) => Route::Questionnaire { question_index },
        Destination::Summary => Route::Summary {},
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                h1 { "Tandem" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
