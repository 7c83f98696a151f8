use dioxus::prelude::*;
use dioxus_router::use_navigator;

use services::{PlayerSetupForm, PlayerSlot, onboarding};
use tandem_core::model::QUESTION_SLOTS;

use crate::context::AppContext;
use crate::routes::route_for;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Everything that can happen on a setup screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OnboardingIntent {
    NameChanged(String),
    QuestionChanged(usize, String),
    Submit,
}

#[component]
pub fn PlayerOneSetupView() -> Element {
    rsx! {
        SetupForm { slot: PlayerSlot::First, title: "Player 1 Setup" }
    }
}

#[component]
pub fn PlayerTwoSetupView() -> Element {
    rsx! {
        SetupForm { slot: PlayerSlot::Second, title: "Player 2 Setup" }
    }
}

#[component]
fn SetupForm(slot: PlayerSlot, title: &'static str) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let session = ctx.session();

    let mut name = use_signal(String::new);
    let mut questions = use_signal(|| vec![String::new(); QUESTION_SLOTS]);

    let dispatch = use_callback(move |intent: OnboardingIntent| match intent {
        OnboardingIntent::NameChanged(value) => name.set(value),
        OnboardingIntent::QuestionChanged(index, value) => {
            if let Some(entry) = questions.write().get_mut(index) {
                *entry = value;
            }
        }
        OnboardingIntent::Submit => {
            let form = PlayerSetupForm {
                name: name(),
                questions: std::array::from_fn(|index| {
                    questions.read().get(index).cloned().unwrap_or_default()
                }),
            };
            let destination = onboarding::submit(&session, slot, form);
            navigator.push(route_for(destination));
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<OnboardingTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    let name_value = name();
    let question_fields: Vec<(usize, String, String)> = questions()
        .into_iter()
        .enumerate()
        .map(|(index, value)| (index, value, format!("Question {}", index + 1)))
        .collect();

    rsx! {
        div { class: "page setup-page",
            h2 { "{title}" }
            label { r#for: "setup-name", "Enter your name:" }
            input {
                class: "setup-field",
                id: "setup-name",
                r#type: "text",
                placeholder: "Name",
                value: "{name_value}",
                oninput: move |evt| dispatch.call(OnboardingIntent::NameChanged(evt.value())),
            }
            p { "Enter up to {QUESTION_SLOTS} questions:" }
            for (index, value, placeholder) in question_fields {
                input {
                    class: "setup-field",
                    id: "setup-question-{index}",
                    key: "{index}",
                    r#type: "text",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |evt| {
                        dispatch.call(OnboardingIntent::QuestionChanged(index, evt.value()));
                    },
                }
            }
            div { class: "setup-actions",
                button {
                    class: "btn btn-primary",
                    id: "setup-next",
                    r#type: "button",
                    onclick: move |_| dispatch.call(OnboardingIntent::Submit),
                    "Next"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct OnboardingTestHandles {
    dispatch: Rc<RefCell<Option<Callback<OnboardingIntent>>>>,
}

#[cfg(test)]
impl OnboardingTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<OnboardingIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<OnboardingIntent> {
        (*self.dispatch.borrow()).expect("onboarding dispatch registered")
    }
}
