use dioxus::dioxus_core::Task;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use services::{TimerCommand, run_countdown};
use tandem_core::questionnaire::QuestionnaireEvent;

use crate::context::AppContext;
use crate::routes::{Route, route_for};
use crate::vm::QuestionnaireVm;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuestionnaireView(question_index: usize) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    // Entry guard: past-the-end indices (including an empty merged list)
    // belong to the summary. Replace this history entry so Back cannot
    // land on a finished questionnaire, and never start a timer.
    if question_index >= ctx.session().question_count() {
        navigator.replace(Route::Summary {});
        return rsx! {};
    }

    // A keyed one-item list: lone components are diffed in place (hook
    // state retained), only keyed list diffing replaces the scope when the
    // key changes.
    rsx! {
        for index in [question_index] {
            QuestionScreen { key: "{index}", question_index: index }
        }
    }
}

/// One question. Keyed by index, so every index change tears this instance
/// down and mounts a fresh one: the draft re-seeds from the stored answer
/// and the countdown restarts at full duration.
#[component]
fn QuestionScreen(question_index: usize) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let duration_secs = ctx.settings().question_duration_secs();
    let session = ctx.session();

    // The guard above only renders this screen for in-range indices, so the
    // entry commands are exactly one full-duration timer start.
    let mut vm = use_signal(|| QuestionnaireVm::enter(session.clone(), question_index, duration_secs).0);
    let mut timer_task = use_signal(|| None::<Task>);

    let dispatch = use_callback(move |event: QuestionnaireEvent| {
        let expired = matches!(event, QuestionnaireEvent::TimerExpired);
        let commands = vm.write().dispatch(event);

        // The countdown is torn down before any navigation side effect so a
        // stale timer can never fire once the screen is left.
        match commands.timer {
            Some(TimerCommand::Cancel) => {
                if let Some(task) = timer_task.write().take() {
                    task.cancel();
                }
            }
            // Self-completed: the finished task must not cancel itself.
            _ if expired => timer_task.set(None),
            _ => {}
        }

        if let Some(destination) = commands.navigate {
            #[cfg(test)]
            eprintln!("DBG navigate -> {destination:?}");
            let res = navigator.replace(route_for(destination));
            #[cfg(test)]
            eprintln!("DBG replace result {res:?}");
            #[cfg(not(test))]
            let _ = res;
        }
    });

    // Start the countdown on mount. The task is scoped to this screen
    // instance; leaving the screen for any reason drops it.
    use_hook(move || {
        let task = spawn(async move {
            run_countdown(duration_secs, move |_| {
                dispatch.call(QuestionnaireEvent::Tick);
            })
            .await;
            dispatch.call(QuestionnaireEvent::TimerExpired);
        });
        timer_task.set(Some(task));
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuestionnaireTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    let vm_read = vm.read();
    let heading = vm_read.heading();
    let question = vm_read.question_text().unwrap_or_default();
    let draft = vm_read.draft().to_string();
    let timer_label = vm_read.timer_label();
    let can_go_previous = vm_read.can_go_previous();

    rsx! {
        div { class: "page question-page",
            h2 { "{heading}" }
            p { class: "question-text", "{question}" }
            label { r#for: "question-answer", "Your Answer" }
            input {
                class: "question-answer",
                id: "question-answer",
                r#type: "text",
                value: "{draft}",
                oninput: move |evt| {
                    dispatch.call(QuestionnaireEvent::DraftEdited(evt.value()));
                },
            }
            p { class: "question-timer", id: "question-timer", "{timer_label}" }
            div { class: "question-nav",
                if can_go_previous {
                    button {
                        class: "btn",
                        id: "question-previous",
                        r#type: "button",
                        onclick: move |_| dispatch.call(QuestionnaireEvent::Previous),
                        "Previous"
                    }
                }
                button {
                    class: "btn btn-primary",
                    id: "question-next",
                    r#type: "button",
                    onclick: move |_| dispatch.call(QuestionnaireEvent::Next),
                    "Next"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuestionnaireTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuestionnaireEvent>>>>,
}

#[cfg(test)]
impl QuestionnaireTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuestionnaireEvent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuestionnaireEvent> {
        (*self.dispatch.borrow()).expect("questionnaire dispatch registered")
    }
}
