use dioxus::prelude::*;

use services::summary::summary_rows;

use crate::context::AppContext;
use crate::vm::map_summary_rows;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Read-only view over the finished session. The only action is Close,
/// forwarded to the process-termination collaborator.
#[component]
pub fn SummaryView() -> Element {
    let ctx = use_context::<AppContext>();
    let rows = map_summary_rows(&summary_rows(&ctx.session()));

    let on_close = use_callback(move |()| ctx.request_exit());

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<SummaryTestHandles>() {
                handles.register(on_close);
            }
        }
    }

    rsx! {
        div { class: "page summary-page",
            h2 { "Summary" }
            p { class: "summary-thanks", "Thank you for participating!" }
            div { class: "summary-rows",
                for row in rows {
                    p { class: "summary-question", "{row.question_label}" }
                    p { class: "summary-answer", "{row.answer_label}" }
                }
            }
            button {
                class: "btn btn-primary",
                id: "summary-close",
                r#type: "button",
                onclick: move |_| on_close.call(()),
                "Close"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SummaryTestHandles {
    close: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl SummaryTestHandles {
    pub(crate) fn register(&self, close: Callback<()>) {
        *self.close.borrow_mut() = Some(close);
    }

    pub(crate) fn close(&self) -> Callback<()> {
        (*self.close.borrow()).expect("summary close registered")
    }
}
