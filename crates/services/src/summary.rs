use crate::session_service::SessionService;

/// One line of the final summary: a merged question and, if one was ever
/// recorded, its answer. `None` is rendered as a "No answer" placeholder; a
/// stored empty string is still an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    /// 1-based display number.
    pub number: usize,
    pub question: String,
    pub answer: Option<String>,
}

/// Read-only projection over the whole merged question list. No mutation.
#[must_use]
pub fn summary_rows(session: &SessionService) -> Vec<SummaryRow> {
    session
        .merged_questions()
        .into_iter()
        .enumerate()
        .map(|(index, question)| SummaryRow {
            number: index + 1,
            question,
            answer: session.answer_opt(index),
        })
        .collect()
}
