use services::SummaryRow;

/// Display strings for one summary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRowVm {
    pub question_label: String,
    pub answer_label: String,
}

/// Never-answered questions get an explicit placeholder; an answer that was
/// committed as an empty string is shown as-is.
#[must_use]
pub fn map_summary_rows(rows: &[SummaryRow]) -> Vec<SummaryRowVm> {
    rows.iter()
        .map(|row| SummaryRowVm {
            question_label: format!("Q{}: {}", row.number, row.question),
            answer_label: format!(
                "Answer: {}",
                row.answer.as_deref().unwrap_or("No answer")
            ),
        })
        .collect()
}
