mod questionnaire_vm;
mod summary_vm;

pub use questionnaire_vm::QuestionnaireVm;
pub use summary_vm::{SummaryRowVm, map_summary_rows};
