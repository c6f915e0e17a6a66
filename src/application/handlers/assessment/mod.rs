//! Assessment handlers - the session state machine, one transition per file.
//!
//! States are inferred from stored fields rather than an explicit field:
//! Started (no business type, no answers) -> InProgress (answers
//! accumulating) -> ReadyForReport -> Closed (record removed).

mod generate_report;
mod next_question;
mod start_assessment;

pub use generate_report::{GenerateReportCommand, GenerateReportHandler};
pub use next_question::{NextQuestionCommand, NextQuestionHandler};
pub use start_assessment::{AssessmentStarted, StartAssessmentHandler};
