pub mod advisory;
pub mod questionnaire;
pub mod triage;

pub use advisory::advisory_for;
pub use questionnaire::{question, questionnaire};
pub use triage::TriageScorer;
