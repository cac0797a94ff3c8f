pub mod handlers;
pub mod router;
pub mod models;
pub mod services;

pub use models::{
    Advisory, AssessmentRequest, ConsultationError, Question, QuestionId,
    QuestionnaireAnswer, Severity, TriageResult, WeightedOption,
};
pub use router::consultation_routes;
pub use services::TriageScorer;
