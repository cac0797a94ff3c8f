use std::collections::HashMap;

use tracing::{debug, info};

use crate::models::{
    ConsultationError, QuestionId, QuestionnaireAnswer, Severity, TriageResult,
};
use crate::services::questionnaire::questionnaire;

#[derive(Debug, Clone, Copy, Default)]
pub struct TriageScorer;

impl TriageScorer {
    pub fn new() -> Self {
        Self
    }

    /// Keys raw form answers by question, dropping ids the questionnaire
    /// does not know.
    pub fn parse_answers(&self, raw: HashMap<String, String>) -> QuestionnaireAnswer {
        raw.into_iter()
            .filter_map(|(key, value)| match QuestionId::parse(&key) {
                Some(id) => Some((id, value)),
                None => {
                    debug!("Ignoring answer for unknown question '{}'", key);
                    None
                }
            })
            .collect()
    }

    /// Sums the option weights and classifies the total.
    ///
    /// Every question needs exactly one answer taken from its option list;
    /// otherwise nothing is scored and the offending ids are reported.
    pub fn score(&self, answers: &QuestionnaireAnswer) -> Result<TriageResult, ConsultationError> {
        let mut missing = Vec::new();
        let mut invalid = Vec::new();
        let mut score: u8 = 0;

        for question in questionnaire() {
            match answers.get(&question.id) {
                None => missing.push(question.id),
                Some(answer) => match question.weight_of(answer) {
                    Some(weight) => score += weight,
                    None => invalid.push(question.id),
                },
            }
        }

        if !missing.is_empty() || !invalid.is_empty() {
            debug!("Rejecting assessment: missing {:?}, invalid {:?}", missing, invalid);
            return Err(ConsultationError::IncompleteAnswers { missing, invalid });
        }

        let severity = Severity::from_score(score);
        info!("Pre-consultation scored {} ({})", score, severity);

        Ok(TriageResult {
            answers: answers.clone(),
            score,
            severity,
        })
    }
}
