use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionId {
    ChestPain,
    Breathing,
    Fever,
    Consciousness,
    Bleeding,
    Pain,
}

impl QuestionId {
    pub const ALL: [QuestionId; 6] = [
        QuestionId::ChestPain,
        QuestionId::Breathing,
        QuestionId::Fever,
        QuestionId::Consciousness,
        QuestionId::Bleeding,
        QuestionId::Pain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionId::ChestPain => "chestPain",
            QuestionId::Breathing => "breathing",
            QuestionId::Fever => "fever",
            QuestionId::Consciousness => "consciousness",
            QuestionId::Bleeding => "bleeding",
            QuestionId::Pain => "pain",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == value)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable answer and the points it contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeightedOption {
    pub label: &'static str,
    pub weight: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: &'static str,
    /// Ordered from most to least severe.
    pub options: [WeightedOption; 3],
}

impl Question {
    pub fn weight_of(&self, answer: &str) -> Option<u8> {
        self.options
            .iter()
            .find(|option| option.label == answer)
            .map(|option| option.weight)
    }

    pub fn max_weight(&self) -> u8 {
        self.options.iter().map(|option| option.weight).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "serious")]
    Serious,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "non-serious")]
    NonSerious,
}

impl Severity {
    pub const SERIOUS_THRESHOLD: u8 = 5;
    pub const MODERATE_THRESHOLD: u8 = 3;

    pub fn from_score(score: u8) -> Self {
        if score >= Self::SERIOUS_THRESHOLD {
            Severity::Serious
        } else if score >= Self::MODERATE_THRESHOLD {
            Severity::Moderate
        } else {
            Severity::NonSerious
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Serious => "serious",
            Severity::Moderate => "moderate",
            Severity::NonSerious => "non-serious",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selected option per question.
pub type QuestionnaireAnswer = BTreeMap<QuestionId, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageResult {
    pub answers: QuestionnaireAnswer,
    pub score: u8,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub wait_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub answers: HashMap<String, String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsultationError {
    #[error("Incomplete answers (missing: {}; invalid: {})", join_ids(.missing), join_ids(.invalid))]
    IncompleteAnswers {
        missing: Vec<QuestionId>,
        invalid: Vec<QuestionId>,
    },
}

fn join_ids(ids: &[QuestionId]) -> String {
    if ids.is_empty() {
        return "none".to_string();
    }
    ids.iter().map(QuestionId::as_str).collect::<Vec<_>>().join(", ")
}
