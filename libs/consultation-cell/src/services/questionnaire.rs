use crate::models::{Question, QuestionId, WeightedOption};

const fn option(label: &'static str, weight: u8) -> WeightedOption {
    WeightedOption { label, weight }
}

/// The pre-consultation questionnaire. Rendering and scoring both read this
/// table, so weights live in exactly one place.
pub static QUESTIONNAIRE: [Question; 6] = [
    Question {
        id: QuestionId::ChestPain,
        text: "Are you experiencing chest pain?",
        options: [option("Yes", 2), option("Sometimes", 1), option("No", 0)],
    },
    Question {
        id: QuestionId::Breathing,
        text: "Do you have difficulty breathing?",
        options: [option("Yes", 2), option("Sometimes", 1), option("No", 0)],
    },
    Question {
        id: QuestionId::Fever,
        text: "Do you have fever?",
        options: [
            option("High Fever (>102°F)", 2),
            option("Mild Fever (99-102°F)", 1),
            option("No Fever", 0),
        ],
    },
    Question {
        id: QuestionId::Consciousness,
        text: "Have you experienced any dizziness or loss of consciousness?",
        options: [option("Yes", 2), option("Sometimes", 1), option("No", 0)],
    },
    Question {
        id: QuestionId::Bleeding,
        text: "Is there any bleeding or severe injury?",
        options: [option("Yes", 2), option("Minor", 1), option("No", 0)],
    },
    Question {
        id: QuestionId::Pain,
        text: "Rate your pain level (if any)",
        options: [
            option("Severe (8-10)", 2),
            option("Moderate (4-7)", 1),
            option("Mild/No Pain (0-3)", 0),
        ],
    },
];

pub fn questionnaire() -> &'static [Question] {
    &QUESTIONNAIRE
}

pub fn question(id: QuestionId) -> &'static Question {
    // The table holds one entry per QuestionId, in declaration order.
    &QUESTIONNAIRE[id as usize]
}

/// Highest score the questionnaire can produce.
pub fn max_score() -> u8 {
    QUESTIONNAIRE.iter().map(Question::max_weight).sum()
}
