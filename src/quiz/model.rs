use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Project,
    Global,
}

/// A question/answer pair. The id is the record's position in the store and is not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRecord {
    pub question: String,
    pub answer: String,
}

impl QuizRecord {
    /// Builds a record with both fields trimmed.
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.trim().to_string(),
            answer: answer.trim().to_string(),
        }
    }

    /// Case-insensitive comparison of a user reply against the stored answer.
    pub fn is_answered_by(&self, reply: &str) -> bool {
        reply.trim().to_lowercase() == self.answer.trim().to_lowercase()
    }
}

/// Contents written on first run, when no store file exists yet.
pub fn seed_records() -> Vec<QuizRecord> {
    vec![
        QuizRecord::new("Capital de Italia", "Roma"),
        QuizRecord::new("Capital de Francia", "Paris"),
        QuizRecord::new("Capital de España", "Madrid"),
        QuizRecord::new("Capital de Portugal", "Lisboa"),
    ]
}
