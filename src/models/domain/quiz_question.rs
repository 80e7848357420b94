use serde::{Deserialize, Serialize};

/// One multiple-choice question. `answer` is an index into `options`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub answer: i64,
}

impl QuizQuestion {
    pub fn new(question: &str, options: &[&str], answer: i64) -> Self {
        QuizQuestion {
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer,
        }
    }
}
