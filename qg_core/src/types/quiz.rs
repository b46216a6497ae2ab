use crate::error::Result;
use crate::types::question::Question;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// One generated quiz, held by the browser for the lifetime of a session and
/// never persisted server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub questions: Vec<Question>,
    pub generated_at: u64,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        let generated_at = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        Ok(Quiz {
            questions,
            generated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_records_generation_time() {
        let quiz = Quiz::new(Vec::new()).unwrap();
        assert!(quiz.generated_at > 0);
        assert!(quiz.questions.is_empty());
    }
}
