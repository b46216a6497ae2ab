use crate::error::{ErrorCore, Result};

pub const MAX_QUESTION_COUNT: usize = 50;

/// A validated generation request. Built once per submission from the raw
/// form values and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    topics: Vec<String>,
    question_count: usize,
}

impl QuizRequest {
    /// Splits the raw comma-separated topic string, trims each piece, drops
    /// empty pieces and duplicates (keeping first-seen order), and checks the
    /// question count bounds.
    pub fn new(raw_topics: &str, question_count: usize) -> Result<Self> {
        let mut topics: Vec<String> = Vec::new();
        for piece in raw_topics.split(',') {
            let topic = piece.trim();
            if topic.is_empty() {
                continue;
            }
            if topics.iter().any(|t| t == topic) {
                continue;
            }
            topics.push(topic.to_string());
        }
        if topics.is_empty() {
            return Err(ErrorCore::InvalidInput(
                "no topics were provided".to_string(),
            ));
        }
        if question_count == 0 || question_count > MAX_QUESTION_COUNT {
            return Err(ErrorCore::InvalidInput(format!(
                "question count must be between 1 and {MAX_QUESTION_COUNT}, got {question_count}"
            )));
        }
        Ok(QuizRequest {
            topics,
            question_count,
        })
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_and_trims_topics() {
        let request = QuizRequest::new(" history , science ", 3).unwrap();
        assert_eq!(request.topics(), ["history", "science"]);
        assert_eq!(request.question_count(), 3);
    }

    #[test]
    fn test_drops_empty_pieces_and_duplicates() {
        let request = QuizRequest::new("rust,,rust, ,tokio", 5).unwrap();
        assert_eq!(request.topics(), ["rust", "tokio"]);
    }

    #[test]
    fn test_rejects_empty_topic_list() {
        let err = QuizRequest::new(" , ,", 3).unwrap_err();
        assert!(matches!(err, ErrorCore::InvalidInput(_)));
    }

    #[test]
    fn test_rejects_zero_question_count() {
        let err = QuizRequest::new("history", 0).unwrap_err();
        assert!(matches!(err, ErrorCore::InvalidInput(_)));
    }

    #[test]
    fn test_rejects_question_count_above_maximum() {
        let err = QuizRequest::new("history", MAX_QUESTION_COUNT + 1).unwrap_err();
        assert!(matches!(err, ErrorCore::InvalidInput(_)));
    }

    #[test]
    fn test_accepts_maximum_question_count() {
        assert!(QuizRequest::new("history", MAX_QUESTION_COUNT).is_ok());
    }
}
