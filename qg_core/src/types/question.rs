use crate::error::{ErrorCore, Result};
use serde::{Deserialize, Serialize};

pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl Question {
    /// Builds a question, enforcing the invariants the parser relies on:
    /// non-empty prompt, exactly four distinct non-empty options, and a
    /// correct index that points at one of them.
    pub fn new(prompt: String, options: Vec<String>, correct_index: usize) -> Result<Self> {
        if prompt.trim().is_empty() {
            return Err(ErrorCore::MalformedResponse(
                "question prompt is empty".to_string(),
            ));
        }
        if options.len() != OPTION_COUNT {
            return Err(ErrorCore::MalformedResponse(format!(
                "expected {} options, found {}",
                OPTION_COUNT,
                options.len()
            )));
        }
        for (i, option) in options.iter().enumerate() {
            if option.trim().is_empty() {
                return Err(ErrorCore::MalformedResponse(format!(
                    "option {} is empty",
                    i + 1
                )));
            }
            if options[..i].contains(option) {
                return Err(ErrorCore::MalformedResponse(format!(
                    "duplicate option: {option}"
                )));
            }
        }
        if correct_index >= options.len() {
            return Err(ErrorCore::MalformedResponse(format!(
                "correct index {correct_index} is out of range"
            )));
        }
        Ok(Question {
            prompt,
            options,
            correct_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec![
            "Paris".to_string(),
            "London".to_string(),
            "Rome".to_string(),
            "Berlin".to_string(),
        ]
    }

    #[test]
    fn test_valid_question() {
        let question = Question::new("Capital of France?".to_string(), options(), 0).unwrap();
        assert_eq!(question.options.len(), OPTION_COUNT);
        assert_eq!(question.correct_index, 0);
    }

    #[test]
    fn test_empty_prompt_rejected() {
        assert!(Question::new("  ".to_string(), options(), 0).is_err());
    }

    #[test]
    fn test_wrong_option_count_rejected() {
        let mut short = options();
        short.pop();
        assert!(Question::new("Capital of France?".to_string(), short, 0).is_err());
    }

    #[test]
    fn test_duplicate_option_rejected() {
        let mut dup = options();
        dup[3] = "Paris".to_string();
        assert!(Question::new("Capital of France?".to_string(), dup, 0).is_err());
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        assert!(Question::new("Capital of France?".to_string(), options(), 4).is_err());
    }

    #[test]
    fn test_serializes_with_camel_case_index() {
        let question = Question::new("Capital of France?".to_string(), options(), 2).unwrap();
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["correctIndex"], 2);
    }
}
