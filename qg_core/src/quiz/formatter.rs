use crate::quiz::request::QuizRequest;

/// Builds the single prompt sent to the provider. The layout it pins down
/// here is the same one `quiz::parser` enforces on the way back.
pub fn build_prompt(request: &QuizRequest) -> String {
    let topics = request.topics().join(", ");
    let count = request.question_count();
    format!(
        "Generate {count} multiple choice questions (MCQs) on the topics: {topics}.\n\
         Each question must have exactly 4 options labeled a., b., c., d. and state the correct \
         option clearly as 'Answer: <option letter>'.\n\
         Use exactly this layout for every question, with no other text before, between, or after \
         the question blocks:\n\
         Q1: <question>\n\
         a. <option1>\n\
         b. <option2>\n\
         c. <option3>\n\
         d. <option4>\n\
         Answer: <a/b/c/d>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_every_topic_and_the_count() {
        let request = QuizRequest::new("history,science", 3).unwrap();
        let prompt = build_prompt(&request);
        assert!(prompt.contains("history"));
        assert!(prompt.contains("science"));
        assert!(prompt.contains("Generate 3 multiple choice questions"));
    }

    #[test]
    fn test_prompt_pins_the_expected_layout() {
        let request = QuizRequest::new("rust", 1).unwrap();
        let prompt = build_prompt(&request);
        assert!(prompt.contains("Q1:"));
        assert!(prompt.contains("Answer: <a/b/c/d>"));
    }
}
