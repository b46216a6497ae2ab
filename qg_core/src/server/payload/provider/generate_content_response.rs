use serde::{Deserialize, Serialize};

/// The subset of the provider's `generateContent` response the application
/// reads. Unknown fields are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatePart {
    pub text: String,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate, or `None` when the
    /// provider returned no usable candidate.
    pub fn into_text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        if candidate.content.parts.is_empty() {
            return None;
        }
        let text = candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect::<String>();
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_realistic_provider_body() {
        let body = r#"{
            "candidates": [
                {
                    "content": {
                        "parts": [{"text": "Q1: What?\n"}, {"text": "a. One\n"}],
                        "role": "model"
                    },
                    "finishReason": "STOP",
                    "index": 0
                }
            ],
            "modelVersion": "gemini-2.5-flash"
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.into_text().unwrap(), "Q1: What?\na. One\n");
    }

    #[test]
    fn test_no_candidates_yields_none() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_text().is_none());
    }

    #[test]
    fn test_candidate_without_parts_yields_none() {
        let body = r#"{"candidates": [{"content": {"role": "model"}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert!(response.into_text().is_none());
    }
}
