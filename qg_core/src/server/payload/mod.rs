pub mod generate_quiz_request;
pub mod provider;
