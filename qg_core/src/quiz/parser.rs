use crate::error::{ErrorCore, Result};
use crate::types::question::{OPTION_COUNT, Question};
use crate::types::quiz::Quiz;

const OPTION_LABELS: [char; OPTION_COUNT] = ['a', 'b', 'c', 'd'];

/// Decodes the raw provider text into a `Quiz`, rejecting on any structural
/// mismatch. Guessing a missing answer key is worse than surfacing an error,
/// so there is no partial recovery: the first bad block fails the whole
/// response.
pub fn parse_quiz(text: &str, expected_count: usize) -> Result<Quiz> {
    let blocks = split_blocks(text)?;
    if blocks.len() != expected_count {
        return Err(ErrorCore::MalformedResponse(format!(
            "expected {} question blocks, found {}",
            expected_count,
            blocks.len()
        )));
    }
    let mut questions = Vec::with_capacity(blocks.len());
    for block in &blocks {
        questions.push(parse_block(block)?);
    }
    Quiz::new(questions)
}

/// Groups the non-blank lines of the response into blocks, one per
/// `Q<n>:` header. Any text before the first header means the model ignored
/// the layout instructions.
fn split_blocks(text: &str) -> Result<Vec<Vec<&str>>> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if is_question_header(line) {
            blocks.push(vec![line]);
        } else if let Some(block) = blocks.last_mut() {
            block.push(line);
        } else {
            return Err(ErrorCore::MalformedResponse(
                "unexpected text before the first question block".to_string(),
            ));
        }
    }
    if blocks.is_empty() {
        return Err(ErrorCore::MalformedResponse(
            "response contains no question blocks".to_string(),
        ));
    }
    Ok(blocks)
}

fn is_question_header(line: &str) -> bool {
    let Some(rest) = line.strip_prefix('Q') else {
        return false;
    };
    let Some((number, _)) = rest.split_once(':') else {
        return false;
    };
    !number.is_empty() && number.chars().all(|c| c.is_ascii_digit())
}

/// Decodes one block: header line, four labeled option lines in order, then
/// the answer line.
fn parse_block(lines: &[&str]) -> Result<Question> {
    let (_, prompt) = lines[0]
        .split_once(':')
        .ok_or_else(|| ErrorCore::MalformedResponse("question header has no prompt".to_string()))?;
    let prompt = prompt.trim();

    if lines.len() != OPTION_COUNT + 2 {
        return Err(ErrorCore::MalformedResponse(format!(
            "question block for '{prompt}' must contain {OPTION_COUNT} options and an answer line"
        )));
    }

    let mut options = Vec::with_capacity(OPTION_COUNT);
    for (i, label) in OPTION_LABELS.iter().enumerate() {
        let line = lines[i + 1];
        let option = line
            .strip_prefix(*label)
            .and_then(|rest| rest.strip_prefix('.'))
            .ok_or_else(|| {
                ErrorCore::MalformedResponse(format!(
                    "expected option line labeled '{label}.', found: {line}"
                ))
            })?;
        options.push(option.trim().to_string());
    }

    let answer = lines[OPTION_COUNT + 1];
    let correct_index = resolve_answer(answer, &options)?;

    Question::new(prompt.to_string(), options, correct_index)
}

/// Maps the `Answer:` line to an option index. Accepts a single option
/// letter (case-insensitive) or the verbatim text of one of the options;
/// anything else is rejected.
fn resolve_answer(line: &str, options: &[String]) -> Result<usize> {
    let value = line
        .strip_prefix("Answer:")
        .or_else(|| line.strip_prefix("answer:"))
        .ok_or_else(|| {
            ErrorCore::MalformedResponse(format!("expected an 'Answer:' line, found: {line}"))
        })?
        .trim();

    let mut chars = value.chars();
    if let (Some(letter), None) = (chars.next(), chars.next()) {
        let letter = letter.to_ascii_lowercase();
        if let Some(index) = OPTION_LABELS.iter().position(|l| *l == letter) {
            return Ok(index);
        }
    }
    if let Some(index) = options.iter().position(|option| option == value) {
        return Ok(index);
    }
    Err(ErrorCore::MalformedResponse(format!(
        "answer '{value}' does not match any option"
    )))
}
