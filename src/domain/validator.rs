//! Answer validation
//!
//! Questions carry no explicit type. The expected answer format is inferred
//! from words in the question text: a question mentioning a date wants an
//! ISO date somewhere in the answer, one mentioning a number wants digits only.

use regex::Regex;
use std::sync::OnceLock;

fn date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap())
}

fn digits_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\d+$").unwrap())
}

/// Words that mark a question as expecting a number
const NUMBER_MARKERS: [&str; 2] = ["number", "число"];

/// Decides whether an answer is acceptable for a question
pub trait AnswerValidator {
    fn validate(&self, question: &str, answer: &str) -> bool;
}

/// Validator that infers the answer format from the question wording
#[derive(Debug, Clone, Copy, Default)]
pub struct WordingValidator;

impl AnswerValidator for WordingValidator {
    fn validate(&self, question: &str, answer: &str) -> bool {
        validate_answer(question, answer)
    }
}

/// Check an answer against every format rule the question triggers.
///
/// Rules are independent; a question mentioning both a date and a number
/// must satisfy both.
pub fn validate_answer(question: &str, answer: &str) -> bool {
    let question = question.to_lowercase();

    if question.contains("date") && !date_regex().is_match(answer) {
        return false;
    }

    if NUMBER_MARKERS.iter().any(|marker| question.contains(marker))
        && !digits_regex().is_match(answer)
    {
        return false;
    }

    true
}
