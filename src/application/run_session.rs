//! Run journaling session use case

use crate::domain::{Answers, AnswerValidator, Locale, Record, WordingValidator};
use crate::error::{ConfessorError, Result};
use crate::infrastructure::{ConfigStore, Prompter};
use chrono::{Local, NaiveDateTime, Timelike};
use tracing::{debug, info};

/// Service collecting one set of validated answers
pub struct SessionService<V = WordingValidator> {
    config: ConfigStore,
    validator: V,
}

impl SessionService<WordingValidator> {
    /// Create a session service using the question-wording validator
    pub fn new(config: ConfigStore) -> Self {
        SessionService::with_validator(config, WordingValidator)
    }
}

impl<V: AnswerValidator> SessionService<V> {
    pub fn with_validator(config: ConfigStore, validator: V) -> Self {
        SessionService { config, validator }
    }

    /// Ask every question configured for the profile, mode and language.
    ///
    /// The returned record is not stored; persisting and rendering it is
    /// left to the caller.
    pub fn run(
        &self,
        profile: &str,
        mode: &str,
        lang: &str,
        prompter: &mut dyn Prompter,
    ) -> Result<Record> {
        // 1. Resolve the question set
        let config = self.config.load(profile);
        let questions = config.questions(lang, mode);

        // 2. Nothing to ask is an expected outcome, not a failure
        if questions.is_empty() {
            info!(
                "No questions for profile '{}', mode '{}', lang '{}'",
                profile, mode, lang
            );
            return Err(ConfessorError::NoQuestions {
                profile: profile.to_string(),
                mode: mode.to_string(),
                lang: lang.to_string(),
            });
        }

        // 3. Collect answers
        let locale = Locale::from_code(lang);
        let answers = ask_questions(questions, prompter, &self.validator, locale)?;

        // 4. Stamp once everything is answered
        let record = Record {
            profile: profile.to_string(),
            mode: mode.to_string(),
            lang: lang.to_string(),
            timestamp: current_timestamp(),
            answers,
        };

        info!(
            "Session complete: profile '{}', mode '{}', lang '{}', {} answers",
            profile,
            mode,
            lang,
            record.answers.len()
        );
        Ok(record)
    }
}

/// Ask each question in order until the validator accepts the answer.
///
/// There is no retry limit; a rejected answer is followed by the localized
/// notice and the same question again.
pub fn ask_questions<V: AnswerValidator + ?Sized>(
    questions: &[String],
    prompter: &mut dyn Prompter,
    validator: &V,
    locale: Locale,
) -> Result<Answers> {
    let mut answers = Answers::new();

    for question in questions {
        loop {
            let answer = prompter.ask(question)?;
            if validator.validate(question, &answer) {
                answers.insert(question.as_str(), answer);
                break;
            }
            debug!("Rejected answer for question '{}'", question);
            prompter.reject(locale.invalid_format())?;
        }
    }

    Ok(answers)
}

/// Local time truncated to whole seconds
fn current_timestamp() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}
