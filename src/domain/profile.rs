//! Profile definitions and the built-in default bundle

use crate::error::{ConfessorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Report template used when a profile does not define one
pub const DEFAULT_REPORT_TEMPLATE: &str = "=== {title} ===\n{content}";

const DEFAULT_THEME: &str = "dark";
const DEFAULT_LOGO: &str = "🕊️ Confessor Notebook 🕊️";

const EN_CONFESSION: &[&str] = &[
    "How was your day?",
    "What did you achieve today?",
    "What challenges did you face today?",
];
const EN_MEDITATION: &[&str] = &[
    "How do you feel today?",
    "What are you grateful for today?",
    "What thoughts are on your mind?",
];
const RU_CONFESSION: &[&str] = &[
    "Как прошел твой день?",
    "Что ты успел сделать сегодня?",
    "С какими трудностями ты столкнулся сегодня?",
];
const RU_MEDITATION: &[&str] = &[
    "Как ты себя чувствуешь сегодня?",
    "За что ты сегодня благодарен?",
    "О чем ты думаешь?",
];

/// Display metadata, passed through to the presenter untouched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_logo")]
    pub logo: String,
}

impl Default for Appearance {
    fn default() -> Self {
        Appearance {
            theme: default_theme(),
            logo: default_logo(),
        }
    }
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

fn default_logo() -> String {
    DEFAULT_LOGO.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Templates {
    #[serde(default = "default_report_template")]
    pub report: String,
}

impl Default for Templates {
    fn default() -> Self {
        Templates {
            report: default_report_template(),
        }
    }
}

fn default_report_template() -> String {
    DEFAULT_REPORT_TEMPLATE.to_string()
}

/// Profile keys that share the table namespace with language codes
pub const RESERVED_KEYS: [&str; 2] = ["appearance", "templates"];

/// Ordered questions per mode, e.g. `"confession" -> [..]`
pub type QuestionSet = BTreeMap<String, Vec<String>>;

/// A named configuration bundle.
///
/// On disk the language tables sit next to `appearance` and `templates`,
/// so any table that is not one of those two is read as a language code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub appearance: Appearance,
    #[serde(default)]
    pub templates: Templates,
    #[serde(flatten)]
    pub languages: BTreeMap<String, QuestionSet>,
}

impl Default for ProfileConfig {
    /// The bundle every new profile starts from: English and Russian,
    /// confession and meditation, three questions each
    fn default() -> Self {
        let mut languages = BTreeMap::new();
        languages.insert(
            "en".to_string(),
            question_set(&[("confession", EN_CONFESSION), ("meditation", EN_MEDITATION)]),
        );
        languages.insert(
            "ru".to_string(),
            question_set(&[("confession", RU_CONFESSION), ("meditation", RU_MEDITATION)]),
        );

        ProfileConfig {
            appearance: Appearance::default(),
            templates: Templates::default(),
            languages,
        }
    }
}

fn question_set(modes: &[(&str, &[&str])]) -> QuestionSet {
    modes
        .iter()
        .map(|(mode, questions)| {
            (
                mode.to_string(),
                questions.iter().map(|q| q.to_string()).collect(),
            )
        })
        .collect()
}

impl ProfileConfig {
    /// Questions configured for a language and mode.
    ///
    /// A missing bucket is not an error; it yields an empty slice.
    pub fn questions(&self, lang: &str, mode: &str) -> &[String] {
        self.languages
            .get(lang)
            .and_then(|modes| modes.get(mode))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Append a question, creating the language/mode bucket if needed.
    ///
    /// `appearance` and `templates` are rejected as language codes: a bucket
    /// under either name would shadow that table and the document would no
    /// longer parse.
    pub fn add_question(&mut self, lang: &str, mode: &str, question: &str) -> Result<()> {
        if RESERVED_KEYS.contains(&lang) {
            return Err(ConfessorError::ReservedLanguage(lang.to_string()));
        }

        self.languages
            .entry(lang.to_string())
            .or_default()
            .entry(mode.to_string())
            .or_default()
            .push(question.to_string());
        Ok(())
    }

    pub fn report_template(&self) -> &str {
        &self.templates.report
    }
}
