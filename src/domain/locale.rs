//! User-facing strings for the two supported interface languages

/// Interface language selected from a language code.
///
/// Only `"en"` maps to English; every other code falls back to Russian,
/// matching the question sets shipped with the default profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    English,
    Russian,
}

impl Locale {
    pub fn from_code(lang: &str) -> Self {
        if lang == "en" {
            Locale::English
        } else {
            Locale::Russian
        }
    }

    /// Title substituted for `{title}` in report templates
    pub fn report_title(&self) -> &'static str {
        match self {
            Locale::English => "Daily Report",
            Locale::Russian => "Отчет за день",
        }
    }

    /// Heading of the panel a single report is shown in
    pub fn report_heading(&self) -> &'static str {
        match self {
            Locale::English => "Report",
            Locale::Russian => "Отчет",
        }
    }

    pub fn weekly_title(&self) -> &'static str {
        match self {
            Locale::English => "Weekly Report",
            Locale::Russian => "Отчет за неделю",
        }
    }

    /// Column headers of the weekly summary table
    pub fn summary_columns(&self) -> [&'static str; 3] {
        match self {
            Locale::English => ["Date", "Mode", "Summary"],
            Locale::Russian => ["Дата", "Режим", "Кратко"],
        }
    }

    pub fn welcome(&self) -> &'static str {
        match self {
            Locale::English => "Welcome to Confessor Notebook. Answer the questions below.",
            Locale::Russian => "Добро пожаловать в Исповедник. Ответьте на следующие вопросы.",
        }
    }

    pub fn invalid_format(&self) -> &'static str {
        match self {
            Locale::English => "Invalid format. Please try again.",
            Locale::Russian => "Неверный формат. Попробуйте еще раз.",
        }
    }

    pub fn saving_record(&self) -> &'static str {
        match self {
            Locale::English => "Saving record...",
            Locale::Russian => "Сохранение записи...",
        }
    }

    pub fn no_questions(&self, profile: &str, mode: &str, lang: &str) -> String {
        match self {
            Locale::English => format!(
                "No questions for mode '{}' and language '{}' in profile '{}'.",
                mode, lang, profile
            ),
            Locale::Russian => format!(
                "Нет вопросов для режима '{}' и языка '{}' в профиле '{}'.",
                mode, lang, profile
            ),
        }
    }

    pub fn no_records(&self) -> &'static str {
        match self {
            Locale::English => "No records found.",
            Locale::Russian => "Записей не найдено.",
        }
    }

    pub fn question_added(&self) -> &'static str {
        match self {
            Locale::English => "Question added.",
            Locale::Russian => "Вопрос добавлен.",
        }
    }

    pub fn questions_title(&self) -> &'static str {
        match self {
            Locale::English => "Questions",
            Locale::Russian => "Вопросы",
        }
    }

    pub fn no_questions_found(&self) -> &'static str {
        match self {
            Locale::English => "No questions found.",
            Locale::Russian => "Вопросы не найдены.",
        }
    }

    pub fn profile_added(&self, name: &str) -> String {
        match self {
            Locale::English => format!("Profile '{}' added.", name),
            Locale::Russian => format!("Профиль '{}' добавлен.", name),
        }
    }

    pub fn profile_removed(&self, name: &str) -> String {
        match self {
            Locale::English => format!("Profile '{}' removed.", name),
            Locale::Russian => format!("Профиль '{}' удален.", name),
        }
    }

    pub fn profile_exists(&self, name: &str) -> String {
        match self {
            Locale::English => format!("Profile '{}' already exists.", name),
            Locale::Russian => format!("Профиль '{}' уже существует.", name),
        }
    }

    pub fn profile_not_found(&self, name: &str) -> String {
        match self {
            Locale::English => format!("Profile '{}' not found.", name),
            Locale::Russian => format!("Профиль '{}' не найден.", name),
        }
    }

    pub fn reserved_language(&self, lang: &str) -> String {
        match self {
            Locale::English => format!("'{}' cannot be used as a language code.", lang),
            Locale::Russian => format!("'{}' нельзя использовать как код языка.", lang),
        }
    }

    pub fn sync_not_implemented(&self) -> &'static str {
        match self {
            Locale::English => "Cloud synchronization is not implemented yet.",
            Locale::Russian => "Облачная синхронизация пока не реализована.",
        }
    }

    /// Generic failure text; details go to the log file only
    pub fn unexpected_failure(&self) -> &'static str {
        match self {
            Locale::English => "Something went wrong. See confessor-notebook.log for details.",
            Locale::Russian => "Что-то пошло не так. Подробности в confessor-notebook.log.",
        }
    }
}
