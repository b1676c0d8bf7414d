//! Output formatting utilities

/// Format a numbered list of questions
pub fn format_question_list(title: &str, questions: &[String]) -> String {
    let mut output = format!("{}\n", title);
    for (index, question) in questions.iter().enumerate() {
        output.push_str(&format!("{:>3}. {}\n", index + 1, question));
    }
    output
}
