//! Terminal interaction: asking questions and showing results

use crate::domain::WeeklySummary;
use std::io::{self, BufRead, Write};

/// Asks the operator a question and returns the typed answer
pub trait Prompter {
    fn ask(&mut self, question: &str) -> io::Result<String>;

    /// Tell the operator their last answer was not accepted
    fn reject(&mut self, notice: &str) -> io::Result<()>;
}

/// Kind of message shown by a presenter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Displays messages, reports and tables
pub trait Presenter {
    fn banner(&mut self, text: &str) -> io::Result<()>;

    fn message(&mut self, kind: MessageKind, text: &str) -> io::Result<()>;

    fn report(&mut self, heading: &str, body: &str) -> io::Result<()>;

    fn table(&mut self, title: &str, columns: [&str; 3], summary: &WeeklySummary)
        -> io::Result<()>;
}

/// Prompter reading answers line by line from any buffered reader
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        TerminalPrompter::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TerminalPrompter { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{}: ", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before all questions were answered",
            ));
        }

        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_string())
    }

    fn reject(&mut self, notice: &str) -> io::Result<()> {
        writeln!(self.output, "{}", notice)
    }
}

const RULE_CHAR: char = '─';

fn width(text: &str) -> usize {
    text.chars().count()
}

fn rule(len: usize) -> String {
    std::iter::repeat(RULE_CHAR).take(len).collect()
}

/// Format the profile logo between two rules
fn format_banner(text: &str) -> String {
    let line = rule(width(text).max(1));
    format!("{}\n{}\n{}", line, text, line)
}

/// Format a titled block of text, e.g. a rendered report
fn format_panel(heading: &str, body: &str) -> String {
    let body = body.trim_end_matches('\n');
    let inner = body.lines().map(width).max().unwrap_or(0).max(width(heading) + 4);
    format!(
        "{} {} {}\n{}\n{}",
        rule(1),
        heading,
        rule(inner.saturating_sub(width(heading) + 2)),
        body,
        rule(inner + 1)
    )
}

/// Format the weekly summary as an aligned three-column table
fn format_weekly_table(title: &str, columns: [&str; 3], summary: &WeeklySummary) -> String {
    let mut widths = columns.map(width);
    for row in &summary.rows {
        widths[0] = widths[0].max(width(&row.timestamp));
        widths[1] = widths[1].max(width(&row.mode));
        widths[2] = widths[2].max(width(&row.summary));
    }

    let pad = |text: &str, w: usize| format!("{}{}", text, " ".repeat(w - width(text)));

    let mut output = format!("{}\n", title);
    output.push_str(&format!(
        "{}  {}  {}\n",
        pad(columns[0], widths[0]),
        pad(columns[1], widths[1]),
        columns[2]
    ));
    output.push_str(&format!(
        "{}  {}  {}\n",
        rule(widths[0]),
        rule(widths[1]),
        rule(widths[2])
    ));
    for row in &summary.rows {
        output.push_str(&format!(
            "{}  {}  {}\n",
            pad(&row.timestamp, widths[0]),
            pad(&row.mode, widths[1]),
            row.summary
        ));
    }
    output
}

/// Presenter writing plain text to a stream
pub struct TerminalPresenter<W> {
    output: W,
}

impl TerminalPresenter<io::Stdout> {
    pub fn stdout() -> Self {
        TerminalPresenter::new(io::stdout())
    }
}

impl TerminalPresenter<io::Stderr> {
    /// Presenter for failures, kept off stdout
    pub fn stderr() -> Self {
        TerminalPresenter::new(io::stderr())
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(output: W) -> Self {
        TerminalPresenter { output }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn banner(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", format_banner(text))
    }

    fn message(&mut self, kind: MessageKind, text: &str) -> io::Result<()> {
        match kind {
            MessageKind::Info | MessageKind::Success => writeln!(self.output, "{}", text),
            MessageKind::Warning => writeln!(self.output, "Warning: {}", text),
            MessageKind::Error => writeln!(self.output, "Error: {}", text),
        }
    }

    fn report(&mut self, heading: &str, body: &str) -> io::Result<()> {
        writeln!(self.output, "{}", format_panel(heading, body))
    }

    fn table(
        &mut self,
        title: &str,
        columns: [&str; 3],
        summary: &WeeklySummary,
    ) -> io::Result<()> {
        write!(self.output, "{}", format_weekly_table(title, columns, summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SummaryRow;
    use std::io::Cursor;

    #[test]
    fn test_ask_reads_one_line() {
        let mut prompter = TerminalPrompter::new(Cursor::new("first\nsecond\n"), Vec::new());

        assert_eq!(prompter.ask("Q1").unwrap(), "first");
        assert_eq!(prompter.ask("Q2").unwrap(), "second");
        assert_eq!(String::from_utf8(prompter.output).unwrap(), "Q1: Q2: ");
    }

    #[test]
    fn test_ask_strips_crlf_and_keeps_spaces() {
        let mut prompter = TerminalPrompter::new(Cursor::new("  padded \r\n"), Vec::new());
        assert_eq!(prompter.ask("Q").unwrap(), "  padded ");
    }

    #[test]
    fn test_ask_empty_line_is_empty_answer() {
        let mut prompter = TerminalPrompter::new(Cursor::new("\n"), Vec::new());
        assert_eq!(prompter.ask("Q").unwrap(), "");
    }

    #[test]
    fn test_ask_at_end_of_input_fails() {
        let mut prompter = TerminalPrompter::new(Cursor::new(""), Vec::new());
        let err = prompter.ask("Q").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut prompter = TerminalPrompter::new(Cursor::new("tail"), Vec::new());
        assert_eq!(prompter.ask("Q").unwrap(), "tail");
    }

    #[test]
    fn test_presenter_writes_messages() {
        let mut presenter = TerminalPresenter::new(Vec::new());
        presenter.message(MessageKind::Success, "Question added.").unwrap();
        presenter.message(MessageKind::Warning, "No records found.").unwrap();
        presenter.message(MessageKind::Error, "Something went wrong.").unwrap();

        let output = String::from_utf8(presenter.output).unwrap();
        assert_eq!(
            output,
            "Question added.\nWarning: No records found.\nError: Something went wrong.\n"
        );
    }

    #[test]
    fn test_format_banner() {
        assert_eq!(format_banner("Logo"), "────\nLogo\n────");
    }

    #[test]
    fn test_format_panel_contains_heading_and_body() {
        let output = format_panel("Report", "Daily Report\nQ1\nA1\n\n");
        assert!(output.starts_with("─ Report "));
        assert!(output.contains("Daily Report\nQ1\nA1"));
        assert!(!output.contains("A1\n\n"));
    }

    #[test]
    fn test_format_weekly_table_aligns_columns() {
        let summary = WeeklySummary {
            rows: vec![
                SummaryRow {
                    timestamp: "2025-02-20 12:00:00".to_string(),
                    mode: "meditation".to_string(),
                    summary: "Q1: A1 | Q2: A2".to_string(),
                },
                SummaryRow {
                    timestamp: "2025-02-19 12:00:00".to_string(),
                    mode: "confession".to_string(),
                    summary: "Как дела?: хорошо".to_string(),
                },
            ],
        };

        let output = format_weekly_table("Weekly Report", ["Date", "Mode", "Summary"], &summary);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Weekly Report");
        assert!(lines[1].starts_with("Date                 Mode        Summary"));
        assert_eq!(lines[3], "2025-02-20 12:00:00  meditation  Q1: A1 | Q2: A2");
        assert_eq!(lines[4], "2025-02-19 12:00:00  confession  Как дела?: хорошо");
    }

    #[test]
    fn test_format_weekly_table_empty() {
        let output = format_weekly_table(
            "Weekly Report",
            ["Date", "Mode", "Summary"],
            &WeeklySummary { rows: vec![] },
        );
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_presenter_table_contains_rows() {
        let summary = WeeklySummary {
            rows: vec![SummaryRow {
                timestamp: "2025-02-20 12:00:00".to_string(),
                mode: "confession".to_string(),
                summary: "Q1: A1 | Q2: A2".to_string(),
            }],
        };
        let mut presenter = TerminalPresenter::new(Vec::new());
        presenter
            .table("Weekly Report", ["Date", "Mode", "Summary"], &summary)
            .unwrap();

        let output = String::from_utf8(presenter.output).unwrap();
        assert!(output.contains("Weekly Report"));
        assert!(output.contains("2025-02-20 12:00:00"));
        assert!(output.contains("Q1: A1 | Q2: A2"));
    }
}
