//! Report template rendering
//!
//! Templates use brace placeholders: `{title}` and `{content}`. Literal
//! braces are written doubled (`{{`, `}}`). Any other placeholder name,
//! an unclosed brace or a stray closing brace makes the template invalid.
//! Conversions and format specs (`{title!s}`, `{title:>20}`) are not
//! supported and are rejected like unknown names.

use crate::error::{ConfessorError, Result};

/// Report template with its placeholders resolved at render time
#[derive(Debug, Clone)]
pub struct Template {
    content: String,
}

impl Template {
    pub fn new(content: impl Into<String>) -> Self {
        Template {
            content: content.into(),
        }
    }

    /// Substitute title and content into the template.
    ///
    /// Either placeholder may be absent; unknown ones are an error.
    pub fn render(&self, title: &str, content: &str) -> Result<String> {
        let mut result = String::with_capacity(self.content.len() + content.len());
        let mut chars = self.content.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    result.push('{');
                }
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some('{') | None => {
                                return Err(self.error("unclosed '{' in template"));
                            }
                            Some(ch) => name.push(ch),
                        }
                    }
                    match name.as_str() {
                        "title" => result.push_str(title),
                        "content" => result.push_str(content),
                        other => {
                            return Err(self.error(&format!(
                                "unknown placeholder '{{{}}}'; expected one of {{title}}, {{content}}",
                                other
                            )));
                        }
                    }
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    result.push('}');
                }
                '}' => return Err(self.error("single '}' encountered in template")),
                _ => result.push(c),
            }
        }

        Ok(result)
    }

    fn error(&self, reason: &str) -> ConfessorError {
        ConfessorError::Template(format!("{} (template: {:?})", reason, self.content))
    }
}
