// src/core/diagnostics.rs
//! Pretty, colored, file+line diagnostics for preprocessing errors.

use colored::Colorize;

use crate::core::error::PreprocessError;

pub struct Span {
    pub line: usize,
    pub col: usize,
    pub len: usize, // underline length (use 1 if unknown)
}

impl Span {
    /// Underline the whole directive line, or just the snippet for syntax errors.
    pub fn for_error(source: &str, err: &PreprocessError) -> Self {
        let line_text = nth_line(source, err.line()).unwrap_or_default();
        match err {
            PreprocessError::Syntax { snippet, .. } => {
                // snippet is a prefix of the trimmed condition text
                let col = match line_text.find(char::is_whitespace) {
                    Some(kw_end) => {
                        let rest = &line_text[kw_end..];
                        kw_end + (rest.len() - rest.trim_start().len()) + 1
                    }
                    None => line_text.len() + 1,
                };
                Self { line: err.line(), col, len: snippet.chars().count() }
            }
            PreprocessError::Unterminated { line } => {
                let kw = line_text.split_whitespace().next().unwrap_or("%");
                Self { line: *line, col: 1, len: kw.chars().count() }
            }
        }
    }
}

pub fn print_error(filename: &str, source: &str, err: &PreprocessError) {
    eprint!("{}", render(filename, source, err));
}

/// Same layout as [`print_error`], returned as a string.
pub fn render(filename: &str, source: &str, err: &PreprocessError) -> String {
    let span = Span::for_error(source, err);
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        "error:".bright_red().bold(),
        err.to_string().bright_white()
    ));
    let (ln, col) = (span.line, span.col);
    let line_text = nth_line(source, ln).unwrap_or_default();

    // line number gutter
    let ln_str = format!("{:>4}", ln);
    out.push_str(&format!(
        "{} {}\n",
        "-->".bright_blue(),
        format!("{}:{}:{}", filename, ln, col).bright_white()
    ));
    out.push_str(&format!(" {} {}\n", ln_str.dimmed(), "|".dimmed()));
    out.push_str(&format!("{} {} {}\n", ln_str.dimmed(), "|".dimmed(), line_text));

    // underline with ^^^^^
    let underline = " ".repeat(col.saturating_sub(1)) + &"^".repeat(span.len.max(1));
    out.push_str(&format!(
        " {} {} {}\n\n",
        " ".repeat(ln_str.len()).dimmed(),
        "|".dimmed(),
        underline.bright_red()
    ));
    out
}

fn nth_line(src: &str, n: usize) -> Option<String> {
    src.lines().nth(n.saturating_sub(1)).map(|s| s.to_string())
}
