//! Line-oriented layout formatter.
//!
//! Normalises the layout of rendered component code without parsing it:
//! indentation, module specifier quotes, trailing semicolons and blank
//! lines. Input whose brackets do not balance is rejected as malformed.

use ncomp_core::{
    application::{ApplicationError, ports::CodeFormatter},
    domain::FormatRules,
    error::NcompResult,
};
use tracing::{instrument, trace};

/// Width of one indentation level in the built-in templates.
const SOURCE_INDENT: usize = 2;

/// Formatter applying [`FormatRules`] line by line.
#[derive(Debug, Clone, Copy)]
pub struct LayoutFormatter;

impl LayoutFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LayoutFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeFormatter for LayoutFormatter {
    #[instrument(skip_all, fields(bytes = text.len()))]
    fn format(&self, text: &str, rules: &FormatRules) -> NcompResult<String> {
        check_balanced(text)?;

        let mut out = String::with_capacity(text.len());
        let mut previous_blank = true;

        for raw in text.lines() {
            let line = raw.trim_end();
            if line.is_empty() {
                if !previous_blank {
                    out.push('\n');
                }
                previous_blank = true;
                continue;
            }
            previous_blank = false;

            let line = reindent(line, rules);
            let line = requote_specifier(&line, rules.single_quote);
            let line = if rules.semicolons {
                line
            } else {
                strip_semicolon(&line)
            };

            out.push_str(&line);
            out.push('\n');
        }

        // A trailing blank line was emitted before we knew nothing followed.
        while out.ends_with("\n\n") {
            out.pop();
        }

        trace!(bytes = out.len(), "formatted");
        Ok(out)
    }
}

// ── passes ────────────────────────────────────────────────────────────────────

/// Map leading two-space units onto the configured indentation.
fn reindent(line: &str, rules: &FormatRules) -> String {
    let body = line.trim_start_matches(' ');
    let spaces = line.len() - body.len();
    if spaces == 0 {
        return line.to_string();
    }

    let levels = spaces / SOURCE_INDENT;
    let remainder = spaces % SOURCE_INDENT;
    let unit = if rules.use_tabs {
        "\t".to_string()
    } else {
        " ".repeat(rules.indent_width)
    };

    let mut out = unit.repeat(levels);
    out.push_str(&" ".repeat(remainder));
    out.push_str(body);
    out
}

/// Rewrite the quotes around the module specifier of an `import`/`export`
/// line. Specifiers containing the target quote are left alone.
fn requote_specifier(line: &str, single_quote: bool) -> String {
    let trimmed = line.trim_start();
    let is_module_line = trimmed.starts_with("import ") || trimmed.starts_with("export ");
    if !is_module_line {
        return line.to_string();
    }

    let offset = match line.rfind(" from ") {
        Some(i) => i + " from ".len(),
        None if trimmed.starts_with("import ") => line.len() - trimmed.len() + "import ".len(),
        None => return line.to_string(),
    };

    let (want, other) = if single_quote {
        ('\'', '"')
    } else {
        ('"', '\'')
    };

    let tail = &line[offset..];
    let spec = tail.trim_start();
    let lead = &tail[..tail.len() - spec.len()];
    if !spec.starts_with(other) {
        return line.to_string();
    }
    let Some(close) = spec[1..].find(other) else {
        return line.to_string();
    };
    let inner = &spec[1..1 + close];
    if inner.contains(want) {
        return line.to_string();
    }

    format!(
        "{}{lead}{want}{inner}{want}{}",
        &line[..offset],
        &spec[close + 2..]
    )
}

fn strip_semicolon(line: &str) -> String {
    match line.strip_suffix(';') {
        Some(rest) if !rest.trim().is_empty() => rest.to_string(),
        _ => line.to_string(),
    }
}

// ── malformed input ───────────────────────────────────────────────────────────

/// Check that `()`, `[]` and `{}` balance outside strings and comments.
fn check_balanced(text: &str) -> NcompResult<()> {
    let mut stack: Vec<(char, usize)> = Vec::new();
    let mut chars = text.chars().peekable();
    let mut line = 1;

    while let Some(c) = chars.next() {
        match c {
            '\n' => line += 1,
            '\'' | '"' | '`' => {
                // Plain strings end at the line break; template literals may span lines.
                while let Some(n) = chars.next() {
                    if n == '\\' {
                        chars.next();
                    } else if n == c {
                        break;
                    } else if n == '\n' {
                        line += 1;
                        if c != '`' {
                            break;
                        }
                    }
                }
            }
            '/' if chars.peek() == Some(&'/') => {
                for n in chars.by_ref() {
                    if n == '\n' {
                        line += 1;
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for n in chars.by_ref() {
                    if n == '\n' {
                        line += 1;
                    }
                    if prev == '*' && n == '/' {
                        break;
                    }
                    prev = n;
                }
            }
            '(' | '[' | '{' => stack.push((c, line)),
            ')' | ']' | '}' => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                match stack.pop() {
                    Some((open, _)) if open == expected => {}
                    Some((open, opened_at)) => {
                        return Err(malformed(format!(
                            "'{c}' on line {line} does not close '{open}' from line {opened_at}"
                        )));
                    }
                    None => {
                        return Err(malformed(format!("unexpected '{c}' on line {line}")));
                    }
                }
            }
            _ => {}
        }
    }

    match stack.pop() {
        Some((open, opened_at)) => Err(malformed(format!(
            "'{open}' opened on line {opened_at} is never closed"
        ))),
        None => Ok(()),
    }
}

fn malformed(reason: String) -> ncomp_core::error::NcompError {
    ApplicationError::FormattingFailed { reason }.into()
}
