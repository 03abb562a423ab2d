//! Deterministic style normalization for generated source.
//!
//! Not a pretty-printer: the serializer already emits well-indented text.
//! This pass enforces the fixed style profile (quote style, arrow parens),
//! trims whitespace noise, and rejects structurally malformed input -
//! an unbalanced delimiter means the module assembly is buggy, and that
//! must fail before anything reaches the filesystem.

use sprout_core::{
    application::{ApplicationError, ports::SourceFormatter},
    error::SproutResult,
};
use tracing::instrument;

// ── Configuration ─────────────────────────────────────────────────────────────

/// Whether single arrow-function parameters are parenthesized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowParens {
    Always,
    Avoid,
}

/// Preferred quote style for plain string literals.
///
/// JSX attribute values are exempt either way - they stay double-quoted,
/// matching how JSX is conventionally written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    Single,
    Double,
}

/// Parser profile the output targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserProfile {
    Babel,
}

/// Fixed formatting profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    pub arrow_parens: ArrowParens,
    pub quotes: QuoteStyle,
    pub parser: ParserProfile,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            arrow_parens: ArrowParens::Always,
            quotes: QuoteStyle::Single,
            parser: ParserProfile::Babel,
        }
    }
}

// ── Formatter ─────────────────────────────────────────────────────────────────

/// Style-normalizing formatter with a fixed configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleFormatter {
    config: FormatConfig,
}

impl SimpleFormatter {
    /// Create a formatter with the default profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter with an explicit profile.
    pub fn with_config(config: FormatConfig) -> Self {
        Self { config }
    }
}

impl SourceFormatter for SimpleFormatter {
    #[instrument(skip_all)]
    fn format(&self, source: &str) -> SproutResult<String> {
        check_balanced(source)?;

        let mut out = String::with_capacity(source.len());
        let mut previous_blank = true; // swallow leading blank lines

        for line in source.lines() {
            let line = line.trim_end();
            let blank = line.is_empty();
            if blank && previous_blank {
                continue;
            }
            previous_blank = blank;

            let line = normalize_quotes(line, self.config.quotes);
            let line = normalize_arrow_parens(&line, self.config.arrow_parens);
            out.push_str(&line);
            out.push('\n');
        }

        while out.ends_with("\n\n") {
            out.pop();
        }

        Ok(out)
    }
}

// ── Balance check ─────────────────────────────────────────────────────────────

/// Verify that braces, parens, and brackets nest properly, ignoring
/// delimiters inside string literals and comments.
fn check_balanced(source: &str) -> SproutResult<()> {
    let mut stack: Vec<(char, usize)> = Vec::new();
    let mut chars = source.chars().peekable();
    let mut line = 1;
    let mut in_string: Option<char> = None;
    let mut in_line_comment = false;
    let mut in_block_comment = false;

    while let Some(c) = chars.next() {
        if c == '\n' {
            line += 1;
            in_line_comment = false;
            continue;
        }

        if in_line_comment {
            continue;
        }
        if in_block_comment {
            if c == '*' && chars.peek() == Some(&'/') {
                chars.next();
                in_block_comment = false;
            }
            continue;
        }
        if let Some(quote) = in_string {
            if c == '\\' {
                chars.next();
            } else if c == quote {
                in_string = None;
            }
            continue;
        }

        match c {
            '\'' | '"' | '`' => in_string = Some(c),
            '/' if chars.peek() == Some(&'/') => in_line_comment = true,
            '/' if chars.peek() == Some(&'*') => in_block_comment = true,
            '{' | '(' | '[' => stack.push((c, line)),
            '}' | ')' | ']' => {
                let expected = match c {
                    '}' => '{',
                    ')' => '(',
                    _ => '[',
                };
                match stack.pop() {
                    Some((open, _)) if open == expected => {}
                    _ => {
                        return Err(format_error(format!(
                            "unexpected '{c}' on line {line}"
                        )));
                    }
                }
            }
            _ => {}
        }
    }

    if let Some((open, line)) = stack.pop() {
        return Err(format_error(format!("unclosed '{open}' from line {line}")));
    }
    if in_string.is_some() {
        return Err(format_error("unterminated string literal".into()));
    }

    Ok(())
}

fn format_error(reason: String) -> sprout_core::error::SproutError {
    ApplicationError::FormatFailed { reason }.into()
}

// ── Quote normalization ───────────────────────────────────────────────────────

/// Rewrite string literals to the preferred quote character.
///
/// A literal is left alone when:
/// - it already uses the preferred quote,
/// - it is a JSX attribute value (opening quote directly preceded by `=`),
/// - the content contains the preferred quote (re-quoting would need escapes).
fn normalize_quotes(line: &str, style: QuoteStyle) -> String {
    let (preferred, other) = match style {
        QuoteStyle::Single => ('\'', '"'),
        QuoteStyle::Double => ('"', '\''),
    };

    let chars: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == preferred {
            // Copy an already-preferred literal verbatim so a stray `other`
            // quote inside it is not mistaken for a literal of its own.
            out.push(c);
            let close = chars[i + 1..].iter().position(|&x| x == preferred);
            match close {
                Some(offset) => {
                    out.extend(&chars[i + 1..=i + 1 + offset]);
                    i = i + 2 + offset;
                }
                None => i += 1,
            }
            continue;
        }
        if c != other {
            out.push(c);
            i += 1;
            continue;
        }

        // Find the matching closing quote on this line.
        let close = chars[i + 1..].iter().position(|&x| x == other);
        let Some(offset) = close else {
            out.push(c);
            i += 1;
            continue;
        };
        let end = i + 1 + offset;
        let content: String = chars[i + 1..end].iter().collect();

        let jsx_attribute = i > 0 && chars[i - 1] == '=' && other == '"';
        if jsx_attribute || content.contains(preferred) {
            out.extend(&chars[i..=end]);
        } else {
            out.push(preferred);
            out.push_str(&content);
            out.push(preferred);
        }
        i = end + 1;
    }

    out
}

// ── Arrow parens ──────────────────────────────────────────────────────────────

/// Enforce the arrow-parameter style on a line.
fn normalize_arrow_parens(line: &str, style: ArrowParens) -> String {
    match style {
        ArrowParens::Always => wrap_bare_params(line),
        ArrowParens::Avoid => unwrap_single_params(line),
    }
}

/// `x => ...` becomes `(x) => ...`.
fn wrap_bare_params(line: &str) -> String {
    let Some(arrow) = line.find("=>") else {
        return line.to_string();
    };
    if !outside_strings(&line[..arrow]) {
        return line.to_string();
    }

    let head = &line[..arrow];
    let trimmed = head.trim_end();
    let param_end = trimmed.len();
    let param_start = trimmed
        .rfind(|c: char| !c.is_alphanumeric() && c != '_' && c != '$')
        .map_or(0, |p| p + c_len(trimmed, p));
    let param = &trimmed[param_start..param_end];

    if param.is_empty() || !param.chars().next().is_some_and(is_ident_start) {
        return line.to_string();
    }

    format!(
        "{}({}){}{}",
        &trimmed[..param_start],
        param,
        &head[trimmed.len()..],
        &line[arrow..]
    )
}

/// `(x) => ...` becomes `x => ...` (single plain parameter only).
fn unwrap_single_params(line: &str) -> String {
    let Some(arrow) = line.find("=>") else {
        return line.to_string();
    };
    if !outside_strings(&line[..arrow]) {
        return line.to_string();
    }

    let head = line[..arrow].trim_end();
    let Some(open) = head.rfind('(') else {
        return line.to_string();
    };
    if !head.ends_with(')') {
        return line.to_string();
    }

    let inner = &head[open + 1..head.len() - 1];
    let is_plain_ident = !inner.is_empty()
        && inner.chars().next().is_some_and(is_ident_start)
        && inner
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '$');
    if !is_plain_ident {
        return line.to_string();
    }

    format!(
        "{}{}{}{}",
        &head[..open],
        inner,
        &line[head.len()..arrow],
        &line[arrow..]
    )
}

/// `true` when the end of `prefix` is not inside a string literal.
fn outside_strings(prefix: &str) -> bool {
    let mut in_quote: Option<char> = None;
    let mut chars = prefix.chars();
    while let Some(c) = chars.next() {
        match in_quote {
            Some(quote) => {
                if c == '\\' {
                    chars.next();
                } else if c == quote {
                    in_quote = None;
                }
            }
            None => {
                if matches!(c, '\'' | '"' | '`') {
                    in_quote = Some(c);
                }
            }
        }
    }
    in_quote.is_none()
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn c_len(s: &str, byte_pos: usize) -> usize {
    s[byte_pos..].chars().next().map_or(1, char::len_utf8)
}

// ── tests ─────────────────────────────────────────────────────────────────────
