//! Error type hierarchy for the Macchiato front end
//!
//! Every stage (lexer, parser, passes) reports through the unified
//! `MacchiatoError`, which carries an error kind, a message, and optional
//! source context so diagnostics can always point back into the input text.

mod conversions;

use colored::*;
use serde::Serialize;
use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Span information for multi-character ranges
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl Span {
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        Self { start, end }
    }

    pub fn single(location: SourceLocation) -> Self {
        Self {
            start: location.clone(),
            end: location,
        }
    }

    pub fn start_line(&self) -> usize {
        self.start.line
    }

    pub fn start_column(&self) -> usize {
        self.start.column
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Additional context attached to an error
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub span: Option<Span>,
    pub note: Option<String>,
    pub help: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Main error type for the Macchiato front end
#[derive(Debug, Clone)]
pub struct MacchiatoError {
    pub kind: ErrorKind,
    pub message: String,
    pub context: ErrorContext,
}

impl MacchiatoError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: ErrorContext::new(),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.context.span = Some(span);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.context.note = Some(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.context.help = Some(help.into());
        self
    }
}

/// Categories of errors that can occur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Lexer errors
    InvalidCharacter,
    NumberTooLarge,
    UnterminatedString,
    UnterminatedComment,

    // Parser errors
    SyntaxError,
    UnexpectedToken,
    UnexpectedEof,
    InvalidAssignmentTarget,

    // Resolver errors
    UndefinedVariable,

    // Type checker errors
    TypeMismatch,
    UnsupportedOperator,

    // Interpreter errors
    DivisionByZero,
    ArithmeticOverflow,
    RuntimeError,

    // IO errors
    IoError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidCharacter => "invalid character",
            ErrorKind::NumberTooLarge => "number too large",
            ErrorKind::UnterminatedString => "unterminated string",
            ErrorKind::UnterminatedComment => "unterminated comment",
            ErrorKind::SyntaxError => "syntax error",
            ErrorKind::UnexpectedToken => "unexpected token",
            ErrorKind::UnexpectedEof => "unexpected end of file",
            ErrorKind::InvalidAssignmentTarget => "invalid assignment target",
            ErrorKind::UndefinedVariable => "undefined variable",
            ErrorKind::TypeMismatch => "type mismatch",
            ErrorKind::UnsupportedOperator => "unsupported operator",
            ErrorKind::DivisionByZero => "division by zero",
            ErrorKind::ArithmeticOverflow => "arithmetic overflow",
            ErrorKind::RuntimeError => "runtime error",
            ErrorKind::IoError => "I/O error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MacchiatoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context.span {
            Some(span) => write!(f, "{}: {}: {}", span, self.kind, self.message)?,
            None => write!(f, "{}: {}", self.kind, self.message)?,
        }

        if let Some(note) = &self.context.note {
            write!(f, "\nnote: {}", note)?;
        }

        if let Some(help) = &self.context.help {
            write!(f, "\nhelp: {}", help)?;
        }

        Ok(())
    }
}

impl std::error::Error for MacchiatoError {}

/// Result type for front-end operations
pub type Result<T> = std::result::Result<T, MacchiatoError>;

/// Format an error against its source text, with a snippet and pointer
pub struct ErrorFormatter<'a> {
    error: &'a MacchiatoError,
    source: &'a str,
    filename: Option<&'a str>,
    use_color: bool,
}

impl<'a> ErrorFormatter<'a> {
    pub fn new(error: &'a MacchiatoError, source: &'a str) -> Self {
        Self {
            error,
            source,
            filename: None,
            use_color: true,
        }
    }

    pub fn with_filename(mut self, filename: &'a str) -> Self {
        self.filename = Some(filename);
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn format(&self) -> String {
        let mut output = String::new();

        if let Some(span) = &self.error.context.span {
            let location = match self.filename {
                Some(filename) => {
                    format!("{}:{}:{}", filename, span.start.line, span.start.column)
                }
                None => format!("{}:{}", span.start.line, span.start.column),
            };
            output.push_str(&if self.use_color {
                location.bold().to_string()
            } else {
                location
            });
            output.push_str(": ");
        }

        let error_kind = self.error.kind.to_string();
        let error_label = if self.use_color {
            error_kind.red().bold().to_string()
        } else {
            error_kind
        };
        output.push_str(&format!("{}: {}\n", error_label, self.error.message));

        if let Some(span) = &self.error.context.span {
            if let Some(snippet) = self.extract_snippet(span) {
                output.push_str(&snippet);
            }
        }

        if let Some(note) = &self.error.context.note {
            let note_label = if self.use_color {
                "note".blue().bold()
            } else {
                "note".into()
            };
            output.push_str(&format!("\n{}: {}", note_label, note));
        }

        if let Some(help) = &self.error.context.help {
            let help_label = if self.use_color {
                "help".green().bold()
            } else {
                "help".into()
            };
            output.push_str(&format!("\n{}: {}", help_label, help));
        }

        output
    }

    fn extract_snippet(&self, span: &Span) -> Option<String> {
        let lines: Vec<&str> = self.source.lines().collect();

        // Line numbers are 1-based
        if span.start.line == 0 || span.start.line > lines.len() {
            return None;
        }

        let mut snippet = String::new();
        let line = lines[span.start.line - 1];
        let gutter_width = span.start.line.to_string().len() + 2;

        let line_num = span.start.line.to_string();
        let line_num_str = if self.use_color {
            line_num.blue().bold().to_string()
        } else {
            line_num
        };
        let separator = if self.use_color {
            "|".blue().to_string()
        } else {
            "|".to_string()
        };

        snippet.push_str(&format!(
            "{:>width$} {} {}\n",
            line_num_str,
            separator,
            line,
            width = gutter_width - 2
        ));

        let padding = " ".repeat(gutter_width);
        let pointer_padding = " ".repeat(span.start.column.saturating_sub(1));
        let pointer_length = if span.start.line == span.end.line {
            span.end.column.saturating_sub(span.start.column).max(1)
        } else {
            1
        };
        let pointer = "^".repeat(pointer_length);
        let pointer_str = if self.use_color {
            pointer.red().bold().to_string()
        } else {
            pointer
        };

        snippet.push_str(&format!(
            "{} {} {}{}",
            padding, separator, pointer_padding, pointer_str
        ));

        Some(snippet)
    }
}

/// Collection of errors for reporting multiple issues
#[derive(Debug, Default)]
pub struct ErrorCollection {
    errors: Vec<MacchiatoError>,
}

impl ErrorCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, error: MacchiatoError) {
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[MacchiatoError] {
        &self.errors
    }
}

impl fmt::Display for ErrorCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "error: {}", error)?;
        }

        if !self.is_empty() {
            write!(f, "\n{} error(s)", self.error_count())?;
        }

        Ok(())
    }
}

impl From<std::io::Error> for MacchiatoError {
    fn from(err: std::io::Error) -> Self {
        MacchiatoError::new(ErrorKind::IoError, err.to_string())
    }
}
