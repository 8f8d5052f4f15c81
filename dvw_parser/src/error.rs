use dvw_schema::TeamSide;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    Parse,
    Io,
    Structure,
    Roster,
}

impl ParseErrorKind {
    pub(crate) fn from_code(code: &'static str) -> Self {
        match code {
            // Parse: a line that does not match any recognized record shape
            "E1001" | "E1002" | "E1003" | "E1004" | "E1005" | "E1006" | "E1007" => Self::Parse,

            // IO
            "E2001" => Self::Io,

            // Structure: required section missing or malformed as a whole
            "E3001" | "E3002" | "E3003" | "E3004" => Self::Structure,

            // Roster resolution
            "E4001" | "E4002" => Self::Roster,

            _ => Self::Parse,
        }
    }
}

/// The only error kind of the pipeline. A failed parse never yields a
/// partial `Match`.
#[derive(Debug, Error, Clone)]
#[error("{code}: {message} (line {line})")]
pub struct ParseError {
    pub code: &'static str,
    pub kind: ParseErrorKind,
    pub message: String,
    pub line: usize,

    // Structured fields; the message stays source-of-truth.
    pub file: Option<String>,
    pub section: Option<String>,
    pub side: Option<TeamSide>,
    pub context: Option<String>,
}

impl ParseError {
    pub(crate) fn new(code: &'static str, message: impl Into<String>, line: usize) -> Self {
        Self {
            code,
            kind: ParseErrorKind::from_code(code),
            message: message.into(),
            line,

            file: None,
            section: None,
            side: None,
            context: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    pub fn with_side(mut self, side: TeamSide) -> Self {
        self.side = Some(side);
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}
