//! Query values: question, data unit and the derived answer

use std::fmt;

use crate::domain::DomainError;

/// How data units are supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Interactive stdin: a single positional argument is the data.
    Argument,
    /// Redirected or piped stdin: every input line is a data unit.
    Stream,
}

impl InputMode {
    /// Choose the mode from whether stdin is attached to a terminal.
    pub fn detect(stdin_is_terminal: bool) -> Self {
        if stdin_is_terminal {
            InputMode::Argument
        } else {
            InputMode::Stream
        }
    }
}

/// Question text, guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    /// Validate raw question text.
    ///
    /// Only the empty string is rejected; whitespace is kept as given.
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.is_empty() {
            return Err(DomainError::MissingQuestion);
        }
        Ok(Self(text))
    }

    /// Resolve an optional question, treating `None` like an empty string.
    pub fn from_option(text: Option<&str>) -> Result<Self, DomainError> {
        Self::new(text.unwrap_or_default())
    }

    /// The question exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Combine the question with one unit of data.
    ///
    /// Uppercasing is idempotent, so uppercasing both parts once is the same
    /// as uppercasing the concatenation.
    pub fn answer(&self, data: &DataUnit) -> Answer {
        let mut text = self.0.to_uppercase();
        text.push_str(&data.0.to_uppercase());
        Answer(text)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One unit of input: the positional argument or one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUnit(String);

impl DataUnit {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Build a data unit from a raw line, stripping one trailing `\n` or `\r\n`.
    pub fn from_line(line: &str) -> Self {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Self(line.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Uppercased concatenation of question and data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer(String);

impl Answer {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
