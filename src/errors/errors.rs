use std::fmt::Display;

use thiserror::Error;

/// A lexical anomaly found while scanning, pinned to a 1-based line and a
/// 0-based character column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: usize,
    column: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: usize, column: usize) -> Self {
        Error {
            internal_error: error_impl,
            line,
            column,
        }
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn get_column(&self) -> usize {
        self.column
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Whether this error stops the remainder of the pass when the analyzer
    /// runs with the default policy.
    pub fn is_fatal(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::UnterminatedString)
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::MultipleDecimalPoints { .. } => "MultipleDecimalPoints",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::MultipleDecimalPoints { number } => ErrorTip::Suggestion(format!(
                "Number `{}` has more than one `.`, did you mean `{}`?",
                number,
                first_decimal(number)
            )),
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("Close the string with `\"` on the same line"))
            }
            ErrorImpl::UnrecognisedCharacter { character } => ErrorTip::Suggestion(format!(
                "Character `{}` is not part of the language",
                character
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lexical error at line {}: {}", self.line, self.internal_error)
    }
}

impl std::error::Error for Error {}

fn first_decimal(number: &str) -> String {
    let mut parts = number.splitn(3, '.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();

    format!("{}.{}", whole, fraction)
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("number with multiple decimal points")]
    MultipleDecimalPoints { number: String },
    #[error("unterminated string")]
    UnterminatedString,
    #[error("unrecognized character '{character}'")]
    UnrecognisedCharacter { character: char },
}

/// Failure reading or writing the symbol table file.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("symbol table i/o failed on {path:?}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TableError {
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        TableError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
