use std::fmt;
use std::num::ParseIntError;

#[derive(Debug, PartialEq)]
pub enum ShellError {
    /// Menu input that is not a number at all.
    InvalidInput(String),
    /// A number with no menu entry.
    InvalidChoice(u32),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(_) => write!(f, "Invalid input. Please enter a number."),
            Self::InvalidChoice(_) => write!(f, "Invalid choice. Please try again."),
        }
    }
}

impl std::error::Error for ShellError {}

impl From<ParseIntError> for ShellError {
    fn from(error: ParseIntError) -> Self {
        ShellError::InvalidInput(error.to_string())
    }
}
