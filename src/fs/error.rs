use derive_more::{Display, Error, From, IsVariant};

/// Raised when constructing a [`Path`](crate::fs::path::Path) or validating a file name from text
/// that contains a control character or one of the reserved symbols.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("invalid symbol {symbol:?} at byte {index} of path")]
pub struct InvalidArgumentError {
    pub symbol: char,
    pub index: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("operation not implemented")]
pub struct NotImplementedError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("unexpected OS error with code: {_0}")]
pub struct IoError(#[error(not(source))] pub i32);

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("path is not valid unicode")]
pub struct NonUnicodeError;

#[derive(Debug, Display, From, Error, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum CurrentDirError {
    Io(IoError),
    NonUnicode(NonUnicodeError),
}

/// Any error produced by this crate, for callers that want to use `?` across operations.
#[derive(Debug, Display, From, Error, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum PathError {
    InvalidArgument(InvalidArgumentError),
    NotImplemented(NotImplementedError),
    Io(IoError),
    NonUnicode(NonUnicodeError),
}

impl From<CurrentDirError> for PathError {
    fn from(value: CurrentDirError) -> Self {
        match value {
            CurrentDirError::Io(e) => e.into(),
            CurrentDirError::NonUnicode(e) => e.into(),
        }
    }
}
