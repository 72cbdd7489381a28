use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::fs::InvalidArgumentError;
use crate::fs::path::Path;

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl FromStr for Path {
    type Err = InvalidArgumentError;

    /// Parses a single token of text, applying the same validation and normalization as
    /// [`Path::new`]. Splitting input into tokens is left to the caller.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::new(s)
    }
}
