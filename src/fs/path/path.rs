use std::ops::{Add, AddAssign};

use crate::fs::InvalidArgumentError;
use crate::fs::path::{Components, Cursor, MAIN_SEPARATOR, validity};

/// An owned, validated path.
///
/// # Invariants
/// - The string contains no control characters and none of `" < > |`.
/// - The string contains no trailing separator, unless it is made up of a single separator.
///
/// Equality is byte-for-byte on the normalized text, so `a/b` and `a\b` are different paths even
/// though they have the same components.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path {
    pub(crate) inner: String,
}

impl Path {
    /// Validates and normalizes `value` into a new `Path`.
    ///
    /// # Errors
    /// Fails with an [`InvalidArgumentError`] naming the first character which is invalid in a
    /// path, see [`is_invalid_path_symbol`](super::is_invalid_path_symbol).
    pub fn new<S: AsRef<str>>(value: S) -> Result<Path, InvalidArgumentError> {
        let value = value.as_ref();
        validity::validate(value)
            .inspect_err(|e| tracing::trace!(error = %e, "rejected path text"))?;

        Ok(Path {
            inner: validity::trim_trailing(value).to_owned(),
        })
    }

    pub const fn empty() -> Path {
        Path {
            inner: String::new(),
        }
    }

    /// Wraps text from a trusted source, such as the OS, without validating it.
    pub(crate) const fn from_trusted(inner: String) -> Path {
        Path {
            inner,
        }
    }

    pub const fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    pub fn into_string(self) -> String {
        self.inner
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Appends `other` in place. Leading separators of `other` are skipped unless `self` is empty,
    /// and exactly one [`MAIN_SEPARATOR`] is placed at the junction.
    pub fn push(&mut self, other: &Path) {
        if other.is_empty() {
            return;
        }

        if self.is_empty() {
            self.inner.push_str(&other.inner);
            return;
        }

        let tail = validity::trim_leading(&other.inner);
        // Joining with a bare root adds nothing.
        if tail.is_empty() {
            return;
        }

        if !self.inner.ends_with(validity::is_separator) {
            self.inner.reserve(tail.len() + 1);
            self.inner.push(MAIN_SEPARATOR);
        }
        self.inner.push_str(tail);
    }

    pub fn join(&self, other: &Path) -> Path {
        let mut joined = self.clone();
        joined.push(other);
        joined
    }

    /// Returns a cursor positioned on the first component, or at the end if there are none.
    pub fn cursor_front(&self) -> Cursor<'_> {
        Cursor::new(self, 0)
    }

    /// Returns a cursor positioned at the end sentinel. Step it back to reach the last component.
    pub fn cursor_back(&self) -> Cursor<'_> {
        Cursor::new(self, self.len())
    }

    pub fn components(&self) -> Components<'_> {
        Components {
            front: self.cursor_front(),
            back: self.cursor_back(),
        }
    }

    /// The last component, if there is one.
    pub fn file_name(&self) -> Option<&str> {
        let mut cursor = self.cursor_back();
        cursor.move_prev();
        cursor.has_current().then(|| cursor.read())
    }

    /// Everything before the last component, with trailing separators stripped the same way as on
    /// construction. Returns `None` if the path has no components.
    pub fn parent(&self) -> Option<Path> {
        let mut cursor = self.cursor_back();
        cursor.move_prev();
        if cursor.is_end() {
            None?
        }

        Some(Path::from_trusted(
            validity::trim_trailing(&self.inner[..cursor.pos()]).to_owned()
        ))
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl From<Path> for String {
    fn from(value: Path) -> Self {
        value.inner
    }
}

impl TryFrom<&str> for Path {
    type Error = InvalidArgumentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Path::new(value)
    }
}

impl TryFrom<String> for Path {
    type Error = InvalidArgumentError;

    fn try_from(mut value: String) -> Result<Self, Self::Error> {
        validity::validate(&value)?;
        let len = validity::trim_trailing(&value).len();
        value.truncate(len);
        Ok(Path::from_trusted(value))
    }
}

impl<P: AsRef<Path>> AddAssign<P> for Path {
    fn add_assign(&mut self, rhs: P) {
        self.push(rhs.as_ref());
    }
}

impl<P: AsRef<Path>> Add<P> for &Path {
    type Output = Path;

    fn add(self, rhs: P) -> Self::Output {
        self.join(rhs.as_ref())
    }
}

impl<P: AsRef<Path>> Add<P> for Path {
    type Output = Path;

    fn add(mut self, rhs: P) -> Self::Output {
        self.push(rhs.as_ref());
        self
    }
}
