use std::iter::FusedIterator;

use crate::fs::path::Path;
use crate::fs::path::validity::is_separator_byte;

/// A type for bi-directional traversal of the components of a [`Path`]. See
/// [`Path::cursor_front`] and [`Path::cursor_back`] to create one.
///
/// A cursor always rests either on the first byte of a component or at the end sentinel, where
/// [`read`](Cursor::read) returns an empty string. Two cursors are equal when they rest on the same
/// offset.
///
/// ```
/// use seg_path::fs::path::Path;
///
/// let path = Path::new("/usr//lib/").unwrap();
/// let mut cursor = path.cursor_front();
/// assert_eq!(cursor.read(), "usr");
/// cursor.move_next();
/// assert_eq!(cursor.read(), "lib");
/// cursor.move_next();
/// assert!(cursor.is_end());
/// cursor.move_prev();
/// assert_eq!(cursor.read(), "lib");
/// ```
///
/// A cursor borrows its path, so the path can't be modified while the cursor is alive:
///
/// ```compile_fail
/// use seg_path::fs::path::Path;
///
/// let mut path = Path::new("a/b").unwrap();
/// let cursor = path.cursor_front();
/// path.push(&Path::new("c").unwrap());
/// assert_eq!(cursor.read(), "a");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    pub(crate) path: &'a str,
    pub(crate) pos: usize,
    pub(crate) current: &'a str,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the first component starting at or after `pos`. Offsets past the end of
    /// the path are clamped to the end sentinel.
    pub(crate) fn new(path: &'a Path, pos: usize) -> Cursor<'a> {
        let path = path.as_str();
        let mut cursor = Cursor {
            path,
            pos: skip_separators(path.as_bytes(), pos.min(path.len())),
            current: "",
        };
        cursor.load();
        cursor
    }

    fn load(&mut self) {
        let end = next_separator(self.path.as_bytes(), self.pos);
        self.current = &self.path[self.pos..end];
    }

    /// The byte offset of the current component within the path.
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// The current component, or an empty string at the end sentinel.
    pub const fn read(&self) -> &'a str {
        self.current
    }

    pub const fn is_end(&self) -> bool {
        self.pos == self.path.len()
    }

    pub const fn has_current(&self) -> bool {
        !self.is_end()
    }

    /// Moves to the next component, or to the end sentinel after the last one. Does nothing at the
    /// end sentinel.
    pub fn move_next(&mut self) -> &mut Self {
        if self.has_current() {
            self.pos = skip_separators(self.path.as_bytes(), self.pos + self.current.len());
            self.load();
        }
        self
    }

    /// Moves to the previous component. From the end sentinel this is the last component. Does
    /// nothing on the first component, or if the path has none.
    pub fn move_prev(&mut self) -> &mut Self {
        if let Some(start) = prev_start(self.path.as_bytes(), self.pos) {
            self.pos = start;
            self.load();
        }
        self
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Cursor<'_> {}

fn skip_separators(bytes: &[u8], mut pos: usize) -> usize {
    while let Some(byte) = bytes.get(pos) && is_separator_byte(*byte) {
        pos += 1;
    }
    pos
}

fn next_separator(bytes: &[u8], mut pos: usize) -> usize {
    while let Some(byte) = bytes.get(pos) && !is_separator_byte(*byte) {
        pos += 1;
    }
    pos
}

/// Finds the first byte of the component before `pos`, scanning back over the separator run and
/// then the component itself. Index 0 is checked like any other byte.
fn prev_start(bytes: &[u8], pos: usize) -> Option<usize> {
    let mut start = pos.min(bytes.len());

    while start > 0 && is_separator_byte(bytes[start - 1]) {
        start -= 1;
    }
    if start == 0 {
        None?
    }

    while start > 0 && !is_separator_byte(bytes[start - 1]) {
        start -= 1;
    }
    Some(start)
}

/// An iterator over the components of a [`Path`], from either end. Separator runs are skipped and
/// no component is ever empty.
#[derive(Debug, Clone)]
pub struct Components<'a> {
    pub(crate) front: Cursor<'a>,
    pub(crate) back: Cursor<'a>,
}

impl<'a> Iterator for Components<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            None?
        }
        let component = self.front.read();
        self.front.move_next();
        Some(component)
    }
}

impl<'a> DoubleEndedIterator for Components<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            None?
        }
        self.back.move_prev();
        Some(self.back.read())
    }
}

impl FusedIterator for Components<'_> {}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a str;

    type IntoIter = Components<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.components()
    }
}
