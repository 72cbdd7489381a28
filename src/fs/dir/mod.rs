//! Listing the children of a directory. See [`Path::list_dir`](crate::fs::path::Path::list_dir).
//!
//! Entries are read lazily from the OS, one at a time, and are handed out with a name and, where
//! the file system reports one, an [`EntryKind`](crate::fs::EntryKind). The `.` and `..` entries
//! are never produced.

mod dir;
mod dir_entry;

pub use dir::*;
pub use dir_entry::*;
