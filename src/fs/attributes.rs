use std::ffi::CString;

use derive_more::IsVariant;

use crate::fs::path::{Path, is_separator};
use crate::fs::{CurrentDirError, NonUnicodeError, NotImplementedError, IoError, syscall};

/// The classification of whatever a path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum EntryKind {
    NotFound,
    /// The query failed for a reason other than the path not existing, such as a lack of
    /// permission. The entry may well exist.
    Unknown,
    File,
    Directory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileAttributes {
    pub kind: EntryKind,
    pub hidden: bool,
    pub readonly: bool,
}

impl FileAttributes {
    pub const NOT_FOUND: FileAttributes = FileAttributes::of(EntryKind::NotFound);
    pub const UNKNOWN: FileAttributes = FileAttributes::of(EntryKind::Unknown);

    pub const fn of(kind: EntryKind) -> FileAttributes {
        FileAttributes {
            kind,
            hidden: false,
            readonly: false,
        }
    }
}

/// Something that can classify the normalized text of a path. [`Native`] asks the OS, other
/// implementations can stand in for it.
pub trait AttributeSource {
    fn attributes(&self, text: &str) -> FileAttributes;
}

/// Queries attributes with `stat`. Any error which means the entry doesn't exist is reported as
/// [`EntryKind::NotFound`] and all others as [`EntryKind::Unknown`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Native;

impl AttributeSource for Native {
    #[tracing::instrument(level = "trace", skip(self, text), fields(path_len = text.len() as u64))]
    fn attributes(&self, text: &str) -> FileAttributes {
        // Valid paths never contain NUL, but text from other sources might.
        let Ok(pathname) = CString::new(text) else {
            return FileAttributes::NOT_FOUND;
        };

        match syscall::stat(&pathname) {
            Ok(raw) => FileAttributes {
                kind: if raw.st_mode & libc::S_IFMT == libc::S_IFDIR {
                    EntryKind::Directory
                } else {
                    EntryKind::File
                },
                hidden: is_hidden_name(text),
                readonly: raw.st_mode & 0o222 == 0,
            },
            Err(libc::ENOENT | libc::ENOTDIR | libc::ENAMETOOLONG | libc::ELOOP | libc::EINVAL) => {
                FileAttributes::NOT_FOUND
            },
            Err(errno) => {
                tracing::debug!(errno, "unclassified error while querying attributes");
                FileAttributes::UNKNOWN
            },
        }
    }
}

fn is_hidden_name(text: &str) -> bool {
    match text.rsplit(is_separator).find(|name| !name.is_empty()) {
        Some("." | "..") | None => false,
        Some(name) => name.starts_with('.'),
    }
}

impl Path {
    /// Reads the process's working directory. The result comes from the OS and isn't validated.
    ///
    /// # Errors
    /// Fails with [`IoError`] if the OS call fails and [`NonUnicodeError`] if the directory isn't
    /// valid UTF-8.
    #[tracing::instrument(level = "trace")]
    pub fn current_dir() -> Result<Path, CurrentDirError> {
        let raw = syscall::getcwd().map_err(IoError)?;
        let text = raw.into_string().map_err(|_| NonUnicodeError)?;
        Ok(Path::from_trusted(text))
    }

    pub fn attributes(&self) -> FileAttributes {
        self.attributes_with(&Native)
    }

    pub fn attributes_with<A: AttributeSource + ?Sized>(&self, source: &A) -> FileAttributes {
        source.attributes(self.as_str())
    }

    /// Returns false only if the path is known not to exist. Errors other than a missing entry
    /// count as existing.
    pub fn exists(&self) -> bool {
        !self.attributes().kind.is_not_found()
    }

    pub fn is_file(&self) -> bool {
        self.attributes().kind.is_file()
    }

    pub fn is_directory(&self) -> bool {
        self.attributes().kind.is_directory()
    }

    pub fn is_hidden(&self) -> bool {
        self.attributes().hidden
    }

    pub fn is_readonly(&self) -> bool {
        self.attributes().readonly
    }

    /// Symlink detection isn't supported.
    ///
    /// # Errors
    /// Always fails with [`NotImplementedError`].
    pub const fn is_link(&self) -> Result<bool, NotImplementedError> {
        Err(NotImplementedError)
    }
}
