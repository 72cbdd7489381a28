use std::ffi::{CStr, CString};
use std::ptr::NonNull;

use libc::DIR;

use crate::fs::dir::DirEntry;
use crate::fs::path::Path;
use crate::fs::{EntryKind, IoError, syscall};

/// A lazy stream over the entries of a directory, borrowing the [`Path`] it was opened from.
#[derive(Debug)]
pub struct DirEntries<'a> {
    pub(crate) parent: &'a Path,
    pub(crate) stream: NonNull<DIR>,
}

impl Path {
    /// Opens the directory at this path for listing.
    ///
    /// # Errors
    /// Fails with the [`IoError`] reported by the OS, e.g. `ENOENT` or `ENOTDIR`.
    #[tracing::instrument(level = "trace", skip(self), fields(path_len = self.len() as u64))]
    pub fn list_dir(&self) -> Result<DirEntries<'_>, IoError> {
        let pathname = CString::new(self.as_str()).map_err(|_| IoError(libc::EINVAL))?;

        // SAFETY: pathname is a valid, NUL terminated string.
        let stream = unsafe { libc::opendir(pathname.as_ptr()) };
        match NonNull::new(stream) {
            Some(stream) => Ok(DirEntries {
                parent: self,
                stream,
            }),
            None => Err(IoError(syscall::err_no())),
        }
    }
}

impl<'a> Iterator for DirEntries<'a> {
    type Item = DirEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // SAFETY: stream was returned by opendir and stays open until self is dropped.
            let raw = unsafe { libc::readdir(self.stream.as_ptr()) };
            if raw.is_null() {
                None?
            }

            // SAFETY: readdir returned a valid dirent, which remains valid until the next call on
            // this stream. d_name is NUL terminated and copied out before that happens.
            let (name, d_type) = unsafe {
                (CStr::from_ptr((*raw).d_name.as_ptr()).to_bytes(), (*raw).d_type)
            };
            if name == b"." || name == b".." {
                continue;
            }

            return Some(DirEntry {
                parent: self.parent,
                name: String::from_utf8_lossy(name).into_owned(),
                kind: kind_from_dirent_type(d_type),
            });
        }
    }
}

/// Symlinks are left unclassified, since [`Path::attributes`] follows them and may disagree.
pub(crate) const fn kind_from_dirent_type(d_type: u8) -> Option<EntryKind> {
    match d_type {
        libc::DT_DIR => Some(EntryKind::Directory),
        libc::DT_LNK | libc::DT_UNKNOWN => None,
        _ => Some(EntryKind::File),
    }
}

impl Drop for DirEntries<'_> {
    fn drop(&mut self) {
        // SAFETY: stream is open and isn't used again after this.
        if unsafe { libc::closedir(self.stream.as_ptr()) } == -1 {
            tracing::debug!(errno = syscall::err_no(), "error while closing directory stream");
        }
    }
}
