use crate::fs::path::Path;
use crate::fs::{EntryKind, InvalidArgumentError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry<'a> {
    pub(crate) parent: &'a Path,
    pub name: String,
    /// The kind reported while listing, if the file system provides one. Symlinks are `None`, use
    /// [`Path::attributes`] on [`DirEntry::path`] to classify their target. Special files are
    /// reported as [`EntryKind::File`].
    pub kind: Option<EntryKind>,
}

impl DirEntry<'_> {
    pub const fn parent(&self) -> &Path {
        self.parent
    }

    /// Joins the entry's name onto the listed directory.
    ///
    /// # Errors
    /// Fails if the name contains a symbol which is invalid in a path.
    pub fn path(&self) -> Result<Path, InvalidArgumentError> {
        Ok(self.parent.join(&Path::new(&self.name)?))
    }
}
