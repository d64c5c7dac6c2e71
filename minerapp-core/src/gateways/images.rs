use std::{io, path::PathBuf};

/// A newly reserved slot for an uploaded image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    /// Where the file content has to be written to
    pub file_path: PathBuf,
    /// The path under which the image is served, e.g. `/uploads/<file>`
    pub public_path: String,
}

pub trait ImageStore {
    /// Reserves a unique file name, keeping the given extension.
    fn allocate(&self, extension: Option<&str>) -> io::Result<ImageSlot>;

    /// Deletes the file behind a public path.
    ///
    /// Fails with [`io::ErrorKind::NotFound`] if there is no such file.
    fn remove(&self, public_path: &str) -> io::Result<()>;
}
