use minerapp_core::{
    entities::Id,
    gateways::images::{ImageSlot, ImageStore},
};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

pub const PUBLIC_PREFIX: &str = "/uploads/";

const MAX_EXTENSION_LEN: usize = 8;

/// Stores uploaded images as files in a single flat directory.
#[derive(Debug, Clone)]
pub struct FsImageStore {
    dir: PathBuf,
}

impl FsImageStore {
    pub fn try_new<P: AsRef<Path>>(dir: P) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    fn file_path(&self, public_path: &str) -> io::Result<PathBuf> {
        let file_name = public_path
            .strip_prefix(PUBLIC_PREFIX)
            .filter(|name| is_plain_file_name(name))
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Not an uploaded image: {public_path}"),
                )
            })?;
        Ok(self.dir.join(file_name))
    }
}

// Rejects anything that could escape the upload directory
fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.starts_with('.')
}

fn sanitize_extension(extension: &str) -> Option<String> {
    let extension = extension.trim().trim_start_matches('.');
    if extension.is_empty()
        || extension.len() > MAX_EXTENSION_LEN
        || !extension.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }
    Some(extension.to_ascii_lowercase())
}

impl ImageStore for FsImageStore {
    fn allocate(&self, extension: Option<&str>) -> io::Result<ImageSlot> {
        let id = Id::new();
        let file_name = match extension.and_then(sanitize_extension) {
            Some(ext) => format!("{id}.{ext}"),
            None => id.to_string(),
        };
        Ok(ImageSlot {
            file_path: self.dir.join(&file_name),
            public_path: format!("{PUBLIC_PREFIX}{file_name}"),
        })
    }

    fn remove(&self, public_path: &str) -> io::Result<()> {
        let file_path = self.file_path(public_path)?;
        log::debug!("Removing image file {}", file_path.display());
        fs::remove_file(file_path)
    }
}
