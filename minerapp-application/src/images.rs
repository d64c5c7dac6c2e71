use super::*;
use std::io;

/// Deletes the files behind image paths that are no longer referenced.
///
/// Files that are already gone are skipped silently. All other
/// failures are only logged and never fail the request.
pub fn remove_image_files(images: &dyn ImageStore, paths: &[String]) {
    for path in paths {
        match images.remove(path) {
            Ok(()) => debug!("Removed image file {path}"),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("Image file {path} does not exist");
            }
            Err(err) => warn!("Failed to remove image file {path}: {err}"),
        }
    }
}
