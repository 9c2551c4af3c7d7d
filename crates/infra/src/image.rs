//! Image-acquisition boundary.

use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use crate::error::BoundaryError;

pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "png", "webp"];
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Turns a user-selected image into a reference string for `image_ref`.
///
/// The reference is stored verbatim; nothing downstream decodes it.
pub trait ImageSource: Send + Sync {
    fn acquire(&self, path: &Path) -> Result<String, BoundaryError>;
}

impl<I> ImageSource for Arc<I>
where
    I: ImageSource + ?Sized,
{
    fn acquire(&self, path: &Path) -> Result<String, BoundaryError> {
        (**self).acquire(path)
    }
}

/// Local files, referenced by `file://` URL.
///
/// Accepts JPEG, PNG and WebP files up to 5 MB (by extension and size only).
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalImageSource;

impl LocalImageSource {
    pub fn new() -> Self {
        Self
    }
}

impl ImageSource for LocalImageSource {
    fn acquire(&self, path: &Path) -> Result<String, BoundaryError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if !ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(BoundaryError::rejected(format!(
                "invalid file type '{}'; expected an image ({})",
                path.display(),
                ACCEPTED_EXTENSIONS.join(", ")
            )));
        }

        let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => BoundaryError::not_found(path.display().to_string()),
            _ => BoundaryError::unavailable(format!("{}: {e}", path.display())),
        })?;

        if !metadata.is_file() {
            return Err(BoundaryError::rejected(format!("{} is not a file", path.display())));
        }
        if metadata.len() > MAX_IMAGE_BYTES {
            return Err(BoundaryError::rejected(format!(
                "{} is too large ({} bytes, maximum is 5 MB)",
                path.display(),
                metadata.len()
            )));
        }

        let absolute = std::fs::canonicalize(path)
            .map_err(|e| BoundaryError::unavailable(format!("{}: {e}", path.display())))?;

        tracing::debug!(path = %absolute.display(), bytes = metadata.len(), "image acquired");
        Ok(format!("file://{}", absolute.display()))
    }
}
