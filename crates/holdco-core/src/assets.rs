// Image references for logos, backgrounds and popup art
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg"];

/// Where an image comes from
///
/// `Local` is an ephemeral preview reference to a file the admin picked.
/// Nothing is uploaded or copied; the reference dies with the process.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImageRef {
    Url(String),
    Local(PathBuf),
}

impl ImageRef {
    pub fn display(&self) -> String {
        match self {
            ImageRef::Url(url) => url.clone(),
            ImageRef::Local(path) => format!("local:{}", path.display()),
        }
    }
}

/// Turn a locally chosen file into a preview reference
pub fn select_local_image<P: AsRef<Path>>(path: P) -> crate::Result<ImageRef> {
    let path = path.as_ref();

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        return Err(crate::Error::UnsupportedImage(path.display().to_string()));
    }

    if !path.is_file() {
        return Err(crate::Error::NotFound(path.display().to_string()));
    }

    debug!("Selected local image {:?}", path);
    Ok(ImageRef::Local(path.to_path_buf()))
}
