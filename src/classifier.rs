use std::path::Path;

/// Lowercase extensions recognised as images.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "heic", "heif", "webp", "tiff",
];

/// Optional abilities of this build, resolved once at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub dimensions: bool,
}

impl Capabilities {
    /// Dimension probing is available when the crate was built with the
    /// `dimensions` feature.
    pub fn detect() -> Self {
        Self {
            dimensions: cfg!(feature = "dimensions"),
        }
    }

    pub fn none() -> Self {
        Self { dimensions: false }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ImageClassifier {
    capabilities: Capabilities,
}

impl ImageClassifier {
    pub fn new(capabilities: Capabilities) -> Self {
        Self { capabilities }
    }

    pub fn is_image<P: AsRef<Path>>(&self, filename: P) -> bool {
        filename
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_ascii_lowercase();
                SUPPORTED_EXTENSIONS.contains(&ext.as_str())
            })
    }

    /// Reads `(width, height)` from the file header. Any failure yields `None`.
    pub fn try_get_dimensions(&self, file_path: &Path) -> Option<(u32, u32)> {
        if !self.capabilities.dimensions {
            return None;
        }
        read_dimensions(file_path)
    }
}

#[cfg(feature = "dimensions")]
fn read_dimensions(path: &Path) -> Option<(u32, u32)> {
    log::trace!("Getting image dimensions for image: {:?}", path);
    match image::image_dimensions(path) {
        Ok((width, height)) => {
            log::debug!("Dimensions for {:?}: {}x{}", path, width, height);
            Some((width, height))
        }
        Err(e) => {
            log::debug!("Could not read image dimensions: {:?} ({})", path, e);
            None
        }
    }
}

#[cfg(not(feature = "dimensions"))]
fn read_dimensions(_path: &Path) -> Option<(u32, u32)> {
    None
}
