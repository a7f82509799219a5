use std::fs;
use std::path::Path;

use egui::{ColorImage, Vec2};
use log::{debug, info};

use crate::error::ImageLoadError;
use crate::geometry::Surface;

/// A decoded reference image plus the file name it came from.
///
/// The editor only needs the pixel extent and the name; the pixels are kept
/// so the shell can upload them as a texture.
#[derive(Clone)]
pub struct ReferenceImage {
    name: String,
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl std::fmt::Debug for ReferenceImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceImage")
            .field("name", &self.name)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("rgba", &format!("<{} bytes>", self.rgba.len()))
            .finish()
    }
}

impl ReferenceImage {
    /// Decodes an encoded image (PNG, JPEG, ...) held in memory
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self, ImageLoadError> {
        let name = name.into();
        let decoded = image::load_from_memory(bytes)?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(ImageLoadError::Empty);
        }
        debug!("Decoded {}: {}x{}", name, width, height);
        Ok(Self {
            name,
            width,
            height,
            rgba: rgba.into_raw(),
        })
    }

    /// Reads and decodes an image file. The export header uses the file
    /// name only, not the full path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ImageLoadError> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let image = Self::from_bytes(name, &bytes)?;
        info!("Loaded reference image {} ({}x{})", path.display(), image.width, image.height);
        Ok(image)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// The editing surface this image defines
    pub fn surface(&self) -> Surface {
        Surface::new(self.name.clone(), self.size())
    }

    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied([self.width as usize, self.height as usize], &self.rgba)
    }
}
