use anyhow::{Context, Result};
use base64::Engine as _;
use image::{GenericImageView, ImageFormat};

/// 1x1 fully transparent png.
pub const PLACEHOLDER_PNG: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

/// Encoded png written verbatim into every mipmap slot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Icon {
    png: Vec<u8>,
}

impl Icon {
    pub fn placeholder() -> Result<Self> {
        Self::from_base64(PLACEHOLDER_PNG)
    }

    pub fn from_base64(data: &str) -> Result<Self> {
        let png = base64::engine::general_purpose::STANDARD
            .decode(data)
            .context("invalid base64 icon")?;
        Self::from_png(png)
    }

    /// Accepts only a png that decodes to a single pixel.
    pub fn from_png(png: Vec<u8>) -> Result<Self> {
        let icon = Self { png };
        let (width, height) = icon.dimensions().context("invalid png icon")?;
        anyhow::ensure!(
            (width, height) == (1, 1),
            "expected a 1x1 placeholder, got {}x{}",
            width,
            height
        );
        Ok(icon)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.png
    }

    pub fn dimensions(&self) -> Result<(u32, u32)> {
        let img = image::load_from_memory_with_format(&self.png, ImageFormat::Png)?;
        Ok(img.dimensions())
    }
}
