//! Pixel font wrapper for crisp UI text

use macroquad::prelude::*;

/// Sizes the pixel font renders cleanly at; other sizes snap down to one of these
pub const FONT_SIZES: &[u16] = &[8, 12, 16, 24, 32];

/// A TTF pixel font, or macroquad's built-in font when the file is missing
#[derive(Default)]
pub struct PixelFont {
    font: Option<Font>,
}

impl PixelFont {
    pub async fn load_or_default(path: &str) -> Self {
        match load_ttf_font(path).await {
            Ok(mut font) => {
                font.set_filter(FilterMode::Nearest);
                log::info!("Loaded UI font {}", path);
                Self { font: Some(font) }
            }
            Err(e) => {
                log::warn!("Failed to load UI font {}: {}. Using default font.", path, e);
                Self::default()
            }
        }
    }

    fn native_size(requested: f32) -> u16 {
        let requested = requested.round() as u16;
        FONT_SIZES
            .iter()
            .rev()
            .find(|&&s| s <= requested)
            .copied()
            .unwrap_or(FONT_SIZES[0])
    }

    pub fn draw_text(&self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        let native = Self::native_size(font_size);
        draw_text_ex(
            text,
            x.floor(),
            y.floor(),
            TextParams {
                font: self.font.as_ref(),
                font_size: native,
                font_scale: font_size / native as f32,
                color,
                ..Default::default()
            },
        );
    }

    pub fn measure_text(&self, text: &str, font_size: f32) -> TextDimensions {
        let native = Self::native_size(font_size);
        measure_text(text, self.font.as_ref(), native, font_size / native as f32)
    }

    pub fn is_loaded(&self) -> bool {
        self.font.is_some()
    }
}
