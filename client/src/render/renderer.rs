use macroquad::prelude::*;
use std::collections::HashMap;

use crate::game::{Category, GameState, ItemCatalog};
use crate::ui::{InventoryView, UiLayout};
use super::font::PixelFont;

const FONT_PATH: &str = "assets/fonts/monogram/ttf/monogram-extended.ttf";

pub struct Renderer {
    /// Item images and tab icons keyed by asset path
    textures: HashMap<String, Texture2D>,
    font: PixelFont,
}

impl Renderer {
    pub async fn new(catalog: &ItemCatalog) -> Self {
        let mut paths: Vec<&str> = catalog.image_paths().into_iter().collect();
        paths.extend(Category::ALL.iter().map(|c| c.icon()));
        paths.sort_unstable();
        paths.dedup();

        let mut textures = HashMap::new();
        for path in paths {
            match load_texture(path).await {
                Ok(tex) => {
                    tex.set_filter(FilterMode::Nearest);
                    textures.insert(path.to_string(), tex);
                }
                Err(e) => {
                    log::warn!("Failed to load image {}: {}", path, e);
                }
            }
        }
        log::info!("Loaded {} item images", textures.len());

        let font = PixelFont::load_or_default(FONT_PATH).await;

        Self { textures, font }
    }

    pub(crate) fn texture(&self, path: &str) -> Option<&Texture2D> {
        self.textures.get(path)
    }

    /// Draw text with pixel font for sharp rendering
    pub fn draw_text_sharp(&self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        self.font.draw_text(text, x, y, font_size, color);
    }

    pub(crate) fn measure_text_sharp(&self, text: &str, font_size: f32) -> TextDimensions {
        self.font.measure_text(text, font_size)
    }

    /// Draw text with word wrapping to fit within max_width, centered on `center_x`.
    /// Returns the total height used
    pub(crate) fn draw_text_wrapped_centered(&self, text: &str, center_x: f32, y: f32, font_size: f32, color: Color, max_width: f32, line_height: f32) -> f32 {
        let mut lines: Vec<String> = Vec::new();
        let mut current_line = String::new();

        for word in text.split_whitespace() {
            let candidate = if current_line.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current_line, word)
            };

            if self.measure_text_sharp(&candidate, font_size).width > max_width && !current_line.is_empty() {
                lines.push(std::mem::replace(&mut current_line, word.to_string()));
            } else {
                current_line = candidate;
            }
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }

        for (i, line) in lines.iter().enumerate() {
            let width = self.measure_text_sharp(line, font_size).width;
            self.draw_text_sharp(line, center_x - width / 2.0, y + i as f32 * line_height, font_size, color);
        }

        lines.len() as f32 * line_height
    }

    /// Draw one frame. Returns nothing; clickable regions are recorded in `layout`.
    pub fn render(&self, state: &GameState, view: Option<&InventoryView>, layout: &mut UiLayout) {
        clear_background(Color::from_rgba(30, 30, 40, 255));
        layout.clear();

        if let Some(view) = view {
            self.render_inventory(view, &state.ui_state.hovered_element, layout);
        }

        self.render_status_bar(state);
    }
}
