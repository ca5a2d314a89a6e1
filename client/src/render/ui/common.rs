//! Common UI constants shared across UI components

use macroquad::prelude::Color;
use crate::game::Category;

// ============================================================================
// UI Color Palette - Farmhouse Theme
// ============================================================================

// Panel backgrounds
pub const PANEL_BG: Color = Color::new(0.118, 0.090, 0.071, 0.961);         // rgba(30, 23, 18, 245)
pub const PANEL_BG_INNER: Color = Color::new(0.180, 0.137, 0.102, 1.0);     // rgba(46, 35, 26, 255)

// Frame/Border colors (weathered wood)
pub const FRAME_OUTER: Color = Color::new(0.239, 0.157, 0.098, 1.0);        // rgba(61, 40, 25, 255)
pub const FRAME_MID: Color = Color::new(0.494, 0.333, 0.212, 1.0);          // rgba(126, 85, 54, 255)
pub const FRAME_ACCENT: Color = Color::new(0.851, 0.627, 0.400, 1.0);       // rgba(217, 160, 102, 255)

// Slot colors
pub const SLOT_BG: Color = Color::new(0.239, 0.180, 0.133, 1.0);            // rgba(61, 46, 34, 255)
pub const SLOT_INNER_SHADOW: Color = Color::new(0.094, 0.067, 0.047, 1.0);  // rgba(24, 17, 12, 255)
pub const SLOT_BORDER: Color = Color::new(0.353, 0.259, 0.184, 1.0);        // rgba(90, 66, 47, 255)

// Hover/Selection states
pub const SLOT_HOVER_BG: Color = Color::new(0.318, 0.243, 0.180, 1.0);      // rgba(81, 62, 46, 255)
pub const SLOT_HOVER_BORDER: Color = Color::new(0.659, 0.580, 0.424, 1.0);  // rgba(168, 148, 108, 255)
pub const SLOT_SELECTED_BORDER: Color = Color::new(1.0, 0.843, 0.314, 1.0); // rgba(255, 215, 80, 255)

// Text colors
pub const TEXT_TITLE: Color = Color::new(0.855, 0.737, 0.502, 1.0);         // rgba(218, 188, 128, 255)
pub const TEXT_NORMAL: Color = Color::new(0.945, 0.925, 0.886, 1.0);        // rgba(241, 236, 226, 255)
pub const TEXT_DIM: Color = Color::new(0.620, 0.580, 0.525, 1.0);           // rgba(158, 148, 134, 255)
pub const TEXT_SUCCESS: Color = Color::new(0.447, 0.800, 0.447, 1.0);       // rgba(114, 204, 114, 255)
pub const TEXT_ERROR: Color = Color::new(0.902, 0.349, 0.349, 1.0);         // rgba(230, 89, 89, 255)

// ============================================================================
// Layout Constants
// ============================================================================

pub const INV_WIDTH: f32 = 520.0;
pub const INV_HEIGHT: f32 = 340.0;
pub const HEADER_HEIGHT: f32 = 40.0;
pub const FRAME_THICKNESS: f32 = 4.0;
pub const CORNER_ACCENT_SIZE: f32 = 8.0;
pub const GRID_PADDING: f32 = 12.0;
pub const INV_SLOT_SIZE: f32 = 48.0;
pub const SLOT_SPACING: f32 = 4.0;
pub const ARROW_SIZE: f32 = 24.0;
pub const TAB_LABEL_WIDTH: f32 = 160.0;
pub const TAB_ICON_SIZE: f32 = 20.0;
pub const DETAIL_IMAGE_SIZE: f32 = 48.0;
pub const STATUS_BAR_HEIGHT: f32 = 28.0;

/// Fallback icon color when an item image failed to load
pub fn category_color(category: Category) -> Color {
    match category {
        Category::Seeds => Color::new(0.545, 0.412, 0.212, 1.0),
        Category::Crops => Color::new(0.400, 0.702, 0.282, 1.0),
        Category::Tools => Color::new(0.600, 0.600, 0.650, 1.0),
        Category::Nfts => Color::new(0.702, 0.451, 0.851, 1.0),
        Category::Foods => Color::new(0.902, 0.600, 0.251, 1.0),
        Category::Resources => Color::new(0.502, 0.361, 0.251, 1.0),
    }
}

/// Slot visual state for rendering
#[derive(Clone, Copy, PartialEq)]
pub enum SlotState {
    Normal,
    Hovered,
    Selected,
}
