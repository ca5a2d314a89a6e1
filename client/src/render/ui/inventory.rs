//! Inventory panel rendering

use macroquad::prelude::*;
use crate::game::Category;
use crate::ui::{InventoryView, ItemDetailView, ItemTile, PanelContent, UiElementId, UiLayout};
use super::super::Renderer;
use super::common::*;

impl Renderer {
    pub(crate) fn draw_panel_frame(&self, x: f32, y: f32, w: f32, h: f32) {
        draw_rectangle(x, y, w, h, FRAME_OUTER);
        draw_rectangle(x + 1.0, y + 1.0, w - 2.0, h - 2.0, FRAME_MID);
        draw_rectangle(x + FRAME_THICKNESS, y + FRAME_THICKNESS, w - FRAME_THICKNESS * 2.0, h - FRAME_THICKNESS * 2.0, PANEL_BG);
    }

    pub(crate) fn draw_corner_accents(&self, x: f32, y: f32, w: f32, h: f32) {
        let s = CORNER_ACCENT_SIZE;
        for (cx, cy) in [(x, y), (x + w - s, y), (x, y + h - s), (x + w - s, y + h - s)] {
            draw_rectangle(cx, cy, s, s, FRAME_ACCENT);
            draw_rectangle(cx + 2.0, cy + 2.0, s - 4.0, s - 4.0, FRAME_OUTER);
        }
    }

    fn draw_inventory_slot(&self, x: f32, y: f32, size: f32, slot_state: SlotState) {
        let (border, bg) = match slot_state {
            SlotState::Selected => (SLOT_SELECTED_BORDER, SLOT_HOVER_BG),
            SlotState::Hovered => (SLOT_HOVER_BORDER, SLOT_HOVER_BG),
            SlotState::Normal => (SLOT_BORDER, SLOT_BG),
        };
        draw_rectangle(x, y, size, size, border);
        draw_rectangle(x + 1.0, y + 1.0, size - 2.0, size - 2.0, bg);

        // Inner bevel
        draw_line(x + 2.0, y + 2.0, x + size - 2.0, y + 2.0, 2.0, SLOT_INNER_SHADOW);
        draw_line(x + 2.0, y + 2.0, x + 2.0, y + size - 2.0, 2.0, SLOT_INNER_SHADOW);
    }

    /// Draw an image scaled into a square, or a colored block if it never loaded
    fn draw_item_image(&self, image: &str, category: Category, x: f32, y: f32, size: f32) {
        match self.texture(image) {
            Some(texture) => {
                draw_texture_ex(
                    texture,
                    x,
                    y,
                    WHITE,
                    DrawTextureParams {
                        dest_size: Some(vec2(size, size)),
                        ..Default::default()
                    },
                );
            }
            None => draw_rectangle(x, y, size, size, category_color(category)),
        }
    }

    /// Square arrow button used to cycle tabs
    fn draw_arrow_button(&self, x: f32, y: f32, left: bool, is_hovered: bool) {
        let color = if is_hovered { FRAME_ACCENT } else { FRAME_MID };
        let mid_y = y + ARROW_SIZE / 2.0;
        let (tip_x, base_x) = if left {
            (x + 4.0, x + ARROW_SIZE - 4.0)
        } else {
            (x + ARROW_SIZE - 4.0, x + 4.0)
        };
        draw_triangle(
            vec2(tip_x, mid_y),
            vec2(base_x, y + 4.0),
            vec2(base_x, y + ARROW_SIZE - 4.0),
            color,
        );
    }

    pub(crate) fn render_inventory(&self, view: &InventoryView, hovered: &Option<UiElementId>, layout: &mut UiLayout) {
        let panel_x = ((screen_width() - INV_WIDTH) / 2.0).floor();
        let panel_y = ((screen_height() - STATUS_BAR_HEIGHT - INV_HEIGHT) / 2.0).floor();

        self.draw_panel_frame(panel_x, panel_y, INV_WIDTH, INV_HEIGHT);
        self.draw_corner_accents(panel_x, panel_y, INV_WIDTH, INV_HEIGHT);

        // ===== HEADER: tab strip =====
        let header_y = panel_y + FRAME_THICKNESS;
        let header_center_x = panel_x + INV_WIDTH / 2.0;
        let arrow_y = header_y + (HEADER_HEIGHT - ARROW_SIZE) / 2.0;

        let prev_x = header_center_x - TAB_LABEL_WIDTH / 2.0 - ARROW_SIZE - 12.0;
        let next_x = header_center_x + TAB_LABEL_WIDTH / 2.0 + 12.0;
        layout.add(UiElementId::InventoryPrevTab, Rect::new(prev_x, arrow_y, ARROW_SIZE, ARROW_SIZE));
        layout.add(UiElementId::InventoryNextTab, Rect::new(next_x, arrow_y, ARROW_SIZE, ARROW_SIZE));
        self.draw_arrow_button(prev_x, arrow_y, true, matches!(hovered, Some(UiElementId::InventoryPrevTab)));
        self.draw_arrow_button(next_x, arrow_y, false, matches!(hovered, Some(UiElementId::InventoryNextTab)));

        // Only the active tab is shown, icon then label
        let label_w = self.measure_text_sharp(view.tab_label, 16.0).width;
        let tab_w = TAB_ICON_SIZE + 8.0 + label_w;
        let tab_x = header_center_x - tab_w / 2.0;
        let icon_y = header_y + (HEADER_HEIGHT - TAB_ICON_SIZE) / 2.0;
        self.draw_item_image(view.tab_icon, view.tab, tab_x, icon_y, TAB_ICON_SIZE);
        self.draw_text_sharp(view.tab_label, tab_x + TAB_ICON_SIZE + 8.0, header_y + HEADER_HEIGHT / 2.0 + 6.0, 16.0, TEXT_TITLE);

        // Close button
        let close_size = 20.0;
        let close_x = panel_x + INV_WIDTH - FRAME_THICKNESS - close_size - 6.0;
        let close_y = header_y + 6.0;
        layout.add(UiElementId::InventoryClose, Rect::new(close_x, close_y, close_size, close_size));
        let close_color = if matches!(hovered, Some(UiElementId::InventoryClose)) { TEXT_ERROR } else { TEXT_DIM };
        draw_line(close_x + 4.0, close_y + 4.0, close_x + close_size - 4.0, close_y + close_size - 4.0, 2.0, close_color);
        draw_line(close_x + close_size - 4.0, close_y + 4.0, close_x + 4.0, close_y + close_size - 4.0, 2.0, close_color);

        draw_line(panel_x + 10.0, header_y + HEADER_HEIGHT, panel_x + INV_WIDTH - 10.0, header_y + HEADER_HEIGHT, 2.0, FRAME_MID);

        // ===== BODY: grid (3/5) and detail pane =====
        let body_x = panel_x + FRAME_THICKNESS + GRID_PADDING;
        let body_y = header_y + HEADER_HEIGHT + GRID_PADDING;
        let body_w = INV_WIDTH - FRAME_THICKNESS * 2.0 - GRID_PADDING * 2.0;
        let body_h = panel_y + INV_HEIGHT - FRAME_THICKNESS - GRID_PADDING - body_y;
        let grid_w = (body_w * 0.6).floor();

        match &view.content {
            PanelContent::Empty { message } => {
                self.draw_text_wrapped_centered(message, body_x + grid_w / 2.0, body_y + 20.0, 16.0, TEXT_NORMAL, grid_w - 8.0, 18.0);
            }
            PanelContent::Tiles(tiles) => {
                self.render_item_grid(tiles, view.tab, body_x, body_y, grid_w, hovered, layout);
            }
        }

        let detail_x = body_x + grid_w + GRID_PADDING;
        let detail_w = body_w - grid_w - GRID_PADDING;
        self.render_item_detail(view.detail.as_ref(), detail_x, body_y, detail_w, body_h);
    }

    fn render_item_grid(&self, tiles: &[ItemTile], category: Category, x: f32, y: f32, width: f32, hovered: &Option<UiElementId>, layout: &mut UiLayout) {
        let stride = INV_SLOT_SIZE + SLOT_SPACING;
        let per_row = ((width + SLOT_SPACING) / stride).floor().max(1.0) as usize;

        for (i, tile) in tiles.iter().enumerate() {
            let slot_x = x + (i % per_row) as f32 * stride;
            let slot_y = y + (i / per_row) as f32 * stride;

            let id = UiElementId::InventoryTile(tile.name.to_string());
            let is_hovered = hovered.as_ref() == Some(&id);
            layout.add(id, Rect::new(slot_x, slot_y, INV_SLOT_SIZE, INV_SLOT_SIZE));

            let slot_state = if tile.is_selected {
                SlotState::Selected
            } else if is_hovered {
                SlotState::Hovered
            } else {
                SlotState::Normal
            };
            self.draw_inventory_slot(slot_x, slot_y, INV_SLOT_SIZE, slot_state);
            self.draw_item_image(tile.image, category, slot_x + 8.0, slot_y + 8.0, INV_SLOT_SIZE - 16.0);

            // Quantity badge (bottom-left with shadow)
            let qty_text = tile.count.to_string();
            self.draw_text_sharp(&qty_text, slot_x + 3.0, slot_y + INV_SLOT_SIZE - 4.0, 16.0, Color::new(0.0, 0.0, 0.0, 0.8));
            self.draw_text_sharp(&qty_text, slot_x + 2.0, slot_y + INV_SLOT_SIZE - 5.0, 16.0, TEXT_NORMAL);
        }
    }

    fn render_item_detail(&self, detail: Option<&ItemDetailView>, x: f32, y: f32, w: f32, h: f32) {
        draw_rectangle(x, y, w, h, FRAME_OUTER);
        draw_rectangle(x + 1.0, y + 1.0, w - 2.0, h - 2.0, PANEL_BG_INNER);

        let Some(detail) = detail else {
            return;
        };

        let center_x = x + w / 2.0;
        let mut cursor_y = y + 12.0;

        cursor_y += self.draw_text_wrapped_centered(detail.name, center_x, cursor_y + 12.0, 16.0, TEXT_TITLE, w - 12.0, 18.0);

        self.draw_item_image(detail.image, detail.category, center_x - DETAIL_IMAGE_SIZE / 2.0, cursor_y + 4.0, DETAIL_IMAGE_SIZE);
        cursor_y += DETAIL_IMAGE_SIZE + 12.0;

        self.draw_text_wrapped_centered(detail.description, center_x, cursor_y + 12.0, 12.0, TEXT_NORMAL, w - 12.0, 14.0);
    }
}
