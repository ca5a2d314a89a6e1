//! Bottom status line: last mint outcome and key hints

use macroquad::prelude::*;
use crate::game::GameState;
use super::super::Renderer;
use super::common::*;

impl Renderer {
    pub(crate) fn render_status_bar(&self, state: &GameState) {
        let y = screen_height() - STATUS_BAR_HEIGHT;
        draw_rectangle(0.0, y, screen_width(), STATUS_BAR_HEIGHT, PANEL_BG);
        draw_line(0.0, y, screen_width(), y, 1.0, FRAME_MID);

        let text_y = y + STATUS_BAR_HEIGHT / 2.0 + 5.0;

        if let Some(status) = &state.ui_state.mint_status {
            let color = if status.success { TEXT_SUCCESS } else { TEXT_ERROR };
            self.draw_text_sharp(&status.message, 10.0, text_y, 16.0, color);
        } else if let Some(selected) = &state.selected_item {
            self.draw_text_sharp(&format!("Selected: {}", selected), 10.0, text_y, 16.0, TEXT_NORMAL);
        }

        let hints = "[I] Inventory  [A/D] Tab  [M] Mint";
        let hints_w = self.measure_text_sharp(hints, 16.0).width;
        self.draw_text_sharp(hints, screen_width() - hints_w - 10.0, text_y, 16.0, TEXT_DIM);
    }
}
