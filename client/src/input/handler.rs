use macroquad::prelude::*;
use crate::game::GameState;
use crate::ui::{PanelAction, UiLayout};

/// Commands produced by one frame of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    Panel(PanelAction),
    ToggleInventory,
    MintSelected,
}

#[derive(Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Map a pressed key to a command. Panel keys only apply while it is open.
    pub fn command_for_key(key: KeyCode, inventory_open: bool) -> Option<InputCommand> {
        match key {
            KeyCode::I | KeyCode::Tab => Some(InputCommand::ToggleInventory),
            KeyCode::M => Some(InputCommand::MintSelected),
            KeyCode::Left | KeyCode::A if inventory_open => Some(InputCommand::Panel(PanelAction::PrevCategory)),
            KeyCode::Right | KeyCode::D if inventory_open => Some(InputCommand::Panel(PanelAction::NextCategory)),
            KeyCode::Escape if inventory_open => Some(InputCommand::Panel(PanelAction::Close)),
            _ => None,
        }
    }

    /// Map a left click to a command via the last frame's layout
    pub fn command_for_click(layout: &UiLayout, x: f32, y: f32) -> Option<InputCommand> {
        layout
            .hit_test(x, y)
            .and_then(PanelAction::from_element)
            .map(InputCommand::Panel)
    }

    pub fn process(&mut self, state: &mut GameState, layout: &UiLayout) -> Vec<InputCommand> {
        let mut commands = Vec::new();
        let (mouse_x, mouse_y) = mouse_position();

        state.ui_state.hovered_element = layout.hit_test(mouse_x, mouse_y).cloned();

        for key in [
            KeyCode::I,
            KeyCode::Tab,
            KeyCode::M,
            KeyCode::Left,
            KeyCode::A,
            KeyCode::Right,
            KeyCode::D,
            KeyCode::Escape,
        ] {
            if is_key_pressed(key) {
                if let Some(command) = Self::command_for_key(key, state.ui_state.inventory_open) {
                    commands.push(command);
                }
            }
        }

        if state.ui_state.inventory_open && is_mouse_button_pressed(MouseButton::Left) {
            if let Some(command) = Self::command_for_click(layout, mouse_x, mouse_y) {
                commands.push(command);
            }
        }

        commands
    }
}
