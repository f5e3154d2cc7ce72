use macroquad::prelude::*;

use crate::application::Command;
use crate::domain::CellCoord;
use crate::ui::Controls;

/// Key bindings, checked in this order
const KEY_BINDINGS: [(KeyCode, Command); 3] = [
    (KeyCode::Space, Command::TogglePlaying),
    (KeyCode::C, Command::Clear),
    (KeyCode::G, Command::Reseed),
];

/// Tile under a pixel position. May lie outside the grid.
pub fn cell_at(mouse_pos: (f32, f32), tile_size: f32) -> CellCoord {
    CellCoord::new(
        (mouse_pos.0 / tile_size).floor() as i32,
        (mouse_pos.1 / tile_size).floor() as i32,
    )
}

/// Controls take precedence over the grid underneath them
pub fn command_for_click(mouse_pos: (f32, f32), controls: &Controls, tile_size: f32) -> Command {
    controls
        .hit(mouse_pos)
        .unwrap_or_else(|| Command::ToggleCell(cell_at(mouse_pos, tile_size)))
}

/// Drain this frame's input into commands, in the order they should be applied.
///
/// macroquad reports each key or button as pressed at most once per frame,
/// so repeated presses inside one frame collapse into a single command.
pub fn poll_commands(controls: &Controls, tile_size: f32) -> Vec<Command> {
    let mut commands = Vec::new();

    if is_quit_requested() {
        commands.push(Command::Quit);
    }

    if is_mouse_button_pressed(MouseButton::Left) {
        commands.push(command_for_click(mouse_position(), controls, tile_size));
    }

    commands.extend(
        KEY_BINDINGS
            .iter()
            .filter(|(key, _)| is_key_pressed(*key))
            .map(|(_, command)| *command),
    );

    commands
}
