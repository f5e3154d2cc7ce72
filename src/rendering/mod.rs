use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::LiveCells;
use crate::ui::Controls;

const STATUS_FONT_SIZE: f32 = 22.0;

/// Draw one filled tile per live cell
pub fn draw_cells(cells: &LiveCells, tile_size: f32) {
    for cell in cells.iter() {
        draw_rectangle(
            cell.column as f32 * tile_size,
            cell.row as f32 * tile_size,
            tile_size,
            tile_size,
            WHITE,
        );
    }
}

/// Grid lines at every tile boundary, spanning the whole window
pub fn draw_grid_lines(state: &GameState, tile_size: f32) {
    let (width, height) = (screen_width(), screen_height());

    for row in 0..state.grid.height {
        let y = row as f32 * tile_size;
        draw_line(0.0, y, width, y, 1.0, GRAY);
    }
    for column in 0..state.grid.width {
        let x = column as f32 * tile_size;
        draw_line(x, 0.0, x, height, 1.0, GRAY);
    }
}

/// Playing/paused caption in the bottom-left corner
fn draw_status(state: &GameState) {
    let status = state.status_line();
    let size = measure_text(&status, None, STATUS_FONT_SIZE as u16, 1.0);
    let y = screen_height() - 8.0;

    draw_rectangle(0.0, y - size.height - 6.0, size.width + 16.0, size.height + 14.0, BLACK);
    draw_text(&status, 8.0, y, STATUS_FONT_SIZE, WHITE);
}

/// Draw a full frame and return the controls exactly as drawn,
/// so the next frame hit-tests against this geometry.
pub fn draw_frame(state: &GameState, tile_size: f32, mouse_pos: (f32, f32)) -> Controls {
    clear_background(BLACK);
    draw_cells(&state.cells, tile_size);
    draw_grid_lines(state, tile_size);

    let controls = Controls::layout();
    controls.buttons().iter().for_each(|btn| btn.draw(mouse_pos));

    draw_status(state);
    controls
}
