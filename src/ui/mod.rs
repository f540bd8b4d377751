mod button;
mod selection_list;

pub use button::Button;
pub use selection_list::SelectionList;

use crate::domain::Grid;

pub const BUTTON_HEIGHT: f32 = 40.0;
pub const HUD_HEIGHT: f32 = 64.0;

/// Smallest window the HUD text fits in
pub const MIN_PLAY_WIDTH: f32 = 360.0;

/// Window size for a run: the board plus the HUD strip underneath
pub fn play_window_size(grid: &Grid) -> (f32, f32) {
    (
        grid.pixel_width().max(MIN_PLAY_WIDTH),
        grid.pixel_height() + HUD_HEIGHT,
    )
}

/// Grid sizes offered per axis, displayed 1-based
pub fn axis_items(limit: u32) -> Vec<String> {
    (1..=limit).map(|n| n.to_string()).collect()
}
