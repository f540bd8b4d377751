use macroquad::prelude::*;

use crate::application::Game;
use crate::domain::{Grid, Group, Player};
use crate::ui::HUD_HEIGHT;

/// Offsets (in cell fractions) that fan a group's members out inside one
/// cell so a reunited cluster reads as individual wanderers
const CLUSTER_OFFSETS: [(f32, f32); 4] = [(-0.18, -0.18), (0.18, -0.18), (-0.18, 0.18), (0.18, 0.18)];

pub fn to_color(rgb: (u8, u8, u8)) -> Color {
    Color::from_rgba(rgb.0, rgb.1, rgb.2, 255)
}

/// Draw the woods: the cell lattice the players wander on
pub fn draw_grid(grid: &Grid) {
    let cell = grid.cell_size();
    let (w, h) = grid.dimensions();

    let floor = Color::from_rgba(26, 36, 24, 255);
    let lines = Color::from_rgba(52, 66, 46, 255);

    draw_rectangle(0.0, 0.0, grid.pixel_width(), grid.pixel_height(), floor);
    for y in 0..h {
        for x in 0..w {
            draw_rectangle_lines(x as f32 * cell, y as f32 * cell, cell, cell, 1.0, lines);
        }
    }
}

/// Draw every player as a disc, fanned out within the cell by its position
/// inside its group so co-located players stay distinguishable
pub fn draw_players(players: &[Player], groups: &[Group], grid: &Grid) {
    let cell = grid.cell_size();
    let radius = cell * 0.22;

    for group in groups {
        for (slot, &id) in group.members().iter().enumerate() {
            let player = &players[id as usize];
            let (ox, oy) = CLUSTER_OFFSETS[slot % CLUSTER_OFFSETS.len()];
            let cx = (player.pos.x as f32 + 0.5 + ox) * cell;
            let cy = (player.pos.y as f32 + 0.5 + oy) * cell;

            draw_circle(cx, cy, radius, to_color(player.color));
            draw_circle_lines(cx, cy, radius, 1.5, WHITE);
        }
    }
}

/// Draw the HUD strip under the board: steps, elapsed time, groups left
pub fn draw_hud(game: &Game) {
    let top = game.grid.pixel_height();
    let width = screen_width();

    draw_rectangle(0.0, top, width, HUD_HEIGHT, Color::from_rgba(20, 26, 18, 255));
    draw_line(0.0, top, width, top, 2.0, Color::from_rgba(80, 90, 70, 255));

    let labels = [
        (format!("Steps: {}", game.stats.steps()), 12.0),
        (format!("Time: {:.1}s", game.stats.elapsed()), 140.0),
        (format!("Groups left: {}", game.groups.len()), 268.0),
    ];
    for (text, x) in &labels {
        draw_text(text, *x, top + 26.0, 18.0, WHITE);
    }
    draw_text(
        &format!("{} walk", game.wander_rule_name()),
        12.0,
        top + 48.0,
        14.0,
        GRAY,
    );
}
