mod grid;
mod group;
mod player;
mod position;
mod stats;
mod wander;

pub use grid::Grid;
pub use group::{Group, merge_groups, solo_groups};
pub use player::{PLAYER_PALETTE, Player};
pub use position::{Direction, Position};
pub use stats::{RunHistory, RunStats};
pub use wander::{HugWallsWalk, UniformWalk, WanderRule, all_rules, default_rule};
