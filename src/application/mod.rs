pub mod config;
mod game;
mod mode;
mod screen;

pub use config::{ConfigError, GameConfig};
pub use game::{Game, TICKS_PER_SECOND};
pub use mode::GameMode;
pub use screen::Screen;
