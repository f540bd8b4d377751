// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Game flow and configuration
pub mod application;

// Infrastructure layer - UI, rendering, audio
pub mod audio;
pub mod rendering;
pub mod ui;

// Re-exports for convenience
pub use application::{Game, GameConfig, GameMode, Screen};
pub use domain::{Direction, Grid, Group, Player, Position, RunHistory, RunStats};
pub use ui::{Button, SelectionList};
