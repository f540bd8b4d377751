use thiserror::Error;

use crate::domain::Position;

/// Grid axes the setup screen offers
pub const MIN_AXIS: u32 = 1;
pub const MAX_AXIS: u32 = 20;

/// Party sizes the setup screen offers
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// Grid side used by the K-2 preset
pub const K2_GRID_SIDE: u32 = 8;

/// Why a configuration cannot start a game. Rendered verbatim on the
/// placement screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum ConfigError {
    #[error("grid must be between {MIN_AXIS}x{MIN_AXIS} and {MAX_AXIS}x{MAX_AXIS}, got {width}x{height}")]
    GridOutOfRange { width: u32, height: u32 },

    #[error("player count must be between {MIN_PLAYERS} and {MAX_PLAYERS}, got {count}")]
    BadPlayerCount { count: usize },

    #[error("a {width}x{height} grid cannot seat {count} players on distinct cells")]
    TooFewCells { width: u32, height: u32, count: usize },

    #[error("player {id} starts off the grid at ({x}, {y})")]
    StartOffGrid { id: u8, x: u32, y: u32 },

    #[error("players {first} and {second} cannot share a starting cell")]
    SharedStart { first: u8, second: u8 },
}

/// GameConfig is everything a run needs: grid dimensions and one starting
/// cell per player. Built by the setup/placement screens or a mode preset,
/// validated before the game constructs.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GameConfig {
    pub grid_width: u32,
    pub grid_height: u32,
    pub starts: Vec<Position>,
}

impl GameConfig {
    pub fn new(grid_width: u32, grid_height: u32, starts: Vec<Position>) -> Self {
        Self {
            grid_width,
            grid_height,
            starts,
        }
    }

    /// K-2 preset: a fixed square grid with two players in opposite corners
    pub fn k_through_2() -> Self {
        let far = K2_GRID_SIDE - 1;
        Self::new(
            K2_GRID_SIDE,
            K2_GRID_SIDE,
            vec![Position::new(0, 0), Position::new(far, far)],
        )
    }

    pub fn player_count(&self) -> usize {
        self.starts.len()
    }

    /// Check every rule the selection screens promise: grid and party sizes
    /// in range, all starts on the grid, no two players on the same cell.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (w, h) = (self.grid_width, self.grid_height);
        if !(MIN_AXIS..=MAX_AXIS).contains(&w) || !(MIN_AXIS..=MAX_AXIS).contains(&h) {
            return Err(ConfigError::GridOutOfRange {
                width: w,
                height: h,
            });
        }

        let count = self.starts.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(ConfigError::BadPlayerCount { count });
        }
        if (w as usize) * (h as usize) < count {
            return Err(ConfigError::TooFewCells {
                width: w,
                height: h,
                count,
            });
        }

        for (id, start) in self.starts.iter().enumerate() {
            if start.x >= w || start.y >= h {
                return Err(ConfigError::StartOffGrid {
                    id: id as u8,
                    x: start.x,
                    y: start.y,
                });
            }
        }

        for first in 0..self.starts.len() {
            for second in (first + 1)..self.starts.len() {
                if self.starts[first] == self.starts[second] {
                    return Err(ConfigError::SharedStart {
                        first: first as u8,
                        second: second as u8,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_players(w: u32, h: u32) -> GameConfig {
        GameConfig::new(w, h, vec![Position::new(0, 0), Position::new(1, 0)])
    }

    #[test]
    fn test_k2_preset_is_valid() {
        assert_eq!(GameConfig::k_through_2().validate(), Ok(()));
    }

    #[test]
    fn test_grid_axis_limits() {
        assert_eq!(
            two_players(0, 5).validate(),
            Err(ConfigError::GridOutOfRange { width: 0, height: 5 })
        );
        assert_eq!(
            two_players(21, 5).validate(),
            Err(ConfigError::GridOutOfRange { width: 21, height: 5 })
        );
        assert_eq!(two_players(20, 20).validate(), Ok(()));
    }

    #[test]
    fn test_player_count_limits() {
        let solo = GameConfig::new(5, 5, vec![Position::new(0, 0)]);
        assert_eq!(
            solo.validate(),
            Err(ConfigError::BadPlayerCount { count: 1 })
        );

        let five = GameConfig::new(
            5,
            5,
            (0..5).map(|x| Position::new(x, 0)).collect(),
        );
        assert_eq!(
            five.validate(),
            Err(ConfigError::BadPlayerCount { count: 5 })
        );
    }

    #[test]
    fn test_too_small_grid_rejected_up_front() {
        let cramped = GameConfig::new(1, 1, vec![Position::new(0, 0), Position::new(0, 0)]);
        assert_eq!(
            cramped.validate(),
            Err(ConfigError::TooFewCells {
                width: 1,
                height: 1,
                count: 2
            })
        );
    }

    #[test]
    fn test_start_must_be_on_grid() {
        let config = GameConfig::new(3, 3, vec![Position::new(0, 0), Position::new(3, 1)]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::StartOffGrid { id: 1, x: 3, y: 1 })
        );
    }

    #[test]
    fn test_matching_coordinates_rejected() {
        let config = GameConfig::new(
            4,
            4,
            vec![
                Position::new(1, 1),
                Position::new(2, 2),
                Position::new(1, 1),
            ],
        );
        assert_eq!(
            config.validate(),
            Err(ConfigError::SharedStart { first: 0, second: 2 })
        );
    }

    #[test]
    fn test_error_text_matches_placement_screen_wording() {
        let err = ConfigError::SharedStart { first: 0, second: 1 };
        assert_eq!(
            err.to_string(),
            "players 0 and 1 cannot share a starting cell"
        );
    }
}
