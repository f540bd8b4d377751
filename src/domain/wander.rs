use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{Direction, Grid, Position};

/// Trait for wander policies: how a group's leader picks its next move.
/// The original game left this undecided; making it a seam lets the older
/// grade bands compare walks.
pub trait WanderRule {
    /// Name of the policy
    fn name(&self) -> &'static str;

    /// Short description
    fn description(&self) -> &'static str;

    /// Pick the direction for this tick's one-cell move. The caller clamps
    /// the move to the grid, so an off-board pick wastes the tick.
    fn pick(&mut self, at: Position, grid: &Grid) -> Direction;
}

/// Uniformly random over the four cardinal directions. Picks that would
/// leave the grid get clamped by the mover, so walkers linger at walls.
pub struct UniformWalk {
    rng: SmallRng,
}

impl UniformWalk {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Fixed seed for deterministic tests
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformWalk {
    fn default() -> Self {
        Self::new()
    }
}

impl WanderRule for UniformWalk {
    fn name(&self) -> &'static str {
        "Uniform"
    }

    fn description(&self) -> &'static str {
        "Any direction, walls waste a turn"
    }

    fn pick(&mut self, _at: Position, _grid: &Grid) -> Direction {
        Direction::ALL[self.rng.random_range(0..Direction::ALL.len())]
    }
}

/// Uniformly random over only the moves that stay on the grid, so a walker
/// never spends a tick bumping a wall.
pub struct HugWallsWalk {
    rng: SmallRng,
}

impl HugWallsWalk {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Fixed seed for deterministic tests
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for HugWallsWalk {
    fn default() -> Self {
        Self::new()
    }
}

impl WanderRule for HugWallsWalk {
    fn name(&self) -> &'static str {
        "No dawdling"
    }

    fn description(&self) -> &'static str {
        "Always moves, never bumps a wall"
    }

    fn pick(&mut self, at: Position, grid: &Grid) -> Direction {
        let legal: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&dir| grid.clamp_step(at, dir) != at)
            .collect();
        if legal.is_empty() {
            // Boxed in (1x1 grid): any pick clamps to a no-op
            Direction::Up
        } else {
            legal[self.rng.random_range(0..legal.len())]
        }
    }
}

/// Get all available wander policies
pub fn all_rules() -> Vec<(&'static str, Box<dyn WanderRule>)> {
    vec![
        ("Uniform", Box::new(UniformWalk::new()) as Box<dyn WanderRule>),
        ("No dawdling", Box::new(HugWallsWalk::new())),
    ]
}

/// Get the default policy (uniform walk)
pub fn default_rule() -> Box<dyn WanderRule> {
    Box::new(UniformWalk::new())
}
