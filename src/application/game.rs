use log::{debug, info};

use crate::application::{ConfigError, GameConfig, GameMode};
use crate::domain::{Grid, Group, Player, RunStats, WanderRule, merge_groups, solo_groups};

/// Fixed simulation rate, in steps per second
pub const TICKS_PER_SECOND: f32 = 10.0;

/// Game owns one play-through: the grid, the players, their partition into
/// groups, and the run's stats. Construction starts the clock; the run ends
/// when every player shares one group, and further ticks are no-ops.
pub struct Game {
    pub grid: Grid,
    pub players: Vec<Player>,
    pub groups: Vec<Group>,
    pub stats: RunStats,
    pub mode: GameMode,
    rule: Box<dyn WanderRule>,
    update_timer: f32,
    over: bool,
}

impl Game {
    /// Validate the configuration and set up the starting partition: every
    /// player in a group of their own, clock at zero.
    pub fn new(
        mode: GameMode,
        config: &GameConfig,
        rule: Box<dyn WanderRule>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let players: Vec<Player> = config
            .starts
            .iter()
            .enumerate()
            .map(|(id, &pos)| Player::new(id as u8, pos))
            .collect();
        let groups = solo_groups(&players);

        info!(
            "{} run starting: {} players on a {}x{} grid, {} walk",
            mode.label(),
            players.len(),
            config.grid_width,
            config.grid_height,
            rule.name(),
        );

        Ok(Self {
            grid: Grid::new(config.grid_width, config.grid_height),
            players,
            groups,
            stats: RunStats::new(),
            mode,
            rule,
            update_timer: 0.0,
            over: false,
        })
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn wander_rule_name(&self) -> &'static str {
        self.rule.name()
    }

    /// Advance by one rendered frame. The clock accrues real time every
    /// frame; simulation steps run at the fixed rate via an accumulator.
    pub fn tick(&mut self, delta: f32) {
        if self.over {
            return;
        }

        self.stats.advance_clock(delta);
        self.update_timer += delta;
        let interval = 1.0 / TICKS_PER_SECOND;

        while self.update_timer >= interval {
            self.update_timer -= interval;
            self.step();
            if self.over {
                break;
            }
        }
    }

    /// One simulation step: every leader wanders one cell with the rest of
    /// its group in tow, then colliding groups merge and the termination
    /// predicate runs.
    pub fn step(&mut self) {
        if self.over {
            return;
        }

        for group in &self.groups {
            let leader = group.leader() as usize;
            let dir = self.rule.pick(self.players[leader].pos, &self.grid);
            let next = self.grid.clamp_step(self.players[leader].pos, dir);
            for &id in group.members() {
                self.players[id as usize].pos = next;
            }
        }

        self.stats.count_step();
        self.groups = merge_groups(&self.groups, &self.players);
        debug!(
            "step {}: {} group(s) left",
            self.stats.steps(),
            self.groups.len()
        );

        if self.mode.is_over(&self.groups, self.players.len()) {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.over = true;
        if let Some(duration) = self.stats.stop() {
            info!(
                "everyone found each other after {} steps in {:.1}s",
                self.stats.steps(),
                duration,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Direction, Position, UniformWalk};
    use std::collections::VecDeque;

    /// Replays a fixed move list; one pop per leader per step
    struct ScriptedWalk {
        moves: VecDeque<Direction>,
    }

    impl ScriptedWalk {
        fn new(moves: &[Direction]) -> Box<dyn WanderRule> {
            Box::new(Self {
                moves: moves.iter().copied().collect(),
            })
        }
    }

    impl WanderRule for ScriptedWalk {
        fn name(&self) -> &'static str {
            "Scripted"
        }

        fn description(&self) -> &'static str {
            "Test fixture"
        }

        fn pick(&mut self, _at: Position, _grid: &Grid) -> Direction {
            self.moves.pop_front().unwrap_or(Direction::Up)
        }
    }

    fn config(w: u32, h: u32, starts: &[(u32, u32)]) -> GameConfig {
        GameConfig::new(
            w,
            h,
            starts.iter().map(|&(x, y)| Position::new(x, y)).collect(),
        )
    }

    #[test]
    fn test_invalid_config_never_constructs() {
        let bad = config(3, 3, &[(0, 0), (0, 0)]);
        let rule = Box::new(UniformWalk::seeded(1));
        assert!(Game::new(GameMode::KThrough2, &bad, rule).is_err());
    }

    #[test]
    fn test_two_players_meet_at_center_of_3x3() {
        // Both walkers converge on (1,1): right+down for the first, down+left
        // for the second. Picks interleave leader by leader within a step.
        use Direction::*;
        let script = ScriptedWalk::new(&[Right, Down, Down, Left]);
        let cfg = config(3, 3, &[(0, 0), (2, 0)]);
        let mut game = Game::new(GameMode::KThrough2, &cfg, script).unwrap();

        game.step();
        assert!(!game.is_over());
        assert_eq!(game.groups.len(), 2);

        game.step();
        assert!(game.is_over());
        assert_eq!(game.groups.len(), 1);
        assert_eq!(game.players[0].pos, Position::new(1, 1));
        assert_eq!(game.players[1].pos, Position::new(1, 1));

        // The clock stopped exactly once; the later stop finds it spent
        assert!(game.stats.is_finished());
        assert_eq!(game.stats.stop(), None);
    }

    #[test]
    fn test_steps_after_game_over_change_nothing() {
        use Direction::*;
        let script = ScriptedWalk::new(&[Right, Left]);
        let cfg = config(3, 1, &[(0, 0), (2, 0)]);
        let mut game = Game::new(GameMode::KThrough2, &cfg, script).unwrap();

        game.step();
        assert!(game.is_over());
        let steps = game.stats.steps();
        let positions: Vec<_> = game.players.iter().map(|p| p.pos).collect();

        game.step();
        game.tick(1.0);
        assert_eq!(game.stats.steps(), steps);
        assert_eq!(
            game.players.iter().map(|p| p.pos).collect::<Vec<_>>(),
            positions
        );
    }

    #[test]
    fn test_step_counter_is_one_per_tick_regardless_of_groups() {
        // Three walkers on separate rows all marching right: they never meet,
        // and the counter advances once per step, not once per group.
        let script = ScriptedWalk::new(&[Direction::Right; 90]);
        let cfg = config(20, 5, &[(0, 0), (0, 2), (0, 4)]);
        let mut game = Game::new(GameMode::ThreeThroughFive, &cfg, script).unwrap();

        for _ in 0..30 {
            game.step();
        }
        assert!(!game.is_over());
        assert_eq!(game.stats.steps(), 30);
    }

    #[test]
    fn test_positions_stay_in_bounds_for_whole_run() {
        let cfg = config(4, 4, &[(0, 0), (3, 0), (0, 3), (3, 3)]);
        let mut game = Game::new(
            GameMode::SixThroughEight,
            &cfg,
            Box::new(UniformWalk::seeded(99)),
        )
        .unwrap();

        for _ in 0..400 {
            if game.is_over() {
                break;
            }
            game.step();
            for player in &game.players {
                assert!(game.grid.contains(player.pos));
            }
        }
    }

    #[test]
    fn test_group_members_share_their_leaders_cell() {
        let cfg = config(4, 4, &[(0, 0), (3, 0), (0, 3), (3, 3)]);
        let mut game = Game::new(
            GameMode::SixThroughEight,
            &cfg,
            Box::new(UniformWalk::seeded(7)),
        )
        .unwrap();

        for _ in 0..400 {
            if game.is_over() {
                break;
            }
            game.step();
            for group in &game.groups {
                let at = game.players[group.leader() as usize].pos;
                for &id in group.members() {
                    assert_eq!(game.players[id as usize].pos, at);
                }
            }
        }
    }

    #[test]
    fn test_fixed_rate_ticking_steps_ten_per_second() {
        let script = ScriptedWalk::new(&[Direction::Right; 40]);
        let cfg = config(20, 5, &[(0, 0), (0, 2)]);
        let mut game = Game::new(GameMode::ThreeThroughFive, &cfg, script).unwrap();

        // 1 second of 60 Hz frames at the 10 Hz simulation rate
        for _ in 0..60 {
            game.tick(1.0 / 60.0);
        }
        assert_eq!(game.stats.steps(), 10);
        assert!((game.stats.elapsed() - 1.0).abs() < 1e-6);
    }
}
