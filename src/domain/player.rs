use super::Position;

/// Display colors assigned to players in id order
pub const PLAYER_PALETTE: [(u8, u8, u8); 4] = [
    (214, 69, 65),   // red
    (65, 131, 215),  // blue
    (244, 179, 80),  // amber
    (155, 89, 182),  // violet
];

/// Player is one wanderer on the grid: a small integer identity, a cell
/// position, and a display color. Players are created at game start and
/// never destroyed mid-run; the movement rule updates `pos` every tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Player {
    pub id: u8,
    pub pos: Position,
    pub color: (u8, u8, u8),
}

impl Player {
    /// Create a player; ids are assigned in creation order and double as
    /// the index into the game's player list.
    pub fn new(id: u8, pos: Position) -> Self {
        Self {
            id,
            pos,
            color: PLAYER_PALETTE[id as usize % PLAYER_PALETTE.len()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_follow_id_order() {
        let first = Player::new(0, Position::new(0, 0));
        let third = Player::new(2, Position::new(1, 1));
        assert_eq!(first.color, PLAYER_PALETTE[0]);
        assert_eq!(third.color, PLAYER_PALETTE[2]);
    }

    #[test]
    fn test_distinct_colors_for_four_players() {
        let colors: Vec<_> = (0..4)
            .map(|id| Player::new(id, Position::new(0, 0)).color)
            .collect();
        let mut unique = colors.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(colors.len(), unique.len());
    }
}
