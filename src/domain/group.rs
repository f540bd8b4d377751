use super::Player;

/// Group is an ordered, non-empty set of player ids occupying overlapping
/// cells. The first member is the leader: it picks the moves, everyone else
/// follows. Every player belongs to exactly one group at all times.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Group {
    members: Vec<u8>,
}

impl Group {
    /// A group of one
    pub fn solo(id: u8) -> Self {
        Self { members: vec![id] }
    }

    #[cfg(test)]
    pub fn of(members: Vec<u8>) -> Self {
        debug_assert!(!members.is_empty());
        Self { members }
    }

    /// The designated representative whose movement the rest mirror
    pub fn leader(&self) -> u8 {
        self.members[0]
    }

    pub fn members(&self) -> &[u8] {
        &self.members
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn contains(&self, id: u8) -> bool {
        self.members.contains(&id)
    }

    fn absorb(&mut self, other: &Group) {
        self.members.extend_from_slice(&other.members);
    }
}

/// Initial partition: every player wanders alone
pub fn solo_groups(players: &[Player]) -> Vec<Group> {
    players.iter().map(|p| Group::solo(p.id)).collect()
}

/// Whether any member of `a` stands on the same cell as any member of `b`.
/// Player ids index into `players`.
fn collides(a: &Group, b: &Group, players: &[Player]) -> bool {
    a.members().iter().any(|&ma| {
        let pa = players[ma as usize].pos;
        b.members().iter().any(|&mb| players[mb as usize].pos == pa)
    })
}

/// Re-partition groups by positional collision, transitively: a group may
/// absorb several others in one pass, and a freshly merged group keeps
/// absorbing until nothing it overlaps remains. The result is the connected
/// components of the collision graph, so which players end up together does
/// not depend on the order of the input - only member ordering inside a
/// group does.
pub fn merge_groups(groups: &[Group], players: &[Player]) -> Vec<Group> {
    let mut absorbed = vec![false; groups.len()];
    let mut merged = Vec::with_capacity(groups.len());

    for i in 0..groups.len() {
        if absorbed[i] {
            continue;
        }
        let mut current = groups[i].clone();
        // Keep scanning until a full pass absorbs nothing: absorbing group j
        // can put `current` in contact with groups the first pass skipped.
        loop {
            let mut grew = false;
            for j in (i + 1)..groups.len() {
                if absorbed[j] || !collides(&current, &groups[j], players) {
                    continue;
                }
                current.absorb(&groups[j]);
                absorbed[j] = true;
                grew = true;
            }
            if !grew {
                break;
            }
        }
        merged.push(current);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Position;

    fn players_at(positions: &[(u32, u32)]) -> Vec<Player> {
        positions
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| Player::new(id as u8, Position::new(x, y)))
            .collect()
    }

    /// Partition as a set of sets, ignoring group and member order
    fn normalize(groups: &[Group]) -> Vec<Vec<u8>> {
        let mut sets: Vec<Vec<u8>> = groups
            .iter()
            .map(|g| {
                let mut m = g.members().to_vec();
                m.sort();
                m
            })
            .collect();
        sets.sort();
        sets
    }

    #[test]
    fn test_disjoint_groups_stay_apart() {
        let players = players_at(&[(0, 0), (2, 0), (0, 2)]);
        let groups = solo_groups(&players);
        let merged = merge_groups(&groups, &players);
        assert_eq!(normalize(&merged), vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn test_colliding_pair_merges() {
        let players = players_at(&[(1, 1), (1, 1), (0, 2)]);
        let merged = merge_groups(&solo_groups(&players), &players);
        assert_eq!(normalize(&merged), vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn test_leader_is_first_member_after_merge() {
        let players = players_at(&[(1, 1), (1, 1)]);
        let merged = merge_groups(&solo_groups(&players), &players);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].leader(), 0);
    }

    #[test]
    fn test_merge_is_transitive_within_one_pass() {
        // A touches B at (0,0), B touches C at (5,5); A never touches C
        // directly, yet all three must collapse into one group.
        let players = players_at(&[(0, 0), (0, 0), (5, 5), (5, 5)]);
        let groups = vec![Group::of(vec![0]), Group::of(vec![1, 2]), Group::of(vec![3])];
        let merged = merge_groups(&groups, &players);
        assert_eq!(normalize(&merged), vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn test_later_group_bridges_earlier_ones() {
        // The bridge group comes last in the input, so the first pass over
        // group 0 only finds it after absorbing it unlocks group 1.
        let players = players_at(&[(0, 0), (9, 9), (0, 0), (9, 9)]);
        let groups = vec![Group::of(vec![0]), Group::of(vec![1]), Group::of(vec![2, 3])];
        let merged = merge_groups(&groups, &players);
        assert_eq!(normalize(&merged), vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let players = players_at(&[(1, 0), (1, 0), (3, 3), (3, 3)]);
        let once = merge_groups(&solo_groups(&players), &players);
        let twice = merge_groups(&once, &players);
        assert_eq!(normalize(&once), normalize(&twice));
    }

    #[test]
    fn test_merge_is_order_independent() {
        let players = players_at(&[(0, 0), (0, 0), (2, 2), (2, 2)]);
        let base = solo_groups(&players);

        // Every rotation of the input must produce the same partition
        let reference = normalize(&merge_groups(&base, &players));
        for shift in 1..base.len() {
            let mut rotated = base.clone();
            rotated.rotate_left(shift);
            let merged = merge_groups(&rotated, &players);
            assert_eq!(normalize(&merged), reference, "rotation by {shift}");
        }
    }

    #[test]
    fn test_every_player_in_exactly_one_group() {
        let players = players_at(&[(0, 0), (0, 0), (1, 1), (2, 2)]);
        let merged = merge_groups(&solo_groups(&players), &players);
        let mut seen: Vec<u8> = merged.iter().flat_map(|g| g.members().to_vec()).collect();
        seen.sort();
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }
}
