// Position buckets: shared-membership working sets over the player arena.

use std::collections::HashMap;

use super::player::{Player, Position};

/// Working sets of unassigned players per position tag.
///
/// Buckets hold arena indices, not players, so a multi-position player sits
/// in several buckets at once. The first stage to assign the player wins;
/// `mark_assigned` then removes the index from every bucket it appears in.
#[derive(Debug)]
pub struct PositionBuckets {
    by_position: HashMap<Position, Vec<usize>>,
    main_gk: Vec<usize>,
    assigned: Vec<bool>,
}

impl PositionBuckets {
    /// Build buckets by registering players in `order` (the rating-tie
    /// shuffled sequence), so each bucket inherits that ordering.
    pub fn build(players: &[Player], order: &[usize]) -> Self {
        let mut by_position: HashMap<Position, Vec<usize>> = HashMap::new();
        let mut main_gk = Vec::new();

        for &idx in order {
            let player = &players[idx];
            for &pos in &player.positions {
                by_position.entry(pos).or_default().push(idx);
            }
            if player.is_main_goalkeeper {
                main_gk.push(idx);
            }
        }

        PositionBuckets {
            by_position,
            main_gk,
            assigned: vec![false; players.len()],
        }
    }

    pub fn is_assigned(&self, idx: usize) -> bool {
        self.assigned[idx]
    }

    /// Unassigned members of the bucket for `pos`, in bucket order.
    pub fn unassigned_in(&self, pos: Position) -> Vec<usize> {
        self.by_position
            .get(&pos)
            .map(|b| b.iter().copied().filter(|&i| !self.assigned[i]).collect())
            .unwrap_or_default()
    }

    /// Unassigned members of the main-goalkeeper bucket, in bucket order.
    pub fn unassigned_main_gk(&self) -> Vec<usize> {
        self.main_gk
            .iter()
            .copied()
            .filter(|&i| !self.assigned[i])
            .collect()
    }

    /// Mark a player assigned and remove its index from every bucket.
    pub fn mark_assigned(&mut self, idx: usize) {
        debug_assert!(!self.assigned[idx], "player {idx} assigned twice");
        self.assigned[idx] = true;
        for bucket in self.by_position.values_mut() {
            bucket.retain(|&i| i != idx);
        }
        self.main_gk.retain(|&i| i != idx);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, rating: f64, positions: Vec<Position>, main_gk: bool) -> Player {
        Player {
            name: name.into(),
            rating,
            positions,
            is_main_goalkeeper: main_gk,
        }
    }

    #[test]
    fn multi_position_player_registers_everywhere() {
        let players = vec![player(
            "Dua",
            70.0,
            vec![Position::CentralDefender, Position::WideMidfielder],
            false,
        )];
        let buckets = PositionBuckets::build(&players, &[0]);

        assert_eq!(buckets.unassigned_in(Position::CentralDefender), vec![0]);
        assert_eq!(buckets.unassigned_in(Position::WideMidfielder), vec![0]);
        assert!(buckets.unassigned_in(Position::Attacker).is_empty());
    }

    #[test]
    fn mark_assigned_removes_from_all_buckets() {
        let players = vec![
            player(
                "Eli",
                80.0,
                vec![Position::Goalkeeper, Position::CentralDefender],
                true,
            ),
            player("Fay", 65.0, vec![Position::CentralDefender], false),
        ];
        let mut buckets = PositionBuckets::build(&players, &[0, 1]);

        buckets.mark_assigned(0);
        assert!(buckets.is_assigned(0));
        assert!(buckets.unassigned_in(Position::Goalkeeper).is_empty());
        assert_eq!(buckets.unassigned_in(Position::CentralDefender), vec![1]);
        assert!(buckets.unassigned_main_gk().is_empty());
    }

    #[test]
    fn buckets_follow_registration_order() {
        let players = vec![
            player("G1", 50.0, vec![Position::Attacker], false),
            player("G2", 90.0, vec![Position::Attacker], false),
        ];
        // Registration order 1 then 0, so the bucket lists 1 first.
        let buckets = PositionBuckets::build(&players, &[1, 0]);
        assert_eq!(buckets.unassigned_in(Position::Attacker), vec![1, 0]);
    }
}
