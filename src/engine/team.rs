// Team containers with a live aggregate-rating invariant.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Which of the two teams a player was assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

/// One of the two teams under construction.
///
/// Members are arena indices into the player slice handed to `allocate()`,
/// kept in assignment order. The rating sum is maintained incrementally on
/// every mutation and cross-checked against a full recompute in debug builds.
#[derive(Debug, Clone)]
pub struct Team {
    pub side: Side,
    members: Vec<usize>,
    rating_sum: f64,
}

/// Tolerance for comparing the live rating sum with a recompute. Incremental
/// f64 addition and removal can drift by rounding, never by more than this.
const SUM_EPSILON: f64 = 1e-6;

impl Team {
    pub fn new(side: Side) -> Self {
        Team {
            side,
            members: Vec::new(),
            rating_sum: 0.0,
        }
    }

    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn rating_sum(&self) -> f64 {
        self.rating_sum
    }

    pub fn contains(&self, idx: usize) -> bool {
        self.members.contains(&idx)
    }

    /// Append a player to the team and update the running rating sum.
    pub fn add(&mut self, players: &[Player], idx: usize) {
        debug_assert!(!self.contains(idx), "player {idx} added twice");
        self.members.push(idx);
        self.rating_sum += players[idx].rating;
        self.check_sum(players);
    }

    /// Remove a player from the team, if present, and update the rating sum.
    pub fn remove(&mut self, players: &[Player], idx: usize) {
        if let Some(pos) = self.members.iter().position(|&m| m == idx) {
            self.members.remove(pos);
            self.rating_sum -= players[idx].rating;
        }
        self.check_sum(players);
    }

    fn check_sum(&self, players: &[Player]) {
        debug_assert!(
            (self.recompute_sum(players) - self.rating_sum).abs() < SUM_EPSILON,
            "live rating sum diverged from member ratings"
        );
    }

    fn recompute_sum(&self, players: &[Player]) -> f64 {
        self.members.iter().map(|&i| players[i].rating).sum()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::player::Position;

    fn arena() -> Vec<Player> {
        [60.0, 75.5, 82.0]
            .iter()
            .enumerate()
            .map(|(i, &r)| Player {
                name: format!("p{i}"),
                rating: r,
                positions: vec![Position::CentralMidfielder],
                is_main_goalkeeper: false,
            })
            .collect()
    }

    #[test]
    fn add_and_remove_track_sum() {
        let players = arena();
        let mut team = Team::new(Side::A);
        team.add(&players, 0);
        team.add(&players, 2);
        assert_eq!(team.len(), 2);
        assert!((team.rating_sum() - 142.0).abs() < 1e-9);

        team.remove(&players, 0);
        assert_eq!(team.members(), &[2]);
        assert!((team.rating_sum() - 82.0).abs() < 1e-9);
    }

    #[test]
    fn remove_absent_member_is_noop() {
        let players = arena();
        let mut team = Team::new(Side::B);
        team.add(&players, 1);
        team.remove(&players, 2);
        assert_eq!(team.members(), &[1]);
        assert!((team.rating_sum() - 75.5).abs() < 1e-9);
    }

    #[test]
    fn membership_uses_index_not_rating() {
        let mut players = arena();
        players[1].rating = players[0].rating;
        let mut team = Team::new(Side::A);
        team.add(&players, 0);
        assert!(team.contains(0));
        assert!(!team.contains(1));
    }
}
