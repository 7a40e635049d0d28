// Allocation engine: balanced two-team partitioning of an attending roster.
//
// Pure, synchronous pipeline over an in-memory player slice; the only
// external input besides the players is the injected random source, so a
// pinned seed reproduces the exact same partition.

pub mod buckets;
pub mod draft;
pub mod player;
pub mod refine;
pub mod team;

use rand::Rng;
use thiserror::Error;
use tracing::info;

pub use player::{Player, Position, OUTFIELD_POSITIONS};
pub use team::{Side, Team};

use buckets::PositionBuckets;

#[derive(Debug, Error)]
pub enum AllocationError {
    #[error("not enough players to form two teams: got {count}, need at least 2")]
    InsufficientPlayers { count: usize },
}

/// The finished partition. Members are arena indices into the player slice
/// passed to `allocate()`, in assignment order.
#[derive(Debug, Clone)]
pub struct Allocation {
    pub team_a: Team,
    pub team_b: Team,
}

impl Allocation {
    pub fn rating_gap(&self) -> f64 {
        (self.team_a.rating_sum() - self.team_b.rating_sum()).abs()
    }
}

/// Partition the attending players into two balanced teams.
///
/// Stages, in order: rating-tie shuffle, bucket construction, goalkeeper
/// seeding, per-position snake draft, leftover assignment, swap refinement,
/// size equalization. No stage backtracks into an earlier one.
pub fn allocate(players: &[Player], rng: &mut impl Rng) -> Result<Allocation, AllocationError> {
    if players.len() < 2 {
        return Err(AllocationError::InsufficientPlayers {
            count: players.len(),
        });
    }

    let order = draft::rating_tie_shuffle(players, rng);
    let mut buckets = PositionBuckets::build(players, &order);
    let mut team_a = Team::new(Side::A);
    let mut team_b = Team::new(Side::B);

    draft::seed_goalkeepers(players, &mut buckets, &mut team_a, &mut team_b);
    draft::snake_draft(players, &mut buckets, &mut team_a, &mut team_b, rng);
    draft::assign_leftovers(players, &order, &mut buckets, &mut team_a, &mut team_b);

    refine::swap_refine(players, &mut team_a, &mut team_b);
    refine::equalize_sizes(players, &mut team_a, &mut team_b);

    let allocation = Allocation { team_a, team_b };
    info!(
        players = players.len(),
        team_a = allocation.team_a.len(),
        team_b = allocation.team_b.len(),
        rating_gap = allocation.rating_gap(),
        "allocation complete"
    );
    Ok(allocation)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
