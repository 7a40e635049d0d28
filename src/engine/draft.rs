// Draft stages: rating-tie shuffle, goalkeeper seeding, per-position snake
// draft, and leftover assignment.
//
// Every stage feeds the team that currently holds the lower aggregate rating
// (ties go to Team A), so each pick reflects all earlier picks, including
// picks made for other positions.

use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::buckets::PositionBuckets;
use super::player::{Player, Position, OUTFIELD_POSITIONS};
use super::team::Team;

/// Order players by rating descending, with runs of equal rating placed in
/// random relative order instead of source order.
///
/// Later stages rely on the descending ordering for strongest-first
/// assignment; the intra-run shuffle only breaks up repetitive pairings of
/// equally-rated players.
pub fn rating_tie_shuffle(players: &[Player], rng: &mut impl Rng) -> Vec<usize> {
    let mut order: Vec<usize> = (0..players.len()).collect();
    sort_by_rating_desc(players, &mut order);

    let mut start = 0;
    while start < order.len() {
        let rating = players[order[start]].rating;
        let mut end = start + 1;
        while end < order.len() && players[order[end]].rating == rating {
            end += 1;
        }
        order[start..end].shuffle(rng);
        start = end;
    }

    order
}

/// Seed one goalkeeper onto each team.
///
/// Candidates are the main-goalkeeper bucket (rating descending) followed by
/// the remaining GK bucket members (rating descending), so when two main
/// keepers exist each team gets one. With fewer than two candidates seeding
/// is skipped entirely and any keeper falls through to the later stages as an
/// ordinary player.
pub fn seed_goalkeepers(
    players: &[Player],
    buckets: &mut PositionBuckets,
    team_a: &mut Team,
    team_b: &mut Team,
) {
    let mut main = buckets.unassigned_main_gk();
    sort_by_rating_desc(players, &mut main);

    let mut rest: Vec<usize> = buckets
        .unassigned_in(Position::Goalkeeper)
        .into_iter()
        .filter(|i| !main.contains(i))
        .collect();
    sort_by_rating_desc(players, &mut rest);

    let candidates: Vec<usize> = main.into_iter().chain(rest).collect();
    if candidates.len() < 2 {
        debug!(
            candidates = candidates.len(),
            "skipping goalkeeper seeding, not enough candidates"
        );
        return;
    }

    assign(players, buckets, team_a, candidates[0]);
    assign(players, buckets, team_b, candidates[1]);
}

/// Snake-draft the outfield buckets in a freshly shuffled position order.
///
/// Per position, the still-unassigned bucket members are sorted rating
/// descending and up to `2 * max(1, count / 2)` of them are handed one at a
/// time to the lagging team. The quota keeps each position's intake even when
/// possible; members beyond it stay for later buckets or the leftover stage.
pub fn snake_draft(
    players: &[Player],
    buckets: &mut PositionBuckets,
    team_a: &mut Team,
    team_b: &mut Team,
    rng: &mut impl Rng,
) {
    let mut position_order = OUTFIELD_POSITIONS.to_vec();
    position_order.shuffle(rng);

    for pos in position_order {
        let mut pool = buckets.unassigned_in(pos);
        if pool.is_empty() {
            continue;
        }
        sort_by_rating_desc(players, &mut pool);

        let quota = 2 * (pool.len() / 2).max(1);
        for &idx in pool.iter().take(quota) {
            let team = lagging_team(team_a, team_b);
            assign(players, buckets, team, idx);
        }
    }
}

/// Assign every still-unassigned attending player, one at a time in shuffle
/// order, to the lagging team. Catches multi-position players whose buckets
/// were exhausted by teammates' picks and players with no position tags.
pub fn assign_leftovers(
    players: &[Player],
    order: &[usize],
    buckets: &mut PositionBuckets,
    team_a: &mut Team,
    team_b: &mut Team,
) {
    for &idx in order {
        if buckets.is_assigned(idx) {
            continue;
        }
        let team = lagging_team(team_a, team_b);
        assign(players, buckets, team, idx);
    }
}

/// Sort arena indices by rating descending. The sort is stable, so indices
/// with equal rating keep their existing (shuffled) relative order.
fn sort_by_rating_desc(players: &[Player], idxs: &mut [usize]) {
    idxs.sort_by(|&a, &b| {
        players[b]
            .rating
            .partial_cmp(&players[a].rating)
            .unwrap_or(Ordering::Equal)
    });
}

/// The team currently holding the lower aggregate rating; ties go to Team A,
/// which is always passed first.
fn lagging_team<'t>(team_a: &'t mut Team, team_b: &'t mut Team) -> &'t mut Team {
    if team_a.rating_sum() <= team_b.rating_sum() {
        team_a
    } else {
        team_b
    }
}

fn assign(players: &[Player], buckets: &mut PositionBuckets, team: &mut Team, idx: usize) {
    team.add(players, idx);
    buckets.mark_assigned(idx);
    debug!(
        player = %players[idx].name,
        rating = players[idx].rating,
        side = ?team.side,
        "assigned"
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
