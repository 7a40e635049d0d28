// Balance refinement: bounded swap search and one-shot size correction.

use std::cmp::Ordering;

use tracing::debug;

use super::player::{Player, Position, OUTFIELD_POSITIONS};
use super::team::Team;

/// First-improvement swap search over same-position pairs.
///
/// Positions are visited in their fixed canonical order. For each position,
/// every Team A x Team B pair eligible there (main goalkeepers excluded) is
/// tried in bucket order; the first swap that strictly reduces the absolute
/// rating gap is performed and the search moves on to the next position, so
/// at most one swap happens per position per allocation. This never worsens
/// the gap.
pub fn swap_refine(players: &[Player], team_a: &mut Team, team_b: &mut Team) {
    for &pos in OUTFIELD_POSITIONS {
        let a_cands = swap_candidates(players, team_a, pos);
        let b_cands = swap_candidates(players, team_b, pos);
        let gap = (team_a.rating_sum() - team_b.rating_sum()).abs();

        'pairs: for &i in &a_cands {
            for &j in &b_cands {
                // Moving j to A and i to B shifts each sum by +/- delta.
                let delta = players[j].rating - players[i].rating;
                let new_gap = ((team_a.rating_sum() + delta)
                    - (team_b.rating_sum() - delta))
                    .abs();
                if new_gap < gap {
                    team_a.remove(players, i);
                    team_b.remove(players, j);
                    team_a.add(players, j);
                    team_b.add(players, i);
                    debug!(
                        position = %pos,
                        out = %players[i].name,
                        in_ = %players[j].name,
                        gap,
                        new_gap,
                        "refinement swap"
                    );
                    break 'pairs;
                }
            }
        }
    }
}

/// Single corrective move when team sizes differ by more than 2: the larger
/// team's lowest-rated member that is not a main goalkeeper moves to the
/// smaller team. One shot only; an imbalance bigger than one move can fix
/// leaves a residual gap.
pub fn equalize_sizes(players: &[Player], team_a: &mut Team, team_b: &mut Team) {
    if team_a.len().abs_diff(team_b.len()) <= 2 {
        return;
    }
    let (larger, smaller) = if team_a.len() > team_b.len() {
        (team_a, team_b)
    } else {
        (team_b, team_a)
    };

    let mover = larger
        .members()
        .iter()
        .copied()
        .filter(|&i| !players[i].is_main_goalkeeper)
        .min_by(|&x, &y| {
            players[x]
                .rating
                .partial_cmp(&players[y].rating)
                .unwrap_or(Ordering::Equal)
        });

    if let Some(idx) = mover {
        larger.remove(players, idx);
        smaller.add(players, idx);
        debug!(player = %players[idx].name, "size correction move");
    }
}

fn swap_candidates(players: &[Player], team: &Team, pos: Position) -> Vec<usize> {
    team.members()
        .iter()
        .copied()
        .filter(|&i| players[i].plays(pos) && !players[i].is_main_goalkeeper)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
