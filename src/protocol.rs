// External response contract: the two generated teams as ordered lists.

use serde::{Deserialize, Serialize};

use crate::engine::{Allocation, Player, Team};

/// One player line in a team report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamPlayer {
    pub name: String,
    /// Comma-joined position tags, or "N/A" for a player with none.
    pub positions: String,
    pub rating: f64,
}

/// One team's report: display name, members in assignment order, and the
/// aggregate rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamReport {
    pub name: String,
    pub players: Vec<TeamPlayer>,
    pub total_rating: f64,
}

/// The full allocation response serialized for the caller. Every attending
/// player appears in exactly one of the two lists; nobody is benched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResponse {
    pub team_a: TeamReport,
    pub team_b: TeamReport,
}

impl AllocationResponse {
    pub fn build(
        allocation: &Allocation,
        players: &[Player],
        name_a: &str,
        name_b: &str,
    ) -> Self {
        AllocationResponse {
            team_a: team_report(&allocation.team_a, players, name_a),
            team_b: team_report(&allocation.team_b, players, name_b),
        }
    }
}

fn team_report(team: &Team, players: &[Player], name: &str) -> TeamReport {
    TeamReport {
        name: name.to_string(),
        players: team
            .members()
            .iter()
            .map(|&i| TeamPlayer {
                name: players[i].name.clone(),
                positions: players[i].positions_display(),
                rating: players[i].rating,
            })
            .collect(),
        total_rating: team.rating_sum(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
