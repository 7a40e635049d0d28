// Roster CSV parsing and normalization.
//
// Expected header row: name, rating, attending, gk, cd, wd, cm, wm, att,
// main_gk. Column names are matched case-insensitively via serde aliases and
// extra columns are absorbed and ignored. Heterogeneous truthy values
// ("YES", "yes", "TRUE", true) are normalized to booleans here so the engine
// only ever sees clean records.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::engine::{Player, Position};

use super::IngestError;

/// Raw CSV row. Every field is an optional string; normalization happens
/// after deserialization so a sparse or sloppy sheet never fails a row on
/// shape alone.
#[derive(Debug, Deserialize)]
struct RawRosterRow {
    #[serde(default, alias = "Name", alias = "NAME")]
    name: String,
    #[serde(default, alias = "Rating", alias = "RATING")]
    rating: String,
    #[serde(default, alias = "Attending", alias = "ATTENDING")]
    attending: String,
    #[serde(default, alias = "GK", alias = "Gk")]
    gk: String,
    #[serde(default, alias = "CD", alias = "Cd")]
    cd: String,
    #[serde(default, alias = "WD", alias = "Wd")]
    wd: String,
    #[serde(default, alias = "CM", alias = "Cm")]
    cm: String,
    #[serde(default, alias = "WM", alias = "Wm")]
    wm: String,
    #[serde(default, alias = "ATT", alias = "Att")]
    att: String,
    #[serde(default, alias = "Main_GK", alias = "MAIN_GK", alias = "main gk")]
    main_gk: String,
    /// Absorb any extra columns the sheet carries.
    #[serde(flatten)]
    _extra: HashMap<String, serde_json::Value>,
}

/// Normalize a sheet cell to a boolean. "YES" and "TRUE" (any case) are
/// true; everything else, including empty cells, is false.
fn truthy(value: &str) -> bool {
    let v = value.trim();
    v.eq_ignore_ascii_case("yes") || v.eq_ignore_ascii_case("true")
}

/// Parse a rating cell. Empty cells default to 0 silently; non-empty cells
/// that fail to parse, and negative values, are degraded to 0 with a warning.
fn parse_rating(name: &str, value: &str) -> f64 {
    let v = value.trim();
    if v.is_empty() {
        return 0.0;
    }
    match v.parse::<f64>() {
        Ok(r) if r.is_finite() && r >= 0.0 => r,
        Ok(r) => {
            warn!("player '{name}': rating {r} out of range, using 0");
            0.0
        }
        Err(_) => {
            warn!("player '{name}': unparsable rating '{v}', using 0");
            0.0
        }
    }
}

fn positions_of(raw: &RawRosterRow) -> Vec<Position> {
    let flags = [
        (Position::Goalkeeper, &raw.gk),
        (Position::CentralDefender, &raw.cd),
        (Position::WideDefender, &raw.wd),
        (Position::CentralMidfielder, &raw.cm),
        (Position::WideMidfielder, &raw.wm),
        (Position::Attacker, &raw.att),
    ];
    flags
        .iter()
        .filter(|(_, cell)| truthy(cell))
        .map(|&(pos, _)| pos)
        .collect()
}

/// Parse a roster CSV and return the attending players, normalized.
///
/// Malformed rows are skipped with a warning; malformed individual cells are
/// defaulted, never fatal. Only the attending subset reaches the engine.
pub fn parse_roster<R: Read>(rdr: R) -> Result<Vec<Player>, IngestError> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut players = Vec::new();

    for result in reader.deserialize::<RawRosterRow>() {
        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                warn!("skipping malformed roster row: {e}");
                continue;
            }
        };

        if !truthy(&raw.attending) {
            continue;
        }

        let name = raw.name.trim().to_string();
        let rating = parse_rating(&name, &raw.rating);
        players.push(Player {
            rating,
            positions: positions_of(&raw),
            is_main_goalkeeper: truthy(&raw.main_gk),
            name,
        });
    }

    Ok(players)
}

/// Load a roster from a local CSV file (offline mode).
pub fn load_roster_file(path: &Path) -> Result<Vec<Player>, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_roster(file)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_normalization() {
        assert!(truthy("YES"));
        assert!(truthy("yes"));
        assert!(truthy(" Yes "));
        assert!(truthy("TRUE"));
        assert!(truthy("true"));
        assert!(!truthy("no"));
        assert!(!truthy(""));
        assert!(!truthy("maybe"));
    }

    #[test]
    fn parses_attending_players_only() {
        let csv_data = "\
name,rating,attending,gk,cd,wd,cm,wm,att,main_gk
Ana,82,YES,no,YES,no,no,no,no,no
Ben,75,no,no,no,no,YES,no,no,no
Cara,68,yes,YES,no,no,no,no,no,YES";

        let players = parse_roster(csv_data.as_bytes()).unwrap();
        assert_eq!(players.len(), 2);

        assert_eq!(players[0].name, "Ana");
        assert!((players[0].rating - 82.0).abs() < f64::EPSILON);
        assert_eq!(players[0].positions, vec![Position::CentralDefender]);
        assert!(!players[0].is_main_goalkeeper);

        assert_eq!(players[1].name, "Cara");
        assert!(players[1].is_goalkeeper());
        assert!(players[1].is_main_goalkeeper);
    }

    #[test]
    fn missing_fields_default_instead_of_failing() {
        let csv_data = "\
name,rating,attending,gk,cd,wd,cm,wm,att,main_gk
,not-a-number,YES,,,,,,,
Dua,,YES,,YES,,,,,";

        let players = parse_roster(csv_data.as_bytes()).unwrap();
        assert_eq!(players.len(), 2);

        assert_eq!(players[0].name, "");
        assert_eq!(players[0].rating, 0.0);
        assert!(players[0].positions.is_empty());

        assert_eq!(players[1].name, "Dua");
        assert_eq!(players[1].rating, 0.0);
    }

    #[test]
    fn negative_rating_degrades_to_zero() {
        let csv_data = "\
name,rating,attending,gk,cd,wd,cm,wm,att,main_gk
Eli,-5,YES,,,,YES,,,";

        let players = parse_roster(csv_data.as_bytes()).unwrap();
        assert_eq!(players[0].rating, 0.0);
    }

    #[test]
    fn capitalized_headers_and_extra_columns_accepted() {
        let csv_data = "\
Name,Rating,Attending,GK,CD,WD,CM,WM,ATT,Main_GK,Notes
Fay,77.5,YES,no,no,no,no,YES,YES,no,left-footed";

        let players = parse_roster(csv_data.as_bytes()).unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].name, "Fay");
        assert!((players[0].rating - 77.5).abs() < f64::EPSILON);
        assert_eq!(
            players[0].positions,
            vec![Position::WideMidfielder, Position::Attacker]
        );
    }

    #[test]
    fn multi_position_row_keeps_all_tags() {
        let csv_data = "\
name,rating,attending,gk,cd,wd,cm,wm,att,main_gk
Gil,70,YES,YES,YES,no,no,no,YES,no";

        let players = parse_roster(csv_data.as_bytes()).unwrap();
        assert_eq!(
            players[0].positions,
            vec![
                Position::Goalkeeper,
                Position::CentralDefender,
                Position::Attacker
            ]
        );
    }
}
