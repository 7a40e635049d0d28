// Share-link resolution and roster download.
//
// Users paste the share link straight out of the browser
// (https://docs.google.com/spreadsheets/d/<ID>/edit?...); the machine-usable
// CSV lives at the /export endpoint of the same document, so the link is
// rewritten before fetching.

use tracing::{debug, info};

use crate::engine::Player;

use super::parse::parse_roster;
use super::IngestError;

const SHEETS_PATH_MARKER: &str = "/spreadsheets/d/";

/// Resolve a shareable spreadsheet link to a CSV export URL.
///
/// Links already pointing at a CSV export (or any URL carrying a csv format
/// parameter) pass through unchanged. Anything that is not a recognizable
/// spreadsheet link is rejected.
pub fn export_url(share_url: &str) -> Result<String, IngestError> {
    let url = share_url.trim();

    if url.contains("format=csv") || url.contains("output=csv") {
        return Ok(url.to_string());
    }

    let doc_id = url
        .find(SHEETS_PATH_MARKER)
        .map(|at| &url[at + SHEETS_PATH_MARKER.len()..])
        .and_then(|rest| {
            let id: &str = rest
                .split(|c| c == '/' || c == '?' || c == '#')
                .next()
                .unwrap_or("");
            if id.is_empty() {
                None
            } else {
                Some(id)
            }
        })
        .ok_or_else(|| IngestError::BadSheetUrl {
            url: url.to_string(),
        })?;

    Ok(format!(
        "https://docs.google.com/spreadsheets/d/{doc_id}/export?format=csv"
    ))
}

/// Download and parse the attending roster behind a share link.
pub async fn fetch_roster(
    client: &reqwest::Client,
    share_url: &str,
) -> Result<Vec<Player>, IngestError> {
    let url = export_url(share_url)?;
    debug!(%url, "fetching roster CSV");

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|source| IngestError::Fetch {
            url: url.clone(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(IngestError::HttpStatus { status });
    }

    let body = response
        .text()
        .await
        .map_err(|source| IngestError::Fetch { url, source })?;

    let players = parse_roster(body.as_bytes())?;
    info!(attending = players.len(), "roster fetched");
    Ok(players)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_link_resolves_to_export_url() {
        let url = "https://docs.google.com/spreadsheets/d/1AbC_dEf-123/edit#gid=0";
        assert_eq!(
            export_url(url).unwrap(),
            "https://docs.google.com/spreadsheets/d/1AbC_dEf-123/export?format=csv"
        );
    }

    #[test]
    fn share_link_with_query_resolves() {
        let url = "https://docs.google.com/spreadsheets/d/1AbC?usp=sharing";
        assert_eq!(
            export_url(url).unwrap(),
            "https://docs.google.com/spreadsheets/d/1AbC/export?format=csv"
        );
    }

    #[test]
    fn export_url_passes_through() {
        let url = "https://docs.google.com/spreadsheets/d/1AbC/export?format=csv";
        assert_eq!(export_url(url).unwrap(), url);
    }

    #[test]
    fn published_csv_url_passes_through() {
        let url = "https://docs.google.com/spreadsheets/d/e/2PACX/pub?output=csv";
        assert_eq!(export_url(url).unwrap(), url);
    }

    #[test]
    fn unrecognized_url_is_rejected() {
        let err = export_url("https://example.com/not-a-sheet").unwrap_err();
        assert!(matches!(err, IngestError::BadSheetUrl { .. }));
    }

    #[test]
    fn empty_document_id_is_rejected() {
        let err = export_url("https://docs.google.com/spreadsheets/d/").unwrap_err();
        assert!(matches!(err, IngestError::BadSheetUrl { .. }));
    }
}
