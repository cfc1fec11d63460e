// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bulk debater import from CSV.
//!
//! The whole file is parsed and checked before anything is written, and
//! the inserts run in one transaction, so a failing row never leaves a
//! partial import behind.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use apda_tab_domain::{DebaterExperience, validate_name};
use apda_tab_persistence::{NewDebater, Persistence, PersistenceError};
use csv::StringRecord;
use thiserror::Error;
use tracing::info;

/// Debater import errors.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file is not a usable CSV document.
    #[error("Invalid CSV format: {reason}")]
    InvalidCsvFormat { reason: String },

    /// A data row failed validation.
    #[error("Row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },

    /// A row references a team that does not exist.
    #[error("Row {row}: team {team_id} does not exist")]
    UnknownTeam { row: usize, team_id: i64 },

    /// Existing teams could not be read.
    #[error("Failed to load teams: {0}")]
    TeamLookup(#[source] PersistenceError),

    /// The database rejected an insert and the import was rolled back.
    #[error("Import rolled back: {0}")]
    Persistence(#[source] PersistenceError),
}

/// One validated debater row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebaterRecord {
    /// The row number (1-based, excluding header).
    pub row_number: usize,
    pub name: String,
    pub experience_level: DebaterExperience,
    pub team_id: Option<i64>,
}

const REQUIRED_HEADERS: &[&str] = &["name", "experience_level"];
const TEAM_HEADER: &str = "team_id";

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

fn validate_headers(headers: &StringRecord) -> Result<HashMap<String, usize>, ImportError> {
    let header_map: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, header)| (normalize_header(header), idx))
        .collect();

    let missing: Vec<&str> = REQUIRED_HEADERS
        .iter()
        .copied()
        .filter(|required| !header_map.contains_key(*required))
        .collect();

    if !missing.is_empty() {
        return Err(ImportError::InvalidCsvFormat {
            reason: format!("Missing required headers: {}", missing.join(", ")),
        });
    }

    Ok(header_map)
}

/// Returns a trimmed, non-empty cell by normalized header name.
fn field<'a>(
    record: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Option<&'a str> {
    header_map
        .get(name)
        .and_then(|&idx| record.get(idx))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn parse_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    row_number: usize,
) -> Result<DebaterRecord, ImportError> {
    let name: String = field(record, header_map, "name").unwrap_or_default().to_string();
    validate_name("Debater", &name).map_err(|e| ImportError::InvalidRow {
        row: row_number,
        reason: e.to_string(),
    })?;

    let experience_level: DebaterExperience = DebaterExperience::from_str(
        field(record, header_map, "experience_level").unwrap_or_default(),
    )
    .map_err(|e| ImportError::InvalidRow {
        row: row_number,
        reason: e.to_string(),
    })?;

    let team_id: Option<i64> = field(record, header_map, TEAM_HEADER)
        .map(|raw| {
            raw.parse::<i64>().map_err(|_| ImportError::InvalidRow {
                row: row_number,
                reason: format!("team_id '{raw}' is not an integer"),
            })
        })
        .transpose()?;

    Ok(DebaterRecord {
        row_number,
        name,
        experience_level,
        team_id,
    })
}

/// Parses and validates debater rows.
///
/// Columns are `name` and `experience_level` (`Novice` or `Varsity`), plus
/// an optional `team_id`. Header matching ignores case and surrounding
/// whitespace.
///
/// # Errors
///
/// Returns the first format or row error encountered.
pub fn parse_debater_csv(content: &str) -> Result<Vec<DebaterRecord>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(content.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| ImportError::InvalidCsvFormat {
            reason: format!("Failed to read CSV headers: {e}"),
        })?
        .clone();

    let header_map: HashMap<String, usize> = validate_headers(&headers)?;

    reader
        .records()
        .enumerate()
        .map(|(idx, result)| {
            let row_number: usize = idx + 1;
            let record: StringRecord = result.map_err(|e| ImportError::InvalidRow {
                row: row_number,
                reason: format!("CSV parse error: {e}"),
            })?;
            parse_row(&record, &header_map, row_number)
        })
        .collect()
}

/// Inserts parsed debaters, returning their new IDs in row order.
///
/// Team references are checked against the database before the first
/// insert, and all rows are inserted in one transaction.
///
/// # Errors
///
/// Returns an error if a team is unknown or an insert fails. Either way no
/// debater from `records` is stored.
pub fn import_debaters(
    persistence: &mut Persistence,
    records: &[DebaterRecord],
) -> Result<Vec<i64>, ImportError> {
    let known_teams: HashSet<i64> = persistence
        .list_teams()
        .map_err(ImportError::TeamLookup)?
        .into_iter()
        .map(|team| team.team_id)
        .collect();

    if let Some(record) = records
        .iter()
        .find(|r| r.team_id.is_some_and(|id| !known_teams.contains(&id)))
    {
        return Err(ImportError::UnknownTeam {
            row: record.row_number,
            team_id: record.team_id.unwrap_or_default(),
        });
    }

    let debaters: Vec<NewDebater> = records
        .iter()
        .map(|record| NewDebater {
            name: record.name.clone(),
            experience_level: record.experience_level,
            team_id: record.team_id,
        })
        .collect();

    let ids: Vec<i64> = persistence
        .add_debaters(&debaters)
        .map_err(ImportError::Persistence)?;

    info!(count = ids.len(), "Imported debaters");

    Ok(ids)
}
