// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV preview and validation for bulk participant registration.
//!
//! Previewing never mutates a tournament. Rows are checked against the
//! participant field rules, against participants already registered, and
//! against earlier rows of the same file.

use bracketcraft_domain::{Participant, ParticipantId, validate_participant_fields};
use csv::StringRecord;
use std::collections::{HashMap, HashSet};

use crate::error::ApiError;

/// A single row result from roster preview validation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RosterRowResult {
    /// The row number (1-based, excluding header).
    pub row_number: usize,
    /// The participant id (if present).
    pub participant_id: Option<String>,
    /// The display name (if present).
    pub display_name: Option<String>,
    /// The row status.
    pub status: RosterRowStatus,
    /// Zero or more validation errors.
    pub errors: Vec<String>,
}

impl RosterRowResult {
    /// Returns the participant this row describes, if the row is valid.
    #[must_use]
    pub fn participant(&self) -> Option<Participant> {
        if self.status != RosterRowStatus::Valid {
            return None;
        }
        let id: &str = self.participant_id.as_deref()?;
        let display_name: &str = self.display_name.as_deref()?;
        Some(Participant::new(ParticipantId::new(id), display_name))
    }
}

/// Status of a roster row validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RosterRowStatus {
    /// Row is valid and can be imported.
    Valid,
    /// Row has validation errors and cannot be imported.
    Invalid,
}

/// Result of roster preview validation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RosterPreview {
    /// Per-row validation results.
    pub rows: Vec<RosterRowResult>,
    /// Total number of rows.
    pub total_rows: usize,
    /// Number of valid rows.
    pub valid_count: usize,
    /// Number of invalid rows.
    pub invalid_count: usize,
}

/// Required CSV column headers (case-insensitive, normalized).
const REQUIRED_HEADERS: &[&str] = &["id", "display_name"];

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Validates that all required headers are present in the CSV.
fn validate_headers(headers: &StringRecord) -> Result<HashMap<String, usize>, ApiError> {
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
        return Err(ApiError::InvalidCsvFormat {
            reason: format!("Missing required headers: {}", missing.join(", ")),
        });
    }

    Ok(header_map)
}

fn validate_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    registered: &HashSet<&str>,
    seen: &HashSet<String>,
    row_number: usize,
) -> RosterRowResult {
    let get_field = |name: &str| -> Option<String> {
        header_map
            .get(name)
            .and_then(|&idx| record.get(idx))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    let participant_id: Option<String> = get_field("id");
    let display_name: Option<String> = get_field("display_name");
    let mut errors: Vec<String> = Vec::new();

    if participant_id.is_none() {
        errors.push(String::from("id: required field is missing or empty"));
    }
    if display_name.is_none() {
        errors.push(String::from("display_name: required field is missing or empty"));
    }

    if let (Some(id), Some(name)) = (&participant_id, &display_name) {
        let participant: Participant = Participant::new(ParticipantId::new(id), name);
        if let Err(e) = validate_participant_fields(&participant) {
            errors.push(format!("validation: {e}"));
        }
        if registered.contains(id.as_str()) {
            errors.push(format!("id: participant '{id}' is already registered"));
        }
        if seen.contains(id) {
            errors.push(format!(
                "id: duplicate within CSV - '{id}' appears multiple times"
            ));
        }
    }

    let status: RosterRowStatus = if errors.is_empty() {
        RosterRowStatus::Valid
    } else {
        RosterRowStatus::Invalid
    };

    RosterRowResult {
        row_number,
        participant_id,
        display_name,
        status,
        errors,
    }
}

/// Previews and validates a roster CSV without registering anyone.
///
/// # Arguments
///
/// * `csv_content` - The raw CSV content, with `id` and `display_name` columns
/// * `registered` - Participants already registered in the target tournament
///
/// # Returns
///
/// * `Ok(RosterPreview)` with per-row validation results
/// * `Err(ApiError)` if the CSV headers are unreadable or incomplete
///
/// # Errors
///
/// Returns `ApiError::InvalidCsvFormat` if the header row cannot be read or
/// a required column is missing. Problems with individual rows are reported
/// per row instead.
pub fn preview_roster_csv(
    csv_content: &str,
    registered: &[Participant],
) -> Result<RosterPreview, ApiError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(csv_content.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| ApiError::InvalidCsvFormat {
            reason: format!("Failed to read CSV headers: {e}"),
        })?
        .clone();

    let header_map: HashMap<String, usize> = validate_headers(&headers)?;
    let registered: HashSet<&str> = registered.iter().map(|p| p.id.value()).collect();

    let mut rows: Vec<RosterRowResult> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (idx, result) in reader.records().enumerate() {
        let row_number: usize = idx + 1;

        let record: StringRecord = match result {
            Ok(rec) => rec,
            Err(e) => {
                rows.push(RosterRowResult {
                    row_number,
                    participant_id: None,
                    display_name: None,
                    status: RosterRowStatus::Invalid,
                    errors: vec![format!("CSV parse error: {e}")],
                });
                continue;
            }
        };

        let row: RosterRowResult =
            validate_row(&record, &header_map, &registered, &seen, row_number);
        if let Some(id) = &row.participant_id {
            seen.insert(id.clone());
        }
        rows.push(row);
    }

    let valid_count: usize = rows
        .iter()
        .filter(|r| r.status == RosterRowStatus::Valid)
        .count();

    Ok(RosterPreview {
        total_rows: rows.len(),
        invalid_count: rows.len() - valid_count,
        valid_count,
        rows,
    })
}
