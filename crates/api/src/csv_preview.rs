// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV preview and validation for bulk coupon import.
//!
//! This module parses marketing's coupon upload format and validates it
//! against coupon rules without persisting or mutating canonical state.

use csv::StringRecord;
use marketdesk::DomainState;
use marketdesk_domain::{CouponType, validate_coupon_value};
use std::collections::{HashMap, HashSet};
use time::Date;
use time::macros::format_description;

use crate::error::ApiError;

/// A single row result from CSV preview validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRowResult {
    /// The row number (1-based, excluding header).
    pub row_number: usize,
    /// The parsed coupon code (if present).
    pub code: Option<String>,
    /// The parsed coupon type (if valid).
    pub coupon_type: Option<String>,
    /// The parsed discount value (if valid).
    pub value: Option<i64>,
    /// The parsed usage limit (if valid).
    pub usage_limit: Option<u32>,
    /// The parsed expiry date (if valid).
    pub expires_at: Option<Date>,
    /// The row status.
    pub status: CsvRowStatus,
    /// Zero or more validation errors.
    pub errors: Vec<String>,
}

/// Status of a CSV row validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvRowStatus {
    /// Row is valid and could be imported.
    Valid,
    /// Row has validation errors and cannot be imported.
    Invalid,
}

/// Result of CSV preview validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvPreviewResult {
    /// Per-row validation results.
    pub rows: Vec<CsvRowResult>,
    /// Total number of rows.
    pub total_rows: usize,
    /// Number of valid rows.
    pub valid_count: usize,
    /// Number of invalid rows.
    pub invalid_count: usize,
}

/// Required CSV column headers (case-insensitive, normalized).
const REQUIRED_HEADERS: &[&str] = &["code", "type", "value"];

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Validates that all required headers are present in the CSV.
fn validate_headers(headers: &StringRecord) -> Result<HashMap<String, usize>, ApiError> {
    let mut header_map: HashMap<String, usize> = HashMap::new();

    for (idx, header) in headers.iter().enumerate() {
        let normalized: String = normalize_header(header);
        header_map.insert(normalized, idx);
    }

    let mut missing: Vec<String> = Vec::new();
    for required in REQUIRED_HEADERS {
        if !header_map.contains_key(*required) {
            missing.push(String::from(*required));
        }
    }

    if !missing.is_empty() {
        return Err(ApiError::InvalidCsvFormat {
            reason: format!("Missing required headers: {}", missing.join(", ")),
        });
    }

    Ok(header_map)
}

/// Extracts and validates a required field from a CSV row.
fn parse_required_field(
    get_field: &impl Fn(&str) -> Option<String>,
    field_name: &str,
    errors: &mut Vec<String>,
) -> String {
    get_field(field_name).unwrap_or_else(|| {
        errors.push(format!("{field_name}: required field is missing or empty"));
        String::new()
    })
}

/// A coupon row lifted out of the CSV with all columns decoded.
struct ParsedCouponRow {
    code: String,
    coupon_type: CouponType,
    value: i64,
    usage_limit: Option<u32>,
    expires_at: Option<Date>,
}

/// Parses a CSV row into a coupon candidate if possible.
///
/// Returns `Err(Vec<String>)` with one message per undecodable column.
fn parse_csv_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
) -> Result<ParsedCouponRow, Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    let get_field = |name: &str| -> Option<String> {
        header_map
            .get(name)
            .and_then(|&idx| record.get(idx))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    let code: String = parse_required_field(&get_field, "code", &mut errors).to_uppercase();
    let type_str: String = parse_required_field(&get_field, "type", &mut errors);
    let value_str: String = parse_required_field(&get_field, "value", &mut errors);

    let usage_limit: Option<u32> = get_field("usage_limit").and_then(|val| {
        val.parse::<u32>().map_or_else(
            |_| {
                errors.push(format!("usage_limit: invalid number '{val}'"));
                None
            },
            Some,
        )
    });

    let date_format = format_description!("[year]-[month]-[day]");
    let expires_at: Option<Date> = get_field("expires_at").and_then(|val| {
        Date::parse(&val, &date_format).map_or_else(
            |_| {
                errors.push(format!(
                    "expires_at: invalid date '{val}' (expected YYYY-MM-DD)"
                ));
                None
            },
            Some,
        )
    });

    if !errors.is_empty() {
        return Err(errors);
    }

    let coupon_type: CouponType = match type_str.to_lowercase().as_str() {
        "percentage" => CouponType::Percentage,
        "fixed" => CouponType::Fixed,
        _ => {
            errors.push(format!(
                "type: invalid value '{type_str}' (must be Percentage or Fixed)"
            ));
            return Err(errors);
        }
    };

    let value: i64 = match value_str.parse::<i64>() {
        Ok(num) => num,
        Err(_) => {
            errors.push(format!("value: invalid number '{value_str}'"));
            return Err(errors);
        }
    };

    Ok(ParsedCouponRow {
        code,
        coupon_type,
        value,
        usage_limit,
        expires_at,
    })
}

/// Validates a parsed coupon row against domain rules and existing state.
fn validate_coupon_row(
    parsed: &ParsedCouponRow,
    state: &DomainState,
    seen_codes: &HashSet<String>,
) -> Vec<String> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = validate_coupon_value(parsed.coupon_type, parsed.value) {
        errors.push(format!("value: {e}"));
    }

    if state
        .coupons
        .iter()
        .any(|coupon| coupon.code.eq_ignore_ascii_case(&parsed.code))
    {
        errors.push(format!("code: coupon code '{}' already exists", parsed.code));
    }

    if seen_codes.contains(&parsed.code) {
        errors.push(format!(
            "code: duplicate within CSV - '{}' appears multiple times",
            parsed.code
        ));
    }

    errors
}

/// Previews and validates CSV coupon data without persisting.
///
/// # Arguments
///
/// * `csv_content` - The raw CSV content as a string
/// * `state` - The current state, used for duplicate-code checks
///
/// # Returns
///
/// * `Ok(CsvPreviewResult)` with per-row validation results
/// * `Err(ApiError)` if the CSV structure itself is unreadable
#[allow(clippy::too_many_lines)]
pub fn preview_csv_coupons(
    csv_content: &str,
    state: &DomainState,
) -> Result<CsvPreviewResult, ApiError> {
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

    let mut results: Vec<CsvRowResult> = Vec::new();
    let mut seen_codes: HashSet<String> = HashSet::new();

    for (idx, result) in reader.records().enumerate() {
        let row_number: usize = idx + 1;

        let record: StringRecord = match result {
            Ok(rec) => rec,
            Err(e) => {
                results.push(CsvRowResult {
                    row_number,
                    code: None,
                    coupon_type: None,
                    value: None,
                    usage_limit: None,
                    expires_at: None,
                    status: CsvRowStatus::Invalid,
                    errors: vec![format!("CSV parse error: {e}")],
                });
                continue;
            }
        };

        match parse_csv_row(&record, &header_map) {
            Ok(parsed) => {
                let validation_errors: Vec<String> =
                    validate_coupon_row(&parsed, state, &seen_codes);

                let status: CsvRowStatus = if validation_errors.is_empty() {
                    CsvRowStatus::Valid
                } else {
                    CsvRowStatus::Invalid
                };

                // Track codes for intra-CSV uniqueness checks
                seen_codes.insert(parsed.code.clone());

                results.push(CsvRowResult {
                    row_number,
                    code: Some(parsed.code),
                    coupon_type: Some(parsed.coupon_type.to_string()),
                    value: Some(parsed.value),
                    usage_limit: parsed.usage_limit,
                    expires_at: parsed.expires_at,
                    status,
                    errors: validation_errors,
                });
            }
            Err(parse_errors) => {
                // Parsing failed - extract what we can for display
                let code_opt: Option<String> = header_map
                    .get("code")
                    .and_then(|&idx| record.get(idx))
                    .map(|s| s.trim().to_uppercase())
                    .filter(|s| !s.is_empty());

                let type_opt: Option<String> = header_map
                    .get("type")
                    .and_then(|&idx| record.get(idx))
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty());

                let value_opt: Option<i64> = header_map
                    .get("value")
                    .and_then(|&idx| record.get(idx).and_then(|s| s.trim().parse::<i64>().ok()));

                let usage_limit_opt: Option<u32> = header_map
                    .get("usage_limit")
                    .and_then(|&idx| record.get(idx).and_then(|s| s.trim().parse::<u32>().ok()));

                results.push(CsvRowResult {
                    row_number,
                    code: code_opt,
                    coupon_type: type_opt,
                    value: value_opt,
                    usage_limit: usage_limit_opt,
                    expires_at: None,
                    status: CsvRowStatus::Invalid,
                    errors: parse_errors,
                });
            }
        }
    }

    for row in results
        .iter()
        .filter(|row| row.status == CsvRowStatus::Invalid)
    {
        tracing::warn!(
            "Coupon CSV row {} rejected: {}",
            row.row_number,
            row.errors.join("; ")
        );
    }

    let total_rows: usize = results.len();
    let valid_count: usize = results
        .iter()
        .filter(|row| row.status == CsvRowStatus::Valid)
        .count();
    let invalid_count: usize = total_rows - valid_count;

    Ok(CsvPreviewResult {
        rows: results,
        total_rows,
        valid_count,
        invalid_count,
    })
}
