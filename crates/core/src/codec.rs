//! Import/export codec for the report collection.
//!
//! Exports the full collection (photo payloads included) as a bare,
//! pretty-printed JSON array. Imports require the top-level value to be an
//! array; individual records are deserialized leniently (missing fields
//! default) and are neither deduplicated nor checked for id collisions.

use chrono::NaiveDate;

use crate::error::CoreError;
use crate::model::Report;

/// Serialize the full collection to a portable JSON array.
pub fn export_json(reports: &[Report]) -> String {
    serde_json::to_string_pretty(reports).expect("report collection is always serialisable")
}

/// Suggested filename for an export taken on `date`:
/// `near-miss-reports_<ISO-date>.json`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("near-miss-reports_{date}.json")
}

/// Parse an uploaded JSON document into a list of reports.
///
/// Any top-level shape other than an array is a format error, as is
/// unparsable JSON. A format error aborts the import; there is no partial
/// merge. The caller prepends the returned records to its collection.
pub fn import_json(input: &str) -> Result<Vec<Report>, CoreError> {
    let value: serde_json::Value = serde_json::from_str(input)
        .map_err(|e| CoreError::ImportFormat(format!("invalid JSON: {e}")))?;

    if !value.is_array() {
        return Err(CoreError::ImportFormat(
            "top-level value must be an array of reports".into(),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| CoreError::ImportFormat(format!("unreadable report entry: {e}")))
}
