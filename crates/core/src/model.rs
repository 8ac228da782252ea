//! Report entity model.
//!
//! A [`Report`] records one near-miss event. The wire format (HTTP bodies,
//! the persisted document, and import/export files) uses camelCase field
//! names, so every serde derive here renames accordingly.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// An ordered sequence of reports, newest-first by construction: new
/// entries are prepended, never sorted.
pub type ReportCollection = Vec<Report>;

/// Closed set of incident categories. Locations are free-form, categories
/// are not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Operational,
    Equipment,
    Environmental,
    HumanError,
}

impl Category {
    /// Every category, in form-display order. The set is closed; locations
    /// are the only free-form facet.
    pub const ALL: [Category; 4] = [
        Category::Operational,
        Category::Equipment,
        Category::Environmental,
        Category::HumanError,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Matches the serde representation so text search and category
        // filtering agree on the same strings.
        let name = match self {
            Category::Operational => "Operational",
            Category::Equipment => "Equipment",
            Category::Environmental => "Environmental",
            Category::HumanError => "HumanError",
        };
        f.write_str(name)
    }
}

/// Assessed risk level of the near miss. Defaults to `Low` on the entry
/// form and for sparse imported records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        };
        f.write_str(name)
    }
}

/// A single near-miss report.
///
/// Every field carries `#[serde(default)]`: imported documents are merged
/// without per-record schema validation, so structurally sparse records
/// must still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Opaque unique id. Assigned client-side at creation (UUIDv7, so
    /// time-ordered); a server-assigned id is authoritative if the remote
    /// mirror returns one.
    #[serde(default)]
    pub id: String,
    /// Calendar date of the event (day precision).
    #[serde(default)]
    pub date: NaiveDate,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub risk_level: RiskLevel,
    /// Optional inline photo as a base64 data URL (`data:image/...`).
    /// Stored opaquely; size is only bounded by the server body limit.
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub follow_up_done: bool,
    /// Set once at creation, immutable afterwards.
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

impl Report {
    /// Build a new report from a validated draft, assigning a fresh id and
    /// creation timestamp.
    pub fn create(draft: ReportDraft) -> Result<Self, CoreError> {
        draft.validate()?;
        Ok(Self {
            id: Uuid::now_v7().to_string(),
            date: draft.date,
            location: draft.location,
            category: draft.category,
            description: draft.description,
            risk_level: draft.risk_level,
            photo: draft.photo,
            follow_up_done: false,
            created_at: Utc::now(),
        })
    }
}

/// The form-submission payload for a new report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    pub date: NaiveDate,
    pub location: String,
    #[serde(default)]
    pub category: Category,
    pub description: String,
    #[serde(default)]
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub photo: Option<String>,
}

impl ReportDraft {
    /// Check the required free-text fields. A failed submission mutates
    /// nothing and is reported back to the user synchronously.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.location.trim().is_empty() {
            return Err(CoreError::Validation("location must not be empty".into()));
        }
        if self.description.trim().is_empty() {
            return Err(CoreError::Validation(
                "description must not be empty".into(),
            ));
        }
        Ok(())
    }
}
