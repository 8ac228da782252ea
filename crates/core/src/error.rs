#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A required field on a submission is missing or empty.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An imported document is not a JSON array of reports.
    #[error("Import format error: {0}")]
    ImportFormat(String),

    /// No report exists with the given id.
    #[error("Report not found: {id}")]
    NotFound { id: String },
}
