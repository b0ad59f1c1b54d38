use thiserror::Error;

/// Errors that can occur while loading the catalog.
///
/// Any of these is fatal to start-up: the catalog never loads partially.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("malformed record at position {position} (id {id}): {reason}")]
    MalformedRecord {
        position: usize,
        id: String,
        reason: MalformedReason,
    },
}

/// Why a record was rejected at load time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("category is missing")]
    MissingCategory,
    #[error("unknown category \"{0}\"")]
    UnknownCategory(String),
    #[error("category \"all\" is a query wildcard, not a record category")]
    WildcardCategory,
    #[error("unknown status \"{0}\"")]
    UnknownStatus(String),
    #[error("could not parse completion date \"{0}\"")]
    InvalidCompletionDate(String),
    #[error("status is completed but no completion date is set")]
    CompletedWithoutDate,
    #[error("status is in-progress but a completion date is set")]
    InProgressWithDate,
    #[error("duplicate id")]
    DuplicateId,
}

/// Errors that can occur while mutating a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("invalid category: {0}")]
    InvalidCategory(String),
}

impl CatalogError {
    pub fn malformed(position: usize, id: impl Into<String>, reason: MalformedReason) -> Self {
        Self::MalformedRecord {
            position,
            id: id.into(),
            reason,
        }
    }
}
