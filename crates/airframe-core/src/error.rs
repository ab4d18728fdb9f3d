use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AirframeError {
    #[error("document '{document}' unavailable: {reason}")]
    DocumentUnavailable { document: String, reason: String },

    #[error("{aircraft}: no performance table found")]
    NoMatchingTable { aircraft: String },

    #[error("{aircraft}: no bulleted item matches the {field} keywords")]
    NoMatchingList { aircraft: String, field: String },

    #[error("{aircraft}: could not resolve {field} from the matched entries")]
    MissingRequiredField { aircraft: String, field: String },

    #[error("failed to load catalog from {path}: {reason}")]
    CatalogLoad { path: PathBuf, reason: String },

    #[error("invalid catalog: {0}")]
    CatalogInvalid(String),

    #[error("unknown aircraft '{0}'")]
    UnknownAircraft(String),

    #[error("HTTP client setup failed: {0}")]
    HttpClient(String),

    #[error("worker pool: {0}")]
    WorkerPool(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AirframeError {
    /// True for failures that belong to a single aircraft rather than the run.
    pub fn is_per_profile(&self) -> bool {
        matches!(
            self,
            AirframeError::DocumentUnavailable { .. }
                | AirframeError::NoMatchingTable { .. }
                | AirframeError::NoMatchingList { .. }
                | AirframeError::MissingRequiredField { .. }
        )
    }
}
