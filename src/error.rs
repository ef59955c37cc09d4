use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    /// A registered user has no sanitized contact list. Means the sanitizer
    /// ran over a different record set than the registry.
    #[error("No sanitized contact list for registered user {phone}")]
    MissingContacts { phone: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
