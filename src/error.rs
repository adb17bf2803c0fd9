use thiserror::Error;

/// Errors raised by the catalog itself. Queries never fail, only insertion can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("invalid album reference '{album}' for song '{song}'")]
    InvalidReference { song: String, album: String },
}

/// Errors raised while reading catalog fixtures from disk.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
