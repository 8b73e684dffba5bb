use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Orderbooks folder not found: {0}")]
    FolderNotFound(PathBuf),

    #[error("I/O error while reading snapshots: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON in {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}
