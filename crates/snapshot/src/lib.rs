//! # Snapshot Crate
//!
//! The snapshot provider: reads one JSON file per exchange from a folder
//! and deserializes them into the shared `Exchange` model. The loader
//! fails fast on the first malformed file rather than silently dropping
//! data, so the planner never sees a partially-loaded exchange list.
//!
//! Validity filtering of individual orders (non-positive price or size)
//! is deliberately NOT done here; tolerating and ignoring such orders is
//! the planner's responsibility.

use core_types::Exchange;
use std::collections::HashSet;
use std::path::Path;

pub mod error;

pub use error::SnapshotError;

/// Loads every `*.json` file in the top level of `folder` as one exchange
/// snapshot.
///
/// Files are read in file-name order so the resulting exchange list (and
/// therefore the order of post-trade balances in a plan) is deterministic
/// across runs. Duplicate exchange ids are kept but logged: the planner
/// keys running balances by id, so the later file's funds seed the shared
/// pool and the earlier file's funds are discarded.
pub async fn load_exchanges(folder: impl AsRef<Path>) -> Result<Vec<Exchange>, SnapshotError> {
    let folder = folder.as_ref();
    if !folder.is_dir() {
        return Err(SnapshotError::FolderNotFound(folder.to_path_buf()));
    }

    let mut files = Vec::new();
    let mut entries = tokio::fs::read_dir(folder).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();

    let mut exchanges = Vec::with_capacity(files.len());
    let mut seen_ids: HashSet<String> = HashSet::new();

    for file in files {
        let contents = tokio::fs::read_to_string(&file).await?;
        let exchange: Exchange =
            serde_json::from_str(&contents).map_err(|source| SnapshotError::Parse {
                file: file.display().to_string(),
                source,
            })?;

        if !seen_ids.insert(exchange.id.clone()) {
            tracing::warn!(
                exchange_id = %exchange.id,
                file = %file.display(),
                "duplicate exchange id in snapshot folder; this file's balances replace the earlier ones"
            );
        }
        exchanges.push(exchange);
    }

    tracing::info!(
        folder = %folder.display(),
        count = exchanges.len(),
        "loaded exchange snapshots"
    );
    Ok(exchanges)
}
