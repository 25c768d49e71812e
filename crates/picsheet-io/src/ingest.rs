//! Reading a file selection.
//!
//! Every file of a selection is read concurrently and the reads are
//! joined before anything is probed, so a batch is committed whole or
//! not at all.

use dioxus::html::FileData;
use futures::future::try_join_all;
use picsheet_catalog::{ImageEntry, IngestError, SelectedFile, assemble_batch};

use crate::preview::{BlobUrl, mint_preview};

/// Read the bytes of every selected file.
///
/// # Errors
///
/// Returns [`IngestError::Read`] for the first file that fails to read.
#[allow(clippy::future_not_send)] // WASM is single-threaded; FileData is !Send
pub async fn read_selection(files: Vec<FileData>) -> Result<Vec<SelectedFile>, IngestError> {
    let reads = files.into_iter().map(|file| async move {
        let name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => Ok(SelectedFile::new(name, bytes.to_vec())),
            Err(e) => Err(IngestError::Read {
                name,
                reason: e.to_string(),
            }),
        }
    });
    try_join_all(reads).await
}

/// Read, probe, and mint previews for a whole selection.
///
/// # Errors
///
/// Returns the first read, probe, or preview error. Nothing from the
/// selection survives a failure.
#[allow(clippy::future_not_send)] // WASM is single-threaded; FileData is !Send
pub async fn ingest_selection(
    files: Vec<FileData>,
) -> Result<Vec<ImageEntry<BlobUrl>>, IngestError> {
    let count = files.len();
    let selected = read_selection(files).await?;
    let batch = assemble_batch(selected, mint_preview)?;
    tracing::debug!(count, "ingested selection");
    Ok(batch)
}
