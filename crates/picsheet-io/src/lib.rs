//! picsheet-io: Browser I/O and Dioxus component library.
//!
//! Handles reading selected files, Blob URL previews, workbook
//! downloads, and the busy guard around asynchronous session work, and
//! provides the UI components for the picsheet web application.

pub mod activity;
pub mod components;
pub mod download;
pub mod ingest;
pub mod preview;

pub use activity::ActivityGuard;
pub use components::{FilePicker, Gallery, PreviewCard, Toolbar};
pub use ingest::{ingest_selection, read_selection};
pub use preview::BlobUrl;
