//! picsheet-catalog: Image entries and session state (sans-IO).
//!
//! Turns selected files into [`ImageEntry`] values by probing their
//! headers for natural dimensions and inferring the embedding format from
//! the file name, then holds them in an ordered [`Session`].
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! byte slices. Reading files and creating browser preview URLs lives in
//! `picsheet-io`; previews are abstracted behind [`PreviewHandle`].

pub mod ingest;
pub mod probe;
pub mod session;
pub mod types;

pub use ingest::{SelectedFile, assemble_batch};
pub use probe::probe;
pub use session::{Activity, Session, SessionError};
pub use types::{Dimensions, ImageEntry, ImageFormat, IngestError, NoPreview, PreviewHandle, ProbedImage};
