//! Blob URL preview handles.
//!
//! Each ingested image gets an object URL created from its raw bytes so
//! an `<img>` can display it without re-reading the file. The URL holds
//! browser memory until it is revoked, which [`BlobUrl::release`] does.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use picsheet_catalog::{IngestError, PreviewHandle, ProbedImage};
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur while creating a preview URL.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for PreviewError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// An object URL for an image Blob.
///
/// Not `Clone`: exactly one owner revokes it.
#[derive(Debug, PartialEq, Eq)]
pub struct BlobUrl(String);

impl BlobUrl {
    /// Create an object URL for `bytes` with the given MIME type.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::JsError`] if Blob or URL creation fails.
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Result<Self, PreviewError> {
        let uint8_array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::new();
        parts.push(&uint8_array);

        let opts = BlobPropertyBag::new();
        opts.set_type(mime_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

        let url = web_sys::Url::create_object_url_with_blob(&blob)?;
        Ok(Self(url))
    }

    /// The URL, for use as an `<img src>`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PreviewHandle for BlobUrl {
    /// Revoke the object URL.
    ///
    /// Best-effort: a failed revocation only means the browser keeps the
    /// Blob alive until the page unloads.
    fn release(self) {
        let _ = web_sys::Url::revoke_object_url(&self.0);
    }
}

/// Mint a preview for a probed image, for use with
/// [`assemble_batch`](picsheet_catalog::assemble_batch).
///
/// # Errors
///
/// Returns [`IngestError::Preview`] if the object URL cannot be created.
pub fn mint_preview(image: &ProbedImage) -> Result<BlobUrl, IngestError> {
    BlobUrl::from_bytes(&image.bytes, image.format.mime_type()).map_err(|e| IngestError::Preview {
        name: image.name.clone(),
        reason: e.to_string(),
    })
}
