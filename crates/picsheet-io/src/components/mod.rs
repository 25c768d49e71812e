//! Dioxus UI components for picsheet.
//!
//! Provides the multi-file picker with drag-and-drop, the toolbar with
//! export and clear buttons, and the preview gallery.

mod gallery;
mod picker;
mod toolbar;

pub use gallery::{Gallery, PreviewCard};
pub use picker::FilePicker;
pub use toolbar::Toolbar;
