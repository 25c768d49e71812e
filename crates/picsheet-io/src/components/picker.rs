//! Multi-file image picker with drag-and-drop.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;

/// Props for the [`FilePicker`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FilePickerProps {
    /// Whether selection is currently refused (ingesting or exporting).
    disabled: bool,
    /// Whether a selection is being read, to switch the button label.
    uploading: bool,
    /// Called with the selected files. Never called with an empty list.
    on_select: EventHandler<Vec<FileData>>,
}

/// A drop zone with a "Select Images" button.
///
/// Accepts any `image/*` file and multiple files at once. An empty
/// selection (e.g., a cancelled dialog) fires nothing.
#[component]
pub fn FilePicker(props: FilePickerProps) -> Element {
    let mut dragging = use_signal(|| false);
    let disabled = props.disabled;

    let forward = move |files: Vec<FileData>| {
        if disabled || files.is_empty() {
            return;
        }
        props.on_select.call(files);
    };

    let handle_change = move |evt: FormEvent| {
        forward(evt.files());
    };

    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        dragging.set(false);
        forward(evt.files());
    };

    let zone_class = if dragging() { "drop-zone dragging" } else { "drop-zone" };
    let button_class = if disabled {
        "primary-button disabled"
    } else {
        "primary-button"
    };
    let label = if props.uploading { "Uploading..." } else { "Select Images" };

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            label { class: "{button_class}",
                input {
                    r#type: "file",
                    accept: "image/*",
                    multiple: true,
                    class: "file-input",
                    disabled: disabled,
                    onchange: handle_change,
                }
                "{label}"
            }
        }
    }
}
