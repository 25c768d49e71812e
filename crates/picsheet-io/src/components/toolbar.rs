//! Export and clear buttons.

use dioxus::prelude::*;

/// Props for the [`Toolbar`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ToolbarProps {
    /// Number of entries in the session.
    entry_count: usize,
    /// Whether a selection is being ingested.
    ingesting: bool,
    /// Whether a workbook is being exported.
    exporting: bool,
    /// Fired when "Export to Excel" is clicked.
    on_export: EventHandler<()>,
    /// Fired when "Clear All" is clicked.
    on_clear: EventHandler<()>,
}

/// Export button plus a "Clear All" button shown once images exist.
///
/// Both are disabled while ingesting or exporting; export is also
/// disabled for an empty session.
#[component]
pub fn Toolbar(props: ToolbarProps) -> Element {
    let busy = props.ingesting || props.exporting;
    let export_disabled = props.entry_count == 0 || busy;
    let export_class = if export_disabled {
        "primary-button export-button disabled"
    } else {
        "primary-button export-button"
    };
    let export_label = if props.exporting {
        "Exporting..."
    } else {
        "Export to Excel"
    };

    rsx! {
        button {
            class: "{export_class}",
            disabled: export_disabled,
            onclick: move |_| props.on_export.call(()),
            "{export_label}"
        }

        if props.entry_count > 0 {
            button {
                class: "secondary-button",
                disabled: busy,
                onclick: move |_| props.on_clear.call(()),
                "Clear All"
            }
        }
    }
}
