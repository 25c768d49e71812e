use dioxus::html::FileData;
use dioxus::prelude::*;
use picsheet_catalog::{Activity, Session};
use picsheet_export::{ExportConfig, XLSX_MIME_TYPE};
use picsheet_io::{ActivityGuard, BlobUrl, FilePicker, Gallery, PreviewCard, Toolbar, download};

fn main() {
    // A logger may already be installed (e.g. by `dx serve`); keep it.
    let _ = dioxus::logger::init(dioxus::logger::tracing::Level::INFO);
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the session signal and wires the picker, toolbar, and gallery to
/// ingestion, export, and removal.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    // --- Application state ---
    let mut session = use_signal(Session::<BlobUrl>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let config = use_signal(ExportConfig::default);

    // --- Ingestion ---
    // All files of one selection are committed together or not at all.
    let on_select = move |files: Vec<FileData>| {
        let guard = match ActivityGuard::begin_selection(session, files.len()) {
            Ok(Some(guard)) => guard,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!("selection ignored: {e}");
                return;
            }
        };
        error.set(None);

        spawn(async move {
            match picsheet_io::ingest_selection(files).await {
                Ok(batch) => {
                    session.write().commit(batch);
                }
                Err(e) => {
                    tracing::error!("Error processing images: {e}");
                    error.set(Some(format!("Could not add images: {e}")));
                }
            }
            drop(guard);
        });
    };

    // --- Export ---
    let on_export = move |()| {
        if session.read().is_empty() {
            return;
        }
        let guard = match ActivityGuard::begin(session, Activity::Exporting) {
            Ok(guard) => guard,
            Err(e) => {
                tracing::warn!("export ignored: {e}");
                return;
            }
        };
        error.set(None);

        spawn(async move {
            let _guard = guard;
            // Yield so the "Exporting..." label paints before the
            // synchronous workbook build blocks the thread.
            gloo_timers::future::TimeoutFuture::new(0).await;

            let config = config.read();
            let outcome = picsheet_export::to_xlsx(session.read().entries(), &config);
            let bytes = match outcome {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::error!("Error exporting to Excel: {e}");
                    error.set(Some(format!("Export failed: {e}")));
                    return;
                }
            };
            match download::trigger_download(&bytes, &config.file_name, XLSX_MIME_TYPE) {
                Ok(()) => tracing::info!(file = %config.file_name, bytes = bytes.len(), "downloaded workbook"),
                Err(e) => {
                    tracing::error!("Error downloading workbook: {e}");
                    error.set(Some(format!("Download failed: {e}")));
                }
            }
        });
    };

    // --- Removal ---
    let on_remove = move |index: usize| {
        if let Err(e) = session.write().remove(index) {
            tracing::warn!("remove refused: {e}");
        }
    };

    let on_clear = move |()| {
        if let Err(e) = session.write().clear() {
            tracing::warn!("clear refused: {e}");
        }
    };

    // --- Derived view state ---
    let state = session.read();
    let activity = state.activity();
    let ingesting = activity == Activity::Ingesting;
    let exporting = activity == Activity::Exporting;
    let entry_count = state.len();
    let cards: Vec<PreviewCard> = state
        .entries()
        .iter()
        .map(|entry| PreviewCard {
            name: entry.name().to_owned(),
            url: entry.preview().as_str().to_owned(),
        })
        .collect();
    drop(state);

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/picsheet.css") }

        div { class: "image-extractor-container",
            h1 { class: "image-extractor-header", "Images to Spreadsheet" }

            div { class: "button-container",
                FilePicker {
                    disabled: ingesting || exporting,
                    uploading: ingesting,
                    on_select: on_select,
                }
                Toolbar {
                    entry_count: entry_count,
                    ingesting: ingesting,
                    exporting: exporting,
                    on_export: on_export,
                    on_clear: on_clear,
                }
            }

            if let Some(ref err) = error() {
                div { class: "error-banner",
                    p { "{err}" }
                }
            }

            if ingesting {
                div { class: "loading-state",
                    div { class: "spinner" }
                    p { "Processing images..." }
                }
            } else if cards.is_empty() {
                div { class: "empty-state",
                    div { class: "empty-state-content",
                        p { class: "empty-state-text", "No images selected" }
                        p { class: "empty-state-subtext",
                            "Click \"Select Images\" or drop images above to add them"
                        }
                    }
                }
            } else {
                Gallery {
                    cards: cards,
                    disabled: exporting,
                    on_remove: on_remove,
                }
            }
        }
    }
}
