//! Preview gallery of ingested images.
//!
//! Shows one card per session entry in session order. Each card has a
//! remove button; indices passed to `on_remove` always refer to the list
//! as currently rendered.

use dioxus::prelude::*;

/// Display data for one gallery card.
///
/// Built fresh from the session on every render, so a removed entry's
/// URL is never rendered again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewCard {
    /// File name shown under the image.
    pub name: String,
    /// Live Blob URL of the preview.
    pub url: String,
}

/// Props for the [`Gallery`] component.
#[derive(Props, Clone, PartialEq)]
pub struct GalleryProps {
    /// Cards in session order.
    cards: Vec<PreviewCard>,
    /// Whether removal is currently refused.
    disabled: bool,
    /// Called with the index of the card to remove.
    on_remove: EventHandler<usize>,
}

/// Grid of image cards with per-card remove buttons.
#[component]
pub fn Gallery(props: GalleryProps) -> Element {
    let on_remove = props.on_remove;
    rsx! {
        div { class: "preview-container",
            for (index, card) in props.cards.iter().enumerate() {
                div { key: "{card.url}", class: "image-card",
                    img { src: "{card.url}", alt: "{card.name}", class: "preview-image" }
                    p { class: "file-name", "{card.name}" }
                    button {
                        class: "remove-button",
                        title: "Remove image",
                        aria_label: "Remove {card.name}",
                        disabled: props.disabled,
                        onclick: move |_| on_remove.call(index),
                        "×"
                    }
                }
            }
        }
    }
}
