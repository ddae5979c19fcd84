//! Back button component

use dioxus::prelude::*;

/// Back-navigation control shown above detail and error views
#[component]
pub fn BackButton(
    /// Text to display (default: "Back to Gigs")
    #[props(default = "Back to Gigs".to_string())]
    text: String,
    on_click: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "mb-6",
            button {
                class: "inline-flex items-center gap-2 text-gray-400 hover:text-white transition-colors",
                "data-testid": "back-button",
                onclick: move |_| on_click.call(()),
                span { class: "text-lg leading-none", "\u{2190}" }
                "{text}"
            }
        }
    }
}
