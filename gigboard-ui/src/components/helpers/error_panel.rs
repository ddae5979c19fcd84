//! Terminal error panel for detail pages

use super::back_button::BackButton;
use super::error_display::ErrorDisplay;
use dioxus::prelude::*;

/// Error panel with a navigation control back to the record list
#[component]
pub fn ErrorPanel(message: String, on_back: EventHandler<()>) -> Element {
    rsx! {
        BackButton { on_click: move |_| on_back.call(()) }
        ErrorDisplay { message }
    }
}
