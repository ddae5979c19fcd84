//! Page container component

use dioxus::prelude::*;

/// Standard page container: centered column with consistent padding
#[component]
pub fn PageContainer(children: Element) -> Element {
    rsx! {
        div { class: "max-w-5xl mx-auto px-6 py-8", {children} }
    }
}
