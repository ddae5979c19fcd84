//! Page header component

use crate::components::utils::truncate_title;
use dioxus::prelude::*;

/// Page title with optional subtitle. Long titles are truncated so a
/// record name cannot blow out the header.
#[component]
pub fn PageHeader(title: String, #[props(default)] subtitle: Option<String>) -> Element {
    let display_title = truncate_title(&title, 60);
    rsx! {
        div { class: "mb-8",
            h1 { class: "text-2xl font-semibold text-white", "data-testid": "page-title",
                "{display_title}"
            }
            if let Some(sub) = subtitle {
                p { class: "text-sm text-gray-400 mt-1", "{sub}" }
            }
        }
    }
}
