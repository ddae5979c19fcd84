//! Loading placeholder for form pages

use dioxus::prelude::*;

/// Pulsing skeleton approximating a form page: a header bar and a
/// column of field-sized blocks, no data-bearing content.
#[component]
pub fn FormSkeleton() -> Element {
    rsx! {
        div { class: "animate-pulse", "data-testid": "form-skeleton",
            div { class: "h-8 w-1/3 bg-gray-700 rounded mb-8" }
            div { class: "space-y-6",
                for i in 0..4 {
                    div { key: "{i}",
                        div { class: "h-4 w-24 bg-gray-700 rounded mb-2" }
                        div { class: "h-10 w-full bg-gray-800 rounded" }
                    }
                }
            }
        }
    }
}
