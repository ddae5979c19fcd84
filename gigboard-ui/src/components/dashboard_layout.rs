//! Dashboard layout view component
//!
//! Provides the admin console chrome: a top navigation bar and a slot
//! for the routed page content.

use dioxus::prelude::*;

/// Navigation entry in the top bar
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}

/// Dashboard layout view (pure, props-based)
#[component]
pub fn DashboardLayoutView(
    nav_items: Vec<NavItem>,
    on_nav_click: EventHandler<String>,
    /// Main content (typically the router outlet)
    children: Element,
) -> Element {
    rsx! {
        div { class: "h-screen flex flex-col bg-gray-900",
            header { class: "flex items-center gap-6 px-6 py-3 border-b border-gray-800",
                span { class: "text-white font-semibold", "Gigboard" }
                nav { class: "flex gap-4",
                    for item in &nav_items {
                        button {
                            key: "{item.id}",
                            class: if item.is_active {
                                "text-sm text-white"
                            } else {
                                "text-sm text-gray-400 hover:text-white transition-colors"
                            },
                            onclick: {
                                let id = item.id.clone();
                                move |_| on_nav_click.call(id.clone())
                            },
                            "{item.label}"
                        }
                    }
                }
            }
            main { class: "flex-1 overflow-y-auto", {children} }
        }
    }
}
