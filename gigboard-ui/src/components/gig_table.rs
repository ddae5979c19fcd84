//! Gig table component

use crate::components::utils::{format_date, format_price};
use crate::display_types::Gig;
use dioxus::prelude::*;

/// Table of gigs with a row-click callback
#[component]
pub fn GigTableView(gigs: Vec<Gig>, on_row_click: EventHandler<String>) -> Element {
    if gigs.is_empty() {
        return rsx! {
            p { class: "text-gray-400 py-12 text-center", "No gigs yet." }
        };
    }

    rsx! {
        table { class: "w-full text-left text-sm text-gray-300",
            thead {
                tr { class: "text-xs uppercase text-gray-500",
                    th { class: "px-4 py-3", "Title" }
                    th { class: "px-4 py-3", "Category" }
                    th { class: "px-4 py-3", "Price" }
                    th { class: "px-4 py-3", "Status" }
                    th { class: "px-4 py-3", "Created" }
                }
            }
            tbody {
                for gig in &gigs {
                    tr {
                        key: "{gig.id}",
                        class: "border-t border-gray-800 hover:bg-gray-800/50 cursor-pointer transition-colors",
                        onclick: {
                            let id = gig.id.clone();
                            move |_| on_row_click.call(id.clone())
                        },
                        td { class: "px-4 py-3 text-white", "{gig.title}" }
                        td { class: "px-4 py-3", "{gig.category}" }
                        td { class: "px-4 py-3", "{format_price(gig.price_cents)}" }
                        td { class: "px-4 py-3", "{gig.status.display_name()}" }
                        td { class: "px-4 py-3", "{format_date(&gig.created_at)}" }
                    }
                }
            }
        }
    }
}
