use crate::api;
use crate::Route;
use dioxus::prelude::*;
use gigboard_ui::stores::{GigListEvent, GigListState, GigListViewMode};
use gigboard_ui::{ErrorDisplay, GigTableView, PageHeader};
use tracing::error;

#[component]
pub fn GigList() -> Element {
    let mut state = use_signal(GigListState::default);

    use_effect(move || {
        state.write().apply(GigListEvent::Started);
        spawn(async move {
            let event = match api::fetch_gigs().await {
                Ok(gigs) => GigListEvent::Loaded { gigs },
                Err(e) => {
                    error!("Failed to load gigs: {e}");
                    GigListEvent::Failed {
                        message: format!("Failed to load gigs: {e}"),
                    }
                }
            };
            state.write().apply(event);
        });
    });

    let view_mode = state.read().view_mode();
    match view_mode {
        GigListViewMode::Loading => rsx! {
            div { class: "flex items-center justify-center h-full text-gray-400",
                "Loading..."
            }
        },
        GigListViewMode::Error(message) => rsx! {
            PageHeader { title: "Gigs", subtitle: "All gig listings" }
            ErrorDisplay { message }
        },
        GigListViewMode::Ready(gigs) => rsx! {
            PageHeader { title: "Gigs", subtitle: "All gig listings" }
            GigTableView {
                gigs,
                on_row_click: move |gig_id: String| {
                    navigator().push(Route::EditGig { gig_id });
                },
            }
        },
    }
}
