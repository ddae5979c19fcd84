//! Edit gig page
//!
//! Resolves the route identifier into a gig record and hands it to the
//! edit form, with a skeleton while the load is in flight and a
//! terminal error panel otherwise. Exactly one load is started per
//! identifier change; settlements are fed through `GigEditState`, which
//! discards any that arrive for an identifier other than the current
//! one, so rapid navigation between gigs cannot interleave. Save state
//! lives in the same store and is reset by each `Started`, so one gig's
//! save failure never shows on another gig's form.

use crate::api;
use crate::Route;
use dioxus::prelude::*;
use gigboard_ui::display_types::GigDraft;
use gigboard_ui::stores::{GigEditState, GigLoadEvent, GigViewMode};
use gigboard_ui::{ErrorDisplay, ErrorPanel, FormSkeleton, GigFormView, PageHeader};
use tracing::error;

#[component]
pub fn EditGig(gig_id: ReadSignal<String>) -> Element {
    let mut state = use_signal(GigEditState::default);

    use_effect(move || {
        let id = gig_id();
        state.write().apply(GigLoadEvent::Started { gig_id: id.clone() });
        if id.is_empty() {
            return;
        }
        spawn(async move {
            let event = match api::fetch_gig(&id).await {
                Ok(Some(gig)) => GigLoadEvent::Loaded {
                    gig_id: id.clone(),
                    gig,
                },
                Ok(None) => GigLoadEvent::Missing { gig_id: id.clone() },
                Err(e) => {
                    error!("Failed to load gig {id}: {e}");
                    GigLoadEvent::Failed { gig_id: id.clone() }
                }
            };
            state.write().apply(event);
        });
    });

    let on_submit = move |draft: GigDraft| {
        let id = gig_id();
        state.write().begin_save();
        spawn(async move {
            match api::update_gig(&id, &draft).await {
                Ok(_) => {
                    state.write().save_finished(&id);
                    navigator().push(Route::GigList {});
                }
                Err(e) => {
                    error!("Failed to save gig {id}: {e}");
                    state
                        .write()
                        .save_failed(&id, format!("Failed to save gig: {e}"));
                }
            }
        });
    };

    let (view, saving, save_error) = {
        let read = state.read();
        (read.view_mode(), read.saving, read.save_error.clone())
    };

    match view {
        GigViewMode::Loading => rsx! {
            FormSkeleton {}
        },
        GigViewMode::Error(message) => rsx! {
            ErrorPanel {
                message,
                on_back: move |_| {
                    navigator().push(Route::GigList {});
                },
            }
        },
        GigViewMode::Ready(gig) => rsx! {
            PageHeader { title: gig.title.clone(), subtitle: "Edit gig" }
            if let Some(err) = save_error {
                ErrorDisplay { message: err }
            }
            GigFormView {
                initial_data: gig,
                is_edit: true,
                submitting: saving,
                on_submit,
            }
        },
    }
}
