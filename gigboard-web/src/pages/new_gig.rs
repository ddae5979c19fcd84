//! Create gig page

use crate::api;
use crate::Route;
use dioxus::prelude::*;
use gigboard_ui::display_types::GigDraft;
use gigboard_ui::{ErrorDisplay, GigFormView, PageHeader};
use tracing::error;

#[component]
pub fn NewGig() -> Element {
    let mut saving = use_signal(|| false);
    let mut save_error = use_signal(|| None::<String>);

    let on_submit = move |draft: GigDraft| {
        saving.set(true);
        save_error.set(None);
        spawn(async move {
            match api::create_gig(&draft).await {
                Ok(gig) => {
                    navigator().push(Route::EditGig { gig_id: gig.id });
                }
                Err(e) => {
                    error!("Failed to create gig: {e}");
                    save_error.set(Some(format!("Failed to create gig: {e}")));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        PageHeader { title: "New Gig", subtitle: "Create a gig listing" }
        if let Some(err) = save_error() {
            ErrorDisplay { message: err }
        }
        GigFormView { submitting: saving(), on_submit }
    }
}
