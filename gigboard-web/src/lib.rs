pub mod api;
pub mod pages;

use dioxus::prelude::*;
use pages::{AdminLayout, EditGig, GigList, NewGig};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AdminLayout)]
    #[route("/")]
    GigList {},
    #[route("/gigs/new")]
    NewGig {},
    #[route("/gigs/:gig_id/edit")]
    EditGig { gig_id: String },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
