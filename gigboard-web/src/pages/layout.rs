use crate::Route;
use dioxus::prelude::*;
use gigboard_ui::{DashboardLayoutView, NavItem, PageContainer};

#[component]
pub fn AdminLayout() -> Element {
    let current_route = use_route::<Route>();

    let nav_items = vec![
        NavItem {
            id: "gigs".to_string(),
            label: "Gigs".to_string(),
            is_active: matches!(current_route, Route::GigList {} | Route::EditGig { .. }),
        },
        NavItem {
            id: "new-gig".to_string(),
            label: "New Gig".to_string(),
            is_active: matches!(current_route, Route::NewGig {}),
        },
    ];

    rsx! {
        DashboardLayoutView {
            nav_items,
            on_nav_click: move |id: String| {
                match id.as_str() {
                    "gigs" => {
                        navigator().push(Route::GigList {});
                    }
                    "new-gig" => {
                        navigator().push(Route::NewGig {});
                    }
                    _ => {}
                }
            },
            PageContainer { Outlet::<Route> {} }
        }
    }
}
