//! Shared UI components

pub mod dashboard_layout;
pub mod gig_form;
pub mod gig_table;
pub mod helpers;
pub mod text_input;
pub mod utils;

pub use dashboard_layout::{DashboardLayoutView, NavItem};
pub use gig_form::GigFormView;
pub use gig_table::GigTableView;
pub use helpers::{BackButton, ErrorDisplay, ErrorPanel, FormSkeleton, PageContainer, PageHeader};
pub use text_input::{TextInput, TextInputSize};
pub use utils::{format_date, format_price, truncate_title};
