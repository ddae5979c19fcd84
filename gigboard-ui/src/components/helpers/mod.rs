//! Small shared page components

pub mod back_button;
pub mod error_display;
pub mod error_panel;
pub mod form_skeleton;
pub mod page_container;
pub mod page_header;

pub use back_button::BackButton;
pub use error_display::ErrorDisplay;
pub use error_panel::ErrorPanel;
pub use form_skeleton::FormSkeleton;
pub use page_container::PageContainer;
pub use page_header::PageHeader;
