pub mod edit_gig;
pub mod gig_list;
pub mod layout;
pub mod new_gig;

pub use edit_gig::EditGig;
pub use gig_list::GigList;
pub use layout::AdminLayout;
pub use new_gig::NewGig;
