//! Gig list load state machine
//!
//! Same shape as the edit store, minus the identifier: the list page
//! fires `Started` when it begins a load and exactly one settlement
//! after, and renders from the `view_mode()` projection.

use crate::display_types::Gig;

/// State for the gig list page
#[derive(Clone, Debug, PartialEq)]
pub struct GigListState {
    pub gigs: Vec<Gig>,
    /// True from `Started` until the settlement
    pub loading: bool,
    /// User-facing error message if the load failed
    pub error: Option<String>,
}

impl Default for GigListState {
    fn default() -> Self {
        // The page mounts before its first `Started` event fires, so
        // the initial render must already be the loading view.
        Self {
            gigs: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

/// Load lifecycle event for the gig list
#[derive(Clone, Debug, PartialEq)]
pub enum GigListEvent {
    /// A load began
    Started,
    /// Loader settled with the full list
    Loaded { gigs: Vec<Gig> },
    /// Loader faulted
    Failed { message: String },
}

/// What the list page should render, in fixed precedence order
#[derive(Clone, Debug, PartialEq)]
pub enum GigListViewMode {
    Loading,
    Error(String),
    Ready(Vec<Gig>),
}

impl GigListState {
    pub fn apply(&mut self, event: GigListEvent) {
        match event {
            GigListEvent::Started => {
                self.gigs.clear();
                self.error = None;
                self.loading = true;
            }
            GigListEvent::Loaded { gigs } => {
                self.gigs = gigs;
                self.error = None;
                self.loading = false;
            }
            GigListEvent::Failed { message } => {
                self.gigs.clear();
                self.error = Some(message);
                self.loading = false;
            }
        }
    }

    /// Project the state into the render contract: loading, then error,
    /// then the loaded list (possibly empty).
    pub fn view_mode(&self) -> GigListViewMode {
        if self.loading {
            GigListViewMode::Loading
        } else if let Some(err) = &self.error {
            GigListViewMode::Error(err.clone())
        } else {
            GigListViewMode::Ready(self.gigs.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_types::GigStatus;

    fn gig(id: &str) -> Gig {
        Gig {
            id: id.to_string(),
            title: format!("Gig {id}"),
            description: String::new(),
            category: "design".to_string(),
            price_cents: 5000,
            status: GigStatus::Active,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn default_state_renders_loading() {
        assert_eq!(GigListState::default().view_mode(), GigListViewMode::Loading);
    }

    #[test]
    fn loaded_renders_list() {
        let mut state = GigListState::default();
        state.apply(GigListEvent::Started);
        state.apply(GigListEvent::Loaded {
            gigs: vec![gig("g-1"), gig("g-2")],
        });
        assert!(!state.loading);
        match state.view_mode() {
            GigListViewMode::Ready(gigs) => assert_eq!(gigs.len(), 2),
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn empty_list_is_ready_not_error() {
        let mut state = GigListState::default();
        state.apply(GigListEvent::Started);
        state.apply(GigListEvent::Loaded { gigs: vec![] });
        assert_eq!(state.view_mode(), GigListViewMode::Ready(vec![]));
    }

    #[test]
    fn failed_renders_error() {
        let mut state = GigListState::default();
        state.apply(GigListEvent::Started);
        state.apply(GigListEvent::Failed {
            message: "Failed to load gigs: boom".to_string(),
        });
        assert!(!state.loading);
        assert_eq!(
            state.view_mode(),
            GigListViewMode::Error("Failed to load gigs: boom".to_string())
        );
    }

    #[test]
    fn reload_clears_previous_outcome() {
        let mut state = GigListState::default();
        state.apply(GigListEvent::Started);
        state.apply(GigListEvent::Failed {
            message: "boom".to_string(),
        });
        state.apply(GigListEvent::Started);
        assert!(state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.view_mode(), GigListViewMode::Loading);
    }
}
