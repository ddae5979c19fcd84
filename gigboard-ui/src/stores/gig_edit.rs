//! Edit-gig load state machine
//!
//! The edit page owns a `GigEditState` and feeds it `GigLoadEvent`s:
//! one `Started` per identifier change, then exactly one settlement
//! (`Loaded`, `Missing`, or `Failed`). Every settlement carries the
//! identifier of the attempt it belongs to; settlements for any
//! identifier other than the most recently started one are discarded,
//! so a slow fetch can never overwrite the state of a newer attempt.

use crate::display_types::Gig;
use tracing::debug;

/// Fixed user-facing message when the loader settles with no record
pub const GIG_NOT_FOUND: &str = "Gig not found";
/// Fixed user-facing message when the loader faults
pub const GIG_LOAD_FAILED: &str = "Failed to load gig";

/// State for the edit gig view
#[derive(Clone, Debug, PartialEq)]
pub struct GigEditState {
    /// The gig being edited, set once a load succeeds
    pub gig: Option<Gig>,
    /// True from `Started` until the matching settlement
    pub loading: bool,
    /// User-facing error message if the load settled badly
    pub error: Option<String>,
    /// True while a submitted draft is being persisted
    pub saving: bool,
    /// User-facing error message if the last save failed
    pub save_error: Option<String>,
    /// Identifier of the most recently started attempt
    current_id: Option<String>,
}

impl Default for GigEditState {
    fn default() -> Self {
        // A page mounts before its first `Started` event fires, so the
        // initial render must already be the loading view.
        Self {
            gig: None,
            loading: true,
            error: None,
            saving: false,
            save_error: None,
            current_id: None,
        }
    }
}

/// Load lifecycle event for a single gig identifier
#[derive(Clone, Debug, PartialEq)]
pub enum GigLoadEvent {
    /// The identifier became available or changed
    Started { gig_id: String },
    /// Loader settled with a record
    Loaded { gig_id: String, gig: Gig },
    /// Loader settled with absence
    Missing { gig_id: String },
    /// Loader faulted
    Failed { gig_id: String },
}

/// What the edit page should render, in fixed precedence order
#[derive(Clone, Debug, PartialEq)]
pub enum GigViewMode {
    Loading,
    Error(String),
    Ready(Gig),
}

impl GigEditState {
    pub fn apply(&mut self, event: GigLoadEvent) {
        match event {
            GigLoadEvent::Started { gig_id } => {
                self.gig = None;
                self.error = None;
                // Save state belongs to the previous identifier's form
                self.saving = false;
                self.save_error = None;
                if gig_id.is_empty() {
                    // The router never produces an empty segment for the
                    // edit route; if one slips through anyway, surface it
                    // rather than loading forever.
                    self.current_id = None;
                    self.loading = false;
                    self.error = Some(GIG_NOT_FOUND.to_string());
                } else {
                    self.current_id = Some(gig_id);
                    self.loading = true;
                }
            }
            GigLoadEvent::Loaded { gig_id, gig } => {
                if self.is_stale(&gig_id) {
                    return;
                }
                self.gig = Some(gig);
                self.error = None;
                self.loading = false;
            }
            GigLoadEvent::Missing { gig_id } => {
                if self.is_stale(&gig_id) {
                    return;
                }
                self.gig = None;
                self.error = Some(GIG_NOT_FOUND.to_string());
                self.loading = false;
            }
            GigLoadEvent::Failed { gig_id } => {
                if self.is_stale(&gig_id) {
                    return;
                }
                self.gig = None;
                self.error = Some(GIG_LOAD_FAILED.to_string());
                self.loading = false;
            }
        }
    }

    /// Project the state into the render contract: loading, then error
    /// (or absence), then the loaded record.
    pub fn view_mode(&self) -> GigViewMode {
        if self.loading {
            GigViewMode::Loading
        } else if let Some(err) = &self.error {
            GigViewMode::Error(err.clone())
        } else if let Some(gig) = &self.gig {
            GigViewMode::Ready(gig.clone())
        } else {
            GigViewMode::Error(GIG_NOT_FOUND.to_string())
        }
    }

    /// A submitted draft is being persisted for the current gig.
    pub fn begin_save(&mut self) {
        self.saving = true;
        self.save_error = None;
    }

    /// The save for `gig_id` failed. Stale saves (an older identifier's
    /// save settling after navigation) are discarded like stale loads.
    pub fn save_failed(&mut self, gig_id: &str, message: String) {
        if self.is_stale(gig_id) {
            return;
        }
        self.saving = false;
        self.save_error = Some(message);
    }

    /// The save for `gig_id` completed.
    pub fn save_finished(&mut self, gig_id: &str) {
        if self.is_stale(gig_id) {
            return;
        }
        self.saving = false;
    }

    fn is_stale(&self, gig_id: &str) -> bool {
        let stale = self.current_id.as_deref() != Some(gig_id);
        if stale {
            debug!("Discarding stale load settlement for gig {gig_id}");
        }
        stale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_types::GigStatus;

    fn gig(id: &str, title: &str) -> Gig {
        Gig {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            category: "design".to_string(),
            price_cents: 5000,
            status: GigStatus::Active,
            created_at: chrono::Utc::now(),
        }
    }

    fn started(id: &str) -> GigLoadEvent {
        GigLoadEvent::Started {
            gig_id: id.to_string(),
        }
    }

    #[test]
    fn default_state_renders_loading() {
        assert_eq!(GigEditState::default().view_mode(), GigViewMode::Loading);
    }

    #[test]
    fn started_renders_loading_before_settlement() {
        let mut state = GigEditState::default();
        state.apply(started("g-1"));
        assert!(state.loading);
        assert_eq!(state.view_mode(), GigViewMode::Loading);
    }

    #[test]
    fn loaded_renders_record() {
        let mut state = GigEditState::default();
        state.apply(started("g-1"));
        state.apply(GigLoadEvent::Loaded {
            gig_id: "g-1".to_string(),
            gig: gig("g-1", "Logo Design"),
        });
        assert!(!state.loading);
        assert_eq!(state.error, None);
        match state.view_mode() {
            GigViewMode::Ready(g) => assert_eq!(g.title, "Logo Design"),
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn missing_renders_not_found() {
        let mut state = GigEditState::default();
        state.apply(started("g-missing"));
        state.apply(GigLoadEvent::Missing {
            gig_id: "g-missing".to_string(),
        });
        assert!(!state.loading);
        assert_eq!(state.gig, None);
        assert_eq!(
            state.view_mode(),
            GigViewMode::Error(GIG_NOT_FOUND.to_string())
        );
    }

    #[test]
    fn failed_renders_load_failed() {
        let mut state = GigEditState::default();
        state.apply(started("g-err"));
        state.apply(GigLoadEvent::Failed {
            gig_id: "g-err".to_string(),
        });
        assert!(!state.loading);
        assert_eq!(state.gig, None);
        assert_eq!(
            state.view_mode(),
            GigViewMode::Error(GIG_LOAD_FAILED.to_string())
        );
    }

    #[test]
    fn every_settlement_clears_loading() {
        let settlements = [
            GigLoadEvent::Loaded {
                gig_id: "g-1".to_string(),
                gig: gig("g-1", "Logo Design"),
            },
            GigLoadEvent::Missing {
                gig_id: "g-1".to_string(),
            },
            GigLoadEvent::Failed {
                gig_id: "g-1".to_string(),
            },
        ];
        for settlement in settlements {
            let mut state = GigEditState::default();
            state.apply(started("g-1"));
            state.apply(settlement);
            assert!(!state.loading);
        }
    }

    #[test]
    fn new_identifier_clears_previous_outcome() {
        let mut state = GigEditState::default();
        state.apply(started("g-1"));
        state.apply(GigLoadEvent::Failed {
            gig_id: "g-1".to_string(),
        });
        state.apply(started("g-2"));
        assert!(state.loading);
        assert_eq!(state.gig, None);
        assert_eq!(state.error, None);
    }

    #[test]
    fn stale_settlement_is_discarded() {
        let mut state = GigEditState::default();
        state.apply(started("g-1"));
        state.apply(started("g-2"));

        // g-1's settlement arrives after g-2 started
        state.apply(GigLoadEvent::Loaded {
            gig_id: "g-1".to_string(),
            gig: gig("g-1", "Stale"),
        });
        assert!(state.loading);
        assert_eq!(state.gig, None);

        state.apply(GigLoadEvent::Loaded {
            gig_id: "g-2".to_string(),
            gig: gig("g-2", "Fresh"),
        });
        match state.view_mode() {
            GigViewMode::Ready(g) => assert_eq!(g.title, "Fresh"),
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn stale_failure_cannot_overwrite_newer_attempt() {
        let mut state = GigEditState::default();
        state.apply(started("g-1"));
        state.apply(started("g-2"));
        state.apply(GigLoadEvent::Loaded {
            gig_id: "g-2".to_string(),
            gig: gig("g-2", "Fresh"),
        });
        state.apply(GigLoadEvent::Failed {
            gig_id: "g-1".to_string(),
        });
        assert_eq!(state.error, None);
        assert!(matches!(state.view_mode(), GigViewMode::Ready(_)));
    }

    #[test]
    fn empty_identifier_resolves_to_not_found() {
        let mut state = GigEditState::default();
        state.apply(started(""));
        assert!(!state.loading);
        assert_eq!(
            state.view_mode(),
            GigViewMode::Error(GIG_NOT_FOUND.to_string())
        );
    }

    #[test]
    fn new_identifier_clears_save_state() {
        let mut state = GigEditState::default();
        state.apply(started("g-1"));
        state.apply(GigLoadEvent::Loaded {
            gig_id: "g-1".to_string(),
            gig: gig("g-1", "Logo Design"),
        });
        state.begin_save();
        state.save_failed("g-1", "Failed to save gig: boom".to_string());
        assert!(state.save_error.is_some());

        // Navigating to another gig's edit view must not carry the
        // previous gig's save failure or in-flight save along
        state.apply(started("g-2"));
        assert!(!state.saving);
        assert_eq!(state.save_error, None);
    }

    #[test]
    fn in_flight_save_does_not_block_new_identifier() {
        let mut state = GigEditState::default();
        state.apply(started("g-1"));
        state.apply(GigLoadEvent::Loaded {
            gig_id: "g-1".to_string(),
            gig: gig("g-1", "Logo Design"),
        });
        state.begin_save();
        assert!(state.saving);
        state.apply(started("g-2"));
        assert!(!state.saving);
    }

    #[test]
    fn stale_save_failure_discarded() {
        let mut state = GigEditState::default();
        state.apply(started("g-1"));
        state.apply(GigLoadEvent::Loaded {
            gig_id: "g-1".to_string(),
            gig: gig("g-1", "Logo Design"),
        });
        state.begin_save();
        state.apply(started("g-2"));
        state.apply(GigLoadEvent::Loaded {
            gig_id: "g-2".to_string(),
            gig: gig("g-2", "Fresh"),
        });

        // g-1's save settles after g-2 became current
        state.save_failed("g-1", "Failed to save gig: boom".to_string());
        assert_eq!(state.save_error, None);
        assert!(!state.saving);
    }

    #[test]
    fn save_failure_kept_for_current_identifier() {
        let mut state = GigEditState::default();
        state.apply(started("g-1"));
        state.apply(GigLoadEvent::Loaded {
            gig_id: "g-1".to_string(),
            gig: gig("g-1", "Logo Design"),
        });
        state.begin_save();
        state.save_failed("g-1", "Failed to save gig: boom".to_string());
        assert!(!state.saving);
        assert_eq!(
            state.save_error.as_deref(),
            Some("Failed to save gig: boom")
        );
        // The loaded record stays editable underneath the banner
        assert!(matches!(state.view_mode(), GigViewMode::Ready(_)));
    }

    #[test]
    fn record_and_error_never_both_set() {
        let mut state = GigEditState::default();
        state.apply(started("g-1"));
        state.apply(GigLoadEvent::Missing {
            gig_id: "g-1".to_string(),
        });
        state.apply(started("g-1"));
        state.apply(GigLoadEvent::Loaded {
            gig_id: "g-1".to_string(),
            gig: gig("g-1", "Logo Design"),
        });
        assert!(state.gig.is_some());
        assert_eq!(state.error, None);
    }
}
