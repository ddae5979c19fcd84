//! Display types for UI components
//!
//! These types are lightweight versions of the backend's records,
//! containing only the fields needed for display. They enable
//! props-based components that can work with either real or demo data.

use chrono::{DateTime, Utc};

/// Gig record as shown in the admin console
#[derive(Clone, Debug, PartialEq)]
pub struct Gig {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price_cents: i64,
    pub status: GigStatus,
    pub created_at: DateTime<Utc>,
}

/// Lifecycle status of a gig.
///
/// Wraps the backend's status strings as an enum for type-safe
/// comparisons. Unknown strings are preserved rather than dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum GigStatus {
    #[default]
    Draft,
    Active,
    Paused,
    Archived,
    Other(String),
}

impl GigStatus {
    /// Wire string (e.g. "draft", "active").
    pub fn as_str(&self) -> &str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Archived => "archived",
            Self::Other(s) => s,
        }
    }

    /// Parse from a status string (as returned by the backend).
    pub fn from_str_repr(s: &str) -> Self {
        match s {
            "draft" => Self::Draft,
            "active" => Self::Active,
            "paused" => Self::Paused,
            "archived" => Self::Archived,
            other => Self::Other(other.to_string()),
        }
    }

    /// Human-readable name for UI display (e.g. "Draft", "Active").
    pub fn display_name(&self) -> &str {
        match self {
            Self::Draft => "Draft",
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Archived => "Archived",
            Self::Other(s) => s,
        }
    }

    /// The statuses a form can assign.
    pub fn selectable() -> [GigStatus; 4] {
        [Self::Draft, Self::Active, Self::Paused, Self::Archived]
    }
}

impl std::fmt::Display for GigStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editable subset of a gig, produced by the form on submit
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GigDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub price_cents: i64,
    pub status: GigStatus,
}

/// Validation failure for a single form field
#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl GigDraft {
    /// Seed a draft from an existing record for the edit form.
    pub fn from_gig(gig: &Gig) -> Self {
        Self {
            title: gig.title.clone(),
            description: gig.description.clone(),
            category: gig.category.clone(),
            price_cents: gig.price_cents,
            status: gig.status.clone(),
        }
    }

    /// Field-level validation. An empty result means the draft can be
    /// submitted.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(FieldError {
                field: "title",
                message: "Title is required".to_string(),
            });
        }
        if self.category.trim().is_empty() {
            errors.push(FieldError {
                field: "category",
                message: "Category is required".to_string(),
            });
        }
        if self.price_cents < 0 {
            errors.push(FieldError {
                field: "price",
                message: "Price cannot be negative".to_string(),
            });
        }
        errors
    }
}
