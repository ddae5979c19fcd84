//! Same-origin REST client for the gig backend.
//!
//! Wire DTOs are kept separate from the display types and converted by
//! plain functions. Absence is a value here: `fetch_gig` resolves to
//! `Ok(None)` on HTTP 404, and only transport or server faults become
//! errors.

use chrono::{DateTime, Utc};
use gigboard_ui::display_types::{Gig, GigDraft, GigStatus};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
struct GigDto {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    price_cents: i64,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

fn gig_from_dto(dto: GigDto) -> Gig {
    Gig {
        id: dto.id,
        title: dto.title,
        description: dto.description,
        category: dto.category,
        price_cents: dto.price_cents,
        status: dto
            .status
            .as_deref()
            .map(GigStatus::from_str_repr)
            .unwrap_or_default(),
        created_at: dto.created_at.unwrap_or_else(Utc::now),
    }
}

/// Request body for create/update calls
#[derive(Serialize)]
struct GigPayload<'a> {
    title: &'a str,
    description: &'a str,
    category: &'a str,
    price_cents: i64,
    status: &'a str,
}

impl<'a> From<&'a GigDraft> for GigPayload<'a> {
    fn from(draft: &'a GigDraft) -> Self {
        Self {
            title: &draft.title,
            description: &draft.description,
            category: &draft.category,
            price_cents: draft.price_cents,
            status: draft.status.as_str(),
        }
    }
}

/// Fetch all gigs
pub async fn fetch_gigs() -> Result<Vec<Gig>, String> {
    let resp = reqwest::get("/api/gigs")
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    if !resp.status().is_success() {
        return Err(format!("Server error: {}", resp.status()));
    }
    let dtos: Vec<GigDto> = resp.json().await.map_err(|e| format!("Parse error: {e}"))?;
    Ok(dtos.into_iter().map(gig_from_dto).collect())
}

/// Fetch a single gig by id. Resolves to `Ok(None)` when no such record
/// exists.
pub async fn fetch_gig(gig_id: &str) -> Result<Option<Gig>, String> {
    let url = format!("/api/gigs/{gig_id}");
    let resp = reqwest::get(&url)
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !resp.status().is_success() {
        return Err(format!("Server error: {}", resp.status()));
    }

    let dto: GigDto = resp.json().await.map_err(|e| format!("Parse error: {e}"))?;
    Ok(Some(gig_from_dto(dto)))
}

/// Create a gig from a submitted draft
pub async fn create_gig(draft: &GigDraft) -> Result<Gig, String> {
    let resp = reqwest::Client::new()
        .post("/api/gigs")
        .json(&GigPayload::from(draft))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    if !resp.status().is_success() {
        return Err(format!("Server error: {}", resp.status()));
    }
    let dto: GigDto = resp.json().await.map_err(|e| format!("Parse error: {e}"))?;
    Ok(gig_from_dto(dto))
}

/// Update an existing gig from a submitted draft
pub async fn update_gig(gig_id: &str, draft: &GigDraft) -> Result<Gig, String> {
    let url = format!("/api/gigs/{gig_id}");
    let resp = reqwest::Client::new()
        .put(&url)
        .json(&GigPayload::from(draft))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    if !resp.status().is_success() {
        return Err(format!("Server error: {}", resp.status()));
    }
    let dto: GigDto = resp.json().await.map_err(|e| format!("Parse error: {e}"))?;
    Ok(gig_from_dto(dto))
}
