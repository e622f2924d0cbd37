//! Route handler functions.
//!
//! The site-listing handler mirrors the interactive flow's semantics:
//! domain outcomes (unsupported language, no sites) come back as a 200
//! with an `error` field, so programmatic callers see exactly what a CLI
//! user would.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /health` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
}

/// `POST /sites/list` request body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListRequest {
    pub language: String,
    pub district: String,
}

/// `POST /sites/list` response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse {
    pub place: String,
    pub sites: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Liveness probe.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// List a district's sites, translated into the requested language.
pub async fn list_sites(
    State(state): State<AppState>,
    Json(request): Json<ListRequest>,
) -> Result<Json<ListResponse>, ApiError> {
    if request.district.trim().is_empty() {
        return Err(ApiError::BadRequest("district must not be empty".to_string()));
    }

    let place = request.district.clone();
    info!(language = %request.language, district = %place, "Site listing requested");

    if !state.translator.is_supported(&request.language) {
        return Ok(Json(ListResponse {
            place,
            sites: vec![],
            error: Some("Language not supported.".to_string()),
        }));
    }

    let sites = state.directory.sites_for_place(&place);
    if sites.is_empty() {
        let message = state
            .translator
            .translate("No tourist sites found for this location.", &request.language)
            .await;
        return Ok(Json(ListResponse {
            place,
            sites: vec![],
            error: Some(message),
        }));
    }

    let mut translated = Vec::with_capacity(sites.len());
    for site in &sites {
        translated.push(state.translator.translate(site, &request.language).await);
    }

    Ok(Json(ListResponse {
        place,
        sites: translated,
        error: None,
    }))
}
