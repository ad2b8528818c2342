//! Activity listing, signup and unregister routes.

use std::sync::Arc;

use activities_core::Error;
use activities_directory::{ActivityName, DirectorySnapshot, Email};
use axum::extract::{Path, Query, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/{activity}/signup", post(signup))
        .route("/activities/{activity}/participants", delete(unregister))
}

// ---------------------------------------------------------------
// Request/Response types
// ---------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct EmailQuery {
    email: Option<String>,
}

impl EmailQuery {
    fn parse(&self) -> Result<Email, Error> {
        Email::parse(self.email.as_deref().unwrap_or_default())
    }
}

/// Resolve the path name to a known activity before any other input is
/// looked at, so an unknown activity is NotFound whatever the email.
fn known_activity(state: &AppState, raw: String) -> Result<ActivityName, Error> {
    let activity = ActivityName::new(raw);
    if state.directory.contains(&activity) {
        Ok(activity)
    } else {
        Err(Error::activity_not_found())
    }
}

#[derive(Debug, Serialize)]
struct Confirmation {
    message: String,
}

// ---------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------

/// GET /activities — every activity with its current roster.
async fn list_activities(State(state): State<Arc<AppState>>) -> Json<DirectorySnapshot> {
    Json(state.directory.list())
}

/// POST /activities/{activity}/signup?email=...
async fn signup(
    State(state): State<Arc<AppState>>,
    Path(activity): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Confirmation>, ApiError> {
    let activity = known_activity(&state, activity)?;
    let email = query.parse()?;

    state.directory.signup(&activity, email.clone())?;

    Ok(Json(Confirmation {
        message: format!("Signed up {} for {}", email, activity),
    }))
}

/// DELETE /activities/{activity}/participants?email=...
async fn unregister(
    State(state): State<Arc<AppState>>,
    Path(activity): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Confirmation>, ApiError> {
    let activity = known_activity(&state, activity)?;
    let email = query.parse()?;

    state.directory.unregister(&activity, &email)?;

    Ok(Json(Confirmation {
        message: format!("Unregistered {} from {}", email, activity),
    }))
}
