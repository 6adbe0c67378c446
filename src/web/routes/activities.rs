use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::services::activities_service::{self, RosterError};
use crate::state::{AppState, Registry};

#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    pub email: String,
}

pub async fn list_activities_handler(State(state): State<AppState>) -> Json<Registry> {
    Json(activities_service::list_activities(&state).await)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    activities_service::sign_up(&state, &activity_name, &query.email)
        .await
        .map(|()| {
            Json(serde_json::json!({
                "message": format!("Signed up {} for {}", query.email, activity_name)
            }))
        })
        .map_err(|e| roster_error_response(&activity_name, e))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    activities_service::unregister(&state, &activity_name, &query.email)
        .await
        .map(|()| {
            Json(serde_json::json!({
                "message": format!("Unregistered {} from {}", query.email, activity_name)
            }))
        })
        .map_err(|e| roster_error_response(&activity_name, e))
}

fn roster_error_response(activity_name: &str, err: RosterError) -> (StatusCode, Json<Value>) {
    warn!(activity = %activity_name, error = %err, "Roster change rejected");

    let status = match err {
        RosterError::ActivityNotFound => StatusCode::NOT_FOUND,
        RosterError::AlreadyEnrolled | RosterError::NotEnrolled => StatusCode::BAD_REQUEST,
    };
    (status, Json(serde_json::json!({ "detail": err.to_string() })))
}
