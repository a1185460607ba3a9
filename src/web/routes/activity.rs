use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::services::ActivitiesService;
use crate::web::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn activity_signup_handler(
    Path(activity_name): Path<String>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
    State(service): State<ActivitiesService>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(query) = query?;
    match service.sign_up(&activity_name, &query.email) {
        Ok(message) => Ok(Json(MessageResponse { message })),
        Err(e) => {
            warn!("Signup failed for {}: {}", activity_name, e);
            Err(e.into())
        }
    }
}

pub async fn remove_participant_handler(
    Path(activity_name): Path<String>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
    State(service): State<ActivitiesService>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(query) = query?;
    match service.remove_participant(&activity_name, &query.email) {
        Ok(message) => Ok(Json(MessageResponse { message })),
        Err(e) => {
            warn!("Participant removal failed for {}: {}", activity_name, e);
            Err(e.into())
        }
    }
}
