use std::collections::BTreeMap;

use axum::{extract::State, Json};

use crate::models::Activity;
use crate::services::ActivitiesService;
use crate::web::error::ApiError;

pub async fn activities_handler(
    State(service): State<ActivitiesService>,
) -> Result<Json<BTreeMap<String, Activity>>, ApiError> {
    Ok(Json(service.list_activities()?))
}
