pub mod error;
pub mod routes;

use std::path::Path;

use axum::{
    response::Redirect,
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::services::ActivitiesService;
use routes::{activities, activity};

/// Routes for the activity directory only, without static assets.
pub fn api_router(service: ActivitiesService) -> Router {
    Router::new()
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activity::activity_signup_handler),
        )
        .route(
            "/activities/:activity_name/participants",
            delete(activity::remove_participant_handler),
        )
        .with_state(service)
}

/// Full application: API, front-end bundle under `/static` and the usual layers.
pub fn app(service: ActivitiesService, static_dir: impl AsRef<Path>) -> Router {
    api_router(service)
        .route("/", get(|| async { Redirect::to("/static/index.html") }))
        .nest_service(
            "/static",
            get_service(ServeDir::new(static_dir.as_ref())).layer(
                SetResponseHeaderLayer::if_not_present(
                    CACHE_CONTROL,
                    HeaderValue::from_static("no-store"),
                ),
            ),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
}
