mod config;
mod doc;
mod dtos;
mod error;
mod routes;
mod state;
mod utils;

use crate::{
    config::Config,
    doc::ApiDoc,
    routes::{course, health, recommendation, root, schedule, student},
    state::AppState,
    utils::shutdown::shutdown_signal,
};
use axum::{
    Router,
    routing::{get, post},
};
use database::db::create_connection;
use log::{info, warn};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_oauth2_resource_server::server::OAuth2ResourceServer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = Config::from_env();

    let db = create_connection()
        .await
        .expect("Failed to connect to the database");
    let state = AppState::new(db);

    let mut admin = routes::admin::router();
    match &config.oidc_issuer_url {
        Some(issuer_url) => {
            let oauth2_resource_server = <OAuth2ResourceServer>::builder()
                .issuer_url(issuer_url)
                .build()
                .await
                .expect("Failed to build OAuth2ResourceServer");

            admin = admin.layer(ServiceBuilder::new().layer(oauth2_resource_server.into_layer()));
            info!("Admin routes require a bearer token issued by {issuer_url}");
        }
        None => warn!("OIDC_ISSUER_URL is not set; admin routes are unauthenticated"),
    }

    let app = Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route("/courses/{code}", get(course::get_course))
        .route("/students", post(student::create_student))
        .route("/students/{student_id}", get(student::get_student))
        .route(
            "/students/{student_id}/completed-courses",
            post(student::record_completed_course),
        )
        .route(
            "/students/{student_id}/recommendations",
            get(recommendation::get_recommendations),
        )
        .route(
            "/students/{student_id}/courses/{code}/eligibility",
            get(recommendation::get_eligibility),
        )
        .route(
            "/students/{student_id}/schedules",
            get(schedule::list_schedules).post(schedule::create_schedule),
        )
        .nest("/admin", admin)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind listener");
    info!("Running axum on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}
