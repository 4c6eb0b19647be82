use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::extract::MatchedPath;
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use coursemarket::bootstrap::app_context::{AppContext, AppServices};
use coursemarket::bootstrap::config::Config;
use coursemarket::infrastructure::db::repositories::{
    course_repository_sqlx::SqlxCourseRepository,
    enrollment_repository_sqlx::SqlxEnrollmentRepository,
    instructor_repository_sqlx::SqlxInstructorRepository,
    learner_repository_sqlx::SqlxLearnerRepository,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
        paths(
            coursemarket::presentation::http::courses::list_courses,
            coursemarket::presentation::http::courses::create_course,
            coursemarket::presentation::http::courses::get_course,
            coursemarket::presentation::http::courses::delete_course,
            coursemarket::presentation::http::courses::deactivate_course,
            coursemarket::presentation::http::enrollments::enroll,
            coursemarket::presentation::http::enrollments::list_enrollments,
            coursemarket::presentation::http::instructors::register_instructor,
            coursemarket::presentation::http::instructors::get_instructor,
            coursemarket::presentation::http::instructors::instructor_courses,
            coursemarket::presentation::http::learners::register_learner,
            coursemarket::presentation::http::learners::get_learner,
            coursemarket::presentation::http::learners::learner_courses,
            coursemarket::presentation::http::chain::chain_info,
            coursemarket::presentation::http::health::health,
        ),
        components(schemas(
            coursemarket::presentation::http::error::ErrorBody,
            coursemarket::presentation::http::courses::Course,
            coursemarket::presentation::http::courses::CreateCourseRequest,
            coursemarket::presentation::http::enrollments::EnrollBody,
            coursemarket::presentation::http::enrollments::Enrollment,
            coursemarket::presentation::http::enrollments::Enrollee,
            coursemarket::presentation::http::instructors::RegisterInstructorBody,
            coursemarket::presentation::http::instructors::Instructor,
            coursemarket::presentation::http::learners::RegisterLearnerBody,
            coursemarket::presentation::http::learners::Learner,
            coursemarket::presentation::http::learners::LearnerCourse,
            coursemarket::presentation::http::chain::ChainInfo,
            coursemarket::presentation::http::health::HealthResp,
        )),
        tags(
            (name = "Courses", description = "Course catalogue"),
            (name = "Enrollments", description = "Course purchases and rosters"),
            (name = "Instructors", description = "Instructor registration"),
            (name = "Learners", description = "Learner registration"),
            (name = "Chain", description = "Marketplace contract settings"),
            (name = "Health", description = "System health checks")
        )
    )]
struct ApiDoc;

fn build_cors(cfg: &Config) -> CorsLayer {
    let allow_origin = match cfg.frontend_url.as_deref().map(HeaderValue::from_str) {
        Some(Ok(origin)) => AllowOrigin::exact(origin),
        // Deny all
        Some(Err(_)) | None if cfg.is_production => {
            AllowOrigin::exact(HeaderValue::from_static("http://invalid"))
        }
        // Development convenience
        _ => AllowOrigin::mirror_request(),
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            http::Method::GET,
            http::Method::POST,
            http::Method::DELETE,
            http::Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE])
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "coursemarket=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(?cfg, "Starting course marketplace backend");

    // Database
    let pool = coursemarket::infrastructure::db::connect_pool(
        &cfg.database_url,
        cfg.database_max_connections,
    )
    .await?;
    coursemarket::infrastructure::db::migrate(&pool).await?;

    let services = AppServices::new(
        Arc::new(SqlxCourseRepository::new(pool.clone())),
        Arc::new(SqlxInstructorRepository::new(pool.clone())),
        Arc::new(SqlxLearnerRepository::new(pool.clone())),
        Arc::new(SqlxEnrollmentRepository::new(pool.clone())),
    );
    let ctx = AppContext::new(cfg.clone(), services);

    // Build API router
    let app = Router::new()
        .nest(
            "/api",
            coursemarket::presentation::http::health::routes(pool.clone()),
        )
        .nest(
            "/api",
            coursemarket::presentation::http::api_routes(ctx.clone()),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(build_cors(&cfg))
        .layer(DefaultBodyLimit::max(cfg.body_max_bytes))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    Ok(())
}
