use axum::Router;

use crate::bootstrap::app_context::AppContext;

pub mod chain;
pub mod courses;
pub mod enrollments;
pub mod error;
pub mod health;
pub mod input;
pub mod instructors;
pub mod learners;

#[cfg(test)]
pub(crate) mod testing;

/// Every route backed by the application context, to be nested under `/api`.
pub fn api_routes(ctx: AppContext) -> Router {
    Router::new()
        .merge(courses::routes(ctx.clone()))
        .merge(enrollments::routes(ctx.clone()))
        .merge(instructors::routes(ctx.clone()))
        .merge(learners::routes(ctx.clone()))
        .merge(chain::routes(ctx))
}
