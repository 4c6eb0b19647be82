use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::accounts::get_learner::GetLearner;
use crate::application::use_cases::accounts::list_learner_courses::ListLearnerCourses;
use crate::application::use_cases::accounts::register_learner::{
    RegisterLearner, RegisterLearnerRequest,
};
use crate::bootstrap::app_context::AppContext;
use crate::domain::accounts::learner::Learner as LearnerRecord;
use crate::domain::enrollments::enrollment::EnrolledCourse;
use crate::presentation::http::courses::Course;
use crate::presentation::http::error::{ApiError, ErrorBody, IntoApiError};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterLearnerBody {
    #[schema(example = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed")]
    pub wallet_address: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Learner {
    pub id: i32,
    pub wallet_address: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<LearnerRecord> for Learner {
    fn from(l: LearnerRecord) -> Self {
        Learner {
            id: l.id,
            wallet_address: l.wallet_address.to_string(),
            name: l.name,
            created_at: l.created_at,
        }
    }
}

/// Course plus the learner's enrollment details.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LearnerCourse {
    #[serde(flatten)]
    pub course: Course,
    pub enrolled_at: DateTime<Utc>,
    pub tx_hash: Option<String>,
}

impl From<EnrolledCourse> for LearnerCourse {
    fn from(e: EnrolledCourse) -> Self {
        LearnerCourse {
            course: e.course.into(),
            enrolled_at: e.enrolled_at,
            tx_hash: e.tx_hash.map(|h| h.to_string()),
        }
    }
}

#[utoipa::path(post, path = "/api/learner", tag = "Learners",
    request_body = RegisterLearnerBody,
    responses(
        (status = 200, body = Learner),
        (status = 400, description = "Invalid input or already registered", body = ErrorBody)
    ))]
pub async fn register_learner(
    State(ctx): State<AppContext>,
    Json(body): Json<RegisterLearnerBody>,
) -> Result<Json<Learner>, ApiError> {
    let repo = ctx.learner_repo();
    let uc = RegisterLearner {
        repo: repo.as_ref(),
    };
    let req = RegisterLearnerRequest {
        wallet_address: body.wallet_address.unwrap_or_default(),
        name: body.name,
    };
    let learner = uc
        .execute(&req)
        .await
        .map_err(|e| e.into_api_error("Failed to create learner"))?;
    Ok(Json(learner.into()))
}

#[utoipa::path(get, path = "/api/learner/{wallet}", tag = "Learners",
    params(("wallet" = String, Path, description = "Wallet address")),
    responses(
        (status = 200, body = Learner),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody)
    ))]
pub async fn get_learner(
    State(ctx): State<AppContext>,
    Path(wallet): Path<String>,
) -> Result<Json<Learner>, ApiError> {
    let repo = ctx.learner_repo();
    let uc = GetLearner {
        repo: repo.as_ref(),
    };
    let learner = uc
        .execute(&wallet)
        .await
        .map_err(|e| e.into_api_error("Failed to fetch learner"))?;
    Ok(Json(learner.into()))
}

#[utoipa::path(get, path = "/api/learner/{wallet}/courses", tag = "Learners",
    params(("wallet" = String, Path, description = "Wallet address")),
    responses(
        (status = 200, body = [LearnerCourse]),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody)
    ))]
pub async fn learner_courses(
    State(ctx): State<AppContext>,
    Path(wallet): Path<String>,
) -> Result<Json<Vec<LearnerCourse>>, ApiError> {
    let learners = ctx.learner_repo();
    let enrollments = ctx.enrollment_repo();
    let uc = ListLearnerCourses {
        learners: learners.as_ref(),
        enrollments: enrollments.as_ref(),
    };
    let rows = uc
        .execute(&wallet)
        .await
        .map_err(|e| e.into_api_error("Failed to fetch learner courses"))?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/learner", post(register_learner))
        .route("/learner/:wallet", get(get_learner))
        .route("/learner/:wallet/courses", get(learner_courses))
        .with_state(ctx)
}
