use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::accounts::get_instructor::GetInstructor;
use crate::application::use_cases::accounts::list_instructor_courses::ListInstructorCourses;
use crate::application::use_cases::accounts::register_instructor::{
    RegisterInstructor, RegisterInstructorRequest,
};
use crate::bootstrap::app_context::AppContext;
use crate::domain::accounts::instructor::Instructor as InstructorRecord;
use crate::presentation::http::courses::Course;
use crate::presentation::http::error::{ApiError, ErrorBody, IntoApiError};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInstructorBody {
    #[schema(example = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed")]
    pub wallet_address: Option<String>,
    pub name: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    pub id: i32,
    pub wallet_address: String,
    pub name: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<InstructorRecord> for Instructor {
    fn from(i: InstructorRecord) -> Self {
        Instructor {
            id: i.id,
            wallet_address: i.wallet_address.to_string(),
            name: i.name,
            bio: i.bio,
            created_at: i.created_at,
        }
    }
}

#[utoipa::path(post, path = "/api/instructor", tag = "Instructors",
    request_body = RegisterInstructorBody,
    responses(
        (status = 200, body = Instructor),
        (status = 400, description = "Invalid input or already registered", body = ErrorBody)
    ))]
pub async fn register_instructor(
    State(ctx): State<AppContext>,
    Json(body): Json<RegisterInstructorBody>,
) -> Result<Json<Instructor>, ApiError> {
    let repo = ctx.instructor_repo();
    let uc = RegisterInstructor {
        repo: repo.as_ref(),
    };
    let req = RegisterInstructorRequest {
        wallet_address: body.wallet_address.unwrap_or_default(),
        name: body.name,
        bio: body.bio,
    };
    let instructor = uc
        .execute(&req)
        .await
        .map_err(|e| e.into_api_error("Failed to create instructor"))?;
    Ok(Json(instructor.into()))
}

#[utoipa::path(get, path = "/api/instructor/{wallet}", tag = "Instructors",
    params(("wallet" = String, Path, description = "Wallet address")),
    responses(
        (status = 200, body = Instructor),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody)
    ))]
pub async fn get_instructor(
    State(ctx): State<AppContext>,
    Path(wallet): Path<String>,
) -> Result<Json<Instructor>, ApiError> {
    let repo = ctx.instructor_repo();
    let uc = GetInstructor {
        repo: repo.as_ref(),
    };
    let instructor = uc
        .execute(&wallet)
        .await
        .map_err(|e| e.into_api_error("Failed to fetch instructor"))?;
    Ok(Json(instructor.into()))
}

#[utoipa::path(get, path = "/api/instructor/{wallet}/courses", tag = "Instructors",
    params(("wallet" = String, Path, description = "Wallet address")),
    responses(
        (status = 200, body = [Course]),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody)
    ))]
pub async fn instructor_courses(
    State(ctx): State<AppContext>,
    Path(wallet): Path<String>,
) -> Result<Json<Vec<Course>>, ApiError> {
    let instructors = ctx.instructor_repo();
    let courses = ctx.course_repo();
    let uc = ListInstructorCourses {
        instructors: instructors.as_ref(),
        courses: courses.as_ref(),
    };
    let rows = uc
        .execute(&wallet)
        .await
        .map_err(|e| e.into_api_error("Failed to fetch instructor courses"))?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/instructor", post(register_instructor))
        .route("/instructor/:wallet", get(get_instructor))
        .route("/instructor/:wallet/courses", get(instructor_courses))
        .with_state(ctx)
}
