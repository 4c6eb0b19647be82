use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::use_cases::courses::create_course::{CourseDraft, CreateCourse, PriceDraft};
use crate::application::use_cases::courses::deactivate_course::DeactivateCourse;
use crate::application::use_cases::courses::delete_course::DeleteCourse;
use crate::application::use_cases::courses::get_course::GetCourse;
use crate::application::use_cases::courses::list_courses::{ListCourses, ListCoursesQuery};
use crate::bootstrap::app_context::AppContext;
use crate::domain::courses::course as domain;
use crate::presentation::http::error::{ApiError, ErrorBody, IntoApiError, course_id};
use crate::presentation::http::input::{AmountInput, TimeInput};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Integer wei, as a string to survive JavaScript number precision.
    #[schema(example = "50000000000000000")]
    pub price: String,
    #[schema(example = "0.05")]
    pub price_eth: String,
    pub instructor_id: Option<i32>,
    /// Checksummed wallet of the instructor who created the course.
    pub teacher: Option<String>,
    pub is_active: bool,
    /// Whether the course is running right now.
    pub in_session: bool,
    pub created_at: DateTime<Utc>,
}

impl From<domain::Course> for Course {
    fn from(c: domain::Course) -> Self {
        let in_session = c.is_in_session(Utc::now());
        Course {
            id: c.id,
            title: c.title,
            description: c.description,
            start_time: c.start_time,
            end_time: c.end_time,
            price: c.price.to_string(),
            price_eth: c.price.to_eth_string(),
            instructor_id: c.instructor_id,
            teacher: c.instructor_wallet.map(|w| w.to_string()),
            is_active: c.is_active,
            in_session,
            created_at: c.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    /// RFC 3339, `YYYY-MM-DDTHH:MM` (UTC) or unix seconds.
    #[schema(value_type = Option<String>, example = "2025-03-01T09:00:00Z")]
    pub start_time: Option<TimeInput>,
    #[schema(value_type = Option<String>, example = "2025-04-01T09:00:00Z")]
    pub end_time: Option<TimeInput>,
    /// Integer wei as a number or digit string.
    #[schema(value_type = Option<String>, example = "50000000000000000")]
    pub price: Option<AmountInput>,
    /// Decimal ether, used when `price` is absent.
    #[schema(example = "0.05")]
    pub price_eth: Option<String>,
    #[serde(alias = "teacher")]
    pub instructor_wallet: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListCoursesParams {
    /// Only courses still open for enrollment.
    pub active: Option<bool>,
    /// Instructor wallet address.
    pub instructor: Option<String>,
}

fn parse_time(
    input: Option<&TimeInput>,
    invalid: &'static str,
) -> Result<Option<DateTime<Utc>>, ApiError> {
    match input {
        None => Ok(None),
        Some(t) => t
            .to_datetime()
            .map(Some)
            .ok_or_else(|| ApiError::bad_request(invalid)),
    }
}

#[utoipa::path(get, path = "/api/courses", tag = "Courses",
    params(ListCoursesParams),
    responses(
        (status = 200, body = [Course]),
        (status = 400, body = ErrorBody),
        (status = 404, description = "Instructor not found", body = ErrorBody)
    ))]
pub async fn list_courses(
    State(ctx): State<AppContext>,
    Query(params): Query<ListCoursesParams>,
) -> Result<Json<Vec<Course>>, ApiError> {
    let repo = ctx.course_repo();
    let instructors = ctx.instructor_repo();
    let uc = ListCourses {
        repo: repo.as_ref(),
        instructors: instructors.as_ref(),
    };
    let query = ListCoursesQuery {
        only_open: params.active.unwrap_or(false),
        instructor_wallet: params.instructor.filter(|w| !w.trim().is_empty()),
    };
    let courses = uc
        .execute(&query, Utc::now())
        .await
        .map_err(|e| e.into_api_error("Failed to fetch courses"))?;
    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

#[utoipa::path(post, path = "/api/courses", tag = "Courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, body = Course),
        (status = 400, body = ErrorBody),
        (status = 404, description = "Instructor not found", body = ErrorBody)
    ))]
pub async fn create_course(
    State(ctx): State<AppContext>,
    Json(req): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<Course>), ApiError> {
    let draft = CourseDraft {
        start_time: parse_time(req.start_time.as_ref(), "Invalid startTime")?,
        end_time: parse_time(req.end_time.as_ref(), "Invalid endTime")?,
        price: match (&req.price, req.price_eth) {
            (Some(wei), _) => Some(PriceDraft::Wei(wei.to_wei_string())),
            (None, Some(eth)) => Some(PriceDraft::Eth(eth)),
            (None, None) => None,
        },
        title: req.title,
        description: req.description,
        instructor_wallet: req.instructor_wallet,
    };
    let repo = ctx.course_repo();
    let instructors = ctx.instructor_repo();
    let uc = CreateCourse {
        repo: repo.as_ref(),
        instructors: instructors.as_ref(),
    };
    let course = uc
        .execute(&draft)
        .await
        .map_err(|e| e.into_api_error("Failed to create course"))?;
    Ok((StatusCode::CREATED, Json(course.into())))
}

#[utoipa::path(get, path = "/api/courses/{id}", tag = "Courses",
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, body = Course),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody)
    ))]
pub async fn get_course(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<Course>, ApiError> {
    let id = course_id(&id)?;
    let repo = ctx.course_repo();
    let uc = GetCourse {
        repo: repo.as_ref(),
    };
    let course = uc
        .execute(id)
        .await
        .map_err(|e| e.into_api_error("Failed to fetch course"))?;
    Ok(Json(course.into()))
}

#[utoipa::path(delete, path = "/api/courses/{id}", tag = "Courses",
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 204, description = "Deleted together with its enrollments"),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody)
    ))]
pub async fn delete_course(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = course_id(&id)?;
    let repo = ctx.course_repo();
    let uc = DeleteCourse {
        repo: repo.as_ref(),
    };
    uc.execute(id)
        .await
        .map_err(|e| e.into_api_error("Failed to delete course"))?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(post, path = "/api/courses/{id}/deactivate", tag = "Courses",
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, body = Course),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody)
    ))]
pub async fn deactivate_course(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<Course>, ApiError> {
    let id = course_id(&id)?;
    let repo = ctx.course_repo();
    let uc = DeactivateCourse {
        repo: repo.as_ref(),
    };
    let course = uc
        .execute(id)
        .await
        .map_err(|e| e.into_api_error("Failed to deactivate course"))?;
    Ok(Json(course.into()))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/courses", get(list_courses).post(create_course))
        .route("/courses/:id", get(get_course).delete(delete_course))
        .route("/courses/:id/deactivate", post(deactivate_course))
        .with_state(ctx)
}
