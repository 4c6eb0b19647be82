use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::enrollments::enroll::{Enroll, EnrollRequest};
use crate::application::use_cases::enrollments::list_enrollments::ListEnrollments;
use crate::bootstrap::app_context::AppContext;
use crate::domain::chain::TxHash;
use crate::domain::enrollments::enrollment::{CourseEnrollee, Enrollment as EnrollmentRecord};
use crate::presentation::http::error::{ApiError, ErrorBody, IntoApiError, course_id};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollBody {
    #[schema(example = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed")]
    pub wallet_address: Option<String>,
    /// Hash of the purchase transaction, if the wallet reported one.
    pub tx_hash: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: i32,
    pub course_id: i32,
    pub learner_id: i32,
    pub tx_hash: Option<String>,
    pub enrolled_at: DateTime<Utc>,
}

impl From<EnrollmentRecord> for Enrollment {
    fn from(e: EnrollmentRecord) -> Self {
        Enrollment {
            id: e.id,
            course_id: e.course_id,
            learner_id: e.learner_id,
            tx_hash: e.tx_hash.map(|h| h.as_str().to_string()),
            enrolled_at: e.enrolled_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Enrollee {
    pub learner_id: i32,
    pub wallet_address: String,
    pub name: String,
    pub tx_hash: Option<String>,
    pub enrolled_at: DateTime<Utc>,
}

impl From<CourseEnrollee> for Enrollee {
    fn from(e: CourseEnrollee) -> Self {
        Enrollee {
            learner_id: e.learner.id,
            wallet_address: e.learner.wallet_address.to_string(),
            name: e.learner.name,
            tx_hash: e.tx_hash.as_ref().map(TxHash::as_str).map(str::to_string),
            enrolled_at: e.enrolled_at,
        }
    }
}

#[utoipa::path(post, path = "/api/courses/{id}/enroll", tag = "Enrollments",
    params(("id" = i32, Path, description = "Course ID")),
    request_body = EnrollBody,
    responses(
        (status = 201, body = Enrollment),
        (status = 400, description = "Invalid input, course not active, already enrolled or transaction reused", body = ErrorBody),
        (status = 404, description = "Course or learner not found", body = ErrorBody)
    ))]
pub async fn enroll(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
    Json(body): Json<EnrollBody>,
) -> Result<(StatusCode, Json<Enrollment>), ApiError> {
    let id = course_id(&id)?;
    let courses = ctx.course_repo();
    let learners = ctx.learner_repo();
    let enrollments = ctx.enrollment_repo();
    let uc = Enroll {
        courses: courses.as_ref(),
        learners: learners.as_ref(),
        enrollments: enrollments.as_ref(),
    };
    let req = EnrollRequest {
        wallet_address: body.wallet_address.unwrap_or_default(),
        tx_hash: body.tx_hash,
    };
    let enrollment = uc
        .execute(id, &req, Utc::now())
        .await
        .map_err(|e| e.into_api_error("Failed to enroll"))?;
    Ok((StatusCode::CREATED, Json(enrollment.into())))
}

#[utoipa::path(get, path = "/api/courses/{id}/enrollments", tag = "Enrollments",
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, body = [Enrollee]),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody)
    ))]
pub async fn list_enrollments(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Enrollee>>, ApiError> {
    let id = course_id(&id)?;
    let courses = ctx.course_repo();
    let enrollments = ctx.enrollment_repo();
    let uc = ListEnrollments {
        courses: courses.as_ref(),
        enrollments: enrollments.as_ref(),
    };
    let rows = uc
        .execute(id)
        .await
        .map_err(|e| e.into_api_error("Failed to fetch enrollments"))?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/courses/:id/enroll", post(enroll))
        .route("/courses/:id/enrollments", get(list_enrollments))
        .with_state(ctx)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::presentation::http::testing::{OTHER_WALLET, TestApp, WALLET};

    const TX: &str = "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b";

    async fn seed(app: &TestApp) -> i64 {
        app.post("/api/learner", json!({"walletAddress": WALLET, "name": "Grace"}))
            .await;
        let (_, course) = app
            .post(
                "/api/courses",
                json!({
                    "title": "DeFi basics",
                    "description": "AMMs and lending",
                    "startTime": "2020-01-01T00:00:00Z",
                    "endTime": "2099-01-01T00:00:00Z",
                    "price": "1000",
                }),
            )
            .await;
        course["id"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn enroll_records_purchase() {
        let app = TestApp::new();
        let id = seed(&app).await;
        let (status, body) = app
            .post(
                &format!("/api/courses/{id}/enroll"),
                json!({"walletAddress": WALLET.to_lowercase(), "txHash": TX.to_uppercase()}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["courseId"], id);
        assert_eq!(body["txHash"], TX);

        let (status, roster) = app.get(&format!("/api/courses/{id}/enrollments")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(roster[0]["walletAddress"], WALLET);
        assert_eq!(roster[0]["name"], "Grace");
    }

    #[tokio::test]
    async fn enroll_guards_run_in_order() {
        let app = TestApp::new();
        let id = seed(&app).await;
        let uri = format!("/api/courses/{id}/enroll");
        let cases = [
            ("/api/courses/x/enroll", json!({"walletAddress": WALLET}), StatusCode::BAD_REQUEST, "Invalid course ID"),
            (uri.as_str(), json!({"walletAddress": "0x123"}), StatusCode::BAD_REQUEST, "Invalid wallet address"),
            (uri.as_str(), json!({"walletAddress": WALLET, "txHash": "0xabc"}), StatusCode::BAD_REQUEST, "Invalid transaction hash"),
            ("/api/courses/999/enroll", json!({"walletAddress": WALLET}), StatusCode::NOT_FOUND, "Course not found"),
            (uri.as_str(), json!({"walletAddress": OTHER_WALLET}), StatusCode::NOT_FOUND, "Learner not found"),
        ];
        for (uri, body, status, message) in cases {
            let (got, err) = app.post(uri, body).await;
            assert_eq!(got, status, "{uri}");
            assert_eq!(err["error"], message);
        }
    }

    #[tokio::test]
    async fn enroll_rejects_duplicates_and_closed_courses() {
        let app = TestApp::new();
        let id = seed(&app).await;
        let uri = format!("/api/courses/{id}/enroll");

        let (status, _) = app
            .post(&uri, json!({"walletAddress": WALLET, "txHash": TX}))
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, err) = app.post(&uri, json!({"walletAddress": WALLET})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(err["error"], "Already enrolled");

        app.post("/api/learner", json!({"walletAddress": OTHER_WALLET, "name": "Linus"}))
            .await;
        let (status, err) = app
            .post(&uri, json!({"walletAddress": OTHER_WALLET, "txHash": TX}))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(err["error"], "Transaction already used");

        app.post(&format!("/api/courses/{id}/deactivate"), json!({}))
            .await;
        let (status, err) = app
            .post(&uri, json!({"walletAddress": OTHER_WALLET}))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(err["error"], "Course is not active");
    }

    #[tokio::test]
    async fn deleting_course_drops_its_enrollments() {
        let app = TestApp::new();
        let id = seed(&app).await;
        app.post(&format!("/api/courses/{id}/enroll"), json!({"walletAddress": WALLET}))
            .await;
        let (_, courses) = app.get(&format!("/api/learner/{WALLET}/courses")).await;
        assert_eq!(courses.as_array().unwrap().len(), 1);

        app.delete(&format!("/api/courses/{id}")).await;
        let (_, courses) = app.get(&format!("/api/learner/{WALLET}/courses")).await;
        assert!(courses.as_array().unwrap().is_empty());
        let (status, _) = app.get(&format!("/api/courses/{id}/enrollments")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
