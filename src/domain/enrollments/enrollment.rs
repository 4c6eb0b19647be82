use chrono::{DateTime, Utc};

use crate::domain::accounts::learner::Learner;
use crate::domain::chain::TxHash;
use crate::domain::courses::course::Course;

#[derive(Debug, Clone)]
pub struct Enrollment {
    pub id: i32,
    pub course_id: i32,
    pub learner_id: i32,
    pub tx_hash: Option<TxHash>,
    pub enrolled_at: DateTime<Utc>,
}

/// A course as seen from one learner's enrollment.
#[derive(Debug, Clone)]
pub struct EnrolledCourse {
    pub course: Course,
    pub tx_hash: Option<TxHash>,
    pub enrolled_at: DateTime<Utc>,
}

/// A learner as seen from one course's roster.
#[derive(Debug, Clone)]
pub struct CourseEnrollee {
    pub learner: Learner,
    pub tx_hash: Option<TxHash>,
    pub enrolled_at: DateTime<Utc>,
}
