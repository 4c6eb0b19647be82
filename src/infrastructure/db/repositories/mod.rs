pub mod course_repository_sqlx;
pub mod enrollment_repository_sqlx;
pub mod instructor_repository_sqlx;
pub mod learner_repository_sqlx;
