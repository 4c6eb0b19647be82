pub mod course_repository;
pub mod enrollment_repository;
pub mod insert_error;
pub mod instructor_repository;
pub mod learner_repository;
