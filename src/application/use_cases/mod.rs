pub mod accounts;
pub mod courses;
pub mod enrollments;
