pub mod accounts;
pub mod chain;
pub mod courses;
pub mod enrollments;
