use crate::domain::chain::{AmountError, WalletAddressError};

pub mod create_course;
pub mod deactivate_course;
pub mod delete_course;
pub mod get_course;
pub mod list_courses;

#[derive(thiserror::Error, Debug)]
pub enum CourseError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("End time must be after start time")]
    InvalidTimeWindow,
    #[error("Invalid price")]
    InvalidPrice(#[source] AmountError),
    #[error("Invalid wallet address")]
    InvalidWallet(#[source] WalletAddressError),
    #[error("Instructor not found")]
    InstructorNotFound,
    #[error("Course not found")]
    NotFound,
    #[error("storage failure")]
    Storage(#[source] anyhow::Error),
}
