use crate::domain::chain::{TxHashError, WalletAddressError};

pub mod enroll;
pub mod list_enrollments;

#[derive(thiserror::Error, Debug)]
pub enum EnrollmentError {
    #[error("Invalid wallet address")]
    InvalidWallet(#[source] WalletAddressError),
    #[error("Invalid transaction hash")]
    InvalidTxHash(#[source] TxHashError),
    #[error("Course not found")]
    CourseNotFound,
    #[error("Learner not found")]
    LearnerNotFound,
    #[error("Course is not active")]
    CourseNotActive,
    #[error("Already enrolled")]
    AlreadyEnrolled,
    #[error("Transaction already used")]
    TransactionAlreadyUsed,
    #[error("storage failure")]
    Storage(#[source] anyhow::Error),
}
