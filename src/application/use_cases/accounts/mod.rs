use std::fmt;

use crate::domain::chain::{WalletAddress, WalletAddressError};

pub mod get_instructor;
pub mod get_learner;
pub mod list_instructor_courses;
pub mod list_learner_courses;
pub mod register_instructor;
pub mod register_learner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Instructor,
    Learner,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountKind::Instructor => f.write_str("Instructor"),
            AccountKind::Learner => f.write_str("Learner"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum RegistrationError {
    #[error("Invalid wallet address")]
    InvalidWallet(#[source] WalletAddressError),
    #[error("Name is required")]
    MissingName,
    #[error("{0} already exists")]
    AlreadyExists(AccountKind),
    #[error("storage failure")]
    Storage(#[source] anyhow::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum LookupError {
    #[error("Invalid wallet address")]
    InvalidWallet(#[source] WalletAddressError),
    #[error("{0} not found")]
    NotFound(AccountKind),
    #[error("storage failure")]
    Storage(#[source] anyhow::Error),
}

pub(crate) fn lookup_wallet(raw: &str) -> Result<WalletAddress, LookupError> {
    WalletAddress::parse(raw).map_err(LookupError::InvalidWallet)
}

pub(crate) fn registration_name(raw: Option<&str>) -> Result<String, RegistrationError> {
    match raw.map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(RegistrationError::MissingName),
    }
}
