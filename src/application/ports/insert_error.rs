/// Failure of an insert that may trip a unique constraint.
#[derive(thiserror::Error, Debug)]
pub enum InsertError {
    #[error("unique constraint `{constraint}` violated")]
    Conflict { constraint: String },
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl InsertError {
    pub fn conflict(constraint: &str) -> Self {
        InsertError::Conflict {
            constraint: constraint.to_string(),
        }
    }

    pub fn is_conflict_on(&self, name: &str) -> bool {
        matches!(self, InsertError::Conflict { constraint } if constraint == name)
    }
}
