use crate::application::ports::instructor_repository::InstructorRepository;
use crate::application::use_cases::accounts::{AccountKind, LookupError, lookup_wallet};
use crate::domain::accounts::instructor::Instructor;

pub struct GetInstructor<'a, R: InstructorRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: InstructorRepository + ?Sized> GetInstructor<'a, R> {
    pub async fn execute(&self, wallet: &str) -> Result<Instructor, LookupError> {
        let wallet = lookup_wallet(wallet)?;
        self.repo
            .find_by_wallet(&wallet)
            .await
            .map_err(LookupError::Storage)?
            .ok_or(LookupError::NotFound(AccountKind::Instructor))
    }
}
