use crate::application::ports::learner_repository::LearnerRepository;
use crate::application::use_cases::accounts::{AccountKind, LookupError, lookup_wallet};
use crate::domain::accounts::learner::Learner;

pub struct GetLearner<'a, R: LearnerRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: LearnerRepository + ?Sized> GetLearner<'a, R> {
    pub async fn execute(&self, wallet: &str) -> Result<Learner, LookupError> {
        let wallet = lookup_wallet(wallet)?;
        self.repo
            .find_by_wallet(&wallet)
            .await
            .map_err(LookupError::Storage)?
            .ok_or(LookupError::NotFound(AccountKind::Learner))
    }
}
