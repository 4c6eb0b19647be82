use crate::application::ports::insert_error::InsertError;
use crate::application::ports::learner_repository::{LEARNER_WALLET_UNIQUE, LearnerRepository};
use crate::application::use_cases::accounts::{AccountKind, RegistrationError, registration_name};
use crate::domain::accounts::learner::Learner;
use crate::domain::chain::WalletAddress;

pub struct RegisterLearner<'a, R: LearnerRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone, Default)]
pub struct RegisterLearnerRequest {
    pub wallet_address: String,
    pub name: Option<String>,
}

impl<'a, R: LearnerRepository + ?Sized> RegisterLearner<'a, R> {
    pub async fn execute(&self, req: &RegisterLearnerRequest) -> Result<Learner, RegistrationError> {
        let wallet =
            WalletAddress::parse(&req.wallet_address).map_err(RegistrationError::InvalidWallet)?;
        let name = registration_name(req.name.as_deref())?;

        if self
            .repo
            .find_by_wallet(&wallet)
            .await
            .map_err(RegistrationError::Storage)?
            .is_some()
        {
            return Err(RegistrationError::AlreadyExists(AccountKind::Learner));
        }

        match self.repo.create(&wallet, &name).await {
            Ok(learner) => {
                tracing::info!(learner_id = learner.id, wallet = %wallet, "learner_registered");
                Ok(learner)
            }
            Err(e) if e.is_conflict_on(LEARNER_WALLET_UNIQUE) => {
                Err(RegistrationError::AlreadyExists(AccountKind::Learner))
            }
            Err(InsertError::Conflict { constraint }) => Err(RegistrationError::Storage(
                anyhow::anyhow!("unexpected unique violation on {constraint}"),
            )),
            Err(InsertError::Storage(e)) => Err(RegistrationError::Storage(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::InMemoryStore;

    #[tokio::test]
    async fn second_registration_is_rejected() {
        let store = InMemoryStore::default();
        let uc = RegisterLearner { repo: &store };
        let req = RegisterLearnerRequest {
            wallet_address: "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB".into(),
            name: Some(" Lin ".into()),
        };
        let learner = uc.execute(&req).await.unwrap();
        assert_eq!(learner.name, "Lin");

        let err = uc.execute(&req).await.unwrap_err();
        assert_eq!(err.to_string(), "Learner already exists");
    }

    #[tokio::test]
    async fn bad_checksum_is_invalid_wallet() {
        let store = InMemoryStore::default();
        let uc = RegisterLearner { repo: &store };
        let err = uc
            .execute(&RegisterLearnerRequest {
                wallet_address: "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6Fb".into(),
                name: Some("Lin".into()),
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid wallet address");
    }
}
