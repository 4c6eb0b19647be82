use crate::application::ports::instructor_repository::{
    INSTRUCTOR_WALLET_UNIQUE, InstructorRepository,
};
use crate::application::ports::insert_error::InsertError;
use crate::application::use_cases::accounts::{AccountKind, RegistrationError, registration_name};
use crate::domain::accounts::instructor::Instructor;
use crate::domain::chain::WalletAddress;

pub struct RegisterInstructor<'a, R: InstructorRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone, Default)]
pub struct RegisterInstructorRequest {
    pub wallet_address: String,
    pub name: Option<String>,
    pub bio: Option<String>,
}

impl<'a, R: InstructorRepository + ?Sized> RegisterInstructor<'a, R> {
    pub async fn execute(
        &self,
        req: &RegisterInstructorRequest,
    ) -> Result<Instructor, RegistrationError> {
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
            return Err(RegistrationError::AlreadyExists(AccountKind::Instructor));
        }

        let bio = req.bio.as_deref().map(str::trim).filter(|b| !b.is_empty());
        match self.repo.create(&wallet, &name, bio).await {
            Ok(instructor) => {
                tracing::info!(instructor_id = instructor.id, wallet = %wallet, "instructor_registered");
                Ok(instructor)
            }
            Err(e) if e.is_conflict_on(INSTRUCTOR_WALLET_UNIQUE) => {
                Err(RegistrationError::AlreadyExists(AccountKind::Instructor))
            }
            Err(InsertError::Conflict { constraint }) => Err(RegistrationError::Storage(
                anyhow::anyhow!("unexpected unique violation on {constraint}"),
            )),
            Err(InsertError::Storage(e)) => Err(RegistrationError::Storage(e)),
        }
    }
}
