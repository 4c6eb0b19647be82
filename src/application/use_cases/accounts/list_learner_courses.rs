use crate::application::ports::enrollment_repository::EnrollmentRepository;
use crate::application::ports::learner_repository::LearnerRepository;
use crate::application::use_cases::accounts::LookupError;
use crate::application::use_cases::accounts::get_learner::GetLearner;
use crate::domain::enrollments::enrollment::EnrolledCourse;

pub struct ListLearnerCourses<'a, L, E>
where
    L: LearnerRepository + ?Sized,
    E: EnrollmentRepository + ?Sized,
{
    pub learners: &'a L,
    pub enrollments: &'a E,
}

impl<'a, L, E> ListLearnerCourses<'a, L, E>
where
    L: LearnerRepository + ?Sized,
    E: EnrollmentRepository + ?Sized,
{
    pub async fn execute(&self, wallet: &str) -> Result<Vec<EnrolledCourse>, LookupError> {
        let learner = GetLearner {
            repo: self.learners,
        }
        .execute(wallet)
        .await?;
        self.enrollments
            .list_for_learner(learner.id)
            .await
            .map_err(LookupError::Storage)
    }
}
