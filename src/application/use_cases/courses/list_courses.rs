use chrono::{DateTime, Utc};

use crate::application::ports::course_repository::CourseRepository;
use crate::application::ports::instructor_repository::InstructorRepository;
use crate::application::use_cases::courses::CourseError;
use crate::domain::chain::WalletAddress;
use crate::domain::courses::course::{Course, CourseFilter};

pub struct ListCourses<'a, R, I>
where
    R: CourseRepository + ?Sized,
    I: InstructorRepository + ?Sized,
{
    pub repo: &'a R,
    pub instructors: &'a I,
}

#[derive(Debug, Clone, Default)]
pub struct ListCoursesQuery {
    pub only_open: bool,
    pub instructor_wallet: Option<String>,
}

impl<'a, R, I> ListCourses<'a, R, I>
where
    R: CourseRepository + ?Sized,
    I: InstructorRepository + ?Sized,
{
    pub async fn execute(
        &self,
        query: &ListCoursesQuery,
        now: DateTime<Utc>,
    ) -> Result<Vec<Course>, CourseError> {
        let instructor_id = match query.instructor_wallet.as_deref() {
            Some(raw) => {
                let wallet = WalletAddress::parse(raw).map_err(CourseError::InvalidWallet)?;
                let instructor = self
                    .instructors
                    .find_by_wallet(&wallet)
                    .await
                    .map_err(CourseError::Storage)?
                    .ok_or(CourseError::InstructorNotFound)?;
                Some(instructor.id)
            }
            None => None,
        };
        let filter = CourseFilter {
            open_at: query.only_open.then_some(now),
            instructor_id,
        };
        self.repo.list(&filter).await.map_err(CourseError::Storage)
    }
}
