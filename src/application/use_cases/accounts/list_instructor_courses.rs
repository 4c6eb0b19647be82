use crate::application::ports::course_repository::CourseRepository;
use crate::application::ports::instructor_repository::InstructorRepository;
use crate::application::use_cases::accounts::get_instructor::GetInstructor;
use crate::application::use_cases::accounts::LookupError;
use crate::domain::courses::course::{Course, CourseFilter};

pub struct ListInstructorCourses<'a, I, C>
where
    I: InstructorRepository + ?Sized,
    C: CourseRepository + ?Sized,
{
    pub instructors: &'a I,
    pub courses: &'a C,
}

impl<'a, I, C> ListInstructorCourses<'a, I, C>
where
    I: InstructorRepository + ?Sized,
    C: CourseRepository + ?Sized,
{
    pub async fn execute(&self, wallet: &str) -> Result<Vec<Course>, LookupError> {
        let instructor = GetInstructor {
            repo: self.instructors,
        }
        .execute(wallet)
        .await?;
        let filter = CourseFilter {
            instructor_id: Some(instructor.id),
            ..Default::default()
        };
        self.courses
            .list(&filter)
            .await
            .map_err(LookupError::Storage)
    }
}
