use crate::application::ports::course_repository::CourseRepository;
use crate::application::use_cases::courses::CourseError;
use crate::domain::courses::course::Course;

pub struct DeactivateCourse<'a, R: CourseRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CourseRepository + ?Sized> DeactivateCourse<'a, R> {
    pub async fn execute(&self, id: i32) -> Result<Course, CourseError> {
        let course = self
            .repo
            .deactivate(id)
            .await
            .map_err(CourseError::Storage)?
            .ok_or(CourseError::NotFound)?;
        tracing::info!(course_id = id, "course_deactivated");
        Ok(course)
    }
}
