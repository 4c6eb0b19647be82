use crate::application::ports::course_repository::CourseRepository;
use crate::application::use_cases::courses::CourseError;

pub struct DeleteCourse<'a, R: CourseRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CourseRepository + ?Sized> DeleteCourse<'a, R> {
    /// Enrollments for the course go with it.
    pub async fn execute(&self, id: i32) -> Result<(), CourseError> {
        if !self.repo.delete(id).await.map_err(CourseError::Storage)? {
            return Err(CourseError::NotFound);
        }
        tracing::info!(course_id = id, "course_deleted");
        Ok(())
    }
}
