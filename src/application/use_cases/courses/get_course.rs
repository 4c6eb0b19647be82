use crate::application::ports::course_repository::CourseRepository;
use crate::application::use_cases::courses::CourseError;
use crate::domain::courses::course::Course;

pub struct GetCourse<'a, R: CourseRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CourseRepository + ?Sized> GetCourse<'a, R> {
    pub async fn execute(&self, id: i32) -> Result<Course, CourseError> {
        self.repo
            .get_by_id(id)
            .await
            .map_err(CourseError::Storage)?
            .ok_or(CourseError::NotFound)
    }
}
