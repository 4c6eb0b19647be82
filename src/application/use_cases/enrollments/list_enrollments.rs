use crate::application::ports::course_repository::CourseRepository;
use crate::application::ports::enrollment_repository::EnrollmentRepository;
use crate::application::use_cases::enrollments::EnrollmentError;
use crate::domain::enrollments::enrollment::CourseEnrollee;

pub struct ListEnrollments<'a, C, E>
where
    C: CourseRepository + ?Sized,
    E: EnrollmentRepository + ?Sized,
{
    pub courses: &'a C,
    pub enrollments: &'a E,
}

impl<'a, C, E> ListEnrollments<'a, C, E>
where
    C: CourseRepository + ?Sized,
    E: EnrollmentRepository + ?Sized,
{
    pub async fn execute(&self, course_id: i32) -> Result<Vec<CourseEnrollee>, EnrollmentError> {
        if self
            .courses
            .get_by_id(course_id)
            .await
            .map_err(EnrollmentError::Storage)?
            .is_none()
        {
            return Err(EnrollmentError::CourseNotFound);
        }
        self.enrollments
            .list_for_course(course_id)
            .await
            .map_err(EnrollmentError::Storage)
    }
}
