use async_trait::async_trait;

use crate::domain::courses::course::{Course, CourseFilter, NewCourse};

#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Newest start time first.
    async fn list(&self, filter: &CourseFilter) -> anyhow::Result<Vec<Course>>;

    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Course>>;

    async fn create(&self, course: &NewCourse) -> anyhow::Result<Course>;

    // None when the course does not exist
    async fn deactivate(&self, id: i32) -> anyhow::Result<Option<Course>>;

    async fn delete(&self, id: i32) -> anyhow::Result<bool>;
}
