use std::sync::Arc;

use crate::application::ports::course_repository::CourseRepository;
use crate::application::ports::enrollment_repository::EnrollmentRepository;
use crate::application::ports::instructor_repository::InstructorRepository;
use crate::application::ports::learner_repository::LearnerRepository;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    course_repo: Arc<dyn CourseRepository>,
    instructor_repo: Arc<dyn InstructorRepository>,
    learner_repo: Arc<dyn LearnerRepository>,
    enrollment_repo: Arc<dyn EnrollmentRepository>,
}

impl AppServices {
    pub fn new(
        course_repo: Arc<dyn CourseRepository>,
        instructor_repo: Arc<dyn InstructorRepository>,
        learner_repo: Arc<dyn LearnerRepository>,
        enrollment_repo: Arc<dyn EnrollmentRepository>,
    ) -> Self {
        Self {
            course_repo,
            instructor_repo,
            learner_repo,
            enrollment_repo,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn course_repo(&self) -> Arc<dyn CourseRepository> {
        self.services.course_repo.clone()
    }

    pub fn instructor_repo(&self) -> Arc<dyn InstructorRepository> {
        self.services.instructor_repo.clone()
    }

    pub fn learner_repo(&self) -> Arc<dyn LearnerRepository> {
        self.services.learner_repo.clone()
    }

    pub fn enrollment_repo(&self) -> Arc<dyn EnrollmentRepository> {
        self.services.enrollment_repo.clone()
    }
}
