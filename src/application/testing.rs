//! In-memory repositories for use-case and router tests.
//!
//! Unique constraints carry the same names as the Postgres schema so conflict
//! handling can be exercised without a database.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use crate::application::ports::course_repository::CourseRepository;
use crate::application::ports::enrollment_repository::{
    ENROLLMENT_TX_HASH_UNIQUE, ENROLLMENT_UNIQUE, EnrollmentRepository,
};
use crate::application::ports::insert_error::InsertError;
use crate::application::ports::instructor_repository::{
    INSTRUCTOR_WALLET_UNIQUE, InstructorRepository,
};
use crate::application::ports::learner_repository::{LEARNER_WALLET_UNIQUE, LearnerRepository};
use crate::domain::accounts::instructor::Instructor;
use crate::domain::accounts::learner::Learner;
use crate::domain::chain::{TxHash, WalletAddress};
use crate::domain::courses::course::{Course, CourseFilter, NewCourse};
use crate::domain::enrollments::enrollment::{CourseEnrollee, EnrolledCourse, Enrollment};

#[derive(Default)]
struct Tables {
    courses: Vec<Course>,
    instructors: Vec<Instructor>,
    learners: Vec<Learner>,
    enrollments: Vec<Enrollment>,
    next_id: i32,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    // Simulate a concurrent writer: existence checks miss, inserts still conflict.
    hide_accounts: AtomicBool,
    hide_enrollments: AtomicBool,
}

impl InMemoryStore {
    pub fn hide_accounts(&self, hide: bool) {
        self.hide_accounts.store(hide, Ordering::SeqCst);
    }

    pub fn hide_enrollments(&self, hide: bool) {
        self.hide_enrollments.store(hide, Ordering::SeqCst);
    }
}

#[async_trait]
impl CourseRepository for InMemoryStore {
    async fn list(&self, filter: &CourseFilter) -> anyhow::Result<Vec<Course>> {
        let tables = self.tables.lock().unwrap();
        let mut out: Vec<Course> = tables
            .courses
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect();
        out.sort_by(|a, b| b.start_time.cmp(&a.start_time).then(b.id.cmp(&a.id)));
        Ok(out)
    }

    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Course>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.courses.iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, course: &NewCourse) -> anyhow::Result<Course> {
        let mut tables = self.tables.lock().unwrap();
        let instructor_wallet = course.instructor_id.and_then(|id| {
            tables
                .instructors
                .iter()
                .find(|i| i.id == id)
                .map(|i| i.wallet_address.clone())
        });
        let row = Course {
            id: tables.next_id(),
            title: course.title.clone(),
            description: course.description.clone(),
            start_time: course.start_time,
            end_time: course.end_time,
            price: course.price,
            instructor_id: course.instructor_id,
            instructor_wallet,
            is_active: true,
            created_at: Utc::now(),
        };
        tables.courses.push(row.clone());
        Ok(row)
    }

    async fn deactivate(&self, id: i32) -> anyhow::Result<Option<Course>> {
        let mut tables = self.tables.lock().unwrap();
        Ok(tables.courses.iter_mut().find(|c| c.id == id).map(|c| {
            c.is_active = false;
            c.clone()
        }))
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.courses.len();
        tables.courses.retain(|c| c.id != id);
        tables.enrollments.retain(|e| e.course_id != id);
        Ok(tables.courses.len() != before)
    }
}

#[async_trait]
impl InstructorRepository for InMemoryStore {
    async fn create(
        &self,
        wallet: &WalletAddress,
        name: &str,
        bio: Option<&str>,
    ) -> Result<Instructor, InsertError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.instructors.iter().any(|i| &i.wallet_address == wallet) {
            return Err(InsertError::conflict(INSTRUCTOR_WALLET_UNIQUE));
        }
        let row = Instructor {
            id: tables.next_id(),
            wallet_address: wallet.clone(),
            name: name.to_string(),
            bio: bio.map(str::to_string),
            created_at: Utc::now(),
        };
        tables.instructors.push(row.clone());
        Ok(row)
    }

    async fn find_by_wallet(&self, wallet: &WalletAddress) -> anyhow::Result<Option<Instructor>> {
        if self.hide_accounts.load(Ordering::SeqCst) {
            return Ok(None);
        }
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .instructors
            .iter()
            .find(|i| &i.wallet_address == wallet)
            .cloned())
    }
}

#[async_trait]
impl LearnerRepository for InMemoryStore {
    async fn create(&self, wallet: &WalletAddress, name: &str) -> Result<Learner, InsertError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.learners.iter().any(|l| &l.wallet_address == wallet) {
            return Err(InsertError::conflict(LEARNER_WALLET_UNIQUE));
        }
        let row = Learner {
            id: tables.next_id(),
            wallet_address: wallet.clone(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        tables.learners.push(row.clone());
        Ok(row)
    }

    async fn find_by_wallet(&self, wallet: &WalletAddress) -> anyhow::Result<Option<Learner>> {
        if self.hide_accounts.load(Ordering::SeqCst) {
            return Ok(None);
        }
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .learners
            .iter()
            .find(|l| &l.wallet_address == wallet)
            .cloned())
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryStore {
    async fn find(&self, course_id: i32, learner_id: i32) -> anyhow::Result<Option<Enrollment>> {
        if self.hide_enrollments.load(Ordering::SeqCst) {
            return Ok(None);
        }
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .enrollments
            .iter()
            .find(|e| e.course_id == course_id && e.learner_id == learner_id)
            .cloned())
    }

    async fn find_by_tx_hash(&self, tx_hash: &TxHash) -> anyhow::Result<Option<Enrollment>> {
        if self.hide_enrollments.load(Ordering::SeqCst) {
            return Ok(None);
        }
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .enrollments
            .iter()
            .find(|e| e.tx_hash.as_ref() == Some(tx_hash))
            .cloned())
    }

    async fn create(
        &self,
        course_id: i32,
        learner_id: i32,
        tx_hash: Option<&TxHash>,
    ) -> Result<Enrollment, InsertError> {
        let mut tables = self.tables.lock().unwrap();
        if tables
            .enrollments
            .iter()
            .any(|e| e.course_id == course_id && e.learner_id == learner_id)
        {
            return Err(InsertError::conflict(ENROLLMENT_UNIQUE));
        }
        if tx_hash.is_some()
            && tables
                .enrollments
                .iter()
                .any(|e| e.tx_hash.as_ref() == tx_hash)
        {
            return Err(InsertError::conflict(ENROLLMENT_TX_HASH_UNIQUE));
        }
        let row = Enrollment {
            id: tables.next_id(),
            course_id,
            learner_id,
            tx_hash: tx_hash.cloned(),
            enrolled_at: Utc::now(),
        };
        tables.enrollments.push(row.clone());
        Ok(row)
    }

    async fn list_for_course(&self, course_id: i32) -> anyhow::Result<Vec<CourseEnrollee>> {
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<&Enrollment> = tables
            .enrollments
            .iter()
            .filter(|e| e.course_id == course_id)
            .collect();
        rows.sort_by(|a, b| b.enrolled_at.cmp(&a.enrolled_at).then(b.id.cmp(&a.id)));
        Ok(rows
            .into_iter()
            .filter_map(|e| {
                let learner = tables.learners.iter().find(|l| l.id == e.learner_id)?;
                Some(CourseEnrollee {
                    learner: learner.clone(),
                    tx_hash: e.tx_hash.clone(),
                    enrolled_at: e.enrolled_at,
                })
            })
            .collect())
    }

    async fn list_for_learner(&self, learner_id: i32) -> anyhow::Result<Vec<EnrolledCourse>> {
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<&Enrollment> = tables
            .enrollments
            .iter()
            .filter(|e| e.learner_id == learner_id)
            .collect();
        rows.sort_by(|a, b| b.enrolled_at.cmp(&a.enrolled_at).then(b.id.cmp(&a.id)));
        Ok(rows
            .into_iter()
            .filter_map(|e| {
                let course = tables.courses.iter().find(|c| c.id == e.course_id)?;
                Some(EnrolledCourse {
                    course: course.clone(),
                    tx_hash: e.tx_hash.clone(),
                    enrolled_at: e.enrolled_at,
                })
            })
            .collect())
    }
}
