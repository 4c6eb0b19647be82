use chrono::{DateTime, Utc};

use crate::application::ports::course_repository::CourseRepository;
use crate::application::ports::instructor_repository::InstructorRepository;
use crate::application::use_cases::courses::CourseError;
use crate::domain::chain::{WalletAddress, Wei};
use crate::domain::courses::course::{Course, NewCourse};

pub struct CreateCourse<'a, R, I>
where
    R: CourseRepository + ?Sized,
    I: InstructorRepository + ?Sized,
{
    pub repo: &'a R,
    pub instructors: &'a I,
}

/// Course fields as submitted by the course creation form.
#[derive(Debug, Clone, Default)]
pub struct CourseDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub price: Option<PriceDraft>,
    pub instructor_wallet: Option<String>,
}

#[derive(Debug, Clone)]
pub enum PriceDraft {
    /// Integer amount of wei, as the course form submits it.
    Wei(String),
    /// Decimal ether amount, e.g. "0.05".
    Eth(String),
}

impl PriceDraft {
    fn to_wei(&self) -> Result<Wei, CourseError> {
        match self {
            PriceDraft::Wei(raw) => Wei::from_wei_str(raw),
            PriceDraft::Eth(raw) => Wei::from_eth_str(raw),
        }
        .map_err(CourseError::InvalidPrice)
    }
}

impl<'a, R, I> CreateCourse<'a, R, I>
where
    R: CourseRepository + ?Sized,
    I: InstructorRepository + ?Sized,
{
    pub async fn execute(&self, draft: &CourseDraft) -> Result<Course, CourseError> {
        let title = required_text(draft.title.as_deref(), "Title")?;
        let description = required_text(draft.description.as_deref(), "Description")?;
        let start_time = draft.start_time.ok_or(CourseError::MissingField("Start time"))?;
        let end_time = draft.end_time.ok_or(CourseError::MissingField("End time"))?;
        if end_time <= start_time {
            return Err(CourseError::InvalidTimeWindow);
        }
        let price = draft
            .price
            .as_ref()
            .ok_or(CourseError::MissingField("Price"))?
            .to_wei()?;

        let instructor_id = match draft
            .instructor_wallet
            .as_deref()
            .filter(|w| !w.trim().is_empty())
        {
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

        let course = self
            .repo
            .create(&NewCourse {
                title,
                description,
                start_time,
                end_time,
                price,
                instructor_id,
            })
            .await
            .map_err(CourseError::Storage)?;
        tracing::info!(course_id = course.id, price_wei = %course.price, "course_created");
        Ok(course)
    }
}

fn required_text(value: Option<&str>, field: &'static str) -> Result<String, CourseError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(CourseError::MissingField(field)),
    }
}
