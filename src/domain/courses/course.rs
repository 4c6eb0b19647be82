use chrono::{DateTime, Utc};

use crate::domain::chain::{WalletAddress, Wei};

#[derive(Debug, Clone)]
pub struct Course {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub price: Wei,
    pub instructor_id: Option<i32>,
    pub instructor_wallet: Option<WalletAddress>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Course {
    /// Learners may enroll until the course ends, as long as it was not deactivated.
    pub fn is_open_for_enrollment(&self, now: DateTime<Utc>) -> bool {
        self.is_active && now < self.end_time
    }

    pub fn is_in_session(&self, now: DateTime<Utc>) -> bool {
        self.start_time <= now && now < self.end_time
    }
}

#[derive(Debug, Clone)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub price: Wei,
    pub instructor_id: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    /// Only courses open for enrollment at this instant.
    pub open_at: Option<DateTime<Utc>>,
    pub instructor_id: Option<i32>,
}

impl CourseFilter {
    pub fn matches(&self, course: &Course) -> bool {
        if let Some(now) = self.open_at {
            if !course.is_open_for_enrollment(now) {
                return false;
            }
        }
        match self.instructor_id {
            Some(id) => course.instructor_id == Some(id),
            None => true,
        }
    }
}

/// Course ids are positive integers; anything else is rejected before hitting storage.
pub fn parse_course_id(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn course(start_offset_h: i64, end_offset_h: i64, is_active: bool) -> (Course, DateTime<Utc>) {
        let now = Utc::now();
        (
            Course {
                id: 1,
                title: "Solidity 101".into(),
                description: "Intro".into(),
                start_time: now + Duration::hours(start_offset_h),
                end_time: now + Duration::hours(end_offset_h),
                price: Wei::new(1),
                instructor_id: Some(7),
                instructor_wallet: None,
                is_active,
                created_at: now,
            },
            now,
        )
    }

    #[test]
    fn enrollment_window_closes_at_end_time() {
        let (upcoming, now) = course(2, 10, true);
        assert!(upcoming.is_open_for_enrollment(now));
        assert!(!upcoming.is_in_session(now));

        let (running, now) = course(-2, 10, true);
        assert!(running.is_open_for_enrollment(now));
        assert!(running.is_in_session(now));

        let (finished, now) = course(-10, -2, true);
        assert!(!finished.is_open_for_enrollment(now));
    }

    #[test]
    fn deactivated_course_is_closed() {
        let (c, now) = course(-2, 10, false);
        assert!(!c.is_open_for_enrollment(now));
        assert!(c.is_in_session(now));
    }

    #[test]
    fn filter_combines_window_and_instructor() {
        let (c, now) = course(-2, 10, true);
        assert!(CourseFilter::default().matches(&c));
        assert!(
            CourseFilter {
                open_at: Some(now),
                instructor_id: Some(7)
            }
            .matches(&c)
        );
        assert!(
            !CourseFilter {
                open_at: None,
                instructor_id: Some(8)
            }
            .matches(&c)
        );
    }

    #[test]
    fn course_ids_must_be_positive_integers() {
        assert_eq!(parse_course_id("42"), Some(42));
        assert_eq!(parse_course_id("0"), None);
        assert_eq!(parse_course_id("-3"), None);
        assert_eq!(parse_course_id("12abc"), None);
        assert_eq!(parse_course_id("abc"), None);
    }
}
