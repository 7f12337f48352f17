use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Deserialize, Clone)]
pub struct Question {
    pub id: QuestionId,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

#[derive(Serialize, Debug, Clone, Eq, Hash, Deserialize, PartialEq, PartialOrd, Ord)]
pub struct QuestionId(pub i32);

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct NewQuestion {
    pub question_text: String,
    /// Defaults to the current time when omitted.
    pub pub_date: Option<DateTime<Utc>>,
}

impl Question {
    pub fn was_published_recently(&self) -> bool {
        self.was_published_recently_at(Utc::now())
    }

    /// The recency window is half-open: (now - 1 day, now].
    /// Future dates and dates a full day old or older are not recent.
    pub fn was_published_recently_at(&self, now: DateTime<Utc>) -> bool {
        self.pub_date > now - Duration::days(1) && self.pub_date <= now
    }

    /// Shared visibility rule for the listing, detail and results surfaces.
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question_published_at(pub_date: DateTime<Utc>) -> Question {
        Question {
            id: QuestionId(1),
            question_text: "What's new?".to_string(),
            pub_date,
        }
    }

    #[test]
    fn future_question_is_not_recent() {
        let now = Utc::now();
        let question = question_published_at(now + Duration::days(30));
        assert!(!question.was_published_recently_at(now));
    }

    #[test]
    fn old_question_is_not_recent() {
        let now = Utc::now();
        let question = question_published_at(now - Duration::days(1) - Duration::seconds(1));
        assert!(!question.was_published_recently_at(now));
    }

    #[test]
    fn recent_question_is_recent() {
        let now = Utc::now();
        let question = question_published_at(
            now - Duration::hours(23) - Duration::minutes(59) - Duration::seconds(59),
        );
        assert!(question.was_published_recently_at(now));
    }

    #[test]
    fn question_published_exactly_now_is_recent() {
        let now = Utc::now();
        let question = question_published_at(now);
        assert!(question.was_published_recently_at(now));
    }

    #[test]
    fn question_published_exactly_one_day_ago_is_not_recent() {
        let now = Utc::now();
        let question = question_published_at(now - Duration::days(1));
        assert!(!question.was_published_recently_at(now));
    }

    #[test]
    fn future_question_is_not_published() {
        let now = Utc::now();
        let question = question_published_at(now + Duration::seconds(1));
        assert!(!question.is_published(now));
        assert!(question.is_published(now + Duration::seconds(1)));
    }
}
