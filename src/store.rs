use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::types::question::{NewQuestion, Question, QuestionId};

#[derive(Clone, Debug)]
pub struct Store {
    questions: Arc<RwLock<HashMap<QuestionId, Question>>>,
    next_id: Arc<AtomicI32>,
}

impl Store {
    pub fn new() -> Self {
        Store {
            questions: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI32::new(1)),
        }
    }

    pub async fn add_question(&self, new_question: NewQuestion) -> Question {
        let question = Question {
            id: QuestionId(self.next_id.fetch_add(1, Ordering::Relaxed)),
            question_text: new_question.question_text,
            pub_date: new_question.pub_date.unwrap_or_else(Utc::now),
        };
        self.questions
            .write()
            .await
            .insert(question.id.clone(), question.clone());
        question
    }

    /// Questions published on or before `now`, newest first. Questions with
    /// a future `pub_date` never appear. Ties on `pub_date` are broken by
    /// id, the most recently created question first.
    pub async fn published_questions(&self, now: DateTime<Utc>) -> Vec<Question> {
        let mut questions: Vec<Question> = self
            .questions
            .read()
            .await
            .values()
            .filter(|question| question.is_published(now))
            .cloned()
            .collect();
        questions.sort_by(|a, b| b.pub_date.cmp(&a.pub_date).then(b.id.cmp(&a.id)));
        questions
    }

    /// Looks up a single question, applying the same visibility rule as the
    /// listing: a question with a future `pub_date` does not exist yet as
    /// far as callers are concerned.
    pub async fn published_question(
        &self,
        id: QuestionId,
        now: DateTime<Utc>,
    ) -> Option<Question> {
        self.questions
            .read()
            .await
            .get(&id)
            .filter(|question| question.is_published(now))
            .cloned()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
