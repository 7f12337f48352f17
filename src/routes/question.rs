use askama::Template;
use chrono::Utc;
use tracing::{Level, event, instrument};
use warp::http::StatusCode;

use crate::store::Store;
use crate::templates::{DetailTemplate, IndexTemplate, ResultsTemplate};
use crate::types::question::{NewQuestion, Question, QuestionId};

use handle_errors::Error;

fn render(template: impl Template) -> Result<impl warp::Reply, warp::Rejection> {
    let body = template
        .render()
        .map_err(|e| warp::reject::custom(Error::TemplateError(e.to_string())))?;
    Ok(warp::reply::html(body))
}

#[instrument]
pub async fn index(store: Store) -> Result<impl warp::Reply, warp::Rejection> {
    event!(target: "polls", Level::INFO, "listing questions");
    let questions = store.published_questions(Utc::now()).await;
    render(IndexTemplate { questions })
}

#[instrument]
pub async fn detail(id: i32, store: Store) -> Result<impl warp::Reply, warp::Rejection> {
    let question = store
        .published_question(QuestionId(id), Utc::now())
        .await
        .ok_or_else(|| warp::reject::custom(Error::QuestionNotFound))?;
    render(DetailTemplate { question })
}

#[instrument]
pub async fn results(id: i32, store: Store) -> Result<impl warp::Reply, warp::Rejection> {
    let question = store
        .published_question(QuestionId(id), Utc::now())
        .await
        .ok_or_else(|| warp::reject::custom(Error::QuestionNotFound))?;
    render(ResultsTemplate { question })
}

#[instrument]
pub async fn list_questions(store: Store) -> Result<impl warp::Reply, warp::Rejection> {
    let questions: Vec<Question> = store.published_questions(Utc::now()).await;
    Ok(warp::reply::json(&questions))
}

#[instrument]
pub async fn add_question(
    store: Store,
    new_question: NewQuestion,
) -> Result<impl warp::Reply, warp::Rejection> {
    store.add_question(new_question).await;
    Ok(warp::reply::with_status("Question added", StatusCode::OK))
}
