use warp::{
    Rejection, Reply,
    filters::{body::BodyDeserializeError, cors::CorsForbidden},
    http::StatusCode,
    reject::Reject,
};

use tracing::{Level, event, instrument};

#[derive(Debug)]
pub enum Error {
    QuestionNotFound,
    TemplateError(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &*self {
            Error::QuestionNotFound => {
                write!(f, "Question not found")
            }
            Error::TemplateError(err) => {
                write!(f, "Cannot render template: {}", err)
            }
        }
    }
}

impl Reject for Error {}

#[instrument]
pub async fn return_error(r: Rejection) -> Result<impl Reply, Rejection> {
    if let Some(crate::Error::QuestionNotFound) = r.find() {
        event!(Level::INFO, "Question not found");
        Ok(warp::reply::with_status(
            crate::Error::QuestionNotFound.to_string(),
            StatusCode::NOT_FOUND,
        ))
    } else if let Some(crate::Error::TemplateError(e)) = r.find() {
        event!(Level::ERROR, "Template error: {}", e);
        Ok(warp::reply::with_status(
            "Internal Server Error".to_string(),
            StatusCode::INTERNAL_SERVER_ERROR,
        ))
    } else if let Some(error) = r.find::<CorsForbidden>() {
        event!(Level::ERROR, "CORS forbidden error: {}", error);
        Ok(warp::reply::with_status(
            error.to_string(),
            StatusCode::FORBIDDEN,
        ))
    } else if let Some(error) = r.find::<BodyDeserializeError>() {
        event!(Level::ERROR, "Cannot deserialize request body: {}", error);
        Ok(warp::reply::with_status(
            error.to_string(),
            StatusCode::UNPROCESSABLE_ENTITY,
        ))
    } else {
        event!(Level::WARN, "Requested route was not found");
        Ok(warp::reply::with_status(
            "Route not found".to_string(),
            StatusCode::NOT_FOUND,
        ))
    }
}
