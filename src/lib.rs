#![warn(clippy::all)]

use warp::{Filter, Rejection, Reply, http::Method};

use handle_errors::return_error;

pub mod routes;
pub mod store;
pub mod templates;
pub mod types;

use store::Store;

/// Builds the full filter tree over a given store. Route names map
/// statically onto handlers; the same router serves the HTML surfaces
/// and the JSON api.
pub fn router(store: Store) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let store_filter = warp::any().map(move || store.clone());

    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("Content-Type")
        .allow_methods(&[Method::PUT, Method::DELETE, Method::POST, Method::GET]);

    let index = warp::get()
        .and(warp::path("polls"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(routes::question::index)
        .with(warp::trace(|info| {
            tracing::info_span!(
                "index request",
                method = %info.method(),
                path = %info.path(),
                id = %uuid::Uuid::new_v4(),
            )
        }));

    let results = warp::get()
        .and(warp::path("polls"))
        .and(warp::path::param::<i32>())
        .and(warp::path("results"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(routes::question::results);

    let detail = warp::get()
        .and(warp::path("polls"))
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(routes::question::detail);

    let list_questions = warp::get()
        .and(warp::path("api"))
        .and(warp::path("questions"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(routes::question::list_questions);

    let add_question = warp::post()
        .and(warp::path("api"))
        .and(warp::path("questions"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and(warp::body::json())
        .and_then(routes::question::add_question);

    index
        .or(results)
        .or(detail)
        .or(list_questions)
        .or(add_question)
        .with(cors)
        .with(warp::trace::request())
        .recover(return_error)
}
