#![warn(clippy::all)]

use tracing_subscriber::fmt::format::FmtSpan;

use polls::router;
use polls::store::Store;

#[tokio::main]
async fn main() {
    let log_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "polls=info,warp=error".to_owned());

    tracing_subscriber::fmt()
        .with_env_filter(log_filter)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    let store = Store::new();

    warp::serve(router(store)).run(([127, 0, 0, 1], 3030)).await;
}
