use warp::http::StatusCode;
use warp::reply::with_status;
use warp::{Filter, Reply, reply};

// Liveness probe for the load balancer.
pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("status")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(async move || {
            let body = serde_json::json!({
                "service": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
            });
            Ok::<_, warp::Rejection>((with_status(reply::json(&body), StatusCode::OK).into_response(),))
        })
}
