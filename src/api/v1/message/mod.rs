mod new;

use warp::Filter;

pub fn api_v1_message()
-> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path("message")
        .and(new::new_message())
        .and(warp::path::end())
}
