mod admin;
mod booking;
mod fleet;
mod message;
mod user;

use warp::Filter;

pub fn api_v1() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path("v1")
        .and(
            user::api_v1_user()
                .or(fleet::api_v1_fleet())
                .or(booking::api_v1_booking())
                .or(message::api_v1_message())
                .or(admin::api_v1_admin()),
        )
        .and(warp::path::end())
}
