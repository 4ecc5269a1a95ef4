mod get;

use warp::Filter;

pub fn api_v1_fleet() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone
{
    warp::path("fleet")
        .and(get::get_fleet())
        .and(warp::path::end())
}
