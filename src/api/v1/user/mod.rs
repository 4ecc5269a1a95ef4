mod create;
mod login;
mod retrieve;
mod rm_token;

use warp::Filter;

pub fn api_v1_user() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone
{
    warp::path("user")
        .and(
            login::user_login()
                .or(create::create_user())
                .or(retrieve::retrieve_user())
                .or(rm_token::rm_token()),
        )
        .and(warp::path::end())
}
