mod bookings;
mod dashboard;
mod delete_message;
mod login;
mod mark_read;
mod messages;
mod update_booking;

use warp::Filter;

pub fn api_v1_admin() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone
{
    warp::path("admin")
        .and(
            login::admin_login()
                .or(dashboard::dashboard())
                .or(bookings::all_bookings())
                .or(update_booking::update_booking())
                .or(messages::all_messages())
                .or(mark_read::mark_read())
                .or(delete_message::delete_message()),
        )
        .and(warp::path::end())
}
