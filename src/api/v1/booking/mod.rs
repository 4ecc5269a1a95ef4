mod cancel;
mod my_bookings;
mod new;

use warp::Filter;

pub fn api_v1_booking()
-> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path("booking")
        .and(
            new::new_booking()
                .or(my_bookings::my_bookings())
                .or(cancel::cancel_booking()),
        )
        .and(warp::path::end())
}
