use crate::{POOL, methods, model};
use diesel::prelude::*;
use serde_derive::{Deserialize, Serialize};
use warp::http::StatusCode;
use warp::{Filter, Reply};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
struct UpdateBookingData {
    access_token: model::RequestBodyToken,
    booking_id: i32,
    status: model::BookingStatus,
}

// Approve / reject / cancel. The transition table in the model decides
// what is legal; everything else is a conflict and the row stays put.
pub fn update_booking()
-> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("update-booking")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(warp::header::optional::<String>("x-client-type"))
        .and_then(
            move |body: UpdateBookingData, client_type: Option<String>| async move {
                let if_token_valid = methods::tokens::verify_user_token(
                    body.access_token.user_id,
                    body.access_token.token.clone(),
                )
                .await;
                match if_token_valid {
                    Err(_) => methods::tokens::token_not_hex_warp_return(&body.access_token.token),
                    Ok(token_bool) => {
                        if !token_bool {
                            methods::tokens::token_invalid_warp_return(&body.access_token.token)
                        } else {
                            let new_token_in_db_publish =
                                methods::tokens::rotate_token(&body.access_token, client_type)
                                    .await;
                            let user_in_request =
                                methods::user::get_user_by_id(body.access_token.user_id)
                                    .await
                                    .unwrap();
                            if !methods::user::user_with_admin_access(&user_in_request) {
                                return methods::user::user_not_admin_wrapped_return(
                                    new_token_in_db_publish,
                                );
                            }

                            use crate::schema::bookings::dsl::*;
                            let mut pool = POOL.get().unwrap();
                            let booking_result = bookings
                                .filter(id.eq(&body.booking_id))
                                .get_result::<model::Booking>(&mut pool);
                            match booking_result {
                                Err(_) => methods::standard_replies::booking_not_found_response(),
                                Ok(booking) => {
                                    if !booking.status.can_transition_to(body.status) {
                                        return methods::standard_replies::transition_not_allowed_response();
                                    }
                                    // Only the status column moves; the rest
                                    // of the row is immutable after creation.
                                    let updated = diesel::update(
                                        bookings.filter(id.eq(&body.booking_id)),
                                    )
                                    .set(status.eq(body.status))
                                    .get_result::<model::Booking>(&mut pool)
                                    .unwrap();
                                    let msg = serde_json::json!({
                                        "access_token": &new_token_in_db_publish,
                                        "booking": updated,
                                    });
                                    Ok::<_, warp::Rejection>((warp::reply::with_status(
                                        warp::reply::json(&msg),
                                        StatusCode::OK,
                                    )
                                    .into_response(),))
                                }
                            }
                        }
                    }
                }
            },
        )
}
