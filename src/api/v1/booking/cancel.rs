use crate::{POOL, methods, model};
use diesel::prelude::*;
use serde_derive::{Deserialize, Serialize};
use warp::http::StatusCode;
use warp::{Filter, Reply};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
struct CancelBookingData {
    access_token: model::RequestBodyToken,
    booking_id: i32,
}

// Customers may withdraw a request only while it is still pending; once an
// admin has confirmed it, cancellation goes through the office.
pub fn cancel_booking()
-> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("cancel")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(warp::header::optional::<String>("x-client-type"))
        .and_then(
            move |body: CancelBookingData, client_type: Option<String>| async move {
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

                            use crate::schema::bookings::dsl::*;
                            let mut pool = POOL.get().unwrap();
                            let booking_result = bookings
                                .filter(id.eq(&body.booking_id))
                                .get_result::<model::Booking>(&mut pool);
                            match booking_result {
                                Err(_) => methods::standard_replies::booking_not_found_response(),
                                Ok(booking) => {
                                    if booking.user_id != Some(body.access_token.user_id) {
                                        let error_msg = serde_json::json!({
                                            "access_token": &new_token_in_db_publish,
                                            "error": "This booking belongs to another account",
                                        });
                                        return Ok::<_, warp::Rejection>((
                                            warp::reply::with_status(
                                                warp::reply::json(&error_msg),
                                                StatusCode::FORBIDDEN,
                                            )
                                            .into_response(),
                                        ));
                                    }
                                    if booking.status != model::BookingStatus::Pending {
                                        let error_msg = serde_json::json!({
                                            "access_token": &new_token_in_db_publish,
                                            "error": "Only pending bookings can be cancelled",
                                        });
                                        return Ok::<_, warp::Rejection>((
                                            warp::reply::with_status(
                                                warp::reply::json(&error_msg),
                                                StatusCode::CONFLICT,
                                            )
                                            .into_response(),
                                        ));
                                    }
                                    let updated = diesel::update(
                                        bookings.filter(id.eq(&body.booking_id)),
                                    )
                                    .set(status.eq(model::BookingStatus::Cancelled))
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
