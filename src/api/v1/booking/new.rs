use crate::{POOL, catalog, methods, model};
use chrono::NaiveDate;
use diesel::prelude::*;
use serde_derive::{Deserialize, Serialize};
use warp::Filter;
use warp::http::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
struct NewBookingRequestBodyData {
    // Present when a signed-in customer books, so the request lands in
    // their my-bookings view. Anonymous requests are equally valid.
    access_token: Option<model::RequestBodyToken>,
    name: String,
    email: String,
    phone: String,
    car_id: String,
    pickup_date: NaiveDate,
    return_date: NaiveDate,
    with_driver: bool,
}

pub fn new_booking() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone
{
    warp::path!("new")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and_then(move |body: NewBookingRequestBodyData| async move {
            if body.name.trim().is_empty()
                || !methods::user::is_valid_email(&body.email)
                || !methods::user::is_valid_phone(&body.phone)
            {
                return methods::standard_replies::bad_request(
                    "Please check your name, email and phone number format",
                );
            }
            let Some(vehicle) = catalog::find_vehicle(&body.car_id) else {
                return methods::standard_replies::bad_request("Unknown vehicle");
            };
            if !methods::booking_rate::date_range_is_valid(body.pickup_date, body.return_date) {
                return methods::standard_replies::bad_request(
                    "Return date must be after pickup date.",
                );
            }

            // Attribute the booking to its owner when a session rides along.
            let owner_id = match &body.access_token {
                None => None,
                Some(token_object) => {
                    let if_token_valid = methods::tokens::verify_user_token(
                        token_object.user_id,
                        token_object.token.clone(),
                    )
                    .await;
                    match if_token_valid {
                        Err(_) => {
                            return methods::tokens::token_not_hex_warp_return(
                                &token_object.token,
                            );
                        }
                        Ok(false) => {
                            return methods::tokens::token_invalid_warp_return(
                                &token_object.token,
                            );
                        }
                        Ok(true) => Some(token_object.user_id),
                    }
                }
            };

            let day_count = methods::booking_rate::rental_days(body.pickup_date, body.return_date);
            let to_be_inserted = model::NewBooking {
                name: body.name,
                email: body.email,
                phone: body.phone,
                car_id: vehicle.id.to_string(),
                car_name: vehicle.name.to_string(),
                pickup_date: body.pickup_date,
                return_date: body.return_date,
                days: day_count,
                price_per_day: vehicle.price_per_day,
                total_price: methods::booking_rate::total_price(vehicle.price_per_day, day_count),
                with_driver: body.with_driver,
                status: model::BookingStatus::Pending,
                user_id: owner_id,
            };

            // Deliberately no overlap check against other bookings: every
            // submission is its own pending request and the admin sorts out
            // collisions by hand.
            use crate::schema::bookings::dsl::*;
            let mut pool = POOL.get().unwrap();
            let booking_result = diesel::insert_into(bookings)
                .values(&to_be_inserted)
                .get_result::<model::Booking>(&mut pool);

            let Ok(booking) = booking_result else {
                return methods::standard_replies::internal_server_error_response();
            };
            methods::standard_replies::response_with_obj(booking, StatusCode::CREATED)
        })
}
