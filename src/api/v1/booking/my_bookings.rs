use crate::{POOL, methods, model};
use diesel::prelude::*;
use serde_derive::{Deserialize, Serialize};
use tokio::task::spawn_blocking;
use warp::http::StatusCode;
use warp::{Filter, Reply};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
struct MyBookingsData {
    access_token: model::RequestBodyToken,
}

pub fn my_bookings() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone
{
    warp::path!("my-bookings")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(warp::header::optional::<String>("x-client-type"))
        .and_then(
            move |body: MyBookingsData, client_type: Option<String>| async move {
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
                            let owner_id = body.access_token.user_id;
                            let mut pool = POOL.clone().get().unwrap();
                            let booking_list = spawn_blocking(move || {
                                use crate::schema::bookings::dsl::*;
                                bookings
                                    .filter(user_id.eq(owner_id))
                                    .order(created_at.desc())
                                    .load::<model::Booking>(&mut pool)
                            })
                            .await
                            .unwrap();

                            let Ok(booking_list) = booking_list else {
                                return methods::standard_replies::internal_server_error_response();
                            };
                            let msg = serde_json::json!({
                                "access_token": &new_token_in_db_publish,
                                "bookings": booking_list,
                            });
                            Ok::<_, warp::Rejection>((warp::reply::with_status(
                                warp::reply::json(&msg),
                                StatusCode::OK,
                            )
                            .into_response(),))
                        }
                    }
                }
            },
        )
}
