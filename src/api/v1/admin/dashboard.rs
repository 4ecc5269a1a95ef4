use crate::{POOL, methods, model};
use diesel::prelude::*;
use serde_derive::{Deserialize, Serialize};
use tokio::task::spawn_blocking;
use warp::http::StatusCode;
use warp::{Filter, Reply};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
struct DashboardData {
    access_token: model::RequestBodyToken,
}

// Overview numbers for the admin landing tab, recomputed from the full
// booking and message sets on every call.
pub fn dashboard() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("dashboard")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(warp::header::optional::<String>("x-client-type"))
        .and_then(
            move |body: DashboardData, client_type: Option<String>| async move {
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

                            let mut pool = POOL.clone().get().unwrap();
                            let booking_list = spawn_blocking(move || {
                                use crate::schema::bookings::dsl::*;
                                bookings.load::<model::Booking>(&mut pool)
                            })
                            .await
                            .unwrap();
                            let mut pool = POOL.clone().get().unwrap();
                            let message_list = spawn_blocking(move || {
                                use crate::schema::contact_messages::dsl::*;
                                contact_messages.load::<model::ContactMessage>(&mut pool)
                            })
                            .await
                            .unwrap();

                            let (Ok(booking_list), Ok(message_list)) = (booking_list, message_list)
                            else {
                                return methods::standard_replies::internal_server_error_response();
                            };
                            let stats =
                                methods::stats::dashboard_stats(&booking_list, &message_list);
                            let msg = serde_json::json!({
                                "access_token": &new_token_in_db_publish,
                                "stats": stats,
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
