use crate::{POOL, methods, model};
use diesel::prelude::*;
use serde_derive::{Deserialize, Serialize};
use warp::http::StatusCode;
use warp::{Filter, Reply};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
struct DeleteMessageData {
    access_token: model::RequestBodyToken,
    message_id: i32,
}

// Hard delete. Bookings are never deleted; contact messages are the one
// collection the admin may purge.
pub fn delete_message()
-> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("delete-message")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(warp::header::optional::<String>("x-client-type"))
        .and_then(
            move |body: DeleteMessageData, client_type: Option<String>| async move {
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

                            use crate::schema::contact_messages::dsl::*;
                            let mut pool = POOL.get().unwrap();
                            let delete_result = diesel::delete(
                                contact_messages.filter(id.eq(&body.message_id)),
                            )
                            .get_result::<model::ContactMessage>(&mut pool);
                            match delete_result {
                                Err(_) => methods::standard_replies::message_not_found_response(),
                                Ok(_deleted) => {
                                    let msg = serde_json::json!({
                                        "access_token": &new_token_in_db_publish,
                                        "message": "Message deleted",
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
