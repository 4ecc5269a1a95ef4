use crate::{methods, model};
use serde_derive::{Deserialize, Serialize};
use warp::http::StatusCode;
use warp::{Filter, Reply};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
struct RmTokenData {
    access_token: model::RequestBodyToken,
}

// Sign-out: the presented token is deleted and nothing replaces it.
pub fn rm_token() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("rm-token")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and_then(move |body: RmTokenData| async move {
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
                        methods::tokens::rm_token_by_binary(
                            hex::decode(body.access_token.token).unwrap(),
                        )
                        .await;
                        let msg = serde_json::json!({"message": "Token removed"});
                        Ok::<_, warp::Rejection>((warp::reply::with_status(
                            warp::reply::json(&msg),
                            StatusCode::OK,
                        )
                        .into_response(),))
                    }
                }
            }
        })
}
