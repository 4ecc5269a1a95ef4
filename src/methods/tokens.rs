use crate::POOL;
use crate::model::{AccessToken, NewAccessToken, PublishAccessToken};
use crate::schema::access_tokens::dsl::*;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use hex::FromHexError;
use secrets::Secret;
use std::ops::Add;
use tokio::task;
use tokio::task::spawn_blocking;
use warp::Rejection;
use warp::http::StatusCode;
use warp::reply::Reply;

async fn generate_unique_token() -> Vec<u8> {
    loop {
        // Secure random 32-byte token; regenerate on the off chance it
        // already exists.
        let token_vec = Secret::<[u8; 32]>::random(|s| s.to_vec());

        let token_to_return = token_vec.clone();

        let token_exists_result = task::spawn_blocking(move || {
            let mut pool = POOL.clone().get().unwrap();
            diesel::select(diesel::dsl::exists(
                crate::schema::access_tokens::table
                    .filter(crate::schema::access_tokens::token.eq(token_vec)),
            ))
            .get_result::<bool>(&mut pool)
        })
        .await;

        let token_exists = match token_exists_result {
            Ok(result) => match result {
                Ok(v) => v,
                Err(e) => {
                    // Treat a DB error as if the token exists, to force a retry.
                    eprintln!("Database error: {:?}", e);
                    true
                }
            },
            Err(join_err) => {
                eprintln!("Error joining blocking task: {:?}", join_err);
                true
            }
        };

        if !token_exists {
            return token_to_return;
        }
    }
}

pub async fn gen_token_object(_user_id: i32, client_type: Option<String>) -> NewAccessToken {
    let mut _exp: DateTime<Utc> = Utc::now().add(chrono::Duration::seconds(600));
    if let Some(client_type) = client_type {
        if client_type == "haider-app" {
            _exp = Utc::now().add(chrono::Duration::days(28));
        }
    }
    NewAccessToken {
        user_id: _user_id,
        token: generate_unique_token().await,
        exp: _exp,
    }
}

pub async fn verify_user_token(_user_id: i32, token_data: String) -> Result<bool, FromHexError> {
    let binary_token = hex::decode(token_data);
    match binary_token {
        Err(error) => Err(error),
        Ok(binary_token) => {
            let token_clone = binary_token.clone();
            let token_clone_again = binary_token.clone();
            let mut pool = POOL.clone().get().unwrap();
            let token_in_db = spawn_blocking(move || {
                diesel::select(diesel::dsl::exists(
                    access_tokens
                        .filter(token.eq(token_clone))
                        .filter(user_id.eq(_user_id)),
                ))
                .get_result::<bool>(&mut pool)
            })
            .await
            .unwrap()
            .unwrap();
            if token_in_db {
                let mut pool = POOL.clone().get().unwrap();
                let token_in_db_result = spawn_blocking(move || {
                    access_tokens
                        .filter(user_id.eq(_user_id))
                        .filter(token.eq(token_clone_again))
                        .first::<AccessToken>(&mut pool)
                })
                .await
                .unwrap()
                .unwrap();
                let token_exp = token_in_db_result.exp;
                if token_exp >= Utc::now() { Ok(true) } else { Ok(false) }
            } else {
                Ok(false)
            }
        }
    }
}

pub async fn rm_token_by_binary(token_bit: Vec<u8>) -> AccessToken {
    let mut pool = POOL.clone().get().unwrap();
    diesel::delete(access_tokens.filter(token.eq(token_bit)))
        .get_result::<AccessToken>(&mut pool)
        .unwrap()
}

/// Deletes the presented token and issues its replacement in one step.
/// Every authenticated endpoint rotates this way, so a stolen token dies
/// the first time its owner uses the real one.
pub async fn rotate_token(
    token_object: &crate::model::RequestBodyToken,
    client_type: Option<String>,
) -> PublishAccessToken {
    rm_token_by_binary(hex::decode(token_object.token.clone()).unwrap()).await;
    let new_token = gen_token_object(token_object.user_id, client_type).await;
    let mut pool = POOL.clone().get().unwrap();
    diesel::insert_into(access_tokens)
        .values(&new_token)
        .get_result::<AccessToken>(&mut pool)
        .unwrap()
        .to_publish_access_token()
}

pub fn token_not_hex_warp_return(
    token_data: &String,
) -> Result<(warp::reply::Response,), Rejection> {
    let error_msg = serde_json::json!({"token": &token_data, "error": "Token not in hex format"});
    Ok::<_, warp::Rejection>((warp::reply::with_status(
        warp::reply::json(&error_msg),
        StatusCode::BAD_REQUEST,
    )
    .into_response(),))
}

pub fn token_invalid_warp_return(
    token_data: &String,
) -> Result<(warp::reply::Response,), Rejection> {
    let error_msg = serde_json::json!({"token": &token_data, "error": "Token not valid"});
    Ok::<_, warp::Rejection>((warp::reply::with_status(
        warp::reply::json(&error_msg),
        StatusCode::UNAUTHORIZED,
    )
    .into_response(),))
}

pub fn wrap_json_reply_with_token(
    token_data: PublishAccessToken,
    reply: impl Reply,
) -> warp::reply::Response {
    warp::reply::with_header(reply, "token", token_data.token).into_response()
}
