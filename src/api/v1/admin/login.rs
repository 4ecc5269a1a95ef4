use crate::{POOL, methods, model};
use bcrypt::verify;
use diesel::RunQueryDsl;
use diesel::prelude::*;
use serde_derive::{Deserialize, Serialize};
use warp::http::StatusCode;
use warp::reply::with_status;
use warp::{Filter, Reply};

#[derive(Deserialize, Serialize, Clone)]
struct LoginData {
    email: String,
    password: String,
}

pub fn admin_login() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("login")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(warp::header::optional::<String>("x-client-type"))
        .and_then(
            async move |login_data: LoginData, client_type: Option<String>| {
                let mut pool = POOL.get().unwrap();
                use crate::schema::users::dsl::*;
                let result: QueryResult<model::User> = users
                    .filter(email.eq(&login_data.email))
                    .get_result::<model::User>(&mut pool);
                match result {
                    Ok(admin) => {
                        // Non-admins get the same reply as a wrong password,
                        // so the login form leaks nothing about roles.
                        if !methods::user::user_with_admin_access(&admin) {
                            let error_msg = serde_json::json!({"email": &login_data.email, "error": "Credentials invalid"});
                            return Ok::<_, warp::Rejection>((with_status(
                                warp::reply::json(&error_msg),
                                StatusCode::UNAUTHORIZED,
                            )
                            .into_response(),));
                        }
                        if verify(&login_data.password, &admin.password).unwrap_or(false) {
                            let user_id_data = admin.id;
                            let new_access_token =
                                methods::tokens::gen_token_object(user_id_data, client_type).await;
                            let mut pool = POOL.get().unwrap();
                            use crate::schema::access_tokens::dsl::*;
                            let insert_token_result = diesel::insert_into(access_tokens)
                                .values(&new_access_token)
                                .get_result::<model::AccessToken>(&mut pool)
                                .unwrap();

                            let pub_token = insert_token_result.to_publish_access_token();
                            let pub_admin = admin.to_publish_user();
                            let admin_msg = serde_json::json!({
                                "admin": pub_admin,
                            });
                            Ok::<_, warp::Rejection>((methods::tokens::wrap_json_reply_with_token(
                                pub_token,
                                with_status(warp::reply::json(&admin_msg), StatusCode::OK),
                            ),))
                        } else {
                            let error_msg = serde_json::json!({"email": &login_data.email, "error": "Credentials invalid"});
                            Ok::<_, warp::Rejection>((with_status(
                                warp::reply::json(&error_msg),
                                StatusCode::UNAUTHORIZED,
                            )
                            .into_response(),))
                        }
                    }
                    Err(_) => {
                        let error_msg = serde_json::json!({"email": &login_data.email, "error": "Credentials invalid"});
                        Ok::<_, warp::Rejection>((with_status(
                            warp::reply::json(&error_msg),
                            StatusCode::UNAUTHORIZED,
                        )
                        .into_response(),))
                    }
                }
            },
        )
}
