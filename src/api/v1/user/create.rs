use crate::{POOL, helper_model, methods, model};
use bcrypt::{DEFAULT_COST, hash};
use serde_derive::{Deserialize, Serialize};
use warp::http::StatusCode;
use warp::reply::with_status;
use warp::{Filter, Reply};

#[derive(Deserialize, Serialize, Clone, Debug)]
struct CreateUserData {
    name: String,
    email: String,
    password: String,
    phone: String,
}

pub fn create_user() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("create")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(warp::header::optional::<String>("x-client-type"))
        .and_then(
            async move |mut user_create_data: CreateUserData, client_type: Option<String>| {
                use diesel::prelude::*;

                if user_create_data.name.trim().is_empty()
                    || !methods::user::is_valid_email(&user_create_data.email)
                    || !methods::user::is_valid_phone(&user_create_data.phone)
                {
                    return methods::standard_replies::bad_request(
                        "Please check your name, email and phone number format",
                    );
                }
                // Password policy matches the portal's signup form.
                if user_create_data.password.len() < 6 {
                    let error_msg = helper_model::ErrorResponse {
                        title: String::from("Weak Password"),
                        message: String::from("Password must be at least 6 characters."),
                    };
                    return Ok::<_, warp::Rejection>((with_status(
                        warp::reply::json(&error_msg),
                        StatusCode::BAD_REQUEST,
                    )
                    .into_response(),));
                }

                use crate::schema::users::dsl::*;
                let mut pool = POOL.get().unwrap();

                let email_clone = user_create_data.email.clone();
                let result = users
                    .filter(email.eq(&email_clone))
                    .get_result::<model::User>(&mut pool);
                match result {
                    Ok(_user) => {
                        // credential existed
                        let error_msg = helper_model::ErrorResponse {
                            title: String::from("Conflict"),
                            message: String::from("An account with this email already exists"),
                        };
                        Ok::<_, warp::Rejection>((with_status(
                            warp::reply::json(&error_msg),
                            StatusCode::CONFLICT,
                        )
                        .into_response(),))
                    }
                    Err(_) => {
                        let hashed_pass = hash(&user_create_data.password, DEFAULT_COST).unwrap();
                        user_create_data.password = hashed_pass;

                        // Registration never hands out Admin.
                        let to_be_inserted = model::NewUser {
                            name: user_create_data.name,
                            email: user_create_data.email,
                            password: user_create_data.password,
                            phone: user_create_data.phone,
                            role: model::UserRole::Customer,
                        };

                        let user_row = diesel::insert_into(users)
                            .values(&to_be_inserted)
                            .get_result::<model::User>(&mut pool);

                        let Ok(user_row) = user_row else {
                            return methods::standard_replies::internal_server_error_response();
                        };

                        let user_id_data = user_row.id;
                        let new_access_token =
                            methods::tokens::gen_token_object(user_id_data, client_type).await;
                        use crate::schema::access_tokens::dsl::*;
                        let insert_token_result = diesel::insert_into(access_tokens)
                            .values(&new_access_token)
                            .get_result::<model::AccessToken>(&mut pool)
                            .unwrap();

                        let pub_token = insert_token_result.to_publish_access_token();
                        let pub_user = user_row.to_publish_user();
                        methods::standard_replies::auth_user_reply(&pub_user, &pub_token, true)
                    }
                }
            },
        )
}
