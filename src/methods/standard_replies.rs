use crate::{helper_model, model};
use warp::http::StatusCode;
use warp::{Rejection, Reply};

pub fn bad_request(err_msg: &str) -> Result<(warp::reply::Response,), Rejection> {
    let msg: helper_model::ErrorResponse = helper_model::ErrorResponse {
        title: String::from("Bad Request"),
        message: err_msg.to_string(),
    };
    Ok::<_, Rejection>((warp::reply::with_status(
        warp::reply::json(&msg),
        StatusCode::BAD_REQUEST,
    )
    .into_response(),))
}

pub fn internal_server_error_response() -> Result<(warp::reply::Response,), Rejection> {
    let msg: helper_model::ErrorResponse = helper_model::ErrorResponse {
        title: String::from("Internal Server Error"),
        message: String::from("Please try again later. If issue present, contact us at support@haiderrentals.pk "),
    };
    Ok::<_, Rejection>((warp::reply::with_status(
        warp::reply::json(&msg),
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .into_response(),))
}

pub fn transition_not_allowed_response() -> Result<(warp::reply::Response,), Rejection> {
    let msg: helper_model::ErrorResponse = helper_model::ErrorResponse {
        title: String::from("Status Change Not Allowed"),
        message: String::from("This booking cannot move to the requested status."),
    };
    Ok((warp::reply::with_status(warp::reply::json(&msg), StatusCode::CONFLICT).into_response(),))
}

pub fn booking_not_found_response() -> Result<(warp::reply::Response,), Rejection> {
    let msg: helper_model::ErrorResponse = helper_model::ErrorResponse {
        title: String::from("Booking Not Found"),
        message: String::from("No booking exists with that id."),
    };
    Ok((warp::reply::with_status(warp::reply::json(&msg), StatusCode::NOT_FOUND).into_response(),))
}

pub fn message_not_found_response() -> Result<(warp::reply::Response,), Rejection> {
    let msg: helper_model::ErrorResponse = helper_model::ErrorResponse {
        title: String::from("Message Not Found"),
        message: String::from("No contact message exists with that id."),
    };
    Ok((warp::reply::with_status(warp::reply::json(&msg), StatusCode::NOT_FOUND).into_response(),))
}

pub fn response_with_obj<T>(
    obj: T,
    status_code: StatusCode,
) -> Result<(warp::reply::Response,), Rejection>
where
    T: serde::Serialize,
{
    Ok((warp::reply::with_status(warp::reply::json(&obj), status_code).into_response(),))
}

pub fn auth_user_reply(
    user: &model::PublishUser,
    token_data: &model::PublishAccessToken,
    is_created: bool,
) -> Result<(warp::reply::Response,), Rejection> {
    let reply = warp::reply::json(&user);
    let reply = warp::reply::with_header(reply, "token", token_data.clone().token);
    let status_code = if is_created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((warp::reply::with_status(reply, status_code).into_response(),))
}
