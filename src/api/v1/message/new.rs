use crate::{POOL, methods, model};
use diesel::prelude::*;
use serde_derive::{Deserialize, Serialize};
use warp::Filter;
use warp::http::StatusCode;

#[derive(Deserialize, Serialize, Clone, Debug)]
struct NewMessageData {
    name: String,
    email: String,
    phone: String,
    message: String,
}

// Public contact form. Messages land unread in the admin inbox.
pub fn new_message() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone
{
    warp::path!("new")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and_then(async move |message_data: NewMessageData| {
            if message_data.name.trim().is_empty()
                || message_data.phone.trim().is_empty()
                || message_data.message.trim().is_empty()
                || !methods::user::is_valid_email(&message_data.email)
            {
                return methods::standard_replies::bad_request(
                    "All fields are required and the email must be valid",
                );
            }

            let to_be_inserted = model::NewContactMessage {
                name: message_data.name,
                email: message_data.email,
                phone: message_data.phone,
                message: message_data.message,
                read: false,
            };

            use crate::schema::contact_messages::dsl::*;
            let mut pool = POOL.get().unwrap();
            let message_result = diesel::insert_into(contact_messages)
                .values(&to_be_inserted)
                .get_result::<model::ContactMessage>(&mut pool);

            let Ok(contact_message) = message_result else {
                return methods::standard_replies::internal_server_error_response();
            };
            methods::standard_replies::response_with_obj(contact_message, StatusCode::CREATED)
        })
}
