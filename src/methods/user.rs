use crate::POOL;
use crate::model::{PublishAccessToken, User, UserRole};
use crate::methods::tokens::wrap_json_reply_with_token;
use diesel::prelude::*;
use regex::Regex;
use tokio::task;
use warp::Rejection;
use warp::http::StatusCode;

pub async fn get_user_by_id(_user_id: i32) -> QueryResult<User> {
    let mut pool = POOL.clone().get().unwrap();
    task::spawn_blocking(move || {
        use crate::schema::users::dsl::*;
        users.filter(id.eq(&_user_id)).get_result::<User>(&mut pool)
    })
    .await
    .unwrap()
}

// Admin is provisioned directly in the database; the registration flow only
// ever writes Customer.
pub fn user_with_admin_access(user: &User) -> bool {
    user.role == UserRole::Admin
}

pub fn is_valid_email(email: &str) -> bool {
    lazy_static::lazy_static! {
        static ref EMAIL_REGEX: Regex = Regex::new(
            r"(?i)^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9-](?:[a-z0-9-]{0,61}[a-z0-9])+(?:\.[a-z0-9-](?:[a-z0-9-]{0,61}[a-z0-9])+)+$"
        ).expect("Invalid regex");
    }
    // RFC 5321 length limit
    if email.len() > 254 {
        return false;
    }
    EMAIL_REGEX.is_match(email)
}

// Phone numbers arrive in whatever local format the customer types
// ("0300 1234567", "+92300..."), so only emptiness is rejected.
pub fn is_valid_phone(phone: &str) -> bool {
    !phone.trim().is_empty()
}

pub fn user_not_admin_wrapped_return(
    token_data: PublishAccessToken,
) -> Result<(warp::reply::Response,), Rejection> {
    let error_msg = serde_json::json!({"error": "You do not have administrator privileges"});
    Ok::<_, Rejection>((wrap_json_reply_with_token(
        token_data,
        warp::reply::with_status(warp::reply::json(&error_msg), StatusCode::FORBIDDEN),
    ),))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("ali@example.com"));
        assert!(is_valid_email("a.b+tag@mail.example.co"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("ali@"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
    }

    #[test]
    fn phone_only_needs_content() {
        assert!(is_valid_phone("0300 1234567"));
        assert!(!is_valid_phone("   "));
    }
}
