pub mod booking_rate;
pub mod standard_replies;
pub mod stats;
pub mod tokens;
pub mod user;
