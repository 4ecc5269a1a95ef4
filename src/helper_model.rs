use serde_derive::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ErrorResponse {
    pub title: String,
    pub message: String,
}

// Read-side rollup for the admin dashboard, recomputed from the full
// booking and message sets on every request.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: i64,
    pub pending: i64,
    pub confirmed: i64,
    pub revenue: i64,
    pub unread_messages: i64,
}
