use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FriendRequestStatus {
    #[default]
    None,
    Pending,   // We sent a request, waiting on them
    Received,  // They sent one to us
    Friends,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProfileUser {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rating: f32,
    pub review_count: u32,
    pub location: String,
    pub member_since: String,
    pub avatar_url: String,
    #[serde(default)]
    pub friend_status: FriendRequestStatus,
}
