use serde::{Deserialize, Serialize};

/// One row in the messages screen: the counterpart plus a preview of the
/// latest exchange.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Conversation {
    pub id: String,
    pub name: String,          // Counterpart display name
    pub last_message: String,
    pub time: String,          // Relative label, e.g. "2h ago"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>, // e.g. "3 miles away"
    #[serde(default)]
    pub is_new: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub text: String,
    pub time: String,
}
