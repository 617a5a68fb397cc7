use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,           // Unique ID for the item
    pub name: String,         // Item name
    pub image_url: String,    // Primary image reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>, // e.g. "Like new", "Good", "Worn"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>, // Display string, e.g. "$50-$100"
    #[serde(default)]
    pub selected: bool,       // Marked for a trade offer
    #[serde(default)]
    pub hidden: bool,         // Excluded from public listing views
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>, // Owner, present on rows from the items table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Item {
    /// Minimal constructor for fixture data; every optional field stays unset.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: image_url.into(),
            category: None,
            condition: None,
            description: None,
            tags: Vec::new(),
            price_range: None,
            selected: false,
            hidden: false,
            user_id: None,
            created_at: None,
        }
    }
}

/// An item on the matches screen, carrying the viewer's reaction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MatchItem {
    #[serde(flatten)]
    pub item: Item,
    pub liked: bool,
}
