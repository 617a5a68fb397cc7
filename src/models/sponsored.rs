use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SponsoredStatus {
    Pending,
    Approved,
    Rejected,
    Paused,
}

/// A paid placement rendered between organic listings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SponsoredProduct {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub target_url: String,    // External click-through destination
    pub cost_per_click: f64,
    pub active: bool,
    pub status: SponsoredStatus,
    pub created_at: DateTime<Utc>,
}
