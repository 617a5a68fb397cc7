use serde::{Deserialize, Serialize};

use crate::models::item::Item;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    Proposed,
    Accepted,
    Declined,
    Completed,
}

impl TradeStatus {
    pub fn label(self) -> &'static str {
        match self {
            TradeStatus::Proposed => "Proposed",
            TradeStatus::Accepted => "Accepted",
            TradeStatus::Declined => "Declined",
            TradeStatus::Completed => "Completed",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Trade {
    pub id: String,
    pub partner_name: String,
    pub offered: Vec<Item>,    // What the current user puts in
    pub requested: Vec<Item>,  // What they get back
    pub status: TradeStatus,
}
