use serde::{Deserialize, Serialize};

use crate::models::item::Item;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Friend {
    pub id: String,
    pub name: String,
    pub friend_count: u32,
    pub avatar_url: String,
    pub items: Vec<Item>,    // Items this friend has up for trade, in display order
}
