// src/models/review.rs
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    pub author: String,      // Display name of the reviewer
    pub rating: i32,         // Star rating; range is not enforced here
    pub comment: String,     // Free-text body
    pub date: String,        // Display date, e.g. "March 2025"
}
