pub mod conversation;
pub mod friend;
pub mod item;
pub mod review;
pub mod sponsored;
pub mod trade;
pub mod user;
