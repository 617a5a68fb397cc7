pub mod hidden_items;
pub mod location;
pub mod page_view;
pub mod platform;
pub mod swipes;
