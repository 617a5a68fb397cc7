pub mod available_items;
pub mod conversation_list;
pub mod footer;
pub mod friends_list;
pub mod header;
pub mod hero_banner;
pub mod match_card;
pub mod native_toggle;
pub mod profile_item_card;
pub mod reviews_list;
pub mod sponsored_card;
pub mod toast;
