//! Static sample tables used in place of live data.
//!
//! Every table is keyed by user identifier; unknown ids yield empty vectors.
//! The tables are rebuilt on each call, so callers can never mutate shared
//! state through them.

use chrono::{TimeZone, Utc};

use crate::models::conversation::{Conversation, Message};
use crate::models::friend::Friend;
use crate::models::item::{Item, MatchItem};
use crate::models::review::Review;
use crate::models::sponsored::{SponsoredProduct, SponsoredStatus};
use crate::models::trade::{Trade, TradeStatus};
use crate::models::user::{FriendRequestStatus, ProfileUser};

/// The signed-in sample user all fixture tables are written for.
pub const SAMPLE_USER_ID: &str = "user-demo";

fn item_with(
    id: &str,
    name: &str,
    image_url: &str,
    category: &str,
    condition: &str,
    price_range: &str,
) -> Item {
    let mut item = Item::new(id, name, image_url);
    item.category = Some(category.to_string());
    item.condition = Some(condition.to_string());
    item.price_range = Some(price_range.to_string());
    item
}

pub fn items_for(user_id: &str) -> Vec<Item> {
    if user_id != SAMPLE_USER_ID {
        return Vec::new();
    }
    vec![
        item_with(
            "item-1",
            "Acoustic Guitar",
            "/assets/items/guitar.jpg",
            "Music",
            "Good",
            "$100-$150",
        ),
        item_with(
            "item-2",
            "Mountain Bike",
            "/assets/items/bike.jpg",
            "Sports",
            "Like new",
            "$200-$300",
        ),
        item_with(
            "item-3",
            "Polaroid Camera",
            "/assets/items/camera.jpg",
            "Electronics",
            "Good",
            "$50-$80",
        ),
        item_with(
            "item-4",
            "Espresso Machine",
            "/assets/items/espresso.jpg",
            "Kitchen",
            "Worn",
            "$40-$60",
        ),
    ]
}

pub fn conversations_for(user_id: &str) -> Vec<Conversation> {
    if user_id != SAMPLE_USER_ID {
        return Vec::new();
    }
    vec![
        Conversation {
            id: "conv-1".into(),
            name: "Maya R.".into(),
            last_message: "Would you add the camera strap to the deal?".into(),
            time: "2h ago".into(),
            avatar_url: Some("/assets/avatars/maya.jpg".into()),
            rating: Some(4.8),
            distance: Some("3 miles away".into()),
            is_new: true,
        },
        Conversation {
            id: "conv-2".into(),
            name: "Jordan P.".into(),
            last_message: "Deal! See you Saturday at the market.".into(),
            time: "yesterday".into(),
            avatar_url: Some("/assets/avatars/jordan.jpg".into()),
            rating: Some(4.5),
            distance: Some("8 miles away".into()),
            is_new: false,
        },
        Conversation {
            id: "conv-3".into(),
            name: "Sam K.".into(),
            last_message: "The bike has new brake pads, by the way.".into(),
            time: "3d ago".into(),
            avatar_url: None,
            rating: None,
            distance: None,
            is_new: false,
        },
    ]
}

/// Thread behind one inbox row. Only the first sample conversation has a
/// transcript; the rest fall back to an empty thread.
pub fn messages_for(conversation_id: &str) -> Vec<Message> {
    if conversation_id != "conv-1" {
        return Vec::new();
    }
    let message = |id: &str, sender_id: &str, text: &str, time: &str| Message {
        id: id.into(),
        conversation_id: "conv-1".into(),
        sender_id: sender_id.into(),
        text: text.into(),
        time: time.into(),
    };
    vec![
        message(
            "msg-1",
            "friend-1",
            "Hi! Is the Polaroid camera still up for trade?",
            "10:02",
        ),
        message(
            "msg-2",
            SAMPLE_USER_ID,
            "It is! Interested in swapping for your record player?",
            "10:05",
        ),
        message(
            "msg-3",
            "friend-1",
            "Would you add the camera strap to the deal?",
            "10:09",
        ),
    ]
}

pub fn friends_for(user_id: &str) -> Vec<Friend> {
    if user_id != SAMPLE_USER_ID {
        return Vec::new();
    }
    vec![
        Friend {
            id: "friend-1".into(),
            name: "Maya R.".into(),
            friend_count: 34,
            avatar_url: "/assets/avatars/maya.jpg".into(),
            items: vec![
                item_with(
                    "item-21",
                    "Record Player",
                    "/assets/items/turntable.jpg",
                    "Music",
                    "Good",
                    "$80-$120",
                ),
                item_with(
                    "item-22",
                    "Film Scanner",
                    "/assets/items/scanner.jpg",
                    "Electronics",
                    "Like new",
                    "$90-$130",
                ),
            ],
        },
        Friend {
            id: "friend-2".into(),
            name: "Jordan P.".into(),
            friend_count: 12,
            avatar_url: "/assets/avatars/jordan.jpg".into(),
            items: vec![item_with(
                "item-23",
                "Camping Tent",
                "/assets/items/tent.jpg",
                "Outdoors",
                "Good",
                "$60-$90",
            )],
        },
    ]
}

pub fn reviews_for(user_id: &str) -> Vec<Review> {
    if user_id != SAMPLE_USER_ID {
        return Vec::new();
    }
    vec![
        Review {
            id: "review-1".into(),
            author: "Maya R.".into(),
            rating: 5,
            comment: "Smooth trade, item exactly as described.".into(),
            date: "June 2026".into(),
        },
        Review {
            id: "review-2".into(),
            author: "Jordan P.".into(),
            rating: 4,
            comment: "Friendly and on time. Would trade again.".into(),
            date: "May 2026".into(),
        },
        Review {
            id: "review-3".into(),
            author: "Sam K.".into(),
            rating: 5,
            comment: "Great communication throughout.".into(),
            date: "March 2026".into(),
        },
    ]
}

pub fn trades_for(user_id: &str) -> Vec<Trade> {
    if user_id != SAMPLE_USER_ID {
        return Vec::new();
    }
    vec![
        Trade {
            id: "trade-1".into(),
            partner_name: "Maya R.".into(),
            offered: vec![item_with(
                "item-3",
                "Polaroid Camera",
                "/assets/items/camera.jpg",
                "Electronics",
                "Good",
                "$50-$80",
            )],
            requested: vec![item_with(
                "item-21",
                "Record Player",
                "/assets/items/turntable.jpg",
                "Music",
                "Good",
                "$80-$120",
            )],
            status: TradeStatus::Proposed,
        },
        Trade {
            id: "trade-2".into(),
            partner_name: "Jordan P.".into(),
            offered: vec![item_with(
                "item-4",
                "Espresso Machine",
                "/assets/items/espresso.jpg",
                "Kitchen",
                "Worn",
                "$40-$60",
            )],
            requested: vec![item_with(
                "item-23",
                "Camping Tent",
                "/assets/items/tent.jpg",
                "Outdoors",
                "Good",
                "$60-$90",
            )],
            status: TradeStatus::Completed,
        },
    ]
}

pub fn sample_profile() -> ProfileUser {
    ProfileUser {
        id: SAMPLE_USER_ID.into(),
        name: "Alex Rivera".into(),
        description: "Trading my way through a garage full of hobbies.".into(),
        rating: 4.7,
        review_count: 23,
        location: "Portland, OR".into(),
        member_since: "January 2025".into(),
        avatar_url: "/assets/avatars/alex.jpg".into(),
        friend_status: FriendRequestStatus::None,
    }
}

/// Items from nearby users shown on the matches screen.
pub fn match_candidates() -> Vec<MatchItem> {
    vec![
        MatchItem {
            item: item_with(
                "match-1",
                "Vintage Skateboard",
                "/assets/items/skateboard.jpg",
                "Sports",
                "Good",
                "$40-$70",
            ),
            liked: false,
        },
        MatchItem {
            item: item_with(
                "match-2",
                "Studio Headphones",
                "/assets/items/headphones.jpg",
                "Electronics",
                "Like new",
                "$120-$160",
            ),
            liked: false,
        },
        MatchItem {
            item: item_with(
                "match-3",
                "Cast Iron Skillet Set",
                "/assets/items/skillet.jpg",
                "Kitchen",
                "Good",
                "$30-$50",
            ),
            liked: false,
        },
    ]
}

pub fn sponsored_products() -> Vec<SponsoredProduct> {
    vec![SponsoredProduct {
        id: "sp-1".into(),
        name: "TradePack Shipping Kits".into(),
        description: Some("Boxes and padding sized for common swaps.".into()),
        image_url: Some("/assets/sponsored/tradepack.jpg".into()),
        category: Some("Supplies".into()),
        target_url: "https://example.com/tradepack".into(),
        cost_per_click: 0.35,
        active: true,
        status: SponsoredStatus::Approved,
        created_at: Utc.with_ymd_and_hms(2026, 5, 12, 9, 30, 0).unwrap(),
    }]
}
