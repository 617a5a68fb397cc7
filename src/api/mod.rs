pub mod error;
pub mod supabase;

pub use error::ApiError;
pub use supabase::{SupabaseClient, SupabaseConfig};

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

use crate::models::item::Item;

/// One analytics row per client-side navigation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PageView {
    pub path: String,       // route path, e.g. "/matches"
    pub user_agent: String, // raw navigator string, empty outside the browser
    pub referrer: String,   // document referrer, empty when absent
}

/// Data operations the UI depends on. Hooks take this trait instead of the
/// concrete client so tests can substitute a scripted stub without any
/// network access.
pub trait TradeApi {
    /// Resolves the signed-in user, `None` when nobody is signed in.
    fn current_user_id(&self) -> LocalBoxFuture<'_, Result<Option<String>, ApiError>>;

    /// Items the given user has hidden from their public profile,
    /// newest first.
    fn hidden_items<'a>(&'a self, user_id: &'a str)
        -> LocalBoxFuture<'a, Result<Vec<Item>, ApiError>>;

    /// Records one navigation event. Callers treat this as fire-and-forget.
    fn record_page_view(&self, view: PageView) -> LocalBoxFuture<'_, Result<(), ApiError>>;
}

/// Shared handle passed through component context.
#[derive(Clone)]
pub struct ApiHandle(pub Rc<dyn TradeApi>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_view_serializes_with_table_columns() {
        let view = PageView {
            path: "/matches".to_string(),
            user_agent: "test-agent".to_string(),
            referrer: String::new(),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["path"], "/matches");
        assert_eq!(json["user_agent"], "test-agent");
        assert_eq!(json["referrer"], "");
    }
}
