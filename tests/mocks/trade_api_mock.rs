use std::cell::{Cell, RefCell};
use std::time::Duration;

use futures::future::LocalBoxFuture;
use gloo_timers::future::sleep;

use swapscircle::api::{ApiError, PageView, TradeApi};
use swapscircle::models::item::Item;

/// Scripted backend double. Every call yields to the browser event loop
/// briefly so the async paths in the hooks actually run asynchronously,
/// like they would against the network. The item result and its latency
/// are snapshotted per call, so a test can reshape the script while an
/// earlier query is still in flight.
pub struct MockTradeApi {
    user: RefCell<Result<Option<String>, ApiError>>,
    items: RefCell<Result<Vec<Item>, ApiError>>,
    pub item_delay_ms: Cell<u64>,
    pub page_view_fails: Cell<bool>,
    pub user_calls: Cell<u32>,
    pub item_calls: Cell<u32>,
    pub page_views: RefCell<Vec<PageView>>,
}

impl MockTradeApi {
    pub fn signed_in(user_id: &str, items: Vec<Item>) -> Self {
        Self::new(Ok(Some(user_id.to_string())), Ok(items))
    }

    pub fn signed_out() -> Self {
        Self::new(Ok(None), Ok(Vec::new()))
    }

    pub fn failing_query(user_id: &str) -> Self {
        Self::new(
            Ok(Some(user_id.to_string())),
            Err(ApiError::Http("status 500".into())),
        )
    }

    fn new(user: Result<Option<String>, ApiError>, items: Result<Vec<Item>, ApiError>) -> Self {
        MockTradeApi {
            user: RefCell::new(user),
            items: RefCell::new(items),
            item_delay_ms: Cell::new(10),
            page_view_fails: Cell::new(false),
            user_calls: Cell::new(0),
            item_calls: Cell::new(0),
            page_views: RefCell::new(Vec::new()),
        }
    }

    /// Change the scripted item result, e.g. between fetch and refetch.
    pub fn set_items(&self, items: Result<Vec<Item>, ApiError>) {
        *self.items.borrow_mut() = items;
    }
}

impl TradeApi for MockTradeApi {
    fn current_user_id(&self) -> LocalBoxFuture<'_, Result<Option<String>, ApiError>> {
        self.user_calls.set(self.user_calls.get() + 1);
        let result = self.user.borrow().clone();
        Box::pin(async move {
            sleep(Duration::from_millis(10)).await;
            result
        })
    }

    fn hidden_items<'a>(
        &'a self,
        _user_id: &'a str,
    ) -> LocalBoxFuture<'a, Result<Vec<Item>, ApiError>> {
        self.item_calls.set(self.item_calls.get() + 1);
        let result = self.items.borrow().clone();
        let delay = Duration::from_millis(self.item_delay_ms.get());
        Box::pin(async move {
            sleep(delay).await;
            result
        })
    }

    fn record_page_view(&self, view: PageView) -> LocalBoxFuture<'_, Result<(), ApiError>> {
        self.page_views.borrow_mut().push(view);
        let fails = self.page_view_fails.get();
        Box::pin(async move {
            if fails {
                Err(ApiError::Http("status 500".into()))
            } else {
                Ok(())
            }
        })
    }
}
