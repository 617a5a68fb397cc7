use std::cell::Cell;
use std::rc::Rc;

use leptos::logging::{error, warn};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::TradeApi;
use crate::components::toast::try_use_toasts;
use crate::models::item::Item;
use crate::utils::leptos_owner::with_owner_safe;

/// Toast raised when the list cannot be loaded.
pub const HIDDEN_ITEMS_ERROR: &str = "Couldn't load your hidden items";

/// Items the signed-in user has hidden from their public profile.
#[derive(Clone, Copy)]
pub struct HiddenItems {
    items: ReadSignal<Vec<Item>>,
    loading: ReadSignal<bool>,
    refresh: WriteSignal<u64>,
}

impl HiddenItems {
    pub fn items(&self) -> Vec<Item> {
        self.items.get()
    }

    pub fn is_empty(&self) -> bool {
        self.items.with(|list| list.is_empty())
    }

    pub fn loading(&self) -> bool {
        self.loading.get()
    }

    pub fn refetch(&self) {
        self.refresh.update(|n| *n += 1);
    }
}

/// Loads the hidden-item list once on activation and again on every
/// `refetch()`. Results that arrive for a superseded request or after the
/// owning component is gone are dropped; the latest request wins.
pub fn use_hidden_items(api: Rc<dyn TradeApi>) -> HiddenItems {
    let (items, set_items) = create_signal(Vec::new());
    let (loading, set_loading) = create_signal(false);
    let (refresh, set_refresh) = create_signal(0u64);

    let toasts = try_use_toasts();
    let latest = Rc::new(Cell::new(0u64));

    // Unmount invalidates every in-flight generation.
    let on_unmount = Rc::clone(&latest);
    on_cleanup(move || on_unmount.set(u64::MAX));

    create_effect({
        let latest = Rc::clone(&latest);
        move |_| {
            let generation = refresh.get();
            latest.set(generation);

            let Some(owner) = Owner::current() else {
                warn!("[HIDDEN] No reactive owner, skipping fetch");
                return;
            };

            set_loading.set(true);
            let api = Rc::clone(&api);
            let latest = Rc::clone(&latest);
            spawn_local(async move {
                let notify = move |message: &str| {
                    if let Some(toasts) = toasts {
                        toasts.error(message);
                    }
                };
                let fetched = load_hidden_items(api.as_ref(), &notify).await;

                if latest.get() != generation {
                    return;
                }
                with_owner_safe(owner, "hidden items fetch", move || {
                    set_items.set(fetched);
                    set_loading.set(false);
                });
            });
        }
    });

    HiddenItems {
        items,
        loading,
        refresh: set_refresh,
    }
}

/// Resolves the current user and fetches their hidden items. Failures are
/// logged and reported through `notify`, never returned: the caller always
/// gets a list, empty in every failure case. With nobody signed in the item
/// query is skipped entirely.
pub(crate) async fn load_hidden_items(api: &dyn TradeApi, notify: &dyn Fn(&str)) -> Vec<Item> {
    let user_id = match api.current_user_id().await {
        Ok(Some(user_id)) => user_id,
        Ok(None) => return Vec::new(),
        Err(err) => {
            error!("[HIDDEN] Could not resolve current user: {}", err);
            notify(HIDDEN_ITEMS_ERROR);
            return Vec::new();
        }
    };

    match api.hidden_items(&user_id).await {
        Ok(items) => items,
        Err(err) => {
            error!("[HIDDEN] Failed to fetch hidden items: {}", err);
            notify(HIDDEN_ITEMS_ERROR);
            Vec::new()
        }
    }
}
