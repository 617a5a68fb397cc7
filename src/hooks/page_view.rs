use std::rc::Rc;

use leptos::logging::log;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{PageView, TradeApi};
use crate::hooks::platform::user_agent;

/// Records a page view for every route change, including the first one.
/// Inserts are best-effort fire-and-forget: the failure channel is dropped
/// and never reaches the UI.
pub fn use_page_view_tracking(api: Rc<dyn TradeApi>) {
    let location = leptos_router::use_location();

    create_effect(move |_| {
        let path = location.pathname.get();
        let view = PageView {
            path,
            user_agent: user_agent(),
            referrer: referrer(),
        };
        log!("[PAGEVIEW] {}", view.path);

        let api = Rc::clone(&api);
        spawn_local(async move {
            let _ = api.record_page_view(view).await;
        });
    });
}

fn referrer() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_utils::document().referrer()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}
