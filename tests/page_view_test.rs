#![cfg(target_arch = "wasm32")]

use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::*;
use leptos_router::{use_navigate, Router};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use swapscircle::api::ApiHandle;
use swapscircle::components::toast::ToastProvider;
use swapscircle::hooks::page_view::use_page_view_tracking;

mod mocks;
use mocks::trade_api_mock::MockTradeApi;

wasm_bindgen_test_configure!(run_in_browser);

/// Routed host so the tracking hook sees real navigation, wired the way
/// the application shell wires it.
#[component]
fn TrackedHarness(api: ApiHandle) -> impl IntoView {
    use_page_view_tracking(api.0);

    let navigate = use_navigate();
    let to_matches = navigate.clone();

    view! {
        <button class="go-matches" on:click=move |_| to_matches("/matches", Default::default())>
            { "matches" }
        </button>
        <button class="go-profile" on:click=move |_| navigate("/profile", Default::default())>
            { "profile" }
        </button>
    }
}

#[wasm_bindgen_test]
async fn every_route_change_records_one_page_view() {
    reset_url("/");
    let container = test_container("tracking");
    let api = Rc::new(MockTradeApi::signed_out());
    let handle = ApiHandle(api.clone());

    mount_to(&container, move || {
        view! {
            <ToastProvider>
                <Router>
                    <TrackedHarness api=handle/>
                </Router>
            </ToastProvider>
        }
        .into_view()
    });

    sleep(Duration::from_millis(50)).await;
    {
        let views = api.page_views.borrow();
        assert_eq!(views.len(), 1, "the landing route is recorded once");
        assert_eq!(views[0].path, "/");
    }

    click(&container, ".go-matches");
    sleep(Duration::from_millis(50)).await;
    {
        let views = api.page_views.borrow();
        assert_eq!(views.len(), 2);
        assert_eq!(views[1].path, "/matches");
    }

    click(&container, ".go-profile");
    sleep(Duration::from_millis(50)).await;
    let views = api.page_views.borrow();
    assert_eq!(views.len(), 3);
    assert_eq!(views[2].path, "/profile");
}

#[wasm_bindgen_test]
async fn failed_inserts_never_reach_the_ui() {
    reset_url("/");
    let container = test_container("tracking-failure");
    let api = Rc::new(MockTradeApi::signed_out());
    api.page_view_fails.set(true);
    let handle = ApiHandle(api.clone());

    mount_to(&container, move || {
        view! {
            <ToastProvider>
                <Router>
                    <TrackedHarness api=handle/>
                </Router>
            </ToastProvider>
        }
        .into_view()
    });

    sleep(Duration::from_millis(50)).await;
    click(&container, ".go-matches");
    sleep(Duration::from_millis(50)).await;

    // Both attempts went out and failed, with nothing shown for it.
    assert_eq!(api.page_views.borrow().len(), 2);
    assert_eq!(toast_count(&container), 0);

    // Tracking keeps working after a failure.
    click(&container, ".go-profile");
    sleep(Duration::from_millis(50)).await;
    assert_eq!(api.page_views.borrow().len(), 3);
    assert_eq!(api.page_views.borrow()[2].path, "/profile");
    assert_eq!(toast_count(&container), 0);
}

// Test plumbing

fn reset_url(path: &str) {
    web_sys::window()
        .unwrap()
        .history()
        .unwrap()
        .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
        .unwrap();
}

fn test_container(id: &str) -> web_sys::Element {
    let document = leptos::document();
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container
}

fn mount_to(container: &web_sys::Element, component: impl FnOnce() -> View + 'static) {
    let html_element = container
        .clone()
        .dyn_into::<web_sys::HtmlElement>()
        .expect("test container was not an HtmlElement");
    leptos::mount_to(html_element, component);
}

fn click(container: &web_sys::Element, selector: &str) {
    container
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matching {selector}"))
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}

fn toast_count(container: &web_sys::Element) -> u32 {
    container.query_selector_all(".toast").unwrap().length()
}
