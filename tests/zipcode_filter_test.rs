#![cfg(target_arch = "wasm32")]

use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use swapscircle::components::toast::ToastProvider;
use swapscircle::hooks::location::ZIPCODE_ERROR;
use swapscircle::pages::matches::MatchesPage;
use swapscircle::settings::{MemoryStore, Settings};

wasm_bindgen_test_configure!(run_in_browser);

/// Matches page with the contexts it expects, backed by in-memory settings.
#[component]
fn MatchesHarness() -> impl IntoView {
    let settings = Settings::load(Rc::new(MemoryStore::new()));
    provide_context(settings);

    view! {
        <ToastProvider>
            <MatchesPage/>
        </ToastProvider>
    }
}

#[wasm_bindgen_test]
async fn invalid_zipcode_shows_the_error_message() {
    let container = mount_matches("invalid-zip");

    type_zipcode(&container, "123");
    click(&container, ".location-filter button");
    sleep(Duration::from_millis(20)).await;

    assert_eq!(text_of(&container, ".field-error"), ZIPCODE_ERROR);
    assert!(find(&container, ".field-note").is_none());
}

#[wasm_bindgen_test]
async fn valid_zipcode_survives_a_later_invalid_attempt() {
    let container = mount_matches("sticky-zip");

    type_zipcode(&container, " 97214 ");
    click(&container, ".location-filter button");
    sleep(Duration::from_millis(20)).await;

    assert!(find(&container, ".field-error").is_none());
    assert_eq!(
        text_of(&container, ".field-note"),
        "Showing matches near 97214"
    );

    // A bad follow-up attempt reports the error but keeps the old filter.
    type_zipcode(&container, "12");
    click(&container, ".location-filter button");
    sleep(Duration::from_millis(20)).await;

    assert_eq!(text_of(&container, ".field-error"), ZIPCODE_ERROR);
    assert_eq!(
        text_of(&container, ".field-note"),
        "Showing matches near 97214"
    );
}

#[wasm_bindgen_test]
async fn clear_removes_both_filter_and_error() {
    let container = mount_matches("clear-zip");

    type_zipcode(&container, "97214-1234");
    click(&container, ".location-filter button");
    sleep(Duration::from_millis(20)).await;
    assert_eq!(
        text_of(&container, ".field-note"),
        "Showing matches near 97214-1234"
    );

    let buttons = container
        .query_selector_all(".location-filter button")
        .unwrap();
    buttons
        .item(1)
        .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .unwrap()
        .click();
    sleep(Duration::from_millis(20)).await;

    assert!(find(&container, ".field-note").is_none());
    assert!(find(&container, ".field-error").is_none());
}

#[wasm_bindgen_test]
async fn first_time_hint_disappears_after_three_swipes() {
    let container = mount_matches("swipe-hint");

    assert!(find(&container, ".swipe-hint").is_some());

    for _ in 0..3 {
        click(&container, ".match-like");
        sleep(Duration::from_millis(20)).await;
    }

    assert!(find(&container, ".swipe-hint").is_none());
    assert_eq!(text_of(&container, ".swipe-count"), "3 swipes so far");
}

// Test plumbing

fn mount_matches(id: &str) -> web_sys::Element {
    let document = leptos::document();
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();

    let html_element = container
        .clone()
        .dyn_into::<web_sys::HtmlElement>()
        .expect("test container was not an HtmlElement");
    leptos::mount_to(html_element, || view! { <MatchesHarness/> });
    container
}

fn type_zipcode(container: &web_sys::Element, value: &str) {
    container
        .query_selector("#zipcode")
        .unwrap()
        .and_then(|node| node.dyn_into::<web_sys::HtmlInputElement>().ok())
        .expect("zipcode input missing")
        .set_value(value);
}

fn find(container: &web_sys::Element, selector: &str) -> Option<web_sys::Element> {
    container.query_selector(selector).unwrap()
}

fn text_of(container: &web_sys::Element, selector: &str) -> String {
    find(container, selector)
        .unwrap_or_else(|| panic!("no element matching {selector}"))
        .text_content()
        .unwrap_or_default()
}

fn click(container: &web_sys::Element, selector: &str) {
    find(container, selector)
        .unwrap_or_else(|| panic!("no element matching {selector}"))
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}
