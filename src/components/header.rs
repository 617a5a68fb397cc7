use leptos::*;
use leptos_router::A;

use crate::hooks::platform::use_native_app;
use crate::settings::Settings;

/// Top navigation. Gets a slimmed-down class set in native mode so the
/// stylesheet can drop the web chrome.
#[component]
pub fn Header() -> impl IntoView {
    let settings = expect_context::<Settings>();
    let native = use_native_app(settings);

    let header_class = move || {
        if native.get() {
            "header native"
        } else {
            "header"
        }
    };

    view! {
        <header class=header_class>
            <A href="/" class="brand">{ "SwapsCircle" }</A>
            <nav class="nav">
                <A href="/matches">{ "Matches" }</A>
                <A href="/messages">{ "Messages" }</A>
                <A href="/profile">{ "Profile" }</A>
            </nav>
            {move || native.get().then(|| view! {
                <span class="native-badge">{ "App" }</span>
            })}
        </header>
    }
}
