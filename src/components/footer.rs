use leptos::*;

use crate::hooks::platform::use_platform;
use crate::settings::{Settings, Theme};

/// Page footer, also home of the theme toggle.
#[component]
pub fn Footer() -> impl IntoView {
    let settings = expect_context::<Settings>();
    let platform = use_platform();

    let toggle_label = {
        let settings = settings.clone();
        move || match settings.theme() {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    };

    view! {
        <footer class="footer">
            <div class="footer-links">
                <a href="/about">{ "About" }</a>
                <a href="/help">{ "Help" }</a>
                <a href="/terms">{ "Terms" }</a>
            </div>
            <button
                class="theme-toggle"
                on:click=move |_| settings.toggle_theme()
            >
                { toggle_label }
            </button>
            <span class="footer-platform">{ format!("SwapsCircle on {}", platform.as_str()) }</span>
        </footer>
    }
}
