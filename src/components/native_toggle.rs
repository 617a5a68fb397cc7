use leptos::*;

use crate::settings::Settings;

/// Switch between the web presentation and the packaged-app presentation.
/// The choice is persisted, so it sticks across reloads.
#[component]
pub fn NativeModeToggle() -> impl IntoView {
    let settings = expect_context::<Settings>();
    let checked = {
        let settings = settings.clone();
        move || settings.native_preview()
    };

    view! {
        <label class="native-toggle">
            <input
                type="checkbox"
                prop:checked=checked
                on:change=move |e| settings.set_native_preview(event_target_checked(&e))
            />
            { "Preview as mobile app" }
        </label>
    }
}
