use leptos::*;

use crate::settings::Settings;

/// Marker the packaged mobile shell exposes to the page, both as an
/// injected global and as a user-agent suffix.
pub const SHELL_MARKER: &str = "SwapsCircleShell";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Platform {
    Ios,
    Android,
    Web,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Web => "web",
        }
    }
}

fn platform_from_user_agent(ua: &str) -> Platform {
    if ua.contains("iPhone") || ua.contains("iPad") || ua.contains("iPod") {
        Platform::Ios
    } else if ua.contains("Android") {
        Platform::Android
    } else {
        Platform::Web
    }
}

fn is_shell_user_agent(ua: &str) -> bool {
    ua.contains(SHELL_MARKER)
}

pub(crate) fn user_agent() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_utils::window()
            .navigator()
            .user_agent()
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

#[cfg(target_arch = "wasm32")]
fn shell_global_present() -> bool {
    js_sys::Reflect::has(
        &js_sys::global(),
        &wasm_bindgen::JsValue::from_str(SHELL_MARKER),
    )
    .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn shell_global_present() -> bool {
    false
}

/// Which platform the session runs on, from the user agent. Fixed for the
/// lifetime of the page, so plain data rather than a signal.
pub fn use_platform() -> Platform {
    platform_from_user_agent(&user_agent())
}

/// Whether the app should present itself as the packaged mobile app.
/// True inside the shell (injected marker or tagged user agent) or when
/// the stored native-preview preference is on.
pub fn use_native_app(settings: Settings) -> Memo<bool> {
    let in_shell = shell_global_present() || is_shell_user_agent(&user_agent());
    create_memo(move |_| in_shell || settings.native_preview())
}
