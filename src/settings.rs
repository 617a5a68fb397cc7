//! Process-wide UI preferences with an explicit load/save lifecycle.
//!
//! The app constructs one [`Settings`] handle at startup and passes it down
//! via context; components never touch browser storage directly. Every
//! mutation writes through to the backing store, so "save on stop" is a
//! no-op safety net rather than a requirement. Last-writer-wins is fine
//! here: the values are small independent scalars.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use leptos::logging::warn;
use leptos::*;
use serde::{Deserialize, Serialize};

/// Single storage key holding the whole settings document.
pub const SETTINGS_KEY: &str = "swapscircle.settings";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
struct SettingsData {
    #[serde(default)]
    theme: Theme,
    #[serde(default)]
    native_preview: bool,
    #[serde(default)]
    swipe_counts: HashMap<String, u32>,
}

/// Key-value backing store. Browser localStorage on wasm; in-memory in SSR
/// and tests.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(target_arch = "wasm32")]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        gloo_utils::window().local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl SettingsStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(s) = Self::storage() {
            if s.set_item(key, value).is_err() {
                warn!("[SETTINGS] localStorage write failed for {}", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(s) = Self::storage() {
            let _ = s.remove_item(key);
        }
    }
}

/// The store the running platform actually persists to.
pub fn default_store() -> Rc<dyn SettingsStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserStore)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(MemoryStore::new())
    }
}

#[derive(Clone)]
pub struct Settings {
    data: RwSignal<SettingsData>,
    store: Rc<dyn SettingsStore>,
}

impl Settings {
    /// Startup lifecycle hook: read the stored document, falling back to
    /// defaults when it is missing or unparseable.
    pub fn load(store: Rc<dyn SettingsStore>) -> Self {
        let data = match store.get(SETTINGS_KEY) {
            Some(raw) => match serde_json::from_str::<SettingsData>(&raw) {
                Ok(data) => data,
                Err(err) => {
                    warn!("[SETTINGS] Ignoring corrupt settings document: {}", err);
                    SettingsData::default()
                }
            },
            None => SettingsData::default(),
        };
        Self {
            data: create_rw_signal(data),
            store,
        }
    }

    /// Shutdown lifecycle hook. Mutations already write through, so this
    /// exists for symmetry and for hosts that want an explicit flush.
    pub fn save(&self) {
        self.persist();
    }

    fn persist(&self) {
        let serialized = self
            .data
            .with_untracked(|data| serde_json::to_string(data));
        match serialized {
            Ok(json) => self.store.set(SETTINGS_KEY, &json),
            Err(err) => warn!("[SETTINGS] Failed to serialize settings: {}", err),
        }
    }

    pub fn theme(&self) -> Theme {
        self.data.with(|d| d.theme)
    }

    pub fn set_theme(&self, theme: Theme) {
        self.data.update(|d| d.theme = theme);
        self.persist();
    }

    pub fn toggle_theme(&self) {
        let next = self.data.with_untracked(|d| d.theme).toggled();
        self.set_theme(next);
    }

    pub fn native_preview(&self) -> bool {
        self.data.with(|d| d.native_preview)
    }

    pub fn set_native_preview(&self, enabled: bool) {
        self.data.update(|d| d.native_preview = enabled);
        self.persist();
    }

    pub fn swipe_count(&self, user_id: &str) -> u32 {
        self.data
            .with(|d| d.swipe_counts.get(user_id).copied().unwrap_or(0))
    }

    /// Increment and persist the per-user swipe counter, returning the new
    /// count.
    pub fn record_swipe(&self, user_id: &str) -> u32 {
        let mut next = 0;
        self.data.update(|d| {
            let count = d.swipe_counts.entry(user_id.to_string()).or_insert(0);
            *count += 1;
            next = *count;
        });
        self.persist();
        next
    }
}
