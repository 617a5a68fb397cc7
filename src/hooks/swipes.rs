use leptos::*;

use crate::settings::Settings;

/// Swipes before the onboarding hint stops showing.
pub const FIRST_TIME_SWIPE_LIMIT: u32 = 3;

/// Per-user swipe counter backing the first-time onboarding hint. The
/// count lives in settings, so it survives reloads.
#[derive(Clone)]
pub struct SwipeTracker {
    settings: Settings,
    user_id: String,
    count: RwSignal<u32>,
}

impl SwipeTracker {
    pub fn count(&self) -> u32 {
        self.count.get()
    }

    /// True until the user has swiped enough times to know the gesture.
    pub fn is_first_time(&self) -> bool {
        self.count.get() < FIRST_TIME_SWIPE_LIMIT
    }

    pub fn record_swipe(&self) {
        let total = self.settings.record_swipe(&self.user_id);
        self.count.set(total);
    }
}

pub fn use_first_time_swipes(settings: Settings, user_id: &str) -> SwipeTracker {
    let count = create_rw_signal(settings.swipe_count(user_id));
    SwipeTracker {
        settings,
        user_id: user_id.to_string(),
        count,
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::settings::MemoryStore;

    fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = f();
        runtime.dispose();
        result
    }

    #[test]
    fn hint_stops_after_enough_swipes() {
        with_runtime(|| {
            let settings = Settings::load(Rc::new(MemoryStore::new()));
            let tracker = use_first_time_swipes(settings, "user-1");
            assert!(tracker.is_first_time());

            tracker.record_swipe();
            tracker.record_swipe();
            assert!(tracker.is_first_time());

            tracker.record_swipe();
            assert!(!tracker.is_first_time());
            assert_eq!(tracker.count(), FIRST_TIME_SWIPE_LIMIT);
        });
    }

    #[test]
    fn counts_are_kept_per_user_and_survive_reload() {
        with_runtime(|| {
            let store = Rc::new(MemoryStore::new());
            let settings = Settings::load(store.clone());

            let first = use_first_time_swipes(settings.clone(), "user-1");
            first.record_swipe();
            first.record_swipe();

            let other = use_first_time_swipes(settings, "user-2");
            assert_eq!(other.count(), 0);

            // A fresh settings object over the same store sees the writes.
            let reloaded = Settings::load(store);
            let again = use_first_time_swipes(reloaded, "user-1");
            assert_eq!(again.count(), 2);
        });
    }
}
