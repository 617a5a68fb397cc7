use leptos::*;
use uuid::Uuid;

/// How long a toast stays on screen before it dismisses itself.
pub const DISMISS_AFTER_MS: u64 = 4000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast toast-info",
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

/// Handle for pushing notifications from anywhere under the provider.
#[derive(Clone, Copy)]
pub struct Toasts {
    entries: RwSignal<Vec<Toast>>,
}

impl Toasts {
    fn new() -> Self {
        Toasts {
            entries: create_rw_signal(Vec::new()),
        }
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let id = Uuid::new_v4();
        self.entries.update(|list| {
            list.push(Toast {
                id,
                kind,
                message: message.into(),
            })
        });
        self.schedule_dismiss(id);
    }

    // Auto-dismiss timer. Browser only; the signal may be gone by the
    // time it fires, hence try_update.
    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: Uuid) {
        use std::time::Duration;

        use wasm_bindgen_futures::spawn_local;

        let entries = self.entries;
        spawn_local(async move {
            gloo_timers::future::sleep(Duration::from_millis(DISMISS_AFTER_MS)).await;
            let _ = entries.try_update(|list| list.retain(|t| t.id != id));
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: Uuid) {}

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn dismiss(&self, id: Uuid) {
        self.entries.update(|list| list.retain(|t| t.id != id));
    }

    pub fn count(&self) -> usize {
        self.entries.with(|list| list.len())
    }
}

/// Notification handle from context. Panics outside a [`ToastProvider`].
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Like [`use_toasts`] but tolerates a missing provider, for callers that
/// can degrade to logging only.
pub fn try_use_toasts() -> Option<Toasts> {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let toasts = Toasts::new();
    provide_context(toasts);

    view! {
        {children()}
        <div class="toast-stack">
            {move || {
                toasts
                    .entries
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class=toast.kind.class()
                                on:click=move |_| toasts.dismiss(id)
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = f();
        runtime.dispose();
        result
    }

    #[test]
    fn push_appends_and_dismiss_removes() {
        with_runtime(|| {
            let toasts = Toasts::new();
            toasts.error("first");
            toasts.info("second");
            assert_eq!(toasts.count(), 2);

            let first_id = toasts.entries.with(|list| list[0].id);
            toasts.dismiss(first_id);
            assert_eq!(toasts.count(), 1);
            toasts
                .entries
                .with(|list| assert_eq!(list[0].message, "second"));
        });
    }

    #[test]
    fn kinds_map_to_distinct_classes() {
        assert_ne!(ToastKind::Error.class(), ToastKind::Info.class());
        assert_ne!(ToastKind::Success.class(), ToastKind::Info.class());
    }
}
