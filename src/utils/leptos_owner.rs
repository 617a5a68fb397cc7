use leptos::Owner;

/// Runs a closure under a previously captured Leptos owner.
/// Returns None when that owner has been disposed, which happens when an
/// async result lands after the component that requested it was unmounted.
pub fn with_owner_safe<F, R>(owner: Owner, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    match leptos::try_with_owner(owner, f) {
        Ok(value) => Some(value),
        Err(_) => {
            leptos::logging::log!("[OWNER] Owner disposed, skipping: {}", log_context);
            None
        }
    }
}
