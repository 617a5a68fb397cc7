use std::cell::RefCell;

use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use leptos::logging::{log, warn};
use serde::Deserialize;

use crate::models::item::Item;
use crate::settings::SettingsStore;

use super::{ApiError, PageView, TradeApi};

/// Endpoint baked in when no real project is configured. Requests are
/// refused before they would reach it, so it only has to be a valid URL.
pub const PLACEHOLDER_URL: &str = "https://placeholder.supabase.co";

/// Storage key the auth session is restored from.
pub const SESSION_KEY: &str = "swapscircle.auth.session";

/// Connection settings for the hosted backend, read once at build time
/// from `SWAPSCIRCLE_SUPABASE_URL` and `SWAPSCIRCLE_SUPABASE_ANON_KEY`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SupabaseConfig {
    url: Option<String>,
    anon_key: Option<String>,
}

impl SupabaseConfig {
    pub fn new(url: Option<&str>, anon_key: Option<&str>) -> Self {
        SupabaseConfig {
            url: normalize(url).map(|u| u.trim_end_matches('/').to_string()),
            anon_key: normalize(anon_key),
        }
    }

    pub fn from_build_env() -> Self {
        SupabaseConfig::new(
            option_env!("SWAPSCIRCLE_SUPABASE_URL"),
            option_env!("SWAPSCIRCLE_SUPABASE_ANON_KEY"),
        )
    }

    /// True only when both the project URL and the anon key are present.
    pub fn is_configured(&self) -> bool {
        self.url.is_some() && self.anon_key.is_some()
    }

    /// Project URL, falling back to the placeholder endpoint.
    pub fn base_url(&self) -> &str {
        self.url.as_deref().unwrap_or(PLACEHOLDER_URL)
    }

    fn anon_key(&self) -> &str {
        self.anon_key.as_deref().unwrap_or("")
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Auth session as persisted by the sign-in flow. Unknown fields in the
/// stored document are ignored.
#[derive(Deserialize, Clone, Debug)]
struct StoredSession {
    access_token: String,
}

#[derive(Deserialize)]
struct AuthUser {
    id: String,
}

/// Thin wrapper over the hosted backend's REST interface. Constructing it
/// never fails; an unconfigured client points at the placeholder endpoint
/// and refuses every request with [`ApiError::NotConfigured`].
pub struct SupabaseClient {
    config: SupabaseConfig,
    session: RefCell<Option<StoredSession>>,
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig) -> Self {
        if !config.is_configured() {
            warn!(
                "[SUPABASE] URL or anon key missing, using placeholder endpoint {}",
                PLACEHOLDER_URL
            );
        }
        SupabaseClient {
            config,
            session: RefCell::new(None),
        }
    }

    pub fn config(&self) -> &SupabaseConfig {
        &self.config
    }

    /// Returns the client only when a real project is configured. Callers
    /// that go through this accessor can assume requests will be sent.
    pub fn guarded(&self) -> Option<&Self> {
        if self.config.is_configured() {
            Some(self)
        } else {
            warn!("[SUPABASE] Client requested but backend is not configured");
            None
        }
    }

    /// Picks up a previously stored auth session, if any. Sign-in itself
    /// happens elsewhere; this only makes an existing session usable.
    pub fn restore_session(&self, store: &dyn SettingsStore) {
        let Some(raw) = store.get(SESSION_KEY) else {
            return;
        };
        match parse_session(&raw) {
            Some(session) => {
                log!("[SUPABASE] Restored auth session from storage");
                *self.session.borrow_mut() = Some(session);
            }
            None => {
                warn!("[SUPABASE] Stored auth session is unreadable, discarding it");
                store.remove(SESSION_KEY);
            }
        }
    }

    fn require_configured(&self) -> Result<(), ApiError> {
        if self.config.is_configured() {
            Ok(())
        } else {
            Err(ApiError::NotConfigured)
        }
    }

    /// Bearer token for REST calls: the session token when signed in,
    /// the anon key otherwise.
    fn bearer(&self) -> String {
        self.session
            .borrow()
            .as_ref()
            .map(|s| s.access_token.clone())
            .unwrap_or_else(|| self.config.anon_key().to_string())
    }

    async fn fetch_current_user_id(&self) -> Result<Option<String>, ApiError> {
        let token = match self.session.borrow().as_ref() {
            Some(session) => session.access_token.clone(),
            // Nobody signed in: resolved locally, no request goes out.
            None => return Ok(None),
        };
        self.require_configured()?;

        let url = format!("{}/auth/v1/user", self.config.base_url());
        let response = Request::get(&url)
            .header("apikey", self.config.anon_key())
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| ApiError::Http(e.to_string()))?;

        if response.status() == 401 || response.status() == 403 {
            warn!("[SUPABASE] Auth session rejected with status {}", response.status());
            return Err(ApiError::Auth(format!("status {}", response.status())));
        }
        if !response.ok() {
            return Err(ApiError::Http(format!(
                "user endpoint returned status {}",
                response.status()
            )));
        }

        let user: AuthUser = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(Some(user.id))
    }

    async fn fetch_hidden_items(&self, user_id: &str) -> Result<Vec<Item>, ApiError> {
        self.require_configured()?;

        let url = hidden_items_url(self.config.base_url(), user_id);
        let response = Request::get(&url)
            .header("apikey", self.config.anon_key())
            .header("Authorization", &format!("Bearer {}", self.bearer()))
            .send()
            .await
            .map_err(|e| ApiError::Http(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Http(format!(
                "items query returned status {}",
                response.status()
            )));
        }

        let rows: Option<Vec<Item>> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let rows = rows.unwrap_or_default();
        log!("[SUPABASE] Fetched {} hidden items", rows.len());
        Ok(rows)
    }

    async fn insert_page_view(&self, view: PageView) -> Result<(), ApiError> {
        self.require_configured()?;

        let url = format!("{}/rest/v1/page_views", self.config.base_url());
        let request = Request::post(&url)
            .header("apikey", self.config.anon_key())
            .header("Authorization", &format!("Bearer {}", self.bearer()))
            .header("Prefer", "return=minimal")
            .json(&view)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Http(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Http(format!(
                "page view insert returned status {}",
                response.status()
            )));
        }
        Ok(())
    }
}

impl TradeApi for SupabaseClient {
    fn current_user_id(&self) -> LocalBoxFuture<'_, Result<Option<String>, ApiError>> {
        Box::pin(self.fetch_current_user_id())
    }

    fn hidden_items<'a>(
        &'a self,
        user_id: &'a str,
    ) -> LocalBoxFuture<'a, Result<Vec<Item>, ApiError>> {
        Box::pin(self.fetch_hidden_items(user_id))
    }

    fn record_page_view(&self, view: PageView) -> LocalBoxFuture<'_, Result<(), ApiError>> {
        Box::pin(self.insert_page_view(view))
    }
}

fn parse_session(raw: &str) -> Option<StoredSession> {
    serde_json::from_str(raw).ok()
}

/// Query for a user's hidden profile items, newest first.
fn hidden_items_url(base_url: &str, user_id: &str) -> String {
    format!(
        "{}/rest/v1/items?select=*&user_id=eq.{}&hidden=eq.true&order=created_at.desc",
        base_url,
        urlencoding::encode(user_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_requires_both_values() {
        assert!(SupabaseConfig::new(Some("https://x.supabase.co"), Some("key")).is_configured());
        assert!(!SupabaseConfig::new(Some("https://x.supabase.co"), None).is_configured());
        assert!(!SupabaseConfig::new(None, Some("key")).is_configured());
        assert!(!SupabaseConfig::new(None, None).is_configured());
    }

    #[test]
    fn blank_values_count_as_absent() {
        assert!(!SupabaseConfig::new(Some(""), Some("key")).is_configured());
        assert!(!SupabaseConfig::new(Some("https://x.supabase.co"), Some("  ")).is_configured());
    }

    #[test]
    fn unconfigured_client_points_at_placeholder() {
        let client = SupabaseClient::new(SupabaseConfig::default());
        assert_eq!(client.config().base_url(), PLACEHOLDER_URL);
        assert!(client.guarded().is_none());
    }

    #[test]
    fn trailing_slash_is_stripped_from_url() {
        let config = SupabaseConfig::new(Some("https://x.supabase.co/"), Some("key"));
        assert_eq!(config.base_url(), "https://x.supabase.co");
    }

    #[test]
    fn hidden_items_query_filters_by_user_and_flag() {
        let url = hidden_items_url("https://x.supabase.co", "user-1");
        assert_eq!(
            url,
            "https://x.supabase.co/rest/v1/items?select=*\
             &user_id=eq.user-1&hidden=eq.true&order=created_at.desc"
        );
    }

    #[test]
    fn hidden_items_query_escapes_the_user_id() {
        let url = hidden_items_url("https://x.supabase.co", "a b&c");
        assert!(url.contains("user_id=eq.a%20b%26c"));
    }

    #[test]
    fn session_parsing_tolerates_extra_fields() {
        let raw = r#"{"access_token":"tok-1","token_type":"bearer","expires_in":3600}"#;
        let session = parse_session(raw);
        assert_eq!(session.map(|s| s.access_token), Some("tok-1".to_string()));
        assert!(parse_session("not json").is_none());
    }

    #[test]
    fn restored_session_is_used_as_bearer() {
        use crate::settings::MemoryStore;

        let store = MemoryStore::new();
        store.set(SESSION_KEY, r#"{"access_token":"tok-2"}"#);

        let client =
            SupabaseClient::new(SupabaseConfig::new(Some("https://x.supabase.co"), Some("anon")));
        assert_eq!(client.bearer(), "anon");
        client.restore_session(&store);
        assert_eq!(client.bearer(), "tok-2");
    }

    #[test]
    fn unreadable_session_is_discarded() {
        use crate::settings::MemoryStore;

        let store = MemoryStore::new();
        store.set(SESSION_KEY, "{broken");

        let client = SupabaseClient::new(SupabaseConfig::default());
        client.restore_session(&store);
        assert_eq!(store.get(SESSION_KEY), None);
        assert_eq!(client.bearer(), "");
    }
}
