use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use leptos_router::{Route, Router, Routes};

use crate::api::{ApiHandle, SupabaseClient, SupabaseConfig};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::toast::ToastProvider;
use crate::hooks::page_view::use_page_view_tracking;
use crate::pages::home::HomePage;
use crate::pages::matches::MatchesPage;
use crate::pages::messages::MessagesPage;
use crate::pages::profile::ProfilePage;
use crate::settings::{default_store, Settings};

/// Application shell. Wires settings, the backend client, notifications
/// and routing together.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One settings object and one backend client for the whole app.
    let store = default_store();
    let settings = Settings::load(Rc::clone(&store));
    provide_context(settings.clone());

    let client = SupabaseClient::new(SupabaseConfig::from_build_env());
    client.restore_session(store.as_ref());
    let api = ApiHandle(Rc::new(client));
    provide_context(api.clone());

    let theme_class = {
        let settings = settings.clone();
        move || format!("app theme-{}", settings.theme().as_str())
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/swapscircle.css"/>
        <Title text="SwapsCircle"/>

        <ToastProvider>
            <Router>
                <div class=theme_class>
                    <TrackedShell api=api/>
                </div>
            </Router>
        </ToastProvider>
    }
}

/// Lives inside the router so route changes can be observed for the
/// page-view log.
#[component]
fn TrackedShell(api: ApiHandle) -> impl IntoView {
    use_page_view_tracking(api.0);

    view! {
        <Header/>
        <main class="content">
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/matches" view=MatchesPage/>
                <Route path="/messages" view=MessagesPage/>
                <Route path="/profile" view=ProfilePage/>
            </Routes>
        </main>
        <Footer/>
    }
}
