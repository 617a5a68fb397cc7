use leptos::*;

/// Landing banner with the main call to action.
#[component]
pub fn HeroBanner(on_browse: impl Fn() + 'static) -> impl IntoView {
    view! {
        <section class="hero-banner">
            <h1>{ "Swap what you have for what you want" }</h1>
            <p>{ "SwapsCircle matches your spare items with people nearby who want to trade." }</p>
            <button class="hero-cta" on:click=move |_| on_browse()>
                { "Start browsing" }
            </button>
        </section>
    }
}
