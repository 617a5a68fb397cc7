use leptos::*;

use crate::components::match_card::MatchCard;
use crate::components::toast::use_toasts;
use crate::fixtures;
use crate::hooks::location::use_location;
use crate::hooks::swipes::use_first_time_swipes;
use crate::settings::Settings;

#[component]
pub fn MatchesPage() -> impl IntoView {
    let settings = expect_context::<Settings>();
    let toasts = use_toasts();
    let location = use_location();
    let swipes = use_first_time_swipes(settings, fixtures::SAMPLE_USER_ID);

    let (deck, set_deck) = create_signal(fixtures::match_candidates());

    let zip_ref: NodeRef<html::Input> = create_node_ref();
    let apply_zipcode = move |_| {
        if let Some(input) = zip_ref.get() {
            location.set_zipcode(&input.value());
        }
    };

    // Removes the current candidate and counts the swipe, for both verdicts.
    let remove_candidate = {
        let swipes = swipes.clone();
        move |id: &str| {
            swipes.record_swipe();
            set_deck.update(|deck| deck.retain(|candidate| candidate.item.id != id));
        }
    };

    let on_pass = Callback::new({
        let remove_candidate = remove_candidate.clone();
        move |id: String| remove_candidate(&id)
    });
    let on_like = Callback::new(move |id: String| {
        let liked = deck.with(|deck| {
            deck.iter()
                .find(|candidate| candidate.item.id == id)
                .map(|candidate| candidate.item.name.clone())
        });
        remove_candidate(&id);
        if let Some(name) = liked {
            toasts.success(format!("Trade proposed for {name}"));
        }
    });

    let hint_swipes = swipes.clone();

    view! {
        <div class="page matches">
            <section class="location-filter">
                <label for="zipcode">{ "Trade near" }</label>
                <input id="zipcode" type="text" placeholder="Zipcode" node_ref=zip_ref/>
                <button on:click=apply_zipcode>{ "Apply" }</button>
                <button on:click=move |_| location.clear()>{ "Clear" }</button>
                {move || location.error().map(|error| view! {
                    <p class="field-error">{ error }</p>
                })}
                {move || location.zipcode().map(|zipcode| view! {
                    <p class="field-note">{ format!("Showing matches near {zipcode}") }</p>
                })}
            </section>

            {move || hint_swipes.is_first_time().then(|| view! {
                <p class="swipe-hint">
                    { "Tap Trade to propose a swap, or Pass to see the next item." }
                </p>
            })}

            <section class="match-deck">
                {move || {
                    match deck.with(|deck| deck.first().cloned()) {
                        Some(candidate) => view! {
                            <MatchCard candidate=candidate on_like=on_like on_pass=on_pass/>
                        }
                        .into_view(),
                        None => view! {
                            <p class="empty-state">
                                { "No more matches nearby. Check back soon!" }
                            </p>
                        }
                        .into_view(),
                    }
                }}
            </section>

            <p class="swipe-count">{ move || format!("{} swipes so far", swipes.count()) }</p>
        </div>
    }
}
