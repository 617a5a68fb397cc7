use leptos::*;

use crate::models::item::MatchItem;

/// One candidate in the match deck, with like/pass controls.
#[component]
pub fn MatchCard(
    candidate: MatchItem,
    on_like: Callback<String>,
    on_pass: Callback<String>,
) -> impl IntoView {
    let like_id = candidate.item.id.clone();
    let pass_id = candidate.item.id.clone();

    view! {
        <div class="match-card">
            <img class="match-image" src=candidate.item.image_url.clone() alt=candidate.item.name.clone()/>
            <div class="match-body">
                <strong>{ candidate.item.name.clone() }</strong>
                {candidate.item.description.clone().map(|description| view! {
                    <p class="match-description">{ description }</p>
                })}
                {candidate.liked.then(|| view! {
                    <span class="match-liked">{ "Liked your item" }</span>
                })}
            </div>
            <div class="match-actions">
                <button class="match-pass" on:click=move |_| on_pass.call(pass_id.clone())>
                    { "Pass" }
                </button>
                <button class="match-like" on:click=move |_| on_like.call(like_id.clone())>
                    { "Trade" }
                </button>
            </div>
        </div>
    }
}
