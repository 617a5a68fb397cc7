use leptos::*;

use crate::api::ApiHandle;
use crate::components::available_items::UserAvailableItems;
use crate::components::friends_list::FriendsList;
use crate::components::native_toggle::NativeModeToggle;
use crate::components::reviews_list::ReviewsList;
use crate::fixtures;
use crate::hooks::hidden_items::use_hidden_items;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = expect_context::<ApiHandle>().0;
    let profile = fixtures::sample_profile();
    let (items, set_items) = create_signal(fixtures::items_for(fixtures::SAMPLE_USER_ID));
    let hidden = use_hidden_items(api);

    let on_toggle_hidden = Callback::new(move |id: String| {
        set_items.update(|list| {
            if let Some(item) = list.iter_mut().find(|item| item.id == id) {
                item.hidden = !item.hidden;
            }
        });
    });
    let on_select = Callback::new(move |id: String| {
        set_items.update(|list| {
            if let Some(item) = list.iter_mut().find(|item| item.id == id) {
                item.selected = !item.selected;
            }
        });
    });

    view! {
        <div class="page profile">
            <section class="profile-header">
                <img class="profile-avatar" src=profile.avatar_url.clone() alt=profile.name.clone()/>
                <div class="profile-summary">
                    <h2>{ profile.name.clone() }</h2>
                    <p class="profile-description">{ profile.description.clone() }</p>
                    <span class="profile-rating">
                        { format!("★ {:.1} ({} reviews)", profile.rating, profile.review_count) }
                    </span>
                    <span class="profile-location">{ profile.location.clone() }</span>
                    <span class="profile-since">
                        { format!("Member since {}", profile.member_since) }
                    </span>
                </div>
                <NativeModeToggle/>
            </section>

            <UserAvailableItems
                items=items
                on_toggle_hidden=on_toggle_hidden
                on_select=on_select
            />

            <section class="hidden-items">
                <h3>{ "Hidden items" }</h3>
                <button class="refresh" on:click=move |_| hidden.refetch()>
                    { "Refresh" }
                </button>
                {move || {
                    if hidden.loading() {
                        view! { <p class="loading">{ "Loading hidden items..." }</p> }.into_view()
                    } else if hidden.is_empty() {
                        view! { <p class="empty-state">{ "Nothing hidden right now." }</p> }
                            .into_view()
                    } else {
                        hidden
                            .items()
                            .into_iter()
                            .map(|item| view! {
                                <div class="hidden-item">
                                    <img src=item.image_url alt=item.name.clone()/>
                                    <span>{ item.name }</span>
                                </div>
                            })
                            .collect::<Vec<_>>()
                            .into_view()
                    }
                }}
            </section>

            <section class="trades">
                <h3>{ "Trades" }</h3>
                <ul>
                    {fixtures::trades_for(fixtures::SAMPLE_USER_ID).into_iter().map(|trade| {
                        let summary = format!(
                            "{} for {}",
                            trade.offered.first().map(|i| i.name.as_str()).unwrap_or("(none)"),
                            trade.requested.first().map(|i| i.name.as_str()).unwrap_or("(none)"),
                        );
                        view! {
                            <li class="trade">
                                <strong>{ trade.partner_name }</strong>
                                <span class="trade-summary">{ summary }</span>
                                <span class="trade-status">{ trade.status.label() }</span>
                            </li>
                        }
                    }).collect::<Vec<_>>()}
                </ul>
            </section>

            <ReviewsList reviews=fixtures::reviews_for(fixtures::SAMPLE_USER_ID)/>
            <FriendsList friends=fixtures::friends_for(fixtures::SAMPLE_USER_ID)/>
        </div>
    }
}
