use leptos::*;

use crate::components::profile_item_card::ProfileItemCard;
use crate::models::item::Item;

/// Grid of the items a user is offering. Hidden items are filtered out
/// here; the profile page renders them separately.
#[component]
pub fn UserAvailableItems(
    items: ReadSignal<Vec<Item>>,
    on_toggle_hidden: Callback<String>,
    on_select: Callback<String>,
) -> impl IntoView {
    let visible = move || {
        items
            .get()
            .into_iter()
            .filter(|item| !item.hidden)
            .collect::<Vec<_>>()
    };

    view! {
        <section class="available-items">
            <h2>{ "Available items" }</h2>
            {move || {
                let listed = visible();
                if listed.is_empty() {
                    view! {
                        <p class="empty-state">{ "Nothing listed for trade yet." }</p>
                    }
                    .into_view()
                } else {
                    listed
                        .into_iter()
                        .map(|item| {
                            view! {
                                <ProfileItemCard
                                    item=item
                                    on_toggle_hidden=on_toggle_hidden
                                    on_select=on_select
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_view()
                }
            }}
        </section>
    }
}
