use leptos::*;

use crate::models::item::Item;

/// Card for one of the user's own items, with hide/unhide and selection
/// controls. The parent owns the item list; this only reports clicks.
#[component]
pub fn ProfileItemCard(
    item: Item,
    on_toggle_hidden: Callback<String>,
    on_select: Callback<String>,
) -> impl IntoView {
    let toggle_id = item.id.clone();
    let select_id = item.id.clone();
    let hide_label = if item.hidden { "Unhide" } else { "Hide" };

    let card_class = if item.selected {
        "profile-item-card selected"
    } else {
        "profile-item-card"
    };

    view! {
        <div class=card_class>
            <img class="item-image" src=item.image_url.clone() alt=item.name.clone()/>
            <div class="item-body">
                <strong>{ item.name.clone() }</strong>
                {item.condition.clone().map(|condition| view! {
                    <span class="item-condition">{ condition }</span>
                })}
                {item.price_range.clone().map(|range| view! {
                    <span class="item-price">{ range }</span>
                })}
            </div>
            <div class="item-actions">
                <button on:click=move |_| on_select.call(select_id.clone())>
                    { if item.selected { "Deselect" } else { "Select" } }
                </button>
                <button
                    class="item-hide"
                    on:click=move |_| on_toggle_hidden.call(toggle_id.clone())
                >
                    { hide_label }
                </button>
            </div>
        </div>
    }
}
