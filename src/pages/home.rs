use leptos::*;
use leptos_router::use_navigate;

use crate::components::available_items::UserAvailableItems;
use crate::components::hero_banner::HeroBanner;
use crate::components::sponsored_card::SponsoredCard;
use crate::fixtures;

#[component]
pub fn HomePage() -> impl IntoView {
    let (items, set_items) = create_signal(fixtures::items_for(fixtures::SAMPLE_USER_ID));
    let navigate = use_navigate();

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
        <div class="page home">
            <HeroBanner on_browse=move || navigate("/matches", Default::default())/>
            <UserAvailableItems
                items=items
                on_toggle_hidden=on_toggle_hidden
                on_select=on_select
            />
            <section class="sponsored-strip">
                {fixtures::sponsored_products().into_iter().map(|product| view! {
                    <SponsoredCard product=product/>
                }).collect::<Vec<_>>()}
            </section>
        </div>
    }
}
