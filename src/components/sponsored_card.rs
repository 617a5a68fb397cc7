use leptos::*;

use crate::models::sponsored::{SponsoredProduct, SponsoredStatus};

/// Promoted listing. Renders nothing unless the placement is active and
/// has passed review.
#[component]
pub fn SponsoredCard(product: SponsoredProduct) -> impl IntoView {
    let visible = product.active && product.status == SponsoredStatus::Approved;
    visible.then(|| {
        view! {
            <a
                class="sponsored-card"
                href=product.target_url.clone()
                target="_blank"
                rel="noopener"
            >
                {product.image_url.clone().map(|url| view! {
                    <img class="sponsored-image" src=url alt=product.name.clone()/>
                })}
                <div class="sponsored-body">
                    <strong>{ product.name.clone() }</strong>
                    {product.description.clone().map(|description| view! {
                        <p>{ description }</p>
                    })}
                </div>
                <span class="sponsored-tag">{ "Sponsored" }</span>
            </a>
        }
    })
}
