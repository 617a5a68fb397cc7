use leptos::*;
use crate::models::review::Review;

fn stars(rating: i32) -> String {
    let filled = rating.clamp(0, 5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[component]
pub fn ReviewsList(reviews: Vec<Review>) -> impl IntoView {
    view! {
        <div class="reviews">
            <h3>{ "Reviews" }</h3>
            <ul>
                {
                    reviews.into_iter().map(|review| {
                        view! {
                            <li class="review">
                                <span class="review-stars">{ stars(review.rating) }</span>
                                <p class="review-comment">{ review.comment }</p>
                                <span class="review-byline">
                                    { format!("{}, {}", review.author, review.date) }
                                </span>
                            </li>
                        }
                    }).collect::<Vec<_>>()
                }
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_strings_clamp_out_of_range_ratings() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(9), "★★★★★");
        assert_eq!(stars(-2), "☆☆☆☆☆");
    }
}
