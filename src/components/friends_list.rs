use leptos::*;

use crate::models::friend::Friend;

/// Friends with a peek at what each one is currently offering.
#[component]
pub fn FriendsList(friends: Vec<Friend>) -> impl IntoView {
    view! {
        <section class="friends">
            <h3>{ "Friends" }</h3>
            <ul>
                {
                    friends.into_iter().map(|friend| {
                        view! {
                            <li class="friend">
                                <img class="friend-avatar" src=friend.avatar_url alt=friend.name.clone()/>
                                <div class="friend-name">
                                    <strong>{ friend.name }</strong>
                                    <span class="friend-count">
                                        { format!("{} friends", friend.friend_count) }
                                    </span>
                                </div>
                                <ul class="friend-items">
                                    {friend.items.into_iter().map(|item| view! {
                                        <li>
                                            <img src=item.image_url alt=item.name.clone()/>
                                            <span>{ item.name }</span>
                                        </li>
                                    }).collect::<Vec<_>>()}
                                </ul>
                            </li>
                        }
                    }).collect::<Vec<_>>()
                }
            </ul>
        </section>
    }
}
