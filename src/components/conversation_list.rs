use leptos::*;

use crate::models::conversation::Conversation;

/// Inbox rows. Unread conversations get a marker; rating and distance
/// render only when the partner has them.
#[component]
pub fn ConversationList(
    conversations: Vec<Conversation>,
    on_open: Callback<String>,
) -> impl IntoView {
    view! {
        <ul class="conversations">
            {
                conversations.into_iter().map(|conversation| {
                    let open_id = conversation.id.clone();
                    let row_class = if conversation.is_new {
                        "conversation unread"
                    } else {
                        "conversation"
                    };
                    view! {
                        <li class=row_class on:click=move |_| on_open.call(open_id.clone())>
                            {conversation.avatar_url.map(|url| view! {
                                <img class="conversation-avatar" src=url alt=""/>
                            })}
                            <div class="conversation-body">
                                <strong>{ conversation.name }</strong>
                                <p class="conversation-preview">{ conversation.last_message }</p>
                                <span class="conversation-meta">
                                    {conversation.rating.map(|rating| format!("★ {rating:.1} "))}
                                    {conversation.distance}
                                </span>
                            </div>
                            <span class="conversation-time">{ conversation.time }</span>
                            {conversation.is_new.then(|| view! {
                                <span class="conversation-badge">{ "New" }</span>
                            })}
                        </li>
                    }
                }).collect::<Vec<_>>()
            }
        </ul>
    }
}
