use leptos::*;

use crate::components::conversation_list::ConversationList;
use crate::fixtures;

#[component]
pub fn MessagesPage() -> impl IntoView {
    let conversations = fixtures::conversations_for(fixtures::SAMPLE_USER_ID);
    let (open_thread, set_open_thread) = create_signal(None::<String>);

    let on_open = Callback::new(move |id: String| set_open_thread.set(Some(id)));

    view! {
        <div class="page messages">
            <h2>{ "Messages" }</h2>
            <ConversationList conversations=conversations on_open=on_open/>

            {move || open_thread.get().map(|conversation_id| {
                let thread = fixtures::messages_for(&conversation_id);
                view! {
                    <section class="thread">
                        {if thread.is_empty() {
                            view! {
                                <p class="empty-state">{ "No messages yet. Say hi!" }</p>
                            }
                            .into_view()
                        } else {
                            thread
                                .into_iter()
                                .map(|message| {
                                    let bubble_class =
                                        if message.sender_id == fixtures::SAMPLE_USER_ID {
                                            "bubble mine"
                                        } else {
                                            "bubble theirs"
                                        };
                                    view! {
                                        <div class=bubble_class>
                                            <p>{ message.text }</p>
                                            <span class="bubble-time">{ message.time }</span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_view()
                        }}
                    </section>
                }
            })}
        </div>
    }
}
