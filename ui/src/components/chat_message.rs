//! Chat message component

use leptos::prelude::*;
use smartquiz::types::Message;

/// Render a single chat message
#[component]
pub fn ChatMessage(message: Message) -> impl IntoView {
    let is_user = message.is_user();
    let time = message.time_label();

    view! {
        <div class=format!(
            "flex items-start gap-3 message-appear {}",
            if is_user { "flex-row-reverse" } else { "" }
        )>
            <div class=format!(
                "w-8 h-8 rounded-full flex items-center justify-center text-white text-xs font-semibold shrink-0 {}",
                if is_user {
                    "bg-gradient-to-br from-cyan-500 to-blue-600"
                } else {
                    "bg-gradient-to-br from-violet-500 to-purple-600"
                }
            )>
                {if is_user { "YOU" } else { "AI" }}
            </div>

            <div class=format!(
                "flex flex-col gap-1 max-w-[80%] {}",
                if is_user { "items-end" } else { "items-start" }
            )>
                <div class=format!(
                    "px-4 py-3 rounded-2xl whitespace-pre-wrap break-words {}",
                    if is_user {
                        "bg-cyan-600 text-white rounded-tr-sm"
                    } else {
                        "bg-slate-800 text-slate-100 rounded-tl-sm font-mono text-sm"
                    }
                )>
                    <MessageContent content=message.content />
                </div>
                <span class="text-xs text-slate-600 mt-1">{time}</span>
            </div>
        </div>
    }
}

/// Message text with inline `code` spans
#[component]
fn MessageContent(content: String) -> impl IntoView {
    view! {
        <span>
            {content.split('`').enumerate().map(|(i, part)| {
                if i % 2 == 1 {
                    view! {
                        <code class="bg-slate-700 px-1.5 py-0.5 rounded text-sm font-mono text-cyan-300">
                            {part.to_string()}
                        </code>
                    }.into_any()
                } else {
                    view! { <span>{part.to_string()}</span> }.into_any()
                }
            }).collect::<Vec<_>>()}
        </span>
    }
}
