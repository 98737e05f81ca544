//! Quiz-generation chat widget

use leptos::prelude::*;
use leptos::task::spawn_local;
use smartquiz::chat::{submit_prompt, ChatState, ScriptedReply, SUGGESTIONS};
use smartquiz::types::Message;
use smartquiz::ViewScope;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::components::{ChatInput, ChatMessage, TypingIndicator};
use crate::state::{AppState, GlooTimer, SignalCell};

/// Chat panel with suggestion chips and a scripted assistant
#[component]
pub fn AiChat() -> impl IntoView {
    let state = expect_context::<AppState>();
    let chat = RwSignal::new(ChatState::default());
    let is_generating = RwSignal::new(false);
    let messages_end_ref = NodeRef::<leptos::html::Div>::new();

    let scope = ViewScope::new();
    on_cleanup({
        let scope = scope.clone();
        move || scope.cancel()
    });

    let generator = ScriptedReply::new(GlooTimer, state.config.ack_delay);

    let send = move || {
        let scope = scope.clone();
        let generator = generator.clone();
        spawn_local(async move {
            let outcome = submit_prompt(
                &scope,
                &SignalCell(chat),
                &generator,
                is_generating.get_untracked(),
                |prompt| {
                    tracing::debug!(prompt, "quiz prompt submitted");
                    is_generating.set(true);
                },
            )
            .await;
            if outcome.is_completed() {
                is_generating.try_set(false);
            }
        });
    };

    // Keep the newest message in view
    Effect::new(move |_| {
        chat.with(|c| c.messages().len());
        if let Some(el) = messages_end_ref.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    view! {
        <section class="flex flex-col h-[70vh] rounded-2xl border border-slate-800 bg-slate-900/40 overflow-hidden">
            <div class="px-5 py-3 border-b border-slate-800 flex items-center justify-between">
                <h2 class="text-sm font-semibold uppercase tracking-widest text-slate-400">"AI Knowledge Architect"</h2>
                <Show when=move || is_generating.get()>
                    <span class="text-xs text-cyan-400 animate-pulse">"Generating..."</span>
                </Show>
            </div>

            <div class="flex-1 overflow-y-auto p-5 space-y-4">
                <For
                    each=move || chat.with(|c| c.messages().items().to_vec())
                    key=|message| message.id.clone()
                    children=|message: Message| view! { <ChatMessage message=message /> }
                />
                <Show when=move || is_generating.get()>
                    <TypingIndicator />
                </Show>
                <div node_ref=messages_end_ref></div>
            </div>

            <div class="px-4 pt-3 flex flex-wrap gap-2">
                {SUGGESTIONS.into_iter().map(|suggestion| view! {
                    <button
                        class="px-3 py-1 text-xs font-semibold rounded-full border border-slate-700 text-slate-300 hover:border-cyan-500 hover:text-cyan-300 transition-colors"
                        on:click=move |_| chat.update(|c| c.apply_suggestion(suggestion))
                    >
                        {suggestion}
                    </button>
                }).collect::<Vec<_>>()}
            </div>

            <ChatInput
                value=Signal::derive(move || chat.with(|c| c.input.clone()))
                on_input=move |text| chat.update(|c| c.set_input(text))
                on_submit=send
                disabled=is_generating
            />
        </section>
    }
}
