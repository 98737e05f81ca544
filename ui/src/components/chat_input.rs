//! Chat composer

use leptos::prelude::*;

/// Textarea that submits on Enter (Shift+Enter inserts a newline)
#[component]
pub fn ChatInput(
    /// Current composer text
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new text on every keystroke
    on_input: impl Fn(String) + 'static,
    /// Called when user submits
    on_submit: impl Fn() + 'static + Clone,
    /// Whether submitting is currently blocked
    #[prop(into)]
    disabled: Signal<bool>,
    #[prop(default = "Describe the quiz you need...")] placeholder: &'static str,
) -> impl IntoView {
    let can_send = move || !disabled.get() && !value.get().trim().is_empty();

    let on_keydown = {
        let on_submit = on_submit.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter" && !ev.shift_key() {
                ev.prevent_default();
                if can_send() {
                    on_submit();
                }
            }
        }
    };

    view! {
        <div class="flex items-end gap-3 p-4 bg-slate-900/60 border-t border-slate-800">
            <textarea
                prop:value=move || value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
                on:keydown=on_keydown
                placeholder=placeholder
                rows="1"
                class="flex-1 px-4 py-3 bg-slate-950 border border-slate-700 rounded-xl resize-none
                       text-slate-100 placeholder-slate-500
                       focus:outline-none focus:ring-2 focus:ring-cyan-500 focus:border-transparent"
                style="max-height: 200px;"
            ></textarea>

            <button
                on:click=move |_| on_submit()
                disabled=move || !can_send()
                class="p-3 bg-cyan-600 hover:bg-cyan-700 disabled:bg-slate-700
                       disabled:cursor-not-allowed rounded-xl transition-colors"
                aria-label="Send"
            >
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    class="w-5 h-5 text-white"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    <line x1="22" y1="2" x2="11" y2="13"></line>
                    <polygon points="22 2 15 22 11 13 2 9 22 2"></polygon>
                </svg>
            </button>
        </div>
    }
}
