//! Toast notifications

use leptos::prelude::*;
use smartquiz::Severity;

use crate::state::{AppState, Toast};

/// Stack of on-screen notifications, newest at the bottom
#[component]
pub fn ToastHost() -> impl IntoView {
    let state = expect_context::<AppState>();
    let toasts = state.toasts;

    view! {
        <div class="fixed bottom-6 right-6 z-50 flex flex-col gap-3 w-80">
            <For
                each=move || toasts.get()
                key=|toast| toast.id.clone()
                children=move |toast: Toast| {
                    let id = toast.id.clone();
                    let tone = match toast.severity {
                        Severity::Success => "border-emerald-500/50 bg-emerald-500/10 text-emerald-300",
                        Severity::Error => "border-rose-500/50 bg-rose-500/10 text-rose-300",
                    };
                    view! {
                        <div
                            role="status"
                            class=format!("px-4 py-3 rounded-lg border text-sm shadow-lg animate-fade-in-up cursor-pointer {}", tone)
                            on:click=move |_| toasts.update(|t| t.retain(|x| x.id != id))
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
