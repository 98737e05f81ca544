//! Header component

use leptos::prelude::*;

use crate::state::AppState;

/// Top bar of the dashboard screens
#[component]
pub fn Header(
    /// Page title
    title: &'static str,
    /// Toggles the sidebar on small screens
    sidebar_open: RwSignal<bool>,
) -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <header class="header h-16 sticky top-0 z-30 border-b border-slate-800 bg-slate-950/80 backdrop-blur">
            <div class="h-full px-4 flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <button
                        class="btn btn-ghost lg:hidden"
                        aria-label="Toggle navigation"
                        on:click=move |_| sidebar_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                    <h1 class="text-lg font-bold tracking-tight">{title}</h1>
                </div>

                {move || state.student_name().map(|name| view! {
                    <span class="text-sm text-slate-400">{name}</span>
                })}
            </div>
        </header>
    }
}
