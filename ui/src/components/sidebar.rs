//! Dashboard sidebar and layout

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use smartquiz::{Navigator, Route};

use crate::components::Header;
use crate::state::{use_router_navigator, AppState};

const NAV_ITEMS: [(&str, &str); 3] = [
    ("/student/dashboard", "Dashboard"),
    ("/results", "Results"),
    ("/create-quiz", "Create Quiz"),
];

/// Sidebar plus header around a dashboard page
#[component]
pub fn DashboardLayout(title: &'static str, children: Children) -> impl IntoView {
    let sidebar_open = RwSignal::new(false);

    view! {
        <div class="flex min-h-screen">
            <Sidebar is_open=sidebar_open />
            <div class="flex-1 flex flex-col min-w-0">
                <Header title=title sidebar_open=sidebar_open />
                <div class="flex-1 p-6">{children()}</div>
            </div>
        </div>
    }
}

/// Navigation links and the sign-out control
#[component]
pub fn Sidebar(
    /// Whether sidebar is open (mobile)
    is_open: RwSignal<bool>,
) -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigator = use_router_navigator();
    let location = use_location();

    let sign_out = move |_| {
        state.sign_out();
        navigator.navigate(Route::Home);
    };

    view! {
        // Overlay for mobile
        <Show when=move || is_open.get()>
            <div
                class="fixed inset-0 bg-black/60 backdrop-blur-sm z-30 lg:hidden animate-fade-in"
                on:click=move |_| is_open.set(false)
            ></div>
        </Show>

        <aside class=move || format!(
            "sidebar fixed lg:relative inset-y-0 left-0 z-40 w-64 flex flex-col bg-slate-900 border-r border-slate-800 transform transition-transform duration-300 lg:translate-x-0 {}",
            if is_open.get() { "translate-x-0" } else { "-translate-x-full" }
        )>
            <div class="p-5 border-b border-slate-800">
                <a href="/" class="text-xl font-black text-gradient">"SmartQuiz"</a>
            </div>

            <nav class="flex-1 p-4 space-y-1">
                {NAV_ITEMS.into_iter().map(|(href, label)| {
                    let active = move || location.pathname.get() == href;
                    view! {
                        <a
                            href=href
                            class=move || format!(
                                "sidebar-item block px-3 py-2 rounded-md text-sm {}",
                                if active() { "bg-slate-800 text-white" } else { "text-slate-400 hover:text-white" }
                            )
                            on:click=move |_| is_open.set(false)
                        >
                            {label}
                        </a>
                    }
                }).collect::<Vec<_>>()}
            </nav>

            <div class="p-4 border-t border-slate-800">
                <button on:click=sign_out class="btn btn-ghost w-full">
                    "Sign Out"
                </button>
            </div>
        </aside>
    }
}
