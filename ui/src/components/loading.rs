//! Loading indicators and the splash overlay

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;
use smartquiz::splash::{portal_label, run_splash};
use smartquiz::{SplashState, ViewScope};

use crate::state::{AppState, GlooTimer, SignalCell};

/// Animated loading dots
#[component]
pub fn LoadingDots() -> impl IntoView {
    view! {
        <div class="flex items-center gap-1">
            <span class="w-2 h-2 bg-cyan-400 rounded-full dot-bounce-1"></span>
            <span class="w-2 h-2 bg-cyan-400 rounded-full dot-bounce-2"></span>
            <span class="w-2 h-2 bg-cyan-400 rounded-full dot-bounce-3"></span>
        </div>
    }
}

/// Spinner loading indicator
#[component]
pub fn LoadingSpinner(#[prop(default = "w-5 h-5")] size: &'static str) -> impl IntoView {
    view! {
        <svg
            class=format!("{} animate-spin text-cyan-500", size)
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
        >
            <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
            <path
                class="opacity-75"
                fill="currentColor"
                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
            ></path>
        </svg>
    }
}

/// Shown in the chat transcript while a reply is pending
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="flex items-start gap-3 message-appear">
            <div class="w-8 h-8 rounded-full bg-gradient-to-br from-violet-500 to-purple-600 flex items-center justify-center text-white text-sm font-medium shrink-0">
                "AI"
            </div>
            <div class="px-4 py-3 bg-slate-800 rounded-2xl rounded-tl-sm">
                <LoadingDots />
            </div>
        </div>
    }
}

/// Full-page splash shown once when the app mounts.
///
/// The bar and the teardown run on their own timers; leaving the page
/// early cancels both.
#[component]
pub fn SplashScreen() -> impl IntoView {
    let state = expect_context::<AppState>();
    let location = use_location();
    let splash = RwSignal::new(SplashState::default());

    let scope = ViewScope::new();
    on_cleanup({
        let scope = scope.clone();
        move || scope.cancel()
    });

    let config = state.config.splash;
    spawn_local(async move {
        run_splash(&scope, &SignalCell(splash), &GlooTimer, config).await;
    });

    let phase = Memo::new(move |_| splash.with(|s| s.label_phase()));
    let label = Memo::new(move |_| splash.with(|s| s.status_label()));
    let portal = move || portal_label(&location.pathname.get());

    view! {
        <Show when=move || splash.with(|s| s.is_visible())>
            <div class="fixed inset-0 z-[100] flex flex-col items-center justify-center bg-slate-950 animate-fade-in">
                <h1 class="text-4xl font-black tracking-tight text-gradient">"SmartQuiz"</h1>
                <p class="mt-2 text-xs uppercase tracking-[0.3em] text-slate-500">{portal}</p>

                <div class="mt-10 w-64 h-1.5 rounded-full bg-slate-800 overflow-hidden">
                    <div
                        class="h-full bg-gradient-to-r from-cyan-400 to-violet-500 transition-all duration-100"
                        style=move || format!("width: {}%", splash.with(|s| s.progress()))
                    ></div>
                </div>

                // Re-mounted per phase so the fade replays; the text tracks progress
                {move || {
                    phase.track();
                    view! { <p class="mt-4 text-sm text-slate-400 animate-fade-in">{label}</p> }
                }}
            </div>
        </Show>
    }
}
