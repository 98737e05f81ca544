//! 404 page

use leptos::prelude::*;
use smartquiz::{Navigator, Route};

use crate::state::use_router_navigator;

/// Fallback for unknown paths
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigator = use_router_navigator();
    let home = navigator.clone();

    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-7xl font-black text-slate-600 mb-4">"404"</h1>
                <p class="text-xl text-slate-400 mb-8">"This page drifted out of the syllabus."</p>
                <div class="flex gap-4 justify-center">
                    <button
                        on:click=move |_| home.navigate(Route::Home)
                        class="btn btn-primary px-6 py-3"
                    >
                        "Return Home"
                    </button>
                    <button
                        on:click=move |_| navigator.navigate(Route::Back)
                        class="btn btn-ghost px-6 py-3"
                    >
                        "Go Back"
                    </button>
                </div>
            </div>
        </div>
    }
}
