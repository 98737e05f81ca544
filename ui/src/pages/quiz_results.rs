//! Single-quiz summary

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use smartquiz::results::initial_state;
use smartquiz::{Navigator, Route, ViewScope};

use crate::components::{DashboardLayout, LoadingSpinner};
use crate::pages::results::{load_results, Stat};
use crate::state::{use_router_navigator, AppState};

/// Statistics for the quiz named in the path
#[component]
pub fn QuizResultsPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let params = use_params_map();
    let navigator = use_router_navigator();
    let results = RwSignal::new(initial_state());

    let scope = ViewScope::new();
    on_cleanup({
        let scope = scope.clone();
        move || scope.cancel()
    });
    load_results(state, scope, results);

    let quiz_id = move || params.with(|p| p.get("id").unwrap_or_default());
    let quiz = move || {
        let id = quiz_id();
        results.with(|r| r.data().iter().find(|q| q.id == id).cloned())
    };

    view! {
        <DashboardLayout title="Quiz Results">
            <button class="btn btn-ghost text-sm mb-6" on:click=move |_| navigator.navigate(Route::Results)>
                "← All results"
            </button>
            {move || {
                if results.with(|r| r.is_pending()) {
                    return view! {
                        <div class="flex justify-center py-24">
                            <LoadingSpinner size="w-10 h-10" />
                        </div>
                    }.into_any();
                }
                match quiz() {
                    Some(quiz) => view! {
                        <section class="max-w-3xl">
                            <h2 class="text-3xl font-black">{quiz.title.clone()}</h2>
                            <p class="mt-1 text-sm text-slate-500">
                                {format!("Created {} · {}", quiz.created_label(), quiz.duration_label())}
                            </p>
                            <dl class="mt-8 grid grid-cols-3 gap-4 text-center">
                                <Stat label="Avg Score" value=quiz.average_score_label() />
                                <Stat label="Attempts" value=quiz.attempt_count.to_string() />
                                <Stat label="Submitted" value=quiz.submitted_count.to_string() />
                            </dl>
                        </section>
                    }.into_any(),
                    None => view! {
                        <p class="text-slate-400">{format!("No quiz found with id {}", quiz_id())}</p>
                    }.into_any(),
                }
            }}
        </DashboardLayout>
    }
}
