//! Faculty results board

use leptos::prelude::*;
use leptos::task::spawn_local;
use smartquiz::results::{fetch_results, initial_state, ResultsBody, ResultsState};
use smartquiz::types::QuizSummary;
use smartquiz::{Lifecycle, ListState, Navigator, Notifier, Route, ViewScope};

use crate::components::{DashboardLayout, LoadingSpinner};
use crate::state::{use_router_navigator, AppState, SignalCell};

/// Fetch the quiz snapshot into `results` under `scope`.
pub(crate) fn load_results(state: AppState, scope: ViewScope, results: RwSignal<ResultsState>) {
    spawn_local(async move {
        let notifier = state.notifier();
        match state.gateway() {
            Ok(gateway) => {
                fetch_results(&scope, &SignalCell(results), &gateway, &notifier).await;
            }
            Err(err) => {
                tracing::error!(error = %err, "gateway unavailable");
                notifier.error(smartquiz::results::SYNC_FAILED);
                results.try_set(Lifecycle::new(ListState::new()));
            }
        }
    });
}

/// Every quiz with its attempt statistics
#[component]
pub fn ResultsPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let results = RwSignal::new(initial_state());

    let scope = ViewScope::new();
    on_cleanup({
        let scope = scope.clone();
        move || scope.cancel()
    });
    load_results(state, scope, results);

    view! {
        <DashboardLayout title="Results">
            {move || results.with(|state| match ResultsBody::from_state(state) {
                ResultsBody::Loading => view! {
                    <div class="flex justify-center py-24">
                        <LoadingSpinner size="w-10 h-10" />
                    </div>
                }.into_any(),
                ResultsBody::Empty => view! { <EmptyResults /> }.into_any(),
                ResultsBody::Grid(cards) => view! {
                    <div class="grid gap-5 sm:grid-cols-2 xl:grid-cols-3">
                        {cards.iter().cloned().enumerate().map(|(i, quiz)| view! {
                            <div class=format!("animate-fade-in-up stagger-{}", (i % 5) + 1)>
                                <QuizCard quiz=quiz />
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                }.into_any(),
            })}
        </DashboardLayout>
    }
}

#[component]
fn EmptyResults() -> impl IntoView {
    let navigator = use_router_navigator();

    view! {
        <div class="flex flex-col items-center justify-center py-24 text-center">
            <h2 class="text-2xl font-bold">"No quizzes yet"</h2>
            <p class="mt-2 text-slate-400">"Create your first quiz to start collecting results."</p>
            <button
                class="btn btn-primary mt-8 px-6 py-3"
                on:click=move |_| navigator.navigate(Route::CreateQuiz)
            >
                "Create Quiz"
            </button>
        </div>
    }
}

#[component]
fn QuizCard(quiz: QuizSummary) -> impl IntoView {
    let navigator = use_router_navigator();
    let route = quiz.results_route();

    view! {
        <article
            class="card h-full flex flex-col p-5 rounded-2xl border border-slate-800 bg-slate-900/50 cursor-pointer hover:border-cyan-500/50 transition-colors"
            on:click=move |_| navigator.navigate(route.clone())
        >
            <div class="flex items-start justify-between gap-3">
                <h3 class="font-bold leading-snug">{quiz.title.clone()}</h3>
                <span class="shrink-0 text-xs text-slate-500">{quiz.created_label()}</span>
            </div>
            {quiz.description.clone().map(|description| view! {
                <p class="mt-2 text-sm text-slate-400 line-clamp-2">{description}</p>
            })}

            <dl class="mt-5 grid grid-cols-3 gap-3 text-center">
                <Stat label="Avg Score" value=quiz.average_score_label() />
                <Stat label="Attempts" value=quiz.attempt_count.to_string() />
                <Stat label="Submitted" value=quiz.submitted_count.to_string() />
            </dl>

            <div class="mt-auto pt-5 flex items-center justify-between">
                <span class="text-xs font-semibold tracking-widest text-slate-500">{quiz.duration_label()}</span>
                <span class="text-sm font-medium text-cyan-400">"View Results"</span>
            </div>
        </article>
    }
}

#[component]
pub(crate) fn Stat(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="rounded-lg bg-slate-950/60 py-2">
            <dt class="text-[10px] uppercase tracking-widest text-slate-500">{label}</dt>
            <dd class="mt-1 font-bold">{value}</dd>
        </div>
    }
}
