//! SmartQuiz portals - Leptos frontend
//!
//! Student sign-in and dashboard, the faculty results board and the
//! quiz-generation chat, all driven by the `smartquiz` client core.

pub mod components;
pub mod pages;
pub mod state;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use smartquiz::ClientConfig;

use components::{SplashScreen, ToastHost};
use pages::{
    create_quiz::CreateQuizPage, home::HomePage, login::LoginPage, not_found::NotFoundPage,
    quiz_results::QuizResultsPage, results::ResultsPage, student_dashboard::StudentDashboardPage,
};
use state::AppState;

/// Settings baked in at build time; the browser has no process environment.
fn client_config() -> ClientConfig {
    let config = ClientConfig::from_lookup(|key| match key {
        "SMARTQUIZ_API_BASE" => option_env!("SMARTQUIZ_API_BASE").map(str::to_string),
        "SMARTQUIZ_ACK_DELAY_MS" => option_env!("SMARTQUIZ_ACK_DELAY_MS").map(str::to_string),
        _ => None,
    });
    match config {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "invalid build-time configuration, using defaults");
            ClientConfig::default()
        }
    }
}

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppState::new(client_config()));

    view! {
        <Title text="SmartQuiz" />
        <Router>
            <SplashScreen />
            <ToastHost />
            <main class="min-h-screen bg-slate-950 text-slate-100">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/student/login") view=LoginPage />
                    <Route path=path!("/student/dashboard") view=StudentDashboardPage />
                    <Route path=path!("/results") view=ResultsPage />
                    <Route path=path!("/create-quiz") view=CreateQuizPage />
                    <Route path=path!("/quiz/:id/results") view=QuizResultsPage />
                </Routes>
            </main>
        </Router>
    }
}
