//! Portal chooser

use leptos::prelude::*;

/// Landing page linking to the two portals
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center px-6">
            <h1 class="text-5xl font-black tracking-tight text-gradient">"SmartQuiz"</h1>
            <p class="mt-3 text-slate-400">"Assessments, generated and graded."</p>

            <div class="mt-12 grid gap-6 sm:grid-cols-2 w-full max-w-2xl">
                <PortalCard
                    href="/student/login"
                    title="Student Portal"
                    blurb="Sign in to take quizzes and track your progress."
                />
                <PortalCard
                    href="/results"
                    title="Faculty Portal"
                    blurb="Build quizzes with the AI architect and review results."
                />
            </div>
        </div>
    }
}

#[component]
fn PortalCard(href: &'static str, title: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            class="card p-6 rounded-2xl border border-slate-800 bg-slate-900/50 hover:border-cyan-500/60 transition-colors"
        >
            <h2 class="text-lg font-bold">{title}</h2>
            <p class="mt-2 text-sm text-slate-400">{blurb}</p>
        </a>
    }
}
