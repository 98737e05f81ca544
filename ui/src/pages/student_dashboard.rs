//! Student landing screen after sign-in

use leptos::prelude::*;
use smartquiz::types::StudentProfile;

use crate::components::DashboardLayout;
use crate::pages::results::Stat;
use crate::state::AppState;

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let session = state.session;

    view! {
        <DashboardLayout title="Dashboard">
            {move || match session.with(|s| s.as_ref().map(|s| s.student.clone())) {
                Some(student) => view! { <ProfileSummary student=student /> }.into_any(),
                None => view! {
                    <div class="py-24 text-center">
                        <p class="text-slate-400">"You are not signed in."</p>
                        <a href="/student/login" class="btn btn-primary mt-6 inline-block px-6 py-3">"Sign In"</a>
                    </div>
                }.into_any(),
            }}
        </DashboardLayout>
    }
}

#[component]
fn ProfileSummary(student: StudentProfile) -> impl IntoView {
    let or_dash = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

    view! {
        <section class="max-w-3xl">
            <h2 class="text-3xl font-black">{format!("Welcome, {}", student.name)}</h2>
            <p class="mt-1 text-sm text-slate-500">{student.email.clone()}</p>
            <dl class="mt-8 grid grid-cols-2 sm:grid-cols-4 gap-4 text-center">
                <Stat label="USN" value=or_dash(&student.usn) />
                <Stat label="Branch" value=or_dash(&student.branch) />
                <Stat label="Year" value=or_dash(&student.year) />
                <Stat label="Semester" value=or_dash(&student.semester) />
            </dl>
        </section>
    }
}
