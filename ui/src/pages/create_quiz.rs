//! Quiz authoring screen

use leptos::prelude::*;

use crate::components::{AiChat, DashboardLayout};

#[component]
pub fn CreateQuizPage() -> impl IntoView {
    view! {
        <DashboardLayout title="Create Quiz">
            <div class="max-w-4xl mx-auto">
                <p class="mb-6 text-slate-400">
                    "Describe the assessment you need. Mention difficulty (EASY, MEDIUM, HARD) and topics."
                </p>
                <AiChat />
            </div>
        </DashboardLayout>
    }
}
