//! Student login/registration page

use leptos::prelude::*;
use leptos::task::spawn_local;
use smartquiz::auth::form::{submit_login, submit_register};
use smartquiz::auth::{AuthTab, CredentialForm, LoginField, RegisterField};
use smartquiz::{Notifier, Outcome, StateCell, ViewScope};

use crate::components::LoadingSpinner;
use crate::state::{use_router_navigator, AppState, SignalCell};

/// Login/Register page
#[component]
pub fn LoginPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigator = use_router_navigator();
    let form = RwSignal::new(CredentialForm::default());

    let scope = ViewScope::new();
    on_cleanup({
        let scope = scope.clone();
        move || scope.cancel()
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let state = state.clone();
        let scope = scope.clone();
        let navigator = navigator.clone();

        spawn_local(async move {
            let notifier = state.notifier();
            let gateway = match state.gateway() {
                Ok(gateway) => gateway,
                Err(err) => {
                    tracing::error!(error = %err, "gateway unavailable");
                    notifier.error(&err.to_string());
                    return;
                }
            };
            let session = AppState::session_repository();
            let cell = SignalCell(form);

            let outcome = match cell.read(|f| f.tab) {
                Some(AuthTab::Login) => {
                    submit_login(&scope, &cell, &gateway, &session, &notifier, &navigator).await
                }
                Some(AuthTab::Register) => {
                    submit_register(&scope, &cell, &gateway, &session, &notifier, &navigator).await
                }
                None => return,
            };

            if let Outcome::Completed(auth) = outcome {
                state.session.set(Some(auth));
            }
        });
    };

    let is_register = move || form.with(|f| f.tab == AuthTab::Register);
    let is_loading = move || form.with(|f| f.is_loading());

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="auth-card w-full max-w-md p-8 rounded-2xl border border-slate-800 bg-slate-900/60">
                <div class="auth-header text-center mb-8">
                    <p class="text-xs uppercase tracking-[0.3em] text-slate-500">"Student Portal"</p>
                    <h1 class="auth-title text-3xl font-black text-gradient mt-2">
                        {move || if is_register() { "Create Account" } else { "Welcome Back" }}
                    </h1>
                </div>

                <div class="grid grid-cols-2 gap-2 mb-6 p-1 rounded-lg bg-slate-950">
                    <TabButton form=form tab=AuthTab::Login label="Sign In" />
                    <TabButton form=form tab=AuthTab::Register label="Register" />
                </div>

                <form on:submit=on_submit class="auth-form space-y-4">
                    <Show
                        when=is_register
                        fallback=move || view! {
                            <LoginInput form=form field=LoginField::Email label="Email" input_type="email" placeholder="you@college.edu" />
                            <LoginInput form=form field=LoginField::Password label="Password" input_type="password" placeholder="••••••••" />
                        }
                    >
                        <RegisterInput form=form field=RegisterField::Name label="Full Name" placeholder="Your name" />
                        <RegisterInput form=form field=RegisterField::Email label="Email" input_type="email" placeholder="you@college.edu" />
                        <RegisterInput form=form field=RegisterField::Usn label="USN" placeholder="1XX21CS001" />
                        <div class="grid grid-cols-3 gap-3">
                            <RegisterInput form=form field=RegisterField::Branch label="Branch" placeholder="CSE" />
                            <RegisterInput form=form field=RegisterField::Year label="Year" placeholder="3" />
                            <RegisterInput form=form field=RegisterField::Semester label="Semester" placeholder="5" />
                        </div>
                        <RegisterInput form=form field=RegisterField::Password label="Password" input_type="password" placeholder="••••••••" />
                        <RegisterInput form=form field=RegisterField::ConfirmPassword label="Confirm Password" input_type="password" placeholder="••••••••" />
                    </Show>

                    <label class="flex items-center gap-2 text-sm text-slate-400 cursor-pointer select-none">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.show_password)
                            on:change=move |_| form.update(|f| f.toggle_password_visibility())
                        />
                        "Show password"
                    </label>

                    <button
                        type="submit"
                        disabled=is_loading
                        class="btn btn-primary w-full py-3 flex items-center justify-center gap-2"
                    >
                        <Show when=is_loading>
                            <LoadingSpinner />
                        </Show>
                        {move || match (is_loading(), is_register()) {
                            (true, _) => "Processing...",
                            (false, true) => "Create Account",
                            (false, false) => "Sign In",
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[component]
fn TabButton(form: RwSignal<CredentialForm>, tab: AuthTab, label: &'static str) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || format!(
                "py-2 rounded-md text-sm font-semibold transition-colors {}",
                if form.with(|f| f.tab == tab) { "bg-slate-800 text-white" } else { "text-slate-500" }
            )
            on:click=move |_| form.update(|f| f.select_tab(tab))
        >
            {label}
        </button>
    }
}

/// `password` inputs follow the form's visibility toggle.
fn resolve_input_type(form: RwSignal<CredentialForm>, input_type: &'static str) -> &'static str {
    if input_type == "password" {
        form.with(|f| f.password_input_type())
    } else {
        input_type
    }
}

#[component]
fn LoginInput(
    form: RwSignal<CredentialForm>,
    field: LoginField,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="auth-input-group">
            <label class="auth-label block text-xs font-semibold text-slate-400 mb-1">{label}</label>
            <input
                type=move || resolve_input_type(form, input_type)
                prop:value=move || form.with(|f| f.login.get(field).to_string())
                on:input=move |ev| form.update(|f| f.set_login_field(field, event_target_value(&ev)))
                placeholder=placeholder
                required=true
                class="input w-full"
            />
        </div>
    }
}

#[component]
fn RegisterInput(
    form: RwSignal<CredentialForm>,
    field: RegisterField,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="auth-input-group">
            <label class="auth-label block text-xs font-semibold text-slate-400 mb-1">{label}</label>
            <input
                type=move || resolve_input_type(form, input_type)
                prop:value=move || form.with(|f| f.register.get(field).to_string())
                on:input=move |ev| form.update(|f| f.set_register_field(field, event_target_value(&ev)))
                placeholder=placeholder
                required=true
                class="input w-full"
            />
        </div>
    }
}
