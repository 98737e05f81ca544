use crate::auth::session::{KeyValueStore, SessionRepository};
use crate::gateway::QuizGateway;
use crate::lifecycle::{run_request, Lens, Lifecycle, Outcome, StateCell};
use crate::notify::Notifier;
use crate::routes::{Navigator, Route};
use crate::scope::ViewScope;
use crate::types::{AuthSession, RegisterRequest};

pub const LOGIN_SUCCESS: &str = "Login Successful: Welcome back!";
pub const LOGIN_FAILED: &str = "Authentication Protocol Failed";
pub const REGISTER_SUCCESS: &str = "Account Created: Welcome to the Student Portal";
pub const REGISTER_FAILED: &str = "Update Failed: Please check your details";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const SESSION_SAVE_FAILED: &str = "Signed in, but the session could not be saved on this device";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

impl LoginDraft {
    pub fn get(&self, field: LoginField) -> &str {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    /// Replace one field, leaving the rest as they are.
    pub fn set(&mut self, field: LoginField, value: impl Into<String>) {
        let slot = match field {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        };
        *slot = value.into();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    Email,
    Password,
    ConfirmPassword,
    Name,
    Usn,
    Branch,
    Year,
    Semester,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterDraft {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub usn: String,
    pub branch: String,
    pub year: String,
    pub semester: String,
}

impl RegisterDraft {
    pub fn get(&self, field: RegisterField) -> &str {
        match field {
            RegisterField::Email => &self.email,
            RegisterField::Password => &self.password,
            RegisterField::ConfirmPassword => &self.confirm_password,
            RegisterField::Name => &self.name,
            RegisterField::Usn => &self.usn,
            RegisterField::Branch => &self.branch,
            RegisterField::Year => &self.year,
            RegisterField::Semester => &self.semester,
        }
    }

    /// Replace one field, leaving the rest as they are.
    pub fn set(&mut self, field: RegisterField, value: impl Into<String>) {
        let slot = match field {
            RegisterField::Email => &mut self.email,
            RegisterField::Password => &mut self.password,
            RegisterField::ConfirmPassword => &mut self.confirm_password,
            RegisterField::Name => &mut self.name,
            RegisterField::Usn => &mut self.usn,
            RegisterField::Branch => &mut self.branch,
            RegisterField::Year => &mut self.year,
            RegisterField::Semester => &mut self.semester,
        };
        *slot = value.into();
    }

    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }

    /// Gateway payload; the confirmation never leaves the client.
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            name: self.name.clone(),
            usn: self.usn.clone(),
            branch: self.branch.clone(),
            year: self.year.clone(),
            semester: self.semester.clone(),
        }
    }
}

/// State of the student login/registration screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CredentialForm {
    pub login: LoginDraft,
    pub register: RegisterDraft,
    pub show_password: bool,
    pub tab: AuthTab,
    request: Lifecycle<Option<AuthSession>>,
}

impl CredentialForm {
    pub fn set_login_field(&mut self, field: LoginField, value: impl Into<String>) {
        self.login.set(field, value);
    }

    pub fn set_register_field(&mut self, field: RegisterField, value: impl Into<String>) {
        self.register.set(field, value);
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn select_tab(&mut self, tab: AuthTab) {
        self.tab = tab;
    }

    pub fn is_loading(&self) -> bool {
        self.request.is_pending()
    }

    pub fn request(&self) -> &Lifecycle<Option<AuthSession>> {
        &self.request
    }

    /// Input type for password fields, driven by the visibility toggle.
    pub fn password_input_type(&self) -> &'static str {
        if self.show_password {
            "text"
        } else {
            "password"
        }
    }
}

fn request_of(form: &CredentialForm) -> &Lifecycle<Option<AuthSession>> {
    &form.request
}

fn request_of_mut(form: &mut CredentialForm) -> &mut Lifecycle<Option<AuthSession>> {
    &mut form.request
}

/// Submit the login draft.
///
/// On success the session is persisted, a success notification is shown and
/// the user is sent to the student dashboard. On failure the draft is kept
/// so it can be corrected and resubmitted.
pub async fn submit_login<C, G, S, N, V>(
    scope: &ViewScope,
    form: &C,
    gateway: &G,
    session: &SessionRepository<S>,
    notifier: &N,
    navigator: &V,
) -> Outcome<AuthSession>
where
    C: StateCell<CredentialForm>,
    G: QuizGateway + ?Sized,
    S: KeyValueStore,
    N: Notifier + ?Sized,
    V: Navigator + ?Sized,
{
    let Some((draft, busy)) = form.read(|f| (f.login.clone(), f.is_loading())) else {
        return Outcome::Cancelled;
    };
    if busy {
        return Outcome::Ignored;
    }

    let lens = Lens::new(form, request_of, request_of_mut);
    let outcome = run_request(scope, &lens, notifier, LOGIN_FAILED, async {
        gateway.login(&draft.email, &draft.password).await
    })
    .await;

    complete_sign_in(outcome, form, session, notifier, navigator, LOGIN_SUCCESS)
}

/// Submit the registration draft.
///
/// Mismatched passwords are rejected locally with one notification and no
/// gateway call.
pub async fn submit_register<C, G, S, N, V>(
    scope: &ViewScope,
    form: &C,
    gateway: &G,
    session: &SessionRepository<S>,
    notifier: &N,
    navigator: &V,
) -> Outcome<AuthSession>
where
    C: StateCell<CredentialForm>,
    G: QuizGateway + ?Sized,
    S: KeyValueStore,
    N: Notifier + ?Sized,
    V: Navigator + ?Sized,
{
    let Some((draft, busy)) = form.read(|f| (f.register.clone(), f.is_loading())) else {
        return Outcome::Cancelled;
    };
    if !draft.passwords_match() {
        notifier.error(PASSWORD_MISMATCH);
        return Outcome::Failed(PASSWORD_MISMATCH.to_string());
    }
    if busy {
        return Outcome::Ignored;
    }

    let request = draft.to_request();
    let lens = Lens::new(form, request_of, request_of_mut);
    let outcome = run_request(scope, &lens, notifier, REGISTER_FAILED, async {
        gateway.register(&request).await
    })
    .await;

    complete_sign_in(outcome, form, session, notifier, navigator, REGISTER_SUCCESS)
}

fn complete_sign_in<C, S, N, V>(
    outcome: Outcome<AuthSession>,
    form: &C,
    session: &SessionRepository<S>,
    notifier: &N,
    navigator: &V,
    success_message: &str,
) -> Outcome<AuthSession>
where
    C: StateCell<CredentialForm>,
    S: KeyValueStore,
    N: Notifier + ?Sized,
    V: Navigator + ?Sized,
{
    let auth = match outcome {
        Outcome::Completed(auth) => auth,
        other => return other,
    };

    if let Err(err) = session.save(&auth) {
        tracing::error!(error = %err, "failed to persist session");
        notifier.error(SESSION_SAVE_FAILED);
        return Outcome::Failed(SESSION_SAVE_FAILED.to_string());
    }

    notifier.success(success_message);
    form.update(|f| {
        f.login = LoginDraft::default();
        f.register = RegisterDraft::default();
    });
    navigator.navigate(Route::StudentDashboard);
    Outcome::Completed(auth)
}
