//! Login and registration flows
//!
//! These tests drive the credential form against mock collaborators and
//! check what reaches storage, the notification sink and the router.

mod common;

use common::mocks::{
    sample_session, CountingStore, MockGateway, RecordingNavigator, RecordingNotifier,
};
use smartquiz::auth::form::{
    self, LOGIN_FAILED, LOGIN_SUCCESS, PASSWORD_MISMATCH, REGISTER_FAILED, REGISTER_SUCCESS,
    SESSION_SAVE_FAILED,
};
use smartquiz::auth::session::{KeyValueStore, PROFILE_KEY, TOKEN_KEY};
use smartquiz::auth::{CredentialForm, LoginDraft, LoginField, RegisterField, SessionRepository};
use smartquiz::{Outcome, Route, Severity, ViewScope};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn filled_login() -> Rc<RefCell<CredentialForm>> {
    common::init_tracing();
    let mut form = CredentialForm::default();
    form.set_login_field(LoginField::Email, "meera@college.edu");
    form.set_login_field(LoginField::Password, "correct horse");
    Rc::new(RefCell::new(form))
}

fn filled_register(confirm: &str) -> Rc<RefCell<CredentialForm>> {
    let mut form = CredentialForm::default();
    form.set_register_field(RegisterField::Name, "Meera Nair");
    form.set_register_field(RegisterField::Email, "meera@college.edu");
    form.set_register_field(RegisterField::Usn, "1XX21CS045");
    form.set_register_field(RegisterField::Branch, "CSE");
    form.set_register_field(RegisterField::Year, "3");
    form.set_register_field(RegisterField::Semester, "5");
    form.set_register_field(RegisterField::Password, "s3cret!");
    form.set_register_field(RegisterField::ConfirmPassword, confirm);
    Rc::new(RefCell::new(form))
}

#[tokio::test]
async fn test_successful_login_writes_session_once_and_navigates_once() {
    let form = filled_login();
    let gateway = MockGateway::new().with_session(sample_session());
    let session = SessionRepository::new(CountingStore::default());
    let notifier = RecordingNotifier::default();
    let navigator = RecordingNavigator::default();

    let outcome = form::submit_login(
        &ViewScope::new(),
        &form,
        &gateway,
        &session,
        &notifier,
        &navigator,
    )
    .await;

    assert_eq!(outcome, Outcome::Completed(sample_session()));
    assert_eq!(gateway.login_calls.get(), 1);
    assert_eq!(session.store().writes_to(TOKEN_KEY), 1);
    assert_eq!(session.store().writes_to(PROFILE_KEY), 1);
    assert_eq!(session.store().writes.borrow().len(), 2);
    assert_eq!(session.load().unwrap(), Some(sample_session()));
    assert_eq!(
        notifier.events.borrow().as_slice(),
        &[(Severity::Success, LOGIN_SUCCESS.to_string())]
    );
    assert_eq!(
        navigator.routes.borrow().as_slice(),
        &[Route::StudentDashboard]
    );

    let form = form.borrow();
    assert!(!form.is_loading());
    assert_eq!(form.login, LoginDraft::default());
}

#[tokio::test]
async fn test_failed_login_keeps_draft_and_clears_loading() {
    let form = filled_login();
    let before = form.borrow().login.clone();
    let gateway = MockGateway::new().failing(401, Some("Invalid email or password"));
    let session = SessionRepository::new(CountingStore::default());
    let notifier = RecordingNotifier::default();
    let navigator = RecordingNavigator::default();

    let outcome = form::submit_login(
        &ViewScope::new(),
        &form,
        &gateway,
        &session,
        &notifier,
        &navigator,
    )
    .await;

    assert_eq!(
        outcome,
        Outcome::Failed("Invalid email or password".to_string())
    );
    assert_eq!(form.borrow().login, before);
    assert!(!form.borrow().is_loading());
    assert_eq!(notifier.count(), 1);
    assert_eq!(
        notifier.last(),
        Some((Severity::Error, "Invalid email or password".to_string()))
    );
    assert!(session.store().writes.borrow().is_empty());
    assert!(navigator.routes.borrow().is_empty());
}

#[tokio::test]
async fn test_failed_login_without_message_uses_fallback() {
    let form = filled_login();
    let gateway = MockGateway::new().failing(500, None);
    let session = SessionRepository::new(CountingStore::default());
    let notifier = RecordingNotifier::default();

    form::submit_login(
        &ViewScope::new(),
        &form,
        &gateway,
        &session,
        &notifier,
        &RecordingNavigator::default(),
    )
    .await;

    assert_eq!(
        notifier.last(),
        Some((Severity::Error, LOGIN_FAILED.to_string()))
    );
    assert_eq!(form.borrow().request().error(), Some(LOGIN_FAILED));
}

#[tokio::test]
async fn test_password_mismatch_never_reaches_gateway() {
    let form = filled_register("something else");
    let before = form.borrow().register.clone();
    let gateway = MockGateway::new().with_session(sample_session());
    let session = SessionRepository::new(CountingStore::default());
    let notifier = RecordingNotifier::default();
    let navigator = RecordingNavigator::default();

    let outcome = form::submit_register(
        &ViewScope::new(),
        &form,
        &gateway,
        &session,
        &notifier,
        &navigator,
    )
    .await;

    assert_eq!(outcome, Outcome::Failed(PASSWORD_MISMATCH.to_string()));
    assert_eq!(gateway.register_calls.get(), 0);
    assert_eq!(notifier.count(), 1);
    assert_eq!(
        notifier.last(),
        Some((Severity::Error, PASSWORD_MISMATCH.to_string()))
    );
    assert_eq!(form.borrow().register, before);
    assert!(!form.borrow().is_loading());
    assert!(navigator.routes.borrow().is_empty());
}

#[tokio::test]
async fn test_successful_registration_sends_profile_fields() {
    let form = filled_register("s3cret!");
    let gateway = MockGateway::new().with_session(sample_session());
    let session = SessionRepository::new(CountingStore::default());
    let notifier = RecordingNotifier::default();
    let navigator = RecordingNavigator::default();

    let outcome = form::submit_register(
        &ViewScope::new(),
        &form,
        &gateway,
        &session,
        &notifier,
        &navigator,
    )
    .await;

    assert!(outcome.is_completed());
    let sent = gateway.last_register.borrow().clone().unwrap();
    assert_eq!(sent.usn, "1XX21CS045");
    assert_eq!(sent.password, "s3cret!");
    assert_eq!(
        notifier.last(),
        Some((Severity::Success, REGISTER_SUCCESS.to_string()))
    );
    assert_eq!(
        navigator.routes.borrow().as_slice(),
        &[Route::StudentDashboard]
    );
    assert_eq!(session.store().writes.borrow().len(), 2);
}

#[tokio::test]
async fn test_failed_registration_uses_register_fallback() {
    let form = filled_register("s3cret!");
    let gateway = MockGateway::new().failing(400, None);
    let notifier = RecordingNotifier::default();

    form::submit_register(
        &ViewScope::new(),
        &form,
        &gateway,
        &SessionRepository::new(CountingStore::default()),
        &notifier,
        &RecordingNavigator::default(),
    )
    .await;

    assert_eq!(
        notifier.last(),
        Some((Severity::Error, REGISTER_FAILED.to_string()))
    );
    assert_eq!(form.borrow().register.usn, "1XX21CS045");
}

#[tokio::test]
async fn test_storage_failure_does_not_navigate() {
    let form = filled_login();
    let gateway = MockGateway::new().with_session(sample_session());
    let session = SessionRepository::new(CountingStore::failing());
    let notifier = RecordingNotifier::default();
    let navigator = RecordingNavigator::default();

    let outcome = form::submit_login(
        &ViewScope::new(),
        &form,
        &gateway,
        &session,
        &notifier,
        &navigator,
    )
    .await;

    assert_eq!(outcome, Outcome::Failed(SESSION_SAVE_FAILED.to_string()));
    assert_eq!(
        notifier.last(),
        Some((Severity::Error, SESSION_SAVE_FAILED.to_string()))
    );
    assert!(navigator.routes.borrow().is_empty());
}

#[tokio::test]
async fn test_partial_save_does_not_pair_new_token_with_old_profile() {
    let form = filled_login();
    let session = SessionRepository::new(CountingStore::default());
    let mut previous = sample_session();
    previous.token = "tok-previous".to_string();
    previous.student.name = "Alice Rao".to_string();
    session.save(&previous).unwrap();

    session.store().fail_writes_to(PROFILE_KEY);
    let gateway = MockGateway::new().with_session(sample_session());
    let notifier = RecordingNotifier::default();
    let navigator = RecordingNavigator::default();

    let outcome = form::submit_login(
        &ViewScope::new(),
        &form,
        &gateway,
        &session,
        &notifier,
        &navigator,
    )
    .await;

    assert_eq!(outcome, Outcome::Failed(SESSION_SAVE_FAILED.to_string()));
    assert_eq!(session.load().unwrap(), None);
    assert_eq!(session.store().get(TOKEN_KEY).unwrap(), None);
    assert_eq!(session.store().get(PROFILE_KEY).unwrap(), None);
    assert!(navigator.routes.borrow().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_second_submit_while_pending_is_ignored() {
    let form = filled_login();
    let gateway = MockGateway::new()
        .with_session(sample_session())
        .with_latency(Duration::from_millis(200));
    let session = SessionRepository::new(CountingStore::default());
    let notifier = RecordingNotifier::default();
    let navigator = RecordingNavigator::default();
    let scope = ViewScope::new();

    let first = form::submit_login(&scope, &form, &gateway, &session, &notifier, &navigator);
    let second = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(form.borrow().is_loading());
        form::submit_login(&scope, &form, &gateway, &session, &notifier, &navigator).await
    };

    let (first, second) = tokio::join!(first, second);

    assert!(first.is_completed());
    assert_eq!(second, Outcome::Ignored);
    assert_eq!(gateway.login_calls.get(), 1);
    assert_eq!(navigator.routes.borrow().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_teardown_while_pending_drops_result() {
    let form = filled_login();
    let gateway = MockGateway::new()
        .with_session(sample_session())
        .with_latency(Duration::from_millis(300));
    let session = SessionRepository::new(CountingStore::default());
    let notifier = RecordingNotifier::default();
    let navigator = RecordingNavigator::default();
    let scope = ViewScope::new();

    let submit = form::submit_login(&scope, &form, &gateway, &session, &notifier, &navigator);
    let teardown = async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        scope.cancel();
    };

    let (outcome, ()) = tokio::join!(submit, teardown);

    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(notifier.count(), 0);
    assert!(session.store().writes.borrow().is_empty());
    assert!(navigator.routes.borrow().is_empty());
}
