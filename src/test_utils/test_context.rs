//! Helpers for running isolated webserver instances
use crate::{
    app_state::{AppState, AppStateBuilder},
    router::setup_app_router,
    setups::test::{TestSetup, TestVerificationEmailSender},
    test_utils::test_mailgun_settings,
};
use axum::Router;

/// A reference to a running mailer server in an isolated test environment
#[derive(Debug)]
pub(crate) struct TestContext {
    app: Router,
    app_state: AppState<TestSetup>,
}

impl TestContext {
    /// Create a new test context
    pub(crate) fn new() -> Self {
        Self::new_with_state(|builder| builder)
    }

    pub(crate) fn new_with_state<F>(f: F) -> Self
    where
        F: FnOnce(AppStateBuilder<TestSetup>) -> AppStateBuilder<TestSetup>,
    {
        let builder = AppStateBuilder::default()
            .with_mailgun_settings(test_mailgun_settings())
            .with_verification_email_sender(TestVerificationEmailSender::default());

        let app_state = f(builder)
            .finalize()
            .expect("all test app state fields set");

        let app = setup_app_router(app_state.clone());

        Self { app, app_state }
    }

    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    pub(crate) fn verification_email_sender(&self) -> &TestVerificationEmailSender {
        &self.app_state.verification_email_sender
    }
}
