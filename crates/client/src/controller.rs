//! Add-user form controller.
//!
//! Owns the form state, validates locally on submit and hands the result of
//! the create-user call to the notifier.

use std::sync::Arc;

use memberdb_core::account::{
    AccountService, AddUserForm, FieldErrors, FormField, FormStatus, FormValues, SubmitError,
    SubmitOutcome, SubmitRejected,
};

use crate::notifier::Notifier;

pub struct FormController {
    form: AddUserForm,
    accounts: Arc<dyn AccountService>,
    notifier: Notifier,
}

impl FormController {
    /// A blank form.
    pub fn new(accounts: Arc<dyn AccountService>, notifier: Notifier) -> Self {
        Self {
            form: AddUserForm::new(),
            accounts,
            notifier,
        }
    }

    pub fn values(&self) -> &FormValues {
        self.form.values()
    }

    pub fn errors(&self) -> &FieldErrors {
        self.form.errors()
    }

    pub fn status(&self) -> FormStatus {
        self.form.status()
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.update_field(field, value);
    }

    /// Validate and submit the form.
    ///
    /// Invalid forms are rejected without touching the network or the
    /// notifier. Otherwise exactly one notice is published for the outcome.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, SubmitRejected> {
        let request = match self.form.begin_submit() {
            Ok(request) => request,
            Err(rejected) => {
                tracing::debug!(reason = %rejected, "Form errors");
                return Err(rejected);
            }
        };

        tracing::info!(
            bu_email = %request.bu_email,
            class = %request.class,
            is_admin = request.is_admin,
            "Submitting new user"
        );

        let in_flight = InFlight {
            form: &mut self.form,
            settled: false,
        };
        let result = self.accounts.add_user(&request).await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "Add user failed");
        }

        let outcome = in_flight.settle(&result);
        self.notifier.notify_outcome(outcome);
        Ok(outcome)
    }

    /// Restore the blank form.
    pub fn reset_form(&mut self) {
        self.form.reset();
    }
}

/// Holds the form while the create-user call is pending.
///
/// Dropping it unsettled (the submit future was cancelled) leaves
/// `Submitting` so the form can be sent again with the same values.
struct InFlight<'a> {
    form: &'a mut AddUserForm,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(mut self, result: &Result<(), SubmitError>) -> SubmitOutcome {
        self.settled = true;
        self.form.finish_submit(result)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::debug!("Submit cancelled before the backend answered");
            self.form.abort_submit();
        }
    }
}
