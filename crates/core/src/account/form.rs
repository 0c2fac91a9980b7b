//! Add-user form state.
//!
//! The form holds the raw string values exactly as they were entered, the
//! inline validation messages and the lifecycle status:
//!
//! ```text
//! Pristine --update--> Edited --submit--> Invalid   (no network call)
//!                                     \-> Submitting --ok--> Pristine (reset)
//!                                                    \-err-> Edited   (values kept)
//! ```

use serde::{Deserialize, Serialize};

use super::{
    validate_field, validate_form, FieldErrors, NewUserRequest, SubmitError, SubmitOutcome,
    SubmitRejected,
};

/// The fields of the add-user form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    First,
    Last,
    BuEmail,
    Class,
    IsAdmin,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        Self::First,
        Self::Last,
        Self::BuEmail,
        Self::Class,
        Self::IsAdmin,
    ];

    /// Field name as used in the request payload.
    pub fn name(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Last => "last",
            Self::BuEmail => "bu_email",
            Self::Class => "class",
            Self::IsAdmin => "is_admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::First => "First Name",
            Self::Last => "Last Name",
            Self::BuEmail => "BU Email",
            Self::Class => "Pledge Class",
            Self::IsAdmin => "Is Admin",
        }
    }

    /// Hint shown in an empty input. Selection fields have none.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::First => Some("First name"),
            Self::Last => Some("Last name"),
            Self::BuEmail => Some("Enter email"),
            Self::Class | Self::IsAdmin => None,
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Raw form values as the user edits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub first: String,
    pub last: String,
    pub bu_email: String,
    pub class: String,
    pub is_admin: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            first: String::new(),
            last: String::new(),
            bu_email: String::new(),
            class: String::new(),
            is_admin: "false".to_string(),
        }
    }
}

impl FormValues {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::First => &self.first,
            FormField::Last => &self.last,
            FormField::BuEmail => &self.bu_email,
            FormField::Class => &self.class,
            FormField::IsAdmin => &self.is_admin,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::First => &mut self.first,
            FormField::Last => &mut self.last,
            FormField::BuEmail => &mut self.bu_email,
            FormField::Class => &mut self.class,
            FormField::IsAdmin => &mut self.is_admin,
        };
        *slot = value;
    }
}

/// Lifecycle of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    /// Initial values, nothing touched since the last reset.
    Pristine,
    /// At least one field changed, or the last submission failed.
    Edited,
    /// The last submit attempt failed local validation.
    Invalid,
    /// A create-user call is outstanding.
    Submitting,
}

/// The add-user form.
#[derive(Debug, Clone)]
pub struct AddUserForm {
    values: FormValues,
    errors: FieldErrors,
    status: FormStatus,
    /// Set after the first failed validation; edits re-validate from then on.
    revalidate: bool,
}

impl Default for AddUserForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AddUserForm {
    pub fn new() -> Self {
        Self {
            values: FormValues::default(),
            errors: FieldErrors::new(),
            status: FormStatus::Pristine,
            revalidate: false,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Sets one field.
    ///
    /// After a failed validation the edited field is checked again so its
    /// message tracks the new value.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.values.set(field, value.into());

        if self.revalidate {
            self.errors
                .record(field, validate_field(field, &self.values));
        }

        if self.status != FormStatus::Submitting {
            self.status = FormStatus::Edited;
        }
    }

    /// Validates the form and, if valid, moves to `Submitting`.
    ///
    /// Returns the request to send. Nothing is sent when this fails.
    pub fn begin_submit(&mut self) -> Result<NewUserRequest, SubmitRejected> {
        if self.status == FormStatus::Submitting {
            return Err(SubmitRejected::InFlight);
        }

        match validate_form(&self.values) {
            Ok(request) => {
                self.errors.clear();
                self.status = FormStatus::Submitting;
                Ok(request)
            }
            Err(errors) => {
                self.errors = errors.clone();
                self.status = FormStatus::Invalid;
                self.revalidate = true;
                Err(SubmitRejected::Invalid(errors))
            }
        }
    }

    /// Applies the result of the create-user call.
    ///
    /// Success resets the form; any failure keeps the entered values.
    pub fn finish_submit(&mut self, result: &Result<(), SubmitError>) -> SubmitOutcome {
        let outcome = SubmitOutcome::from_result(result);
        if outcome.resets_form() {
            self.reset();
        } else {
            self.status = FormStatus::Edited;
        }
        outcome
    }

    /// Leaves `Submitting` without an outcome, keeping the entered values.
    ///
    /// Used when the create-user call is abandoned before it answers.
    pub fn abort_submit(&mut self) {
        if self.status == FormStatus::Submitting {
            self.status = FormStatus::Edited;
        }
    }

    /// Restores the initial values and clears every message.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
