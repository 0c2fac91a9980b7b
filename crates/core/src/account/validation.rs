//! Local, synchronous validation of the add-user form.
//!
//! Every field is checked independently so a single submit attempt reports
//! all of its problems at once.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{AdminChoice, FieldErrors, FormField, FormValues, NewUserRequest, PledgeClass};

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$")
        .expect("compile email regex")
});

const FIRST_REQUIRED: &str = "First name is required";
const LAST_REQUIRED: &str = "Last name is required";
const EMAIL_REQUIRED: &str = "BU email is required";
const EMAIL_INVALID: &str = "Invalid email format";
const CLASS_REQUIRED: &str = "Pledge class is required";
const CLASS_UNKNOWN: &str = "Unknown pledge class";
const ADMIN_REQUIRED: &str = "Is Admin is required";
const ADMIN_INVALID: &str = "Is Admin must be Yes or No";

type FieldResult<T> = std::result::Result<T, &'static str>;

/// Checks an address against the general email pattern.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

fn required<'a>(value: &'a str, message: &'static str) -> FieldResult<&'a str> {
    if value.is_empty() {
        Err(message)
    } else {
        Ok(value)
    }
}

fn email(value: &str) -> FieldResult<&str> {
    let value = required(value, EMAIL_REQUIRED)?;
    if is_valid_email(value) {
        Ok(value)
    } else {
        Err(EMAIL_INVALID)
    }
}

fn pledge_class(value: &str) -> FieldResult<PledgeClass> {
    let value = required(value, CLASS_REQUIRED)?;
    PledgeClass::from_label(value).ok_or(CLASS_UNKNOWN)
}

fn admin_choice(value: &str) -> FieldResult<AdminChoice> {
    let value = required(value, ADMIN_REQUIRED)?;
    AdminChoice::from_form_value(value).ok_or(ADMIN_INVALID)
}

/// Validates a single field, returning its inline message if it is invalid.
pub fn validate_field(field: FormField, values: &FormValues) -> Option<&'static str> {
    match field {
        FormField::First => required(&values.first, FIRST_REQUIRED).err(),
        FormField::Last => required(&values.last, LAST_REQUIRED).err(),
        FormField::BuEmail => email(&values.bu_email).err(),
        FormField::Class => pledge_class(&values.class).err(),
        FormField::IsAdmin => admin_choice(&values.is_admin).err(),
    }
}

/// Validates the whole form and builds the request to send.
///
/// The email is lowercased and the admin selection becomes a boolean. On
/// failure every invalid field has an entry in the returned [`FieldErrors`].
pub fn validate_form(values: &FormValues) -> Result<NewUserRequest, FieldErrors> {
    let first = required(&values.first, FIRST_REQUIRED);
    let last = required(&values.last, LAST_REQUIRED);
    let bu_email = email(&values.bu_email);
    let class = pledge_class(&values.class);
    let is_admin = admin_choice(&values.is_admin);

    match (first, last, bu_email, class, is_admin) {
        (Ok(first), Ok(last), Ok(bu_email), Ok(class), Ok(is_admin)) => Ok(NewUserRequest {
            first: first.to_string(),
            last: last.to_string(),
            bu_email: bu_email.to_lowercase(),
            class,
            is_admin: is_admin.is_admin(),
        }),
        (first, last, bu_email, class, is_admin) => {
            let mut errors = FieldErrors::new();
            errors.record(FormField::First, first.err());
            errors.record(FormField::Last, last.err());
            errors.record(FormField::BuEmail, bu_email.err());
            errors.record(FormField::Class, class.err());
            errors.record(FormField::IsAdmin, is_admin.err());
            Err(errors)
        }
    }
}
