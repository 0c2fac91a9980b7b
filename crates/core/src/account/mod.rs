mod error;
mod form;
mod outcome;
mod traits;
mod types;
mod validation;

pub use error::{FieldErrors, SubmitError, SubmitRejected};
pub use form::{AddUserForm, FormField, FormStatus, FormValues};
pub use outcome::{classify_status, SubmitOutcome};
pub use traits::{AccountService, Result};
pub use types::{AdminChoice, NewUserRequest, PledgeClass};
pub use validation::{is_valid_email, validate_field, validate_form};
