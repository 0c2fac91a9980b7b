//! Add-user CLI command.

use clap::{Args, ValueEnum};
use memberdb_core::account::{AdminChoice, FormField};

use crate::controller::FormController;

/// Flags for `add-user`. Omitted fields stay blank unless prompted for.
#[derive(Debug, Args)]
pub struct AddUserArgs {
    /// First name.
    #[arg(long)]
    pub first: Option<String>,
    /// Last name.
    #[arg(long)]
    pub last: Option<String>,
    /// BU email address.
    #[arg(long)]
    pub email: Option<String>,
    /// Pledge class (Founder, Alpha, Beta, Gamma).
    #[arg(long)]
    pub class: Option<String>,
    /// Whether the new user is an admin.
    #[arg(long, value_enum)]
    pub admin: Option<AdminArg>,
    /// Prompt for every field, and again after a failed attempt.
    #[arg(long, short)]
    pub interactive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AdminArg {
    Yes,
    No,
}

impl From<AdminArg> for AdminChoice {
    fn from(arg: AdminArg) -> Self {
        match arg {
            AdminArg::Yes => AdminChoice::Yes,
            AdminArg::No => AdminChoice::No,
        }
    }
}

impl AddUserArgs {
    /// Copy the given flags into the form.
    pub fn fill(&self, controller: &mut FormController) {
        let text = [
            (FormField::First, &self.first),
            (FormField::Last, &self.last),
            (FormField::BuEmail, &self.email),
            (FormField::Class, &self.class),
        ];
        for (field, value) in text {
            if let Some(value) = value {
                controller.update_field(field, value.as_str());
            }
        }

        if let Some(admin) = self.admin {
            controller.update_field(
                FormField::IsAdmin,
                AdminChoice::from(admin).as_form_value(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use memberdb_core::account::FormValues;

    use super::*;
    use crate::notifier::Notifier;
    use crate::testing::FakeAccounts;

    #[test]
    fn fill_copies_given_flags_only() {
        let args = AddUserArgs {
            first: Some("Jane".to_string()),
            last: None,
            email: Some("JDOE@bu.edu".to_string()),
            class: Some("Alpha".to_string()),
            admin: Some(AdminArg::Yes),
            interactive: false,
        };
        let mut controller =
            FormController::new(Arc::new(FakeAccounts::succeeding()), Notifier::default());

        args.fill(&mut controller);

        assert_eq!(
            controller.values(),
            &FormValues {
                first: "Jane".to_string(),
                last: String::new(),
                bu_email: "JDOE@bu.edu".to_string(),
                class: "Alpha".to_string(),
                is_admin: "true".to_string(),
            }
        );
    }
}
