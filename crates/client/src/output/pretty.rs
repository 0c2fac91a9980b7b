//! Pretty output formatting.

use memberdb_core::account::{AdminChoice, FieldErrors, FormField, FormValues};
use memberdb_core::auth::CallerIdentity;
use memberdb_core::notice::{Notice, NoticeLevel};
use memberdb_core::routes::Route;
use memberdb_core::views::StaticView;

/// Format the caller identity for display.
pub fn format_identity(identity: &CallerIdentity) -> String {
    let name = identity
        .display_name()
        .unwrap_or_else(|| "Signed-in user".to_string());
    let mut output = name;
    if let Some(email) = &identity.bu_email {
        output.push_str(&format!("\n  Email: {}", email));
    }
    output.push_str(&format!(
        "\n  Admin: {}",
        AdminChoice::from(identity.is_admin).label()
    ));
    output
}

/// Format a notice as a single line.
pub fn format_notice(notice: &Notice) -> String {
    let tag = match notice.level {
        NoticeLevel::Success => "[ok]",
        NoticeLevel::Info => "[info]",
        NoticeLevel::Error => "[error]",
    };
    format!("{} {}", tag, notice.message)
}

/// Format inline validation messages, one per line.
pub fn format_field_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("  {}: {}", field.label(), message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the breadcrumb trail leading to `route`.
pub fn format_breadcrumbs(route: Route) -> String {
    route
        .breadcrumbs()
        .iter()
        .map(Route::label)
        .collect::<Vec<_>>()
        .join(" > ")
}

/// Format a static informational view.
pub fn format_view(view: &StaticView) -> String {
    format!(
        "{}\n\n[{}] -> {}",
        view.message,
        view.action_label,
        view.action_target.path()
    )
}

/// Format the form with its current values and messages.
pub fn format_form(values: &FormValues, errors: &FieldErrors) -> String {
    let mut output = String::new();
    for field in FormField::ALL {
        let value = match (field, values.get(field)) {
            (FormField::IsAdmin, value) => AdminChoice::from_form_value(value)
                .map(|choice| choice.label().to_string())
                .unwrap_or_else(|| "Select...".to_string()),
            (FormField::Class, "") => "Select...".to_string(),
            (_, value) => value.to_string(),
        };
        output.push_str(&format!("{}: {}\n", field.label(), value));
        if let Some(message) = errors.get(field) {
            output.push_str(&format!("  ! {}\n", message));
        }
    }
    output
}
