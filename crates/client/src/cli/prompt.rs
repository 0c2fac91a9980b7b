//! Interactive prompts for the add-user form.

use dialoguer::{Confirm, Input, Select};
use memberdb_core::account::{AdminChoice, FormField, FormValues, PledgeClass};

use crate::controller::FormController;

const SELECT_NONE: &str = "Select...";

/// Ask for every field, offering the current values as defaults.
pub fn prompt_form(controller: &mut FormController) -> dialoguer::Result<()> {
    let current = controller.values().clone();

    for field in [FormField::First, FormField::Last, FormField::BuEmail] {
        let value = prompt_text(field, &current)?;
        controller.update_field(field, value);
    }

    let class = prompt_class(&current)?;
    controller.update_field(FormField::Class, class);

    let admin = prompt_admin(&current)?;
    controller.update_field(FormField::IsAdmin, admin);

    Ok(())
}

/// Ask whether to go through the form again.
pub fn confirm_retry() -> dialoguer::Result<bool> {
    Confirm::new()
        .with_prompt("Edit the form and try again?")
        .default(true)
        .interact()
}

fn prompt_text(field: FormField, current: &FormValues) -> dialoguer::Result<String> {
    let initial = current.get(field);
    let mut input = Input::<String>::new()
        .with_prompt(field.label())
        .allow_empty(true);
    if !initial.is_empty() {
        input = input.with_initial_text(initial);
    } else if let Some(placeholder) = field.placeholder() {
        input = input.with_prompt(format!("{} ({})", field.label(), placeholder));
    }
    input.interact_text()
}

fn prompt_class(current: &FormValues) -> dialoguer::Result<String> {
    let mut items = vec![SELECT_NONE];
    items.extend(PledgeClass::ALL.iter().map(PledgeClass::as_str));

    let default = PledgeClass::from_label(&current.class)
        .and_then(|class| PledgeClass::ALL.iter().position(|c| *c == class))
        .map_or(0, |index| index + 1);

    let selected = Select::new()
        .with_prompt(FormField::Class.label())
        .items(items.as_slice())
        .default(default)
        .interact()?;

    Ok(match selected {
        0 => String::new(),
        index => PledgeClass::ALL[index - 1].as_str().to_string(),
    })
}

fn prompt_admin(current: &FormValues) -> dialoguer::Result<String> {
    let mut items = vec![SELECT_NONE];
    items.extend(AdminChoice::ALL.iter().map(AdminChoice::label));

    let default = AdminChoice::from_form_value(&current.is_admin)
        .and_then(|choice| AdminChoice::ALL.iter().position(|c| *c == choice))
        .map_or(0, |index| index + 1);

    let selected = Select::new()
        .with_prompt(FormField::IsAdmin.label())
        .items(items.as_slice())
        .default(default)
        .interact()?;

    Ok(match selected {
        0 => String::new(),
        index => AdminChoice::ALL[index - 1].as_form_value().to_string(),
    })
}
