use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use super::FormField;

/// Why a create-user call did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("user already exists")]
    Conflict,

    #[error("server rejected the request with status {status}")]
    Rejected { status: u16 },

    #[error("request failed: {0}")]
    Transport(String),
}

/// Why a submit attempt never reached the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("form has invalid fields: {0}")]
    Invalid(FieldErrors),

    #[error("a submission is already in flight")]
    InFlight,
}

/// Inline validation messages, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FormField, &'static str>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the message for `field`.
    pub fn record(&mut self, field: FormField, message: Option<&'static str>) {
        match message {
            Some(message) => {
                self.0.insert(field, message);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterates in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field.name(), message)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_sets_and_clears() {
        let mut errors = FieldErrors::new();
        errors.record(FormField::First, Some("First name is required"));
        assert_eq!(errors.get(FormField::First), Some("First name is required"));

        errors.record(FormField::First, None);
        assert!(errors.is_empty());
    }

    #[test]
    fn display_lists_fields_in_form_order() {
        let mut errors = FieldErrors::new();
        errors.record(FormField::Class, Some("Pledge class is required"));
        errors.record(FormField::First, Some("First name is required"));

        assert_eq!(
            errors.to_string(),
            "first: First name is required; class: Pledge class is required"
        );
    }

    #[test]
    fn serializes_as_field_keyed_map() {
        let mut errors = FieldErrors::new();
        errors.record(FormField::BuEmail, Some("Invalid email format"));

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "bu_email": "Invalid email format" }));
    }
}
