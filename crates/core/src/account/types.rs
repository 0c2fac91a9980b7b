use serde::{Deserialize, Serialize};

/// Membership cohort a user was initiated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PledgeClass {
    Founder,
    Alpha,
    Beta,
    Gamma,
}

impl PledgeClass {
    /// Every selectable class, in display order.
    pub const ALL: [PledgeClass; 4] = [Self::Founder, Self::Alpha, Self::Beta, Self::Gamma];

    /// The label used both in the form and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Founder => "Founder",
            Self::Alpha => "Alpha",
            Self::Beta => "Beta",
            Self::Gamma => "Gamma",
        }
    }

    /// Looks up a class by its exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.as_str() == label)
    }
}

impl std::fmt::Display for PledgeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The admin selection as the form edits it.
///
/// The form stores the choice as the strings `"true"` / `"false"`; the
/// request carries a real boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminChoice {
    Yes,
    No,
}

impl AdminChoice {
    pub const ALL: [AdminChoice; 2] = [Self::Yes, Self::No];

    /// Value stored in the form field.
    pub fn as_form_value(&self) -> &'static str {
        match self {
            Self::Yes => "true",
            Self::No => "false",
        }
    }

    /// Parses the stored form value. Only `"true"` and `"false"` are accepted.
    pub fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "true" => Some(Self::Yes),
            "false" => Some(Self::No),
            _ => None,
        }
    }

    /// Human-readable option label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl From<bool> for AdminChoice {
    fn from(is_admin: bool) -> Self {
        if is_admin {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// Request payload for creating a user record.
///
/// Only produced by [`validate_form`](super::validate_form), so a value of
/// this type always has a lowercased, well-formed email and a known class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUserRequest {
    pub first: String,
    pub last: String,
    pub bu_email: String,
    pub class: PledgeClass,
    pub is_admin: bool,
}
