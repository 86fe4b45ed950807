use serde::{Deserialize, Serialize};

/// The closed set of site forms that produce a notification.
///
/// Tags arriving from the form wiring are free-form strings; anything
/// outside this set deliberately maps to no notification at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Enrollment,
    Consultation,
    Contact,
    Newsletter,
}

impl FormKind {
    /// Resolve a form-type tag. Unknown tags return `None` rather than an
    /// error; callers treat that as a no-op.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "enrollment" => Some(FormKind::Enrollment),
            "consultation" => Some(FormKind::Consultation),
            "contact" => Some(FormKind::Contact),
            "newsletter" => Some(FormKind::Newsletter),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            FormKind::Enrollment => "enrollment",
            FormKind::Consultation => "consultation",
            FormKind::Contact => "contact",
            FormKind::Newsletter => "newsletter",
        }
    }
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A form submission bound for the backend, schema left to the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSubmission {
    pub form_type: String,
    pub fields: serde_json::Value,
}

impl FormSubmission {
    pub fn new(form_type: impl Into<String>, fields: serde_json::Value) -> Self {
        Self {
            form_type: form_type.into(),
            fields,
        }
    }
}
