//! Raw form submissions and the schemas they are captured against.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a single schema field is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Required, presence only.
    Text,
    /// Required, must look like `local@domain.tld`.
    Email,
    /// Required, must look like a phone number.
    Phone,
    /// Required, `YYYY-MM-DD` not before today.
    Date,
    /// May be absent; never fails.
    Optional,
}

/// A named field and the rule that applies to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, kind }
}

const BOOKING_FIELDS: &[FieldSpec] = &[
    field("fullName", FieldKind::Text),
    field("email", FieldKind::Email),
    field("phone", FieldKind::Phone),
    field("service", FieldKind::Text),
    field("date", FieldKind::Date),
    field("time", FieldKind::Text),
    field("location", FieldKind::Text),
    field("description", FieldKind::Optional),
    field("budget", FieldKind::Optional),
];

const CONTACT_FIELDS: &[FieldSpec] = &[
    field("contactName", FieldKind::Text),
    field("contactEmail", FieldKind::Email),
    field("subject", FieldKind::Text),
    field("message", FieldKind::Text),
];

/// The two forms the site accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormSchema {
    /// Service booking request.
    Booking,
    /// General contact message.
    Contact,
}

impl FormSchema {
    /// All fields of the schema, in display order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Self::Booking => BOOKING_FIELDS,
            Self::Contact => CONTACT_FIELDS,
        }
    }

    /// Names of the fields that must be filled in.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> {
        self.fields()
            .iter()
            .filter(|f| f.kind != FieldKind::Optional)
            .map(|f| f.name)
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.name == name)
    }
}

impl fmt::Display for FormSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Booking => write!(f, "booking"),
            Self::Contact => write!(f, "contact"),
        }
    }
}

/// The values a user entered into one form, captured at submit time.
///
/// Field order is preserved as entered. Keys outside the schema are kept
/// but never validated or rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub schema: FormSchema,
    #[serde(default)]
    pub values: IndexMap<String, String>,
}

impl FormSubmission {
    /// Create an empty submission for a schema.
    pub fn new(schema: FormSchema) -> Self {
        Self {
            schema,
            values: IndexMap::new(),
        }
    }

    /// Create a submission from name/value pairs.
    pub fn from_pairs<K, V>(schema: FormSchema, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            schema,
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Builder-style setter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Set a field value, replacing any previous one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Raw value of a field, exactly as entered.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Raw value of a field if it is non-blank after trimming.
    pub fn provided(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.trim().is_empty())
    }

    /// Drop every value, keeping the schema.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Keys that are not part of the schema.
    pub fn unknown_fields(&self) -> impl Iterator<Item = &str> {
        self.values
            .keys()
            .map(String::as_str)
            .filter(|k| self.schema.field(k).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        let booking: Vec<_> = FormSchema::Booking.required_fields().collect();
        assert_eq!(
            booking,
            vec!["fullName", "email", "phone", "service", "date", "time", "location"]
        );

        let contact: Vec<_> = FormSchema::Contact.required_fields().collect();
        assert_eq!(contact, vec!["contactName", "contactEmail", "subject", "message"]);
    }

    #[test]
    fn test_provided_ignores_blank() {
        let submission = FormSubmission::new(FormSchema::Contact)
            .with("subject", "   ")
            .with("message", " hi ");

        assert_eq!(submission.provided("subject"), None);
        assert_eq!(submission.provided("message"), Some(" hi "));
        assert_eq!(submission.provided("contactName"), None);
    }

    #[test]
    fn test_order_is_preserved() {
        let submission = FormSubmission::from_pairs(
            FormSchema::Contact,
            [("subject", "s"), ("contactName", "n")],
        );
        let keys: Vec<_> = submission.values.keys().cloned().collect();
        assert_eq!(keys, vec!["subject", "contactName"]);
    }

    #[test]
    fn test_unknown_fields() {
        let submission = FormSubmission::new(FormSchema::Contact)
            .with("contactName", "Ada")
            .with("website", "spam");
        let unknown: Vec<_> = submission.unknown_fields().collect();
        assert_eq!(unknown, vec!["website"]);
    }

    #[test]
    fn test_deserialize() {
        let json = r#"{"schema":"booking","values":{"fullName":"Ada"}}"#;
        let submission: FormSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.schema, FormSchema::Booking);
        assert_eq!(submission.get("fullName"), Some("Ada"));
    }
}
