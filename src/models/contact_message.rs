//! Validated contact message.

use crate::domain::EmailAddress;

/// A contact-form submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: EmailAddress,
    pub subject: String,
    pub body: String,
}
