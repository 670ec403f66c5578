//! Validated booking request.

use crate::domain::{BookingDate, EmailAddress, PhoneNumber};

/// A booking submission that passed validation.
///
/// Text values are kept exactly as the user entered them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub full_name: String,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    /// Service code, e.g. `aerial-photography`.
    pub service: String,
    pub date: BookingDate,
    pub time: String,
    pub location: String,
    pub description: Option<String>,
    /// Budget range code, e.g. `500-1000`.
    pub budget: Option<String>,
}
