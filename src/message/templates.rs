//! Message templates.

use super::catalog::{BUDGET_RANGES, SERVICES};
use crate::models::{BookingRequest, ContactMessage};
use crate::validation::ValidatedForm;
use serde::Serialize;
use std::fmt;

/// Site name used to sign outgoing messages.
pub const SIGNATURE: &str = "Gat Tech Hub Ltd Website";

/// Text ready to hand to the messaging app.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OutboundMessage(String);

impl OutboundMessage {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for OutboundMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render whichever form was validated.
pub fn render(form: &ValidatedForm) -> OutboundMessage {
    match form {
        ValidatedForm::Booking(request) => render_booking(request),
        ValidatedForm::Contact(message) => render_contact(message),
    }
}

/// Render a booking request.
///
/// The description and budget sections appear only when provided.
pub fn render_booking(request: &BookingRequest) -> OutboundMessage {
    let mut text = String::from("🚁 *DRONE SERVICE BOOKING REQUEST*\n\n");

    text.push_str("*Client Information:*\n");
    text.push_str(&format!("Name: {}\n", request.full_name));
    text.push_str(&format!("Email: {}\n", request.email));
    text.push_str(&format!("Phone: {}\n\n", request.phone));

    text.push_str("*Service Details:*\n");
    text.push_str(&format!("Service: {}\n", SERVICES.label(&request.service)));
    text.push_str(&format!("Date: {}\n", request.date));
    text.push_str(&format!("Time: {}\n", request.time));
    text.push_str(&format!("Location: {}\n\n", request.location));

    if let Some(description) = &request.description {
        text.push_str(&format!("*Project Description:*\n{}\n\n", description));
    }

    if let Some(budget) = &request.budget {
        text.push_str(&format!("*Budget Range:* {}\n\n", BUDGET_RANGES.label(budget)));
    }

    text.push_str("Please confirm availability and provide a detailed quote for this project.\n\n");
    text.push_str("Thank you!\n");
    text.push_str(&format!("- {}", SIGNATURE));

    OutboundMessage(text)
}

/// Render a contact message.
pub fn render_contact(message: &ContactMessage) -> OutboundMessage {
    let mut text = String::from("📧 *CONTACT MESSAGE*\n\n");

    text.push_str(&format!("*From:* {}\n", message.name));
    text.push_str(&format!("*Email:* {}\n", message.email));
    text.push_str(&format!("*Subject:* {}\n\n", message.subject));
    text.push_str(&format!("*Message:*\n{}\n\n", message.body));
    text.push_str(&format!("- Sent via {}", SIGNATURE));

    OutboundMessage(text)
}
