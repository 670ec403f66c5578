//! Application service layer.
//!
//! Services contain the intake logic and orchestrate validation, message
//! rendering and redirect scheduling. They provide a clean boundary between
//! the MCP handlers and the pure building blocks.

mod form_session;
mod intake_service;

pub use form_session::{FormSession, REJECTED_TEXT};
pub use intake_service::{
    accepted_text, IntakeService, IntakeServiceImpl, PreparedMessage, Submitted,
    BOOKING_ACCEPTED_TEXT, CONTACT_ACCEPTED_TEXT,
};
