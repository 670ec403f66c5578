//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the values a form
//! submission must carry before a message can be built: email addresses,
//! phone numbers and booking dates. These value objects validate at
//! construction time so an invalid value cannot reach the message templates.

pub mod booking_date;
pub mod email;
pub mod errors;
pub mod phone;

pub use booking_date::BookingDate;
pub use email::EmailAddress;
pub use errors::{FieldError, FieldFormat};
pub use phone::PhoneNumber;
