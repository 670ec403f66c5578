//! Data models for form intake.
//!
//! Raw submissions, their validation reports, the typed requests built from
//! valid submissions, and the banner shown after a submit.

pub mod booking;
pub mod contact_message;
pub mod notice;
pub mod submission;
pub mod validation;

pub use booking::BookingRequest;
pub use contact_message::ContactMessage;
pub use notice::{Notice, NoticeKind};
pub use submission::{FieldKind, FieldSpec, FormSchema, FormSubmission};
pub use validation::{FieldOutcome, ValidationReport};
