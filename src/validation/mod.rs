//! Form validation.
//!
//! Every schema field is checked independently so that all failures can be
//! shown at once. A submission that passes is turned into a typed request
//! ready for message rendering.

pub mod clock;
pub mod validator;

pub use clock::{Clock, FixedClock, LocalClock};
pub use validator::{FormValidator, ValidatedForm};
