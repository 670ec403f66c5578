//! Outbound message construction.
//!
//! Turns a validated form into the fixed text template handed to the
//! messaging app, and wraps that text into a deep link.

pub mod catalog;
pub mod deep_link;
pub mod templates;

pub use catalog::{LabelCatalog, BUDGET_RANGES, SERVICES};
pub use deep_link::{DeepLink, DeepLinkTarget};
pub use templates::{render, render_booking, render_contact, OutboundMessage, SIGNATURE};
