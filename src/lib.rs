//! Site Intake - booking and contact form intake for the Gat Tech Hub site.
//!
//! Validates the site's two forms field by field and, for a valid
//! submission, renders a fixed-format message and hands it to WhatsApp
//! through a deep link after a short delay.
//!
//! # Architecture
//!
//! - **domain**: Validated values (email, phone, booking date) and field errors
//! - **models**: Submissions, validation reports, typed requests, banners
//! - **validation**: Per-field validation against the form schemas
//! - **message**: Label catalogs, message templates and deep links
//! - **dispatch**: Delayed, cancelable redirect to the messaging app
//! - **services**: Intake orchestration and per-form display state
//! - **server**: MCP protocol server exposing the forms as tools
//! - **config**: Configuration from environment variables
//! - **error**: Crate error types
//! - **metrics**: Submission and redirect counters

pub mod config;
pub mod dispatch;
pub mod domain;
pub mod error;
pub mod message;
pub mod metrics;
pub mod models;
pub mod server;
pub mod services;
pub mod validation;

pub use config::Config;
pub use dispatch::{
    LinkOpener, LoggingOpener, RedirectHandle, RedirectScheduler, RedirectStatus, SystemOpener,
};
pub use domain::{BookingDate, EmailAddress, FieldError, FieldFormat, PhoneNumber};
pub use error::{ConfigError, DispatchError, IntakeError};
pub use message::{DeepLink, DeepLinkTarget, OutboundMessage};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{FormSchema, FormSubmission, Notice, NoticeKind, ValidationReport};
pub use server::IntakeMcpServer;
pub use services::{FormSession, IntakeService, IntakeServiceImpl, PreparedMessage, Submitted};
pub use validation::{Clock, FixedClock, FormValidator, LocalClock, ValidatedForm};
