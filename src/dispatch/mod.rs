//! Redirect dispatch.
//!
//! A validated message is handed to the messaging app after a fixed delay,
//! during which the success notice is visible. The delay runs as a spawned
//! task that can be cancelled through its [`RedirectHandle`].

pub mod opener;
pub mod scheduler;

pub use opener::{LinkOpener, LoggingOpener, SystemOpener};
pub use scheduler::{RedirectHandle, RedirectScheduler, RedirectStatus};
