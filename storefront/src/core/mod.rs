//! Core: configuration and the storefront controller
//!
//! - [`Config`] - environment configuration
//! - [`Storefront`] - wires cart, checkout, history and the host surface

pub mod config;
pub mod storefront;

pub use config::{Config, PaymentDetails};
pub use storefront::{Storefront, SubmissionOutcome};
