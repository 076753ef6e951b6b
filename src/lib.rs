//! Payment initiation against the iPay Tokly PaymentCreate API.
//!
//! `Orchestrator -> Signer + RequestBuilder -> Gateway -> ResponseInterpreter`
//!
//! The shop side (orders, merchant settings, user notices) is reached only
//! through the ports in [`domain::ports`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
pub mod telemetry;
