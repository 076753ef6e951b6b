//! Application layer containing the PaymentCreate flow.
//!
//! The signer, request builder and response interpreter are pure; the
//! `PaymentOrchestrator` composes them with the gateway and shop ports.

pub mod builder;
pub mod interpreter;
pub mod orchestrator;
pub mod signer;
