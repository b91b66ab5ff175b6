//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the single REST write the confirmation page performs.

pub mod api;
