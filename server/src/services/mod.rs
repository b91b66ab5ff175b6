//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own persistence concerns so route handlers can stay
//! focused on protocol translation and status mapping.

pub mod documents;
pub mod reservations;
