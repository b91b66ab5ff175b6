//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page logic so
//! the page stays renderable on the server and testable off the browser.

pub mod dialog;
pub mod storage;
