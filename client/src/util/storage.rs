//! Browser localStorage access for the session context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The date-picking step leaves its results in `localStorage`. This helper
//! centralizes the hydrate-only read so the page never touches web-sys glue
//! directly. Parsing stays in `booking::SessionContext`, so a malformed
//! blob can be reported instead of silently dropped.

/// Read the raw string stored under `key`, `None` if absent or unavailable.
pub fn read_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;
