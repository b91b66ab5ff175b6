#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn confirm_declines_outside_the_browser() {
    assert!(!confirm(booking::CONFIRM_PROMPT));
}

#[test]
fn alert_is_noop_but_callable() {
    alert("reservation completed successfully.");
}
