#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_raw_is_none_outside_the_browser() {
    assert_eq!(read_raw(booking::DATES_STORAGE_KEY), None);
    assert_eq!(read_raw(booking::PRICING_STORAGE_KEY), None);
}
