//! Page modules for route-level screens.

pub mod complete_reservation;
