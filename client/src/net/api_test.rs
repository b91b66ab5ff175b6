use super::*;

#[test]
fn endpoint_targets_reservas_collection() {
    assert_eq!(RESERVAS_ENDPOINT, "/api/reservas");
}

#[test]
fn create_failed_message_formats_status() {
    assert_eq!(create_failed_message(500), "create reservation failed: 500");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn create_reservation_is_unavailable_outside_the_browser() {
    use booking::{FormData, ReservationRecord};

    let record = ReservationRecord::build(&FormData::default(), None, time::OffsetDateTime::UNIX_EPOCH);
    let result = poll_ready(create_reservation(&record));
    assert_eq!(result, Err("not available on server".to_owned()));
}

// Minimal single-poll executor: the non-hydrate stub never awaits.
#[cfg(not(feature = "hydrate"))]
fn poll_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("stub future should be ready immediately"),
    }
}
