use super::*;
use crate::services::documents::{DocumentStore, StoreError};
use crate::state::test_helpers;
use booking::FormData;
use serde_json::{Value, json};
use std::sync::Arc;
use time::macros::datetime;

fn sample_record() -> ReservationRecord {
    ReservationRecord {
        form: FormData {
            name: "Ana".to_owned(),
            phone: "1122334455".to_owned(),
            email: "ana@example.com".to_owned(),
            party_size: 4,
            ..FormData::default()
        },
        start_date: Some("6/1/2024".to_owned()),
        end_date: Some("6/3/2024".to_owned()),
        created_at: datetime!(2024-05-20 14:30:00 UTC),
    }
}

struct FailingStore;

#[async_trait::async_trait]
impl DocumentStore for FailingStore {
    async fn add_doc(&self, _collection: &str, _data: Value) -> Result<Uuid, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn get_doc(&self, _collection: &str, _id: Uuid) -> Result<Option<Value>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    fn backend(&self) -> &'static str {
        "failing"
    }
}

#[tokio::test]
async fn create_returns_created_with_generated_id() {
    let (state, store) = test_helpers::test_app_state();

    let (status, Json(body)) = create_reservation(State(state), Json(sample_record()))
        .await
        .expect("create should succeed");

    assert_eq!(status, StatusCode::CREATED);
    let id = Uuid::parse_str(&body.id).expect("id should be a uuid");
    assert_eq!(store.count("reservas").await, 1);
    let doc = store.get_doc("reservas", id).await.expect("get").expect("present");
    assert_eq!(doc["email"], json!("ana@example.com"));
}

#[tokio::test]
async fn create_writes_to_configured_collection() {
    let (_, store) = test_helpers::test_app_state();
    let state = AppState::new(store.clone(), "reservas_staging");

    create_reservation(State(state), Json(sample_record())).await.expect("create");

    assert_eq!(store.count("reservas_staging").await, 1);
    assert_eq!(store.count("reservas").await, 0);
}

#[tokio::test]
async fn create_maps_store_failure_to_500() {
    let state = AppState::new(Arc::new(FailingStore), "reservas");
    let err = create_reservation(State(state), Json(sample_record()))
        .await
        .expect_err("store should fail");
    assert_eq!(err, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn get_round_trips_created_reservation() {
    let (state, _store) = test_helpers::test_app_state();
    let (_, Json(created)) = create_reservation(State(state.clone()), Json(sample_record()))
        .await
        .expect("create");
    let id = Uuid::parse_str(&created.id).expect("uuid");

    let Json(stored) = get_reservation(State(state), Path(id)).await.expect("get");

    assert_eq!(stored.id, created.id);
    assert_eq!(stored.record, sample_record());
}

#[tokio::test]
async fn get_unknown_id_is_404() {
    let (state, _store) = test_helpers::test_app_state();
    let err = get_reservation(State(state), Path(Uuid::new_v4())).await.expect_err("missing");
    assert_eq!(err, StatusCode::NOT_FOUND);
}

#[test]
fn error_to_status_maps_variants() {
    assert_eq!(reservation_error_to_status(&ReservationError::NotFound(Uuid::nil())), StatusCode::NOT_FOUND);
    assert_eq!(
        reservation_error_to_status(&ReservationError::Store(StoreError::NotAnObject)),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
