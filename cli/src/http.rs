//! HTTP access to the reservation API.
//!
//! [`HttpStore`] is the command-line counterpart of the page's `fetch`
//! write: it implements [`ReservationStore`] so the shared submission
//! controller drives it exactly as it drives the browser.

use booking::{CreatedDocument, ReservationRecord, ReservationStore, StoredReservation};
use serde_json::Value;

use crate::error::CliError;

const RESERVAS_PATH: &str = "/api/reservas";

#[derive(Debug, Clone)]
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    /// # Errors
    ///
    /// Returns [`CliError::InvalidBaseUrl`] unless the URL is `http://` or `https://`.
    pub fn new(base_url: &str) -> Result<Self, CliError> {
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CliError::InvalidBaseUrl(base_url.to_owned()));
        }
        Ok(Self { client: reqwest::Client::new(), base_url: base_url.trim_end_matches('/').to_owned() })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub fn reservation_url(&self, id: &str) -> String {
        self.url(&format!("{RESERVAS_PATH}/{id}"))
    }

    /// # Errors
    ///
    /// Returns an error if the server is unreachable or unhealthy.
    pub async fn ping(&self) -> Result<(), CliError> {
        let response = self.client.get(self.url("/healthz")).send().await?;
        ensure_success(response).await.map(|_| ())
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the id is unknown.
    pub async fn fetch_reservation(&self, id: &str) -> Result<StoredReservation, CliError> {
        let response = self.client.get(self.reservation_url(id)).send().await?;
        let body = ensure_success(response).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait::async_trait]
impl ReservationStore for HttpStore {
    type Error = CliError;

    async fn create_reservation(&self, record: &ReservationRecord) -> Result<String, CliError> {
        let response = self.client.post(self.url(RESERVAS_PATH)).json(record).send().await?;
        let body = ensure_success(response).await?;
        let created: CreatedDocument = serde_json::from_str(&body)?;
        Ok(created.id)
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<String, CliError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: error_message(&body) });
    }
    Ok(body)
}

/// Pull `error` out of a JSON error body, falling back to the raw text.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("error").and_then(Value::as_str).map(ToOwned::to_owned))
        .unwrap_or_else(|| body.trim().to_owned())
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
