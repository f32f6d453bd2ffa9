//! HTTP client for network-based API calls

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::{
    Accommodation, Amenity, ApiResponse, BookingConfirmation, BookingCreate, Coupon,
    DateOverride, PaymentRequest, PaymentSession, RoomOccupancy,
};

use crate::{BookingApi, ClientConfig, ClientError, ClientResult};

/// HTTP client for making network requests to the booking API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut builder =
            Client::builder().timeout(std::time::Duration::from_secs(config.timeout));
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let response = self.client.post(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    ///
    /// Non-2xx bodies often still carry the error envelope; prefer its
    /// message over raw text. 429 maps to the rate-limit variant.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(&text)
                .ok()
                .and_then(|resp| resp.error)
                .unwrap_or(text);
            tracing::debug!(%status, "Request failed: {message}");
            return match status {
                StatusCode::TOO_MANY_REQUESTS => Err(ClientError::RateLimited(message)),
                _ => Err(ClientError::Api(message)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    /// Unwrap the response envelope into its payload
    fn into_data<T>(resp: ApiResponse<T>, what: &str) -> ClientResult<T> {
        if !resp.success {
            return Err(ClientError::Api(
                resp.error.unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }
        resp.data
            .ok_or_else(|| ClientError::InvalidResponse(format!("Missing {what}")))
    }
}

// ========== Booking API ==========

#[async_trait]
impl BookingApi for HttpClient {
    async fn list_accommodations(&self) -> ClientResult<Vec<Accommodation>> {
        let resp = self
            .get::<ApiResponse<Vec<Accommodation>>>("/api/accommodations")
            .await?;
        Self::into_data(resp, "accommodation list")
    }

    async fn get_accommodation(&self, id: &str) -> ClientResult<Accommodation> {
        let resp = self
            .get::<ApiResponse<Accommodation>>(&format!("/api/accommodations/{id}"))
            .await?;
        Self::into_data(resp, "accommodation detail")
    }

    async fn list_date_overrides(
        &self,
        accommodation_id: &str,
    ) -> ClientResult<Vec<DateOverride>> {
        let resp = self
            .get::<ApiResponse<Vec<DateOverride>>>(&format!(
                "/api/accommodations/{accommodation_id}/blocked-dates"
            ))
            .await?;
        Self::into_data(resp, "blocked dates")
    }

    async fn room_occupancy(
        &self,
        accommodation_id: &str,
        date: NaiveDate,
    ) -> ClientResult<RoomOccupancy> {
        let resp = self
            .get::<ApiResponse<RoomOccupancy>>(&format!(
                "/api/accommodations/{accommodation_id}/occupancy?date={date}"
            ))
            .await?;
        Self::into_data(resp, "room occupancy")
    }

    async fn list_coupons(&self) -> ClientResult<Vec<Coupon>> {
        let resp = self.get::<ApiResponse<Vec<Coupon>>>("/api/coupons").await?;
        Self::into_data(resp, "coupon list")
    }

    async fn list_amenities(&self) -> ClientResult<Vec<Amenity>> {
        let resp = self
            .get::<ApiResponse<Vec<Amenity>>>("/api/amenities")
            .await?;
        Self::into_data(resp, "amenity list")
    }

    async fn create_booking(&self, booking: &BookingCreate) -> ClientResult<BookingConfirmation> {
        let resp = self
            .post::<ApiResponse<BookingConfirmation>, _>("/api/bookings", booking)
            .await?;
        Self::into_data(resp, "booking id")
    }

    async fn initiate_payment(&self, request: &PaymentRequest) -> ClientResult<PaymentSession> {
        let resp = self
            .post::<ApiResponse<PaymentSession>, _>("/api/payments/initiate", request)
            .await?;
        Self::into_data(resp, "payment session")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_data_surfaces_envelope_error() {
        let resp: ApiResponse<i32> = ApiResponse::error("Coupon service down");
        let err = HttpClient::into_data(resp, "coupon list").unwrap_err();
        assert!(matches!(err, ClientError::Api(msg) if msg == "Coupon service down"));
    }

    #[test]
    fn test_into_data_rejects_success_without_payload() {
        let resp = ApiResponse::<BookingConfirmation> {
            success: true,
            data: None,
            error: None,
        };
        let err = HttpClient::into_data(resp, "booking id").unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(msg) if msg == "Missing booking id"));
    }

    #[test]
    fn test_into_data_passes_payload_through() {
        let resp = ApiResponse::ok(BookingConfirmation {
            booking_id: "b42".into(),
        });
        let confirmation = HttpClient::into_data(resp, "booking id").unwrap();
        assert_eq!(confirmation.booking_id, "b42");
    }
}
