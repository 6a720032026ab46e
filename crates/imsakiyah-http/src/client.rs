//! reqwest-backed schedule source

use async_trait::async_trait;
use imsakiyah_api::{ApiResponse, ImsakiyahData};
use imsakiyah_source::{ScheduleSource, SourceError, SourceResult};
use imsakiyah_util::LocationKey;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

/// Schedule source talking to the imsakiyah HTTP API
pub struct HttpScheduleSource {
    client: Client,
    base_url: String,
}

impl HttpScheduleSource {
    /// Create a source for `base_url` with a per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> SourceResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| SourceError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Use a preconfigured client
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, what: &str) -> SourceResult<T> {
        let response = request.send().await.map_err(|e| {
            warn!(request = what, error = %e, "Schedule API request failed");
            SourceError::Http(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Http(e.to_string()))?;

        debug!(request = what, status, bytes = body.len(), "Schedule API response");
        decode_body(status, &body).inspect_err(|e| {
            warn!(request = what, error = %e, "Unusable schedule API response");
        })
    }
}

#[async_trait]
impl ScheduleSource for HttpScheduleSource {
    async fn provinces(&self) -> SourceResult<Vec<String>> {
        let request = self.client.get(self.endpoint("provinsi"));
        self.send(request, "provinces").await
    }

    async fn cities(&self, province: &str) -> SourceResult<Vec<String>> {
        let request = self
            .client
            .post(self.endpoint("kabkota"))
            .json(&json!({ "provinsi": province }));
        self.send(request, "cities").await
    }

    async fn schedule(&self, location: &LocationKey) -> SourceResult<Vec<ImsakiyahData>> {
        let request = self
            .client
            .post(self.endpoint(""))
            .json(&json!({ "provinsi": location.province, "kabkota": location.city }));
        self.send(request, "schedule").await
    }
}

/// Unwrap the `data` field of an API envelope, rejecting non-2xx statuses
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> SourceResult<T> {
    if !(200..300).contains(&status) {
        return Err(SourceError::Status(status));
    }
    let envelope: ApiResponse<T> =
        serde_json::from_str(body).map_err(|e| SourceError::Decode(e.to_string()))?;
    Ok(envelope.data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_decode_body() {
        let body = r#"{"code":200,"message":"OK","data":["Aceh","Bali"]}"#;
        let provinces: Vec<String> = decode_body(200, body).unwrap();
        assert_eq!(provinces, vec!["Aceh", "Bali"]);

        assert!(matches!(
            decode_body::<Vec<String>>(404, body),
            Err(SourceError::Status(404))
        ));
        assert!(matches!(
            decode_body::<Vec<String>>(200, "<html>"),
            Err(SourceError::Decode(_))
        ));
    }

    #[test]
    fn test_endpoints() {
        let source =
            HttpScheduleSource::new("https://example.test/api/", Duration::from_secs(5)).unwrap();
        assert_eq!(source.base_url(), "https://example.test/api");
        assert_eq!(source.endpoint("provinsi"), "https://example.test/api/provinsi");
        assert_eq!(source.endpoint(""), "https://example.test/api");
    }

    const API_PATH: &str = "/api/v2/imsakiyah";

    fn local_source(server: &MockServer) -> HttpScheduleSource {
        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .no_proxy()
            .build()
            .unwrap();
        HttpScheduleSource::with_client(client, format!("{}{}", server.uri(), API_PATH))
    }

    fn envelope(data: Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "OK",
            "data": data,
        }))
    }

    #[tokio::test]
    async fn test_requests_against_local_server() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("{}/provinsi", API_PATH)))
            .respond_with(envelope(json!(["Bali"])))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path(format!("{}/kabkota", API_PATH)))
            .and(body_json(json!({ "provinsi": "Bali" })))
            .respond_with(envelope(json!(["Kota Denpasar"])))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path(API_PATH))
            .and(body_json(json!({ "provinsi": "Bali", "kabkota": "Kota Denpasar" })))
            .respond_with(envelope(json!([{
                "provinsi": "Bali",
                "kabkota": "Kota Denpasar",
                "hijriah": "Ramadhan 1446",
                "masehi": "2025",
                "imsakiyah": [{
                    "tanggal": 1, "imsak": "04:50", "subuh": "05:00", "terbit": "06:14",
                    "dhuha": "06:40", "dzuhur": "12:23", "ashar": "15:36",
                    "maghrib": "18:27", "isya": "19:36"
                }]
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let source = local_source(&server);
        assert_eq!(source.provinces().await.unwrap(), vec!["Bali"]);
        assert_eq!(source.cities("Bali").await.unwrap(), vec!["Kota Denpasar"]);

        let location = LocationKey::new("Bali", "Kota Denpasar");
        let data = source.first_schedule(&location).await.unwrap();
        assert_eq!(data.days.len(), 1);
        assert_eq!(data.days[0].maghrib, "18:27");
    }

    #[tokio::test]
    async fn test_empty_schedule_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(API_PATH))
            .respond_with(envelope(json!([])))
            .mount(&server)
            .await;

        let source = local_source(&server);
        let location = LocationKey::new("Aceh", "Kota Sabang");
        assert!(matches!(
            source.first_schedule(&location).await,
            Err(SourceError::NotFound(found)) if found == location
        ));
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{}/provinsi", API_PATH)))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "down" })))
            .mount(&server)
            .await;

        let source = local_source(&server);
        assert!(matches!(
            source.provinces().await,
            Err(SourceError::Status(500))
        ));
    }
}
