//! Panopto HTTP client.

use reqwest::{header, Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::api::types::*;
use crate::config::Config;
use crate::error::{Error, Result};

/// Name of the Panopto session cookie.
pub const AUTH_COOKIE_NAME: &str = ".ASPXAUTH";

/// Default page size for folder listings.
pub const DEFAULT_MAX_RESULTS: u32 = 100;

/// Longest response excerpt quoted in decode errors.
const RESPONSE_EXCERPT_LEN: usize = 500;

/// Panopto API client carrying the `.ASPXAUTH` token.
pub struct PanoptoApi {
    client: Client,
    auth_token: String,
    delivery_url: String,
    sessions_url: String,
    max_results: u32,
}

impl PanoptoApi {
    /// Create a new API client for the given endpoints.
    pub fn new(auth_token: String, delivery_url: String, sessions_url: String) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Request(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            auth_token,
            delivery_url,
            sessions_url,
            max_results: DEFAULT_MAX_RESULTS,
        })
    }

    /// Create a client from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            config.account.auth_token.clone(),
            config.endpoints.delivery_url.clone(),
            config.endpoints.sessions_url.clone(),
        )?
        .with_max_results(config.endpoints.max_results))
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    fn auth_cookie(&self) -> String {
        format!("{}={}", AUTH_COOKIE_NAME, self.auth_token)
    }

    /// Send an authenticated POST and return the body of a successful response.
    async fn send(&self, request: RequestBuilder) -> Result<String> {
        let response = request
            .header(header::COOKIE, self.auth_cookie())
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(Error::Authentication(format!(
                "HTTP {} (is the .ASPXAUTH token still valid?)",
                status
            )));
        }

        if !status.is_success() {
            return Err(Error::Request(format!("HTTP {}", status)));
        }

        let text = response.text().await?;
        tracing::debug!("Response body: {}", text);
        Ok(text)
    }

    /// Resolve a session id to the URL of its first stream.
    pub async fn resolve_stream_url(&self, session_id: &str) -> Result<String> {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("deliveryId", session_id)
            .append_pair("responseType", "json")
            .finish();

        tracing::debug!("POST {} ({})", self.delivery_url, body);

        let request = self
            .client
            .post(&self.delivery_url)
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded; charset=UTF-8",
            )
            .body(body);

        let text = self.send(request).await?;
        let info: DeliveryInfoResponse = decode(&text)?;

        info.first_stream_url()
            .map(str::to_string)
            .ok_or(Error::NoStreamsAvailable)
    }

    /// List the sessions of a folder, in server order.
    pub async fn list_sessions(&self, folder_id: &str) -> Result<Vec<Session>> {
        let body = SessionsRequest::new(folder_id, self.max_results);

        tracing::debug!("POST {} (folder {})", self.sessions_url, folder_id);

        let request = self.client.post(&self.sessions_url).json(&body);

        let text = self.send(request).await?;
        let response: SessionsResponse = decode(&text)?;

        Ok(response.into_sessions())
    }
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| {
        let excerpt: String = text.chars().take(RESPONSE_EXCERPT_LEN).collect();
        Error::Decode(format!("{} - Response: {}", e, excerpt))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio_test::assert_err;
    use wiremock::matchers::{body_json, body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TOKEN: &str = "TOKEN123";

    fn api_for(server: &MockServer) -> PanoptoApi {
        PanoptoApi::new(
            TOKEN.to_string(),
            format!("{}/DeliveryInfo.aspx", server.uri()),
            format!("{}/GetSessions", server.uri()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_resolve_returns_first_stream() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/DeliveryInfo.aspx"))
            .and(header("cookie", ".ASPXAUTH=TOKEN123"))
            .and(header(
                "content-type",
                "application/x-www-form-urlencoded; charset=UTF-8",
            ))
            .and(body_string("deliveryId=abc-123&responseType=json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Delivery": {"Streams": [
                    {"StreamUrl": "https://x/a.mp4"},
                    {"StreamUrl": "https://x/b.mp4"}
                ]}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let url = api_for(&server).resolve_stream_url("abc-123").await.unwrap();
        assert_eq!(url, "https://x/a.mp4");
    }

    #[tokio::test]
    async fn test_resolve_no_streams() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/DeliveryInfo.aspx"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"Delivery": {"Streams": []}})),
            )
            .mount(&server)
            .await;

        let err = api_for(&server).resolve_stream_url("abc").await.unwrap_err();
        assert!(matches!(err, Error::NoStreamsAvailable));
    }

    #[tokio::test]
    async fn test_resolve_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/DeliveryInfo.aspx"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
            .mount(&server)
            .await;

        let err = api_for(&server).resolve_stream_url("abc").await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        assert!(err.to_string().contains("<html>login</html>"));
    }

    #[tokio::test]
    async fn test_resolve_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = api_for(&server).resolve_stream_url("abc").await.unwrap_err();
        assert!(matches!(err, Error::Authentication(_)));
    }

    #[tokio::test]
    async fn test_list_sessions_request_and_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/GetSessions"))
            .and(header("cookie", ".ASPXAUTH=TOKEN123"))
            .and(body_json(json!({
                "queryParameters": {
                    "folderID": "folder-1",
                    "getFolderData": "true",
                    "maxResults": 100
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "d": {"Results": [
                    {"SessionName": "L1", "DeliveryID": "id1"},
                    {"SessionName": "L2", "DeliveryID": "id2"}
                ]}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let sessions = api_for(&server).list_sessions("folder-1").await.unwrap();
        assert_eq!(
            sessions,
            vec![
                Session { name: "L1".into(), id: "id1".into() },
                Session { name: "L2".into(), id: "id2".into() },
            ]
        );
    }

    #[tokio::test]
    async fn test_list_sessions_uses_max_results() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/GetSessions"))
            .and(body_json(json!({
                "queryParameters": {
                    "folderID": "f",
                    "getFolderData": "true",
                    "maxResults": 25
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"d": {"Results": []}})))
            .expect(1)
            .mount(&server)
            .await;

        let sessions = api_for(&server)
            .with_max_results(25)
            .list_sessions("f")
            .await
            .unwrap();
        assert!(sessions.is_empty());
    }

    #[tokio::test]
    async fn test_list_sessions_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = api_for(&server).list_sessions("f").await;
        let err = assert_err!(result);
        assert!(matches!(err, Error::Request(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_request_error() {
        let api = PanoptoApi::new(
            TOKEN.to_string(),
            "http://127.0.0.1:1/DeliveryInfo.aspx".to_string(),
            "http://127.0.0.1:1/GetSessions".to_string(),
        )
        .unwrap();

        let err = api.resolve_stream_url("abc").await.unwrap_err();
        assert!(matches!(err, Error::Request(_)));
    }
}
