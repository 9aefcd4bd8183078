//! Client for the external user directory.
//!
//! The directory is a json-server style endpoint: `GET /users` returns every
//! user record as a JSON array. There is no filtering, paging or auth; the
//! whole collection is fetched on every call.

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::Config;

/// A user record as served by the directory. Read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

impl UserRecord {
    /// Reads a record from one element of the directory array.
    ///
    /// Returns `None` unless `email` and `password` are both strings; such a
    /// record can never match a login. A `name` that is not a string is
    /// treated as absent. Other fields are ignored.
    pub fn from_value(value: &Value) -> Option<Self> {
        let email = value.get("email")?.as_str()?;
        let password = value.get("password")?.as_str()?;
        let name = value.get("name").and_then(Value::as_str);
        Some(Self {
            email: email.to_string(),
            password: password.to_string(),
            name: name.map(str::to_string),
        })
    }

    /// Name shown after login: `name` when present and non-empty, else `email`.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.email,
        }
    }
}

/// Transport-level failures talking to the directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("invalid users url: {0}")]
    InvalidUrl(String),

    #[error("request to user directory failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("user directory returned HTTP {0}")]
    Status(StatusCode),

    #[error("user directory returned malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP client bound to one users endpoint.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    users_url: Url,
    http: reqwest::Client,
}

impl DirectoryClient {
    /// Creates a client for `users_url` with the transport's default timeouts.
    pub fn new(users_url: Url) -> Self {
        Self {
            users_url,
            http: reqwest::Client::new(),
        }
    }

    /// Creates a client with an explicit request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_timeout(users_url: Url, timeout: Option<Duration>) -> Result<Self, DirectoryError> {
        let Some(timeout) = timeout else {
            return Ok(Self::new(users_url));
        };
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { users_url, http })
    }

    /// Builds a client from configuration (`users_url`, `request_timeout_secs`).
    ///
    /// # Errors
    /// Returns an error if `users_url` is invalid or the client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, DirectoryError> {
        let users_url = config
            .users_url()
            .map_err(|e| DirectoryError::InvalidUrl(format!("{e:#}")))?;
        Self::with_timeout(users_url, config.request_timeout())
    }

    pub fn users_url(&self) -> &Url {
        &self.users_url
    }

    /// Fetches the full user collection.
    ///
    /// Issues exactly one GET. Any non-2xx status or a body that is not a
    /// JSON array is an error. Elements that do not carry string `email` and
    /// `password` fields are skipped; the rest keep their order.
    ///
    /// # Errors
    /// Returns [`DirectoryError`] on connection, status or decode failure.
    pub async fn fetch_users(&self) -> Result<Vec<UserRecord>, DirectoryError> {
        debug!(url = %self.users_url, "fetching user directory");

        let response = self.http.get(self.users_url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status(status));
        }

        let body = response.bytes().await?;
        let records: Vec<Value> = serde_json::from_slice(&body)?;
        let users: Vec<UserRecord> = records.iter().filter_map(UserRecord::from_value).collect();
        debug!(
            count = users.len(),
            skipped = records.len() - users.len(),
            "user directory loaded"
        );
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer) -> DirectoryClient {
        let url = Url::parse(&format!("{}/users", server.uri())).unwrap();
        DirectoryClient::new(url)
    }

    #[test]
    fn test_display_name_prefers_non_empty_name() {
        let named = UserRecord {
            email: "a@x.com".to_string(),
            password: "p1".to_string(),
            name: Some("Ann".to_string()),
        };
        assert_eq!(named.display_name(), "Ann");

        let empty_name = UserRecord {
            name: Some(String::new()),
            ..named.clone()
        };
        assert_eq!(empty_name.display_name(), "a@x.com");

        let unnamed = UserRecord { name: None, ..named };
        assert_eq!(unnamed.display_name(), "a@x.com");
    }

    #[test]
    fn test_user_record_ignores_unknown_fields() {
        let user = UserRecord::from_value(&serde_json::json!(
            {"id": 1, "email": "b@x.com", "password": "p2", "role": "admin"}
        ))
        .unwrap();
        assert_eq!(user.email, "b@x.com");
        assert_eq!(user.name, None);
    }

    #[test]
    fn test_user_record_requires_string_credentials() {
        let records = [
            serde_json::json!({"email": "svc@x.com", "password": 1234}),
            serde_json::json!({"password": "p1"}),
            serde_json::json!({"email": null, "password": "p1"}),
            serde_json::json!("a@x.com"),
        ];
        for record in &records {
            assert_eq!(UserRecord::from_value(record), None, "{record}");
        }
    }

    #[test]
    fn test_user_record_non_string_name_is_absent() {
        let user = UserRecord::from_value(&serde_json::json!(
            {"email": "a@x.com", "password": "p1", "name": 7}
        ))
        .unwrap();
        assert_eq!(user.name, None);
        assert_eq!(user.display_name(), "a@x.com");
    }

    #[tokio::test]
    async fn test_fetch_users_skips_odd_records() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "email": "svc@x.com", "password": 1234},
                {"id": 2, "password": "p0"},
                {"id": 3, "email": "a@x.com", "password": "p1", "name": "Ann"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let users = client_for(&server).fetch_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].display_name(), "Ann");
    }

    #[tokio::test]
    async fn test_fetch_users_non_array_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(
                {"email": "a@x.com", "password": "p1"}
            )))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_users().await.unwrap_err();
        assert!(matches!(err, DirectoryError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_users_returns_collection_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"email": "a@x.com", "password": "p1", "name": "Ann"},
                {"email": "b@x.com", "password": "p2"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let users = client_for(&server).fetch_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].email, "a@x.com");
        assert_eq!(users[1].email, "b@x.com");
    }

    #[tokio::test]
    async fn test_fetch_users_non_success_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_users().await.unwrap_err();
        assert!(matches!(err, DirectoryError::Status(s) if s == StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn test_fetch_users_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_users().await.unwrap_err();
        assert!(matches!(err, DirectoryError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_users_unreachable_is_request_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = Url::parse(&format!("http://{addr}/users")).unwrap();
        let err = DirectoryClient::new(url).fetch_users().await.unwrap_err();
        assert!(matches!(err, DirectoryError::Request(_)));
    }

    #[test]
    fn test_from_config_rejects_invalid_url() {
        let config = Config {
            users_url: "nope".to_string(),
            ..Config::default()
        };
        let err = DirectoryClient::from_config(&config).unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidUrl(_)));
    }
}
