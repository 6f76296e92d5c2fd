//! Authenticated JSON transport over `reqwest`.

use super::{ApiError, ApiResult};
use crate::auth::ports::SessionProvider;
use crate::config::BoardConfig;
use reqwest::{Method, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;

/// HTTP client for the persistence API, signing every request with the
/// current session's bearer token.
#[derive(Clone)]
pub struct ApiTransport {
    client: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionProvider>,
}

impl ApiTransport {
    /// Creates a transport from the board configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when the HTTP client cannot be built.
    pub fn new(config: &BoardConfig, session: Arc<dyn SessionProvider>) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(ApiError::network)?;
        Ok(Self::with_client(client, &config.api_base_url, session))
    }

    /// Creates a transport reusing an existing [`reqwest::Client`].
    #[must_use]
    pub fn with_client(
        client: reqwest::Client,
        base_url: &str,
        session: Arc<dyn SessionProvider>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            session,
        }
    }

    /// Returns the absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends a `GET` and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for missing sessions, transport failures,
    /// non-success statuses and undecodable bodies.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.send(self.request(Method::GET, path).await?).await?;
        decode(response).await
    }

    /// Sends a `POST` with a JSON body and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiTransport::get`].
    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path).await?.json(body);
        decode(self.send(request).await?).await
    }

    /// Sends a `PUT` with a JSON body and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiTransport::get`].
    pub async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let request = self.request(Method::PUT, path).await?.json(body);
        decode(self.send(request).await?).await
    }

    /// Sends a `DELETE`, ignoring any acknowledgement body.
    ///
    /// # Errors
    ///
    /// See [`ApiTransport::get`].
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.send(self.request(Method::DELETE, path).await?).await?;
        Ok(())
    }

    async fn request(&self, method: Method, path: &str) -> ApiResult<RequestBuilder> {
        let session = self
            .session
            .current_user()
            .await
            .map_err(|_| ApiError::NotAuthenticated)?
            .ok_or(ApiError::NotAuthenticated)?;
        Ok(self
            .client
            .request(method, self.url(path))
            .bearer_auth(session.access_token().expose()))
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await.map_err(ApiError::network)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_owned());
        tracing::debug!(status = status.as_u16(), %body, "persistence API request failed");
        Err(ApiError::from_status(status.as_u16(), body))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    response.json::<T>().await.map_err(|err| {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::network(err)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::ApiTransport;
    use crate::auth::adapters::memory::InMemorySessionProvider;
    use crate::persistence::ApiError;
    use rstest::rstest;
    use std::sync::Arc;

    fn transport(base_url: &str) -> ApiTransport {
        ApiTransport::with_client(
            reqwest::Client::new(),
            base_url,
            Arc::new(InMemorySessionProvider::new()),
        )
    }

    #[rstest]
    #[case("http://localhost:8000/api", "/tasks", "http://localhost:8000/api/tasks")]
    #[case("http://localhost:8000/api/", "tasks/1", "http://localhost:8000/api/tasks/1")]
    fn url_joins_base_and_path(#[case] base: &str, #[case] path: &str, #[case] expected: &str) {
        assert_eq!(transport(base).url(path), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn requests_without_session_fail_before_sending() {
        let result: Result<serde_json::Value, ApiError> =
            transport("http://127.0.0.1:9").get("/projects").await;
        assert!(matches!(result, Err(ApiError::NotAuthenticated)));
    }
}
