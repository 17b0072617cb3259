//! Care2Connect backend client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api::{AuthApi, CaseApi, ChildApi, FamilyApi, HealthApi};
use super::models::{
    Case, Child, ChildUpdate, FosterFamily, FosterPlacement, HealthService, LoginRequest, NewCase,
    NewChild, NewFosterFamily, NewHealthService, NewPlacement, RefreshRequest, RefreshResponse,
    TokenPair,
};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::session::SharedSessionStore;

/// Backend API client.
///
/// Reads the access token from the session store on every request, so a
/// token replaced by a refresh is picked up without rebuilding the client.
pub struct CareClient {
    http: HttpClient,
    base_url: String,
    store: SharedSessionStore,
}

impl CareClient {
    /// Create a client for the configured backend
    pub fn new(config: &Config, store: SharedSessionStore) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            store,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request, attaching `Authorization: Bearer` when a token is stored
    async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        let url = self.url(path);
        let mut request = self.http.request(method.clone(), &url);

        match self.store.get()?.access_token {
            Some(token) => request = request.bearer_auth(token),
            None => log::warn!("No access token for request: {} {}", method, path),
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        log::debug!("{} {}", method, path);
        let response = request.send().await.map_err(ApiError::from)?;
        Self::handle_response(response).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<T, ()>(Method::GET, path, None).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    /// Map status codes onto `ApiError`
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        match status {
            StatusCode::OK | StatusCode::CREATED => {
                let data = response.json::<T>().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
                Ok(data)
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Resource not found".to_string());
                Err(ApiError::NotFound(error_msg).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(error_msg).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }
}

#[async_trait]
impl AuthApi for CareClient {
    async fn obtain_token(&self, username: &str, password: &str) -> Result<TokenPair> {
        // Token endpoints never carry a bearer header
        let response = self
            .http
            .post(self.url("/api/token/"))
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(ApiError::from)?;
        Self::handle_response(response).await
    }

    async fn refresh_access(&self, refresh_token: &str) -> Result<String> {
        let response = self
            .http
            .post(self.url("/api/token/refresh/"))
            .json(&RefreshRequest {
                refresh: refresh_token,
            })
            .send()
            .await
            .map_err(ApiError::from)?;

        match response.status() {
            StatusCode::OK => {
                let body: RefreshResponse = response.json().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse refresh response: {}", e))
                })?;
                Ok(body.access)
            }
            // The endpoint rejected the refresh token itself
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            _ => Self::handle_response::<RefreshResponse>(response)
                .await
                .map(|body| body.access),
        }
    }
}

#[async_trait]
impl CaseApi for CareClient {
    async fn list_cases(&self) -> Result<Vec<Case>> {
        self.get("/api/cases/").await
    }

    async fn get_case(&self, id: i64) -> Result<Case> {
        self.get(&format!("/api/cases/{}/", id)).await
    }

    async fn create_case(&self, case: &NewCase) -> Result<Case> {
        self.post("/api/cases/", case).await
    }
}

#[async_trait]
impl ChildApi for CareClient {
    async fn list_children(&self) -> Result<Vec<Child>> {
        self.get("/api/children/").await
    }

    async fn get_child(&self, id: i64) -> Result<Child> {
        self.get(&format!("/api/children/{}/", id)).await
    }

    async fn create_child(&self, child: &NewChild) -> Result<Child> {
        self.post("/api/children/", child).await
    }

    async fn update_child(&self, id: i64, update: &ChildUpdate) -> Result<Child> {
        self.patch(&format!("/api/children/{}/", id), update).await
    }
}

#[async_trait]
impl FamilyApi for CareClient {
    async fn list_foster_families(&self) -> Result<Vec<FosterFamily>> {
        self.get("/api/foster-families/").await
    }

    async fn create_foster_family(&self, family: &NewFosterFamily) -> Result<FosterFamily> {
        self.post("/api/foster-families/", family).await
    }

    async fn list_placements(&self) -> Result<Vec<FosterPlacement>> {
        self.get("/api/foster-placements/").await
    }

    async fn create_placement(&self, placement: &NewPlacement) -> Result<FosterPlacement> {
        self.post("/api/foster-placements/", placement).await
    }
}

#[async_trait]
impl HealthApi for CareClient {
    async fn list_health_services(&self) -> Result<Vec<HealthService>> {
        self.get("/api/health-services/").await
    }

    async fn create_health_service(&self, service: &NewHealthService) -> Result<HealthService> {
        self.post("/api/health-services/", service).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::Error;
    use crate::session::{MemorySessionStore, Session};

    fn client_for(url: &str, access: Option<&str>) -> CareClient {
        let config = Config::default().with_api_url(Some(url));
        let store = MemorySessionStore::with_session(Session {
            access_token: access.map(str::to_string),
            refresh_token: Some("r1".into()),
            groups: vec!["Caseworker".into()],
        });
        CareClient::new(&config, Arc::new(store)).unwrap()
    }

    #[tokio::test]
    async fn test_bearer_header_attached() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/cases/")
            .match_header("authorization", "Bearer a1")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = client_for(&server.url(), Some("a1"));
        let cases = client.list_cases().await.unwrap();

        assert!(cases.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_no_header_without_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/children/")
            .match_header("authorization", mockito::Matcher::Missing)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = client_for(&server.url(), None);
        client.list_children().await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/cases/1/")
            .with_status(404)
            .with_body("missing")
            .create_async()
            .await;
        server
            .mock("GET", "/api/cases/2/")
            .with_status(403)
            .create_async()
            .await;
        server
            .mock("GET", "/api/cases/3/")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = client_for(&server.url(), Some("a1"));
        assert!(matches!(
            client.get_case(1).await,
            Err(Error::Api(ApiError::NotFound(_)))
        ));
        assert!(matches!(
            client.get_case(2).await,
            Err(Error::Api(ApiError::Forbidden))
        ));
        assert!(matches!(
            client.get_case(3).await,
            Err(Error::Api(ApiError::ServerError(_)))
        ));
    }

    #[tokio::test]
    async fn test_obtain_token() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/token/")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "username": "fp1",
                "password": "secret"
            })))
            .with_status(200)
            .with_body(r#"{"access":"a1","refresh":"r1","groups":["FosterParent"]}"#)
            .create_async()
            .await;

        let client = client_for(&server.url(), None);
        let pair = client.obtain_token("fp1", "secret").await.unwrap();
        assert_eq!(pair.access, "a1");
        assert_eq!(pair.groups, vec!["FosterParent".to_string()]);
    }

    #[tokio::test]
    async fn test_refresh_unauthorized_is_rejection() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/token/refresh/")
            .with_status(401)
            .with_body(r#"{"detail":"Token is invalid or expired"}"#)
            .create_async()
            .await;

        let client = client_for(&server.url(), None);
        assert!(matches!(
            client.refresh_access("r1").await,
            Err(Error::Api(ApiError::Unauthorized))
        ));
    }

    #[tokio::test]
    async fn test_refresh_bad_request_is_rejection() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/token/refresh/")
            .with_status(400)
            .with_body(r#"{"refresh":["This field may not be blank."]}"#)
            .create_async()
            .await;

        let client = client_for(&server.url(), None);
        assert!(matches!(
            client.refresh_access("r1").await,
            Err(Error::Api(ApiError::Unauthorized))
        ));
    }

    #[tokio::test]
    async fn test_refresh_outage_is_server_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/token/refresh/")
            .with_status(503)
            .with_body("maintenance")
            .create_async()
            .await;

        let client = client_for(&server.url(), None);
        assert!(matches!(
            client.refresh_access("r1").await,
            Err(Error::Api(ApiError::ServerError(_)))
        ));
    }

    #[tokio::test]
    async fn test_refresh_outage_keeps_session() {
        use crate::auth::token::unsigned_token;
        use crate::auth::{AuthState, TokenRefresher};
        use crate::error::AuthError;
        use crate::session::SessionStore;

        let mut server = mockito::Server::new_async().await;
        let refresh = server
            .mock("POST", "/api/token/refresh/")
            .with_status(503)
            .with_body("maintenance")
            .expect(1)
            .create_async()
            .await;

        let now = chrono::Utc::now();
        let config = Config::default().with_api_url(Some(&server.url()));
        let store = Arc::new(MemorySessionStore::with_session(Session {
            access_token: Some(unsigned_token(now.timestamp() - 10)),
            refresh_token: Some("r1".into()),
            groups: vec!["Caseworker".into()],
        }));
        let client = Arc::new(CareClient::new(&config, store.clone()).unwrap());
        let refresher = TokenRefresher::new(store.clone(), client);

        assert!(matches!(
            refresher.check_at(now).await,
            AuthState::Unauthorized(AuthError::ServerUnavailable(_))
        ));
        refresh.assert_async().await;
        let session = store.get().unwrap();
        assert_eq!(session.refresh_token.as_deref(), Some("r1"));
        assert_eq!(session.groups, vec!["Caseworker".to_string()]);
    }

    #[tokio::test]
    async fn test_refresh_success() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/token/refresh/")
            .match_body(mockito::Matcher::Json(serde_json::json!({"refresh": "r1"})))
            .with_status(200)
            .with_body(r#"{"access":"a2"}"#)
            .create_async()
            .await;

        let client = client_for(&server.url(), None);
        assert_eq!(client.refresh_access("r1").await.unwrap(), "a2");
    }
}
