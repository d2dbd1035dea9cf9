use super::http::{self, RemoteService};
use crate::models::{ApiResponse, AuthSession, Credentials, Registration};
use crate::types::ClientResult;
use reqwest::Method;
use tracing::{info, warn};

/// Login, registration and profile endpoints
#[derive(Debug, Clone)]
pub struct AuthClient {
    service: RemoteService,
}

impl AuthClient {
    pub fn new(service: RemoteService) -> Self {
        Self { service }
    }

    pub async fn login(&self, credentials: &Credentials) -> ClientResult<ApiResponse<AuthSession>> {
        let request = self.service.request(Method::POST, "/auth/login").json(credentials);
        let response = http::send(request).await?;

        if !response.status().is_success() {
            let err = http::rejection(response, "Failed to authenticate").await;
            warn!(email = %credentials.email, error = %err, "Login rejected");
            return Err(err);
        }

        let session: AuthSession = http::decode(response).await?;
        info!(email = %credentials.email, "Logged in");
        Ok(ApiResponse::ok(session, "Login successful"))
    }

    pub async fn register(&self, registration: &Registration) -> ClientResult<ApiResponse<AuthSession>> {
        let request = self
            .service
            .request(Method::POST, "/auth/register")
            .json(registration);
        let response = http::send(request).await?;

        if !response.status().is_success() {
            let err = http::rejection(response, "Failed to register user").await;
            warn!(email = %registration.email, error = %err, "Registration rejected");
            return Err(err);
        }

        let session: AuthSession = http::decode(response).await?;
        info!(email = %registration.email, "Registered");
        Ok(ApiResponse::ok(session, "Registration successful"))
    }

    /// Profile of the user owning the current bearer token
    pub async fn user_profile(&self) -> ClientResult<ApiResponse<serde_json::Value>> {
        let response = http::send(self.service.authorized(Method::GET, "/users/profile")).await?;

        if !response.status().is_success() {
            return Err(http::rejection(response, "Failed to fetch user profile").await);
        }

        let profile = http::decode(response).await?;
        Ok(ApiResponse::ok(profile, "Profile retrieved successfully"))
    }
}
