//! Data sources queried when the landing page loads.
//!
//! The traits are the seam between the page controller and the network:
//! [`GlobalApi`] talks to the backend with gloo-net, tests substitute
//! in-memory doubles.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use shared::api::endpoints;
use shared::{ApiClientConfig, ApiError, LoggedInUser};

/// Total number of replays the site has processed.
#[allow(async_fn_in_trait)]
pub trait ReplayCountService {
    async fn replay_count(&self) -> Result<u64, ApiError>;
}

/// The user behind the current browser session.
///
/// Fails with [`ApiError::Unauthenticated`] when nobody is signed in.
#[allow(async_fn_in_trait)]
pub trait UserIdentityService {
    async fn logged_in_user(&self) -> Result<LoggedInUser, ApiError>;
}

/// HTTP client for the site-wide endpoints
#[derive(Debug, Clone)]
pub struct GlobalApi {
    config: ApiClientConfig,
}

impl GlobalApi {
    pub fn new(config: ApiClientConfig) -> Self {
        Self { config }
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.config.url(endpoint);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_response(status, &body)
    }
}

impl ReplayCountService for GlobalApi {
    async fn replay_count(&self) -> Result<u64, ApiError> {
        self.get_json(endpoints::REPLAY_COUNT).await
    }
}

impl UserIdentityService for GlobalApi {
    async fn logged_in_user(&self) -> Result<LoggedInUser, ApiError> {
        self.get_json(endpoints::ME).await
    }
}

/// Turn a status and body into either the decoded payload or an [`ApiError`]
fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status, body));
    }
    Ok(serde_json::from_str(body)?)
}
