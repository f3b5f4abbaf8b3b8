//! Account operations: registration, login, logout.
//!
//! Token issuance and verification are the backend's business; this side
//! only stores what comes back and clears it on logout. Logout is
//! best-effort: the server call may fail, local state is dropped anyway.

use super::ApiClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Registration payload.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

/// Tokens returned by a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

impl ApiClient {
    /// Create an account. Validation failures surface with field-level
    /// messages.
    pub async fn register(&self, request: &RegisterRequest) -> Result<()> {
        let resp = self
            .send(self.http_post_json("auth/register/", request))
            .await?;
        // Body content is informational only
        let _ = resp.bytes().await;
        Ok(())
    }

    /// Log in and store both tokens. The two writes are separate
    /// operations; a crash between them leaves a half-written session,
    /// which the presence-only auth check tolerates.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair> {
        let tokens: TokenPair = self
            .post_json("auth/login/", &json!({ "email": email, "password": password }))
            .await?;
        self.session().store_tokens(&tokens.access, &tokens.refresh);
        Ok(tokens)
    }

    /// Log out: tell the server to blacklist the refresh token, then clear
    /// local auth state regardless of what the server said.
    pub async fn logout(&self) {
        if let Some(refresh) = self.session().refresh_token() {
            let result = self
                .send(self.http_post_json("auth/logout/", &json!({ "refresh_token": refresh })))
                .await;
            if let Err(e) = result {
                log::warn!("logout request failed, clearing local session anyway: {}", e);
            }
        }
        self.session().clear_auth();
    }

    fn http_post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> reqwest::RequestBuilder {
        self.http.post(self.url(path)).json(body)
    }
}
