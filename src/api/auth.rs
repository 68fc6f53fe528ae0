//! Session endpoints and the unauthenticated health check.

use crate::client::{Query, RecotemClient};
use crate::error::Error;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
struct RefreshRequest<'a> {
    refresh: &'a str,
}

#[derive(Debug, Deserialize)]
struct RefreshResponse {
    access: String,
}

impl RecotemClient {
    /// Exchange a username and password for a JWT pair.
    ///
    /// # Errors
    ///
    /// Returns the server's status and body on rejection.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, Error> {
        self.post_json("auth/login/", &LoginRequest { username, password })
            .await
    }

    /// Obtain a new access token; the refresh token itself is unchanged.
    ///
    /// # Errors
    ///
    /// Returns the server's status and body on rejection.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<String, Error> {
        let response: RefreshResponse = self
            .post_json(
                "auth/token/refresh/",
                &RefreshRequest {
                    refresh: refresh_token,
                },
            )
            .await?;
        Ok(response.access)
    }

    /// Invalidate a refresh token on the server.
    ///
    /// # Errors
    ///
    /// Returns the server's status and body on rejection.
    pub async fn blacklist_refresh_token(&self, refresh_token: &str) -> Result<(), Error> {
        self.post_action(
            "auth/token/blacklist/",
            Some(&RefreshRequest {
                refresh: refresh_token,
            }),
        )
        .await?;
        Ok(())
    }

    /// `GET /api/v1/ping/`, returning the raw body.
    ///
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn ping(&self) -> Result<String, Error> {
        self.get_text("ping/", &Query::new()).await
    }
}
