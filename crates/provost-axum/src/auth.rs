//! Basic-auth extractor.
//!
//! Resolves the `Authorization: Basic` header to an authenticated caller.
//! Permission decisions stay in the core services; this module only turns
//! credentials into an [`Actor`].

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use base64::Engine;

use crate::error::HttpError;
use crate::state::AppState;
use provost_core::{Actor, UserAccount};

/// An authenticated caller: the stored account plus the permission-bearing
/// actor derived from it.
///
/// Use this as a handler argument on every route that requires
/// authentication. Requests without valid credentials are rejected with
/// 401 and a `WWW-Authenticate: Basic` challenge before the handler runs.
pub struct AuthedUser {
    pub account: UserAccount,
    pub actor: Actor,
}

/// Split an `Authorization: Basic` header value into username and password.
fn decode_basic(header_value: &str) -> Option<(String, String)> {
    let encoded = header_value
        .strip_prefix("Basic ")
        .or_else(|| header_value.strip_prefix("basic "))?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .ok()?;
    let text = String::from_utf8(bytes).ok()?;
    let mut parts = text.splitn(2, ':');
    let username = parts.next()?.to_string();
    let password = parts.next()?.to_string();
    Some((username, password))
}

impl FromRequestParts<AppState> for AuthedUser {
    type Rejection = HttpError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let credentials = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(decode_basic);

        let Some((username, password)) = credentials else {
            tracing::warn!(
                path = %parts.uri.path(),
                "Unauthorized API request - missing or invalid credentials"
            );
            return Err(HttpError::Unauthorized(
                "Authentication required".to_string(),
            ));
        };

        let account = state.core.auth().authenticate(&username, &password).await?;
        let actor = state.core.directory().actor_for(&account).await?;
        Ok(Self { account, actor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_basic_round_trip() {
        let encoded = base64::engine::general_purpose::STANDARD.encode("root:swordfish");
        let decoded = decode_basic(&format!("Basic {encoded}"));
        assert_eq!(
            decoded,
            Some(("root".to_string(), "swordfish".to_string()))
        );
    }

    #[test]
    fn test_decode_basic_keeps_colons_in_the_password() {
        let encoded = base64::engine::general_purpose::STANDARD.encode("root:pass:with:colons");
        let decoded = decode_basic(&format!("Basic {encoded}"));
        assert_eq!(
            decoded,
            Some(("root".to_string(), "pass:with:colons".to_string()))
        );
    }

    #[test]
    fn test_decode_basic_rejects_other_schemes_and_garbage() {
        assert_eq!(decode_basic("Bearer abc123"), None);
        assert_eq!(decode_basic("Basic not!base64!"), None);
        let no_colon = base64::engine::general_purpose::STANDARD.encode("rootonly");
        assert_eq!(decode_basic(&format!("Basic {no_colon}")), None);
    }
}
