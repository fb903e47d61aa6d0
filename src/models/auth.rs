//! Session identity: JWT claims wrapping the backend bearer token.

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{Error, FromRequest, HttpRequest, web};
use chrono::{Duration, Utc};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::models::config::ServerConfig;

/// Operator signed in to the console.
///
/// Carries the backend bearer token inside the signed identity cookie;
/// decoded from it on every request, never cached between requests.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Operator email (JWT subject).
    pub sub: String,
    /// Bearer token for the back-office API.
    pub token: String,
    /// Expiry, seconds since the epoch.
    pub exp: usize,
}

impl AuthenticatedUser {
    #[must_use]
    pub fn new(email: impl Into<String>, token: impl Into<String>) -> Self {
        let exp = (Utc::now() + Duration::hours(24)).timestamp() as usize;
        Self {
            sub: email.into(),
            token: token.into(),
            exp,
        }
    }

    /// Signs the claims into the string stored in the identity cookie.
    pub fn to_jwt(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    fn from_jwt(jwt: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        decode::<Self>(
            jwt,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let identity = Identity::extract(&req)
                .await
                .map_err(|_| ErrorUnauthorized("not signed in"))?;
            let jwt = identity
                .id()
                .map_err(|_| ErrorUnauthorized("not signed in"))?;
            let secret = req
                .app_data::<web::Data<ServerConfig>>()
                .map(|config| config.secret.clone())
                .ok_or_else(|| ErrorUnauthorized("server configuration missing"))?;

            Self::from_jwt(&jwt, &secret).map_err(|_| ErrorUnauthorized("session expired"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789012345678901234567890123456789012345678901234567890123";

    #[test]
    fn claims_round_trip_through_the_jwt() {
        let user = AuthenticatedUser::new("ops@example.test", "bearer-token");
        let jwt = user.to_jwt(SECRET).unwrap();
        let decoded = AuthenticatedUser::from_jwt(&jwt, SECRET).unwrap();
        assert_eq!(decoded.sub, "ops@example.test");
        assert_eq!(decoded.token, "bearer-token");
    }

    #[test]
    fn a_tampered_jwt_is_rejected() {
        let user = AuthenticatedUser::new("ops@example.test", "bearer-token");
        let jwt = user.to_jwt(SECRET).unwrap();
        assert!(AuthenticatedUser::from_jwt(&jwt, "another-secret-another-secret-another-secret-another-secret-0000").is_err());
    }
}
