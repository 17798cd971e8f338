//! Authentication service issuing and verifying JWT bearer tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::JwtSettings;
use crate::error::AppError;

/// Lifetime of an issued access token.
pub const ACCESS_TOKEN_TTL_MINUTES: i64 = 120;

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the username the token was issued for.
    pub sub: String,
    /// Unique token identifier.
    pub jti: String,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

/// Service for minting and verifying bearer tokens.
///
/// Tokens are HS256-signed with the shared secret from [`JwtSettings`].
/// Verification requires a valid signature, matching issuer and audience,
/// and an unexpired token with zero clock-skew tolerance. There is no
/// refresh or revocation: a token stays valid until it expires.
pub struct AuthService {
    issuer: String,
    audience: String,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthService {
    /// Creates a new authentication service from signing settings.
    pub fn new(settings: &JwtSettings) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[settings.issuer.as_str()]);
        validation.set_audience(&[settings.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation.leeway = 0;

        Self {
            issuer: settings.issuer.clone(),
            audience: settings.audience.clone(),
            encoding_key: EncodingKey::from_secret(settings.key.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.key.as_bytes()),
            validation,
        }
    }

    /// Issues a two-hour access token for `username`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if the username is blank.
    /// Returns [`AppError::Internal`] if signing fails.
    pub fn issue_token(&self, username: &str) -> Result<String, AppError> {
        self.issue_token_with_ttl(username, Duration::minutes(ACCESS_TOKEN_TTL_MINUTES))
    }

    /// Issues a token with a custom lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if the username is blank.
    /// Returns [`AppError::Internal`] if signing fails.
    pub fn issue_token_with_ttl(&self, username: &str, ttl: Duration) -> Result<String, AppError> {
        if username.trim().is_empty() {
            return Err(AppError::bad_request("Username required."));
        }

        let now = Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            jti: Uuid::new_v4().to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("failed to sign token: {e}")))
    }

    /// Verifies a raw bearer token and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, signed with
    /// another key, issued for another issuer/audience, or expired.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::unauthorized(format!("invalid token: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> JwtSettings {
        JwtSettings::default()
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let service = AuthService::new(&settings());

        let token = service.issue_token("alice").unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.iss, settings().issuer);
        assert_eq!(claims.aud, settings().audience);
        assert_eq!(claims.exp - claims.iat, ACCESS_TOKEN_TTL_MINUTES * 60);
    }

    #[test]
    fn test_each_token_has_unique_jti() {
        let service = AuthService::new(&settings());

        let a = service.verify(&service.issue_token("alice").unwrap()).unwrap();
        let b = service.verify(&service.issue_token("alice").unwrap()).unwrap();

        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_blank_username_rejected() {
        let service = AuthService::new(&settings());

        let result = service.issue_token("   ");

        assert!(matches!(result.unwrap_err(), AppError::BadRequest(_)));
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = AuthService::new(&settings());

        let token = service
            .issue_token_with_ttl("alice", Duration::seconds(-5))
            .unwrap();

        assert!(matches!(
            service.verify(&token).unwrap_err(),
            AppError::Unauthorized(_)
        ));
    }

    #[test]
    fn test_token_signed_with_other_key_rejected() {
        let other = AuthService::new(&JwtSettings {
            key: "another-secret-key-that-is-long-enough-123".to_string(),
            ..settings()
        });
        let service = AuthService::new(&settings());

        let token = other.issue_token("mallory").unwrap();

        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn test_wrong_audience_rejected() {
        let other = AuthService::new(&JwtSettings {
            audience: "SomeoneElse".to_string(),
            ..settings()
        });
        let service = AuthService::new(&settings());

        let token = other.issue_token("alice").unwrap();

        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let other = AuthService::new(&JwtSettings {
            issuer: "NotUs".to_string(),
            ..settings()
        });
        let service = AuthService::new(&settings());

        let token = other.issue_token("alice").unwrap();

        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = AuthService::new(&settings());
        assert!(service.verify("not-a-jwt").is_err());
    }
}
