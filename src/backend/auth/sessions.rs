/**
 * Session Tokens
 *
 * The token codec: a session is a signed, self-contained JWT carrying the
 * user's id, email, and role, valid for exactly 60 minutes from issuance.
 * Nothing is persisted server-side; a token remains cryptographically valid
 * until its natural expiry even after logout clears the cookie.
 *
 * Key material is supplied at process start (see `Config`), never embedded.
 * Several secrets may be active at once: the first signs new tokens, every
 * entry verifies, so secrets can rotate without invalidating sessions issued
 * under the previous one.
 */

use crate::shared::roles::Role;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Session lifetime: 60 minutes.
pub const TOKEN_TTL_SECS: u64 = 60 * 60;

/// Claims encoded into a session token.
///
/// Claims are a snapshot taken at issuance; they are never re-derived from
/// the store, so they can go stale relative to the user record until the
/// next login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: user id.
    pub sub: Uuid,
    pub email: String,
    pub role: Role,
    /// Issued at (Unix timestamp).
    pub iat: u64,
    /// Expiry (Unix timestamp), `iat` + 60 minutes.
    pub exp: u64,
}

/// Active signing/verification keys.
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: Vec<DecodingKey>,
}

impl SessionKeys {
    /// Build keys from the configured secrets. The first secret signs; all
    /// of them verify. Panics on an empty slice are avoided by `Config`,
    /// which rejects an empty `SESSION_KEYS`.
    pub fn new(secrets: &[String]) -> Self {
        debug_assert!(!secrets.is_empty());
        SessionKeys {
            encoding: EncodingKey::from_secret(secrets[0].as_bytes()),
            decoding: secrets
                .iter()
                .map(|s| DecodingKey::from_secret(s.as_bytes()))
                .collect(),
        }
    }

    /// Issue a token for a user, expiring 60 minutes from now.
    pub fn issue(
        &self,
        user_id: Uuid,
        email: String,
        role: Role,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = unix_now();
        let claims = Claims {
            sub: user_id,
            email,
            role,
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };
        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token and return the claims encoded at issuance.
    ///
    /// Fails when the signature matches none of the active keys, when the
    /// token is structurally malformed, or when the current time is at or
    /// past the encoded expiry. No leeway: a consumer cannot distinguish an
    /// expired or tampered token from an absent one.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let mut last_err = None;
        for key in &self.decoding {
            match decode::<Claims>(token, key, &validation) {
                Ok(data) => return Ok(data.claims),
                Err(e) => last_err = Some(e),
            }
        }
        // decoding is never empty, so last_err is always set here
        Err(last_err.expect("at least one decoding key"))
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::errors::ErrorKind;

    fn keys(secrets: &[&str]) -> SessionKeys {
        let secrets: Vec<String> = secrets.iter().map(|s| s.to_string()).collect();
        SessionKeys::new(&secrets)
    }

    #[test]
    fn test_issue_then_verify_returns_same_claims() {
        let keys = keys(&["test-secret"]);
        let user_id = Uuid::new_v4();
        let token = keys
            .issue(user_id, "a@x.com".to_string(), Role::Patient)
            .unwrap();

        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.role, Role::Patient);
        assert_eq!(claims.exp, claims.iat + TOKEN_TTL_SECS);
    }

    #[test]
    fn test_verify_rejects_other_secret() {
        let signer = keys(&["secret-a"]);
        let verifier = keys(&["secret-b"]);
        let token = signer
            .issue(Uuid::new_v4(), "a@x.com".to_string(), Role::Doctor)
            .unwrap();

        let err = verifier.verify(&token).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidSignature));
    }

    #[test]
    fn test_rotated_keys_still_verify_old_tokens() {
        let old = keys(&["old-secret"]);
        let token = old
            .issue(Uuid::new_v4(), "a@x.com".to_string(), Role::Admin)
            .unwrap();

        // New deployment signs with a fresh secret but keeps the old one
        // for verification.
        let rotated = keys(&["new-secret", "old-secret"]);
        assert!(rotated.verify(&token).is_ok());

        // A token signed under the new secret verifies too.
        let fresh = rotated
            .issue(Uuid::new_v4(), "b@x.com".to_string(), Role::Admin)
            .unwrap();
        assert!(rotated.verify(&fresh).is_ok());
    }

    #[test]
    fn test_verify_rejects_truncated_token() {
        let keys = keys(&["test-secret"]);
        let token = keys
            .issue(Uuid::new_v4(), "a@x.com".to_string(), Role::Patient)
            .unwrap();

        let truncated = &token[..token.len() - 10];
        assert!(keys.verify(truncated).is_err());
        assert!(keys.verify("not.a.jwt").is_err());
        assert!(keys.verify("").is_err());
    }

    #[test]
    fn test_verify_rejects_tampered_payload() {
        let keys = keys(&["test-secret"]);
        let token = keys
            .issue(Uuid::new_v4(), "a@x.com".to_string(), Role::Patient)
            .unwrap();

        // Graft the signature onto a token carrying different claims. The
        // result is structurally valid but the signature no longer matches.
        let other = keys
            .issue(Uuid::new_v4(), "b@x.com".to_string(), Role::Admin)
            .unwrap();
        let payload = other.split('.').nth(1).unwrap();
        let (header, signature) = {
            let mut parts = token.split('.');
            (parts.next().unwrap(), parts.nth(1).unwrap())
        };
        let tampered = format!("{header}.{payload}.{signature}");
        assert!(keys.verify(&tampered).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let keys = keys(&["test-secret"]);
        let now = unix_now();
        // Encode directly with an expiry one second in the past, as if the
        // token were issued just over an hour ago.
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            role: Role::Patient,
            iat: now - TOKEN_TTL_SECS - 1,
            exp: now - 1,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let err = keys.verify(&token).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ExpiredSignature));
    }

    #[test]
    fn test_token_just_inside_lifetime_is_accepted() {
        let keys = keys(&["test-secret"]);
        let now = unix_now();
        // One second of lifetime left (the 59:59 case).
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            role: Role::Patient,
            iat: now - (TOKEN_TTL_SECS - 1),
            exp: now + 1,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(keys.verify(&token).is_ok());
    }
}
