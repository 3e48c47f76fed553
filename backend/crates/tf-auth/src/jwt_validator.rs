use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Accepted clock skew between the token issuer and this server.
const LEEWAY_SECONDS: u64 = 30;

/// Verifies bearer tokens against one key and yields their claims.
///
/// `exp` and `nbf` are enforced; a token whose `sub` is not a UUID is
/// rejected even when its signature checks out.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    /// Shared-secret validator
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self::build(DecodingKey::from_secret(secret), Algorithm::HS256)
    }

    /// Public-key validator from a PEM-encoded RSA key
    #[track_caller]
    pub fn with_rs256(public_key_pem: &str) -> AuthErrorResult<Self> {
        let key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes()).map_err(|e| {
            AuthError::InvalidToken {
                message: format!("Invalid RSA public key: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(Self::build(key, Algorithm::RS256))
    }

    fn build(decoding_key: DecodingKey, algorithm: Algorithm) -> Self {
        let mut validation = Validation::new(algorithm);
        validation.validate_nbf = true;
        validation.leeway = LEEWAY_SECONDS;

        Self {
            decoding_key,
            validation,
        }
    }

    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let location = ErrorLocation::from(Location::caller());

        let claims = match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => data.claims,
            Err(e) if matches!(e.kind(), ErrorKind::ExpiredSignature) => {
                return Err(AuthError::TokenExpired { location });
            }
            Err(source) => return Err(AuthError::JwtDecode { source, location }),
        };

        claims.validate()?;
        Ok(claims)
    }

    pub fn algorithm(&self) -> &'static str {
        match self.validation.algorithms.first() {
            Some(Algorithm::HS256) => "HS256",
            Some(Algorithm::RS256) => "RS256",
            _ => "unknown",
        }
    }
}
