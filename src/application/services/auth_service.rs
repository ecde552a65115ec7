//! Bearer token verification for write operations.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Fixed message authenticated under each token.
const TOKEN_CONTEXT: &[u8] = b"link-registry/api-token";

/// Service for authenticating management requests.
///
/// The configured secret is never compared byte by byte. Each token is used as
/// an HMAC-SHA256 key over a fixed message, and the presented token's tag is
/// checked against the configured one with [`Mac::verify_slice`], which runs in
/// constant time.
pub struct AuthService {
    expected_tag: Vec<u8>,
}

impl AuthService {
    /// Creates a new authentication service for the configured secret.
    pub fn new(api_token: &str) -> Self {
        Self {
            expected_tag: Self::mac_for(api_token).finalize().into_bytes().to_vec(),
        }
    }

    fn mac_for(token: &str) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(token.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(TOKEN_CONTEXT);
        mac
    }

    /// Checks a presented bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token does not match.
    pub fn authenticate(&self, token: &str) -> Result<(), AppError> {
        Self::mac_for(token)
            .verify_slice(&self.expected_tag)
            .map_err(|_| AppError::unauthorized("Unauthorized").with_detail("Invalid token"))
    }
}
