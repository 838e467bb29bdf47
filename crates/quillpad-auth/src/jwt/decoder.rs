//! JWT token validation and blocklist checking.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use uuid::Uuid;

use quillpad_cache::provider::CacheManager;
use quillpad_core::config::auth::AuthConfig;
use quillpad_core::error::AppError;
use quillpad_core::traits::CacheProvider;

use super::claims::{Claims, TokenType};

/// Cache key prefix for blocklisted JWT IDs.
const BLOCKLIST_PREFIX: &str = "quillpad:jwt:blocklist:";

/// Validates JWT tokens and checks blocklist status.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// Cache manager for blocklist lookups.
    cache: Arc<CacheManager>,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig, cache: Arc<CacheManager>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            cache,
        }
    }

    /// Decodes and validates an access token string.
    ///
    /// Checks:
    /// 1. Signature validity
    /// 2. Expiration
    /// 3. Token type is Access
    /// 4. JTI not in blocklist
    pub async fn decode_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;

        if claims.token_type != TokenType::Access {
            return Err(AppError::unauthorized(
                "Invalid token type: expected access token",
            ));
        }

        self.check_blocklist(&claims.jti).await?;

        Ok(claims)
    }

    /// Decodes and validates a refresh token string.
    pub async fn decode_refresh_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;

        if claims.token_type != TokenType::Refresh {
            return Err(AppError::unauthorized(
                "Invalid token type: expected refresh token",
            ));
        }

        self.check_blocklist(&claims.jti).await?;

        Ok(claims)
    }

    /// Internal decode without type checking.
    fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::unauthorized("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::unauthorized("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::unauthorized("Invalid token signature")
                    }
                    _ => AppError::unauthorized(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Checks whether the given JWT ID has been blocklisted.
    async fn check_blocklist(&self, jti: &Uuid) -> Result<(), AppError> {
        let key = format!("{BLOCKLIST_PREFIX}{jti}");
        let blocked = self.cache.get(&key).await.ok().flatten();
        if blocked.is_some() {
            return Err(AppError::unauthorized("Token has been revoked"));
        }
        Ok(())
    }

    /// Adds a JWT ID to the blocklist with the remaining TTL.
    pub async fn blocklist_token(
        &self,
        jti: Uuid,
        remaining_ttl_seconds: u64,
    ) -> Result<(), AppError> {
        let key = format!("{BLOCKLIST_PREFIX}{jti}");
        // Minimum 60 seconds so a just-expiring token cannot race its own revocation.
        let ttl = std::time::Duration::from_secs(remaining_ttl_seconds.max(60));
        self.cache
            .set(&key, "revoked", ttl)
            .await
            .map_err(|e| AppError::internal(format!("Failed to blocklist token: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use quillpad_cache::memory::MemoryCacheProvider;
    use quillpad_core::config::cache::MemoryCacheConfig;

    fn make_pair() -> (JwtEncoder, JwtDecoder) {
        let config = AuthConfig::default();
        let cache = Arc::new(CacheManager::from_provider(Arc::new(
            MemoryCacheProvider::new(&MemoryCacheConfig { max_capacity: 100 }),
        )));
        (JwtEncoder::new(&config), JwtDecoder::new(&config, cache))
    }

    #[tokio::test]
    async fn test_roundtrip() {
        let (encoder, decoder) = make_pair();
        let user_id = Uuid::new_v4();
        let session_id = Uuid::new_v4();

        let pair = encoder
            .generate_token_pair(user_id, session_id, "writer", Uuid::new_v4())
            .unwrap();

        let claims = decoder.decode_access_token(&pair.access_token).await.unwrap();
        assert_eq!(claims.user_id(), user_id);
        assert_eq!(claims.session_id(), session_id);
        assert_eq!(claims.username, "writer");
    }

    #[tokio::test]
    async fn test_refresh_token_rejected_as_access() {
        let (encoder, decoder) = make_pair();
        let pair = encoder
            .generate_token_pair(Uuid::new_v4(), Uuid::new_v4(), "writer", Uuid::new_v4())
            .unwrap();

        let err = decoder
            .decode_access_token(&pair.refresh_token)
            .await
            .unwrap_err();
        assert_eq!(err.kind, quillpad_core::error::ErrorKind::Unauthorized);
    }

    #[tokio::test]
    async fn test_blocklisted_token_rejected() {
        let (encoder, decoder) = make_pair();
        let pair = encoder
            .generate_token_pair(Uuid::new_v4(), Uuid::new_v4(), "writer", Uuid::new_v4())
            .unwrap();

        let claims = decoder.decode_access_token(&pair.access_token).await.unwrap();
        decoder
            .blocklist_token(claims.jti, claims.remaining_ttl_seconds())
            .await
            .unwrap();

        assert!(decoder.decode_access_token(&pair.access_token).await.is_err());
    }

    #[tokio::test]
    async fn test_garbage_token_rejected() {
        let (_, decoder) = make_pair();
        assert!(decoder.decode_access_token("not-a-token").await.is_err());
    }
}
