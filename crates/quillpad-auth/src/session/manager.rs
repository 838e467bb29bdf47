//! Session lifecycle manager — login, logout, refresh token flows.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use quillpad_core::config::auth::AuthConfig;
use quillpad_core::error::AppError;
use quillpad_database::repositories::user::UserRepository;
use quillpad_entity::session::Session;
use quillpad_entity::user::User;

use crate::jwt::encoder::TokenPair;
use crate::jwt::{Claims, JwtDecoder, JwtEncoder};
use crate::password::PasswordHasher;

use super::store::SessionStore;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// Generated token pair.
    pub tokens: TokenPair,
    /// Created session.
    pub session: Session,
    /// The authenticated user.
    pub user: User,
}

/// Manages the complete session lifecycle.
#[derive(Debug, Clone)]
pub struct SessionManager {
    /// JWT encoder for token generation.
    jwt_encoder: Arc<JwtEncoder>,
    /// JWT decoder for token validation.
    jwt_decoder: Arc<JwtDecoder>,
    /// Session persistence.
    session_store: Arc<SessionStore>,
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    password_hasher: Arc<PasswordHasher>,
    /// Auth configuration.
    auth_config: AuthConfig,
}

impl SessionManager {
    /// Creates a new session manager with all required dependencies.
    pub fn new(
        jwt_encoder: Arc<JwtEncoder>,
        jwt_decoder: Arc<JwtDecoder>,
        session_store: Arc<SessionStore>,
        user_repo: Arc<UserRepository>,
        password_hasher: Arc<PasswordHasher>,
        auth_config: AuthConfig,
    ) -> Self {
        Self {
            jwt_encoder,
            jwt_decoder,
            session_store,
            user_repo,
            password_hasher,
            auth_config,
        }
    }

    /// Performs the complete login flow:
    ///
    /// 1. Find the user and check lockout state
    /// 2. Verify the password, tracking failed attempts
    /// 3. Create a session row
    /// 4. Generate the JWT token pair bound to that session
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        ip_address: &str,
        user_agent: Option<&str>,
    ) -> Result<LoginResult, AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid username or password"))?;

        if user.is_locked() {
            warn!(user_id = %user.id, "Login attempt on locked account");
            return Err(AppError::unauthorized(
                "Account is temporarily locked. Try again later.",
            ));
        }

        let password_valid = self
            .password_hasher
            .verify_password(password, &user.password_hash)?;

        if !password_valid {
            self.handle_failed_login(&user).await?;
            return Err(AppError::unauthorized("Invalid username or password"));
        }

        self.user_repo.reset_failed_attempts(user.id).await?;
        self.user_repo.update_last_login(user.id).await?;

        let refresh_jti = Uuid::new_v4();
        let session = self
            .session_store
            .create_session(user.id, refresh_jti, ip_address, user_agent)
            .await?;

        let tokens = self.jwt_encoder.generate_token_pair(
            user.id,
            session.id,
            &user.username,
            refresh_jti,
        )?;

        info!(user_id = %user.id, session_id = %session.id, "User logged in");

        Ok(LoginResult {
            tokens,
            session,
            user,
        })
    }

    /// Validates that the session behind a set of claims is still active,
    /// refreshing its last-seen timestamp.
    pub async fn validate_session(&self, session_id: Uuid) -> Result<Session, AppError> {
        let session = self
            .session_store
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Session not found"))?;

        if !session.is_active() {
            return Err(AppError::unauthorized("Session is no longer active"));
        }

        self.session_store.touch(session.id).await?;
        Ok(session)
    }

    /// Logs out: revokes the session and blocklists the presented access token.
    pub async fn logout(&self, claims: &Claims) -> Result<(), AppError> {
        self.session_store.revoke(claims.sid).await?;
        self.jwt_decoder
            .blocklist_token(claims.jti, claims.remaining_ttl_seconds())
            .await?;

        info!(user_id = %claims.sub, session_id = %claims.sid, "User logged out");
        Ok(())
    }

    /// Exchanges a refresh token for a new token pair, rotating the refresh JTI.
    ///
    /// A refresh token whose JTI no longer matches the session's stored JTI has
    /// been superseded (or replayed) and is rejected.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let claims = self.jwt_decoder.decode_refresh_token(refresh_token).await?;

        let session = self
            .session_store
            .find_by_id(claims.sid)
            .await?
            .ok_or_else(|| AppError::unauthorized("Session not found"))?;

        if !session.is_active() {
            return Err(AppError::unauthorized("Session is no longer active"));
        }

        if session.refresh_jti != claims.jti {
            warn!(session_id = %session.id, "Superseded refresh token presented");
            return Err(AppError::unauthorized("Refresh token has been superseded"));
        }

        let new_jti = Uuid::new_v4();
        self.session_store
            .rotate_refresh_jti(session.id, new_jti)
            .await?;
        self.jwt_decoder
            .blocklist_token(claims.jti, claims.remaining_ttl_seconds())
            .await?;

        self.jwt_encoder
            .generate_token_pair(claims.sub, session.id, &claims.username, new_jti)
    }

    /// Records a failed login attempt, locking the account once the
    /// configured threshold is reached.
    async fn handle_failed_login(&self, user: &User) -> Result<(), AppError> {
        let attempts = self.user_repo.increment_failed_attempts(user.id).await?;

        if attempts >= self.auth_config.max_failed_attempts {
            let until =
                Utc::now() + Duration::minutes(self.auth_config.lockout_duration_minutes as i64);
            self.user_repo.lock_until(user.id, until).await?;
            warn!(
                user_id = %user.id,
                attempts,
                "Account locked after repeated failed logins"
            );
        }

        Ok(())
    }
}
