use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::domain::error::DomainError;
use crate::domain::models::User;
use crate::domain::password::verify_password;
use crate::domain::repos::UsersRepository;

/// Claims carried by issued bearer tokens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: OffsetDateTime,
    pub user: User,
}

/// Password login and bearer-token verification (HS256).
pub struct AuthService {
    users: Arc<dyn UsersRepository>,
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl AuthService {
    pub fn new(users: Arc<dyn UsersRepository>, cfg: &AuthConfig) -> Self {
        Self {
            users,
            encoding: EncodingKey::from_secret(cfg.jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(cfg.jwt_secret.as_bytes()),
            ttl: Duration::from_secs(cfg.token_ttl_secs),
        }
    }

    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedToken, DomainError> {
        let Some(user) = self.users.find_by_email(email).await? else {
            warn!("login for unknown email");
            return Err(DomainError::InvalidCredentials);
        };
        if !verify_password(password, &user.password_hash) {
            warn!(user_id = %user.id, "login with wrong password");
            return Err(DomainError::InvalidCredentials);
        }

        let issued_at = OffsetDateTime::now_utc();
        let expires_at = issued_at + self.ttl;
        let claims = Claims {
            sub: user.id,
            iat: issued_at.unix_timestamp(),
            exp: expires_at.unix_timestamp(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| DomainError::internal(format!("token encoding failed: {e}")))?;

        info!(user_id = %user.id, "user logged in");
        Ok(IssuedToken {
            token,
            expires_at,
            user,
        })
    }

    /// Resolve a bearer token to its user.
    #[instrument(skip_all)]
    pub async fn authenticate(&self, token: &str) -> Result<User, DomainError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))
            .map_err(|e| DomainError::unauthorized(format!("invalid token: {e}")))?;

        let user_id = data.claims.sub;
        debug!(%user_id, "token verified");
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::unauthorized("unknown subject"))
    }
}
