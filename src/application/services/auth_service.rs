//! Authentication Service
//!
//! Issues, refreshes and verifies JWT token pairs and manages account
//! credentials.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::JwtSettings;
use crate::domain::{NewUser, User, UserRepository};
use crate::shared::error::AppError;

/// Authentication service trait for dependency injection
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange credentials for an access/refresh token pair
    async fn obtain_token_pair(
        &self,
        username: &str,
        password: &str,
    ) -> Result<TokenPair, AuthError>;

    /// Issue a new access token from a refresh token
    async fn refresh_access_token(&self, refresh_token: &str) -> Result<String, AuthError>;

    /// Check that a token of either type is well formed, signed and unexpired
    async fn verify_token(&self, token: &str) -> Result<(), AuthError>;

    /// Resolve the active user behind an access token
    async fn authenticate(&self, access_token: &str) -> Result<User, AuthError>;

    /// Create an account with a hashed password
    async fn create_user(&self, account: NewAccount) -> Result<User, AuthError>;
}

/// Token pair returned on login
#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Account details for `create_user`
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Distinguishes access tokens from refresh tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    pub token_type: TokenType,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Unique token ID
    pub jti: String,
}

/// Authentication errors
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token has wrong type")]
    WrongTokenType,

    #[error("User not found")]
    UserNotFound,

    #[error("User is inactive")]
    UserInactive,

    #[error("Username already exists")]
    UsernameExists,

    #[error(transparent)]
    Repository(#[from] AppError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                AppError::Unauthorized("No active account found with the given credentials".into())
            }
            AuthError::TokenExpired | AuthError::InvalidToken | AuthError::WrongTokenType => {
                AppError::Unauthorized("Token is invalid or expired".into())
            }
            AuthError::UserNotFound => AppError::Unauthorized("User not found".into()),
            AuthError::UserInactive => AppError::Unauthorized("User is inactive".into()),
            AuthError::UsernameExists => {
                AppError::field("username", "A user with that username already exists.")
            }
            AuthError::Repository(e) => e,
            AuthError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// AuthService implementation
pub struct AuthServiceImpl {
    user_repo: Arc<dyn UserRepository>,
    jwt_settings: JwtSettings,
}

impl AuthServiceImpl {
    /// Create a new AuthServiceImpl
    pub fn new(user_repo: Arc<dyn UserRepository>, jwt_settings: JwtSettings) -> Self {
        Self {
            user_repo,
            jwt_settings,
        }
    }

    /// Hash a password using Argon2id
    fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::Internal(format!("Password hashing failed: {}", e)))
    }

    /// Verify a password against its hash
    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AuthError::Internal(format!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    fn issue_token(&self, user_id: i64, token_type: TokenType) -> Result<String, AuthError> {
        let now = Utc::now();
        let lifetime = match token_type {
            TokenType::Access => Duration::minutes(self.jwt_settings.access_token_expiry_minutes),
            TokenType::Refresh => Duration::days(self.jwt_settings.refresh_token_expiry_days),
        };

        let claims = Claims {
            sub: user_id.to_string(),
            token_type,
            exp: (now + lifetime).timestamp(),
            iat: now.timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_settings.secret.as_bytes()),
        )
        .map_err(|e| AuthError::Internal(format!("Token generation failed: {}", e)))
    }

    /// Decode and validate a token of any type
    fn decode_token(&self, token: &str) -> Result<Claims, AuthError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_settings.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        })?;

        Ok(token_data.claims)
    }

    /// Decode a token and require the given type, returning the user ID
    fn decode_typed(&self, token: &str, expected: TokenType) -> Result<i64, AuthError> {
        let claims = self.decode_token(token)?;
        if claims.token_type != expected {
            return Err(AuthError::WrongTokenType);
        }

        claims.sub.parse::<i64>().map_err(|_| AuthError::InvalidToken)
    }

    async fn active_user(&self, user_id: i64) -> Result<User, AuthError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !user.is_active {
            return Err(AuthError::UserInactive);
        }
        Ok(user)
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn obtain_token_pair(
        &self,
        username: &str,
        password: &str,
    ) -> Result<TokenPair, AuthError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.is_active || !self.verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(user_id = user.id, "Issued token pair");

        Ok(TokenPair {
            access: self.issue_token(user.id, TokenType::Access)?,
            refresh: self.issue_token(user.id, TokenType::Refresh)?,
        })
    }

    async fn refresh_access_token(&self, refresh_token: &str) -> Result<String, AuthError> {
        let user_id = self.decode_typed(refresh_token, TokenType::Refresh)?;
        let user = self.active_user(user_id).await?;

        self.issue_token(user.id, TokenType::Access)
    }

    async fn verify_token(&self, token: &str) -> Result<(), AuthError> {
        self.decode_token(token).map(|_| ())
    }

    async fn authenticate(&self, access_token: &str) -> Result<User, AuthError> {
        let user_id = self.decode_typed(access_token, TokenType::Access)?;
        self.active_user(user_id).await
    }

    async fn create_user(&self, account: NewAccount) -> Result<User, AuthError> {
        if self.user_repo.find_by_username(&account.username).await?.is_some() {
            return Err(AuthError::UsernameExists);
        }

        let user = self
            .user_repo
            .create(&NewUser {
                username: account.username,
                first_name: account.first_name,
                last_name: account.last_name,
                password_hash: self.hash_password(&account.password)?,
            })
            .await?;

        tracing::info!(user_id = user.id, username = %user.username, "User created");
        Ok(user)
    }
}
