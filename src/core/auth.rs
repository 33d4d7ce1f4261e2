//! Admin authentication and signed bearer tokens.
//!
//! Credentials are checked by direct equality against the `admins` table, with
//! one hard-coded demo pair as a fallback when no stored admin matches; the
//! demo pair is how a fresh deployment is first logged into. Successful logins
//! are issued an HS256-signed, expiring JWT that protected routes verify
//! server-side on every request.

use crate::{
    entities::{Admin, admin},
    errors::{Error, Result},
};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use sea_orm::{Set, prelude::*};
use serde::{Deserialize, Serialize};

/// Email of the built-in demo account
pub const DEMO_EMAIL: &str = "admin@desa.go.id";
/// Password of the built-in demo account
pub const DEMO_PASSWORD: &str = "admin123";

/// Signing and verification keys plus the token lifetime.
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl TokenKeys {
    /// Derives both keys from the shared HMAC secret.
    #[must_use]
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }
}

/// Claims carried in the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Admin ID
    pub sub: i64,
    /// Admin email
    pub email: String,
    /// Issued-at, unix seconds
    pub iat: i64,
    /// Expiry, unix seconds
    pub exp: i64,
}

/// Signs a token for an authenticated admin.
pub fn issue_token(keys: &TokenKeys, admin_id: i64, email: &str) -> Result<String> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: admin_id,
        email: email.to_string(),
        iat: now,
        exp: now + keys.ttl_secs,
    };

    encode(&Header::default(), &claims, &keys.encoding).map_err(Into::into)
}

/// Verifies a token's signature and expiry, returning its claims.
pub fn verify_token(keys: &TokenKeys, token: &str) -> Result<Claims> {
    let data = decode::<Claims>(token, &keys.decoding, &Validation::default())?;
    Ok(data.claims)
}

/// A successful login: the admin record plus a freshly signed token.
#[derive(Debug)]
pub struct LoginSuccess {
    /// The authenticated admin
    pub admin: admin::Model,
    /// Signed bearer token for subsequent requests
    pub token: String,
    /// True when the demo fallback authenticated this login
    pub demo: bool,
}

/// Outcome of a login attempt. Credential mismatch is a business result, not
/// an error; `Err` is reserved for storage and signing failures.
#[derive(Debug)]
pub enum LoginOutcome {
    /// Credentials accepted
    Success(LoginSuccess),
    /// No stored or demo credentials matched
    InvalidCredentials,
}

/// Checks credentials and issues a token.
///
/// The stored table is consulted first; the demo pair only authenticates when
/// no stored admin matched the supplied credentials.
pub async fn login(
    db: &DatabaseConnection,
    keys: &TokenKeys,
    email: &str,
    password: &str,
) -> Result<LoginOutcome> {
    let stored = Admin::find()
        .filter(admin::Column::Email.eq(email))
        .filter(admin::Column::Password.eq(password))
        .one(db)
        .await?;

    if let Some(admin) = stored {
        let token = issue_token(keys, admin.id, &admin.email)?;
        return Ok(LoginOutcome::Success(LoginSuccess {
            admin,
            token,
            demo: false,
        }));
    }

    if email == DEMO_EMAIL && password == DEMO_PASSWORD {
        let now = chrono::Utc::now();
        let admin = admin::Model {
            id: 1,
            nama: "Administrator".to_string(),
            email: DEMO_EMAIL.to_string(),
            password: String::new(),
            created_at: now,
            updated_at: now,
        };
        let token = issue_token(keys, admin.id, &admin.email)?;
        return Ok(LoginOutcome::Success(LoginSuccess {
            admin,
            token,
            demo: true,
        }));
    }

    Ok(LoginOutcome::InvalidCredentials)
}

/// Creates an admin account.
pub async fn create_admin(
    db: &DatabaseConnection,
    nama: String,
    email: String,
    password: String,
) -> Result<admin::Model> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(Error::Validation {
            message: "email and password cannot be empty".to_string(),
        });
    }

    let now = chrono::Utc::now();
    let account = admin::ActiveModel {
        nama: Set(nama),
        email: Set(email.trim().to_string()),
        password: Set(password),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let created = account.insert(db).await?;
    Ok(created)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;

    fn test_keys() -> TokenKeys {
        TokenKeys::new("test-secret", 3600)
    }

    #[tokio::test]
    async fn test_login_with_stored_credentials() -> Result<()> {
        let db = setup_test_db().await?;
        let keys = test_keys();
        create_admin(
            &db,
            "Operator".to_string(),
            "operator@desa.go.id".to_string(),
            "rahasia".to_string(),
        )
        .await?;

        let outcome = login(&db, &keys, "operator@desa.go.id", "rahasia").await?;
        match outcome {
            LoginOutcome::Success(success) => {
                assert_eq!(success.admin.email, "operator@desa.go.id");
                assert!(!success.demo);
                let claims = verify_token(&keys, &success.token)?;
                assert_eq!(claims.sub, success.admin.id);
                assert_eq!(claims.email, "operator@desa.go.id");
            }
            LoginOutcome::InvalidCredentials => panic!("expected successful login"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_login_wrong_credentials_is_structured_failure() -> Result<()> {
        let db = setup_test_db().await?;
        let keys = test_keys();
        create_admin(
            &db,
            "Operator".to_string(),
            "operator@desa.go.id".to_string(),
            "rahasia".to_string(),
        )
        .await?;

        let outcome = login(&db, &keys, "operator@desa.go.id", "salah").await?;
        assert!(matches!(outcome, LoginOutcome::InvalidCredentials));

        Ok(())
    }

    #[tokio::test]
    async fn test_demo_login_works_on_fresh_deployment() -> Result<()> {
        let db = setup_test_db().await?;
        let keys = test_keys();

        let outcome = login(&db, &keys, DEMO_EMAIL, DEMO_PASSWORD).await?;
        match outcome {
            LoginOutcome::Success(success) => {
                assert!(success.demo);
                assert_eq!(success.admin.email, DEMO_EMAIL);
            }
            LoginOutcome::InvalidCredentials => panic!("expected demo login"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_stored_credentials_win_over_demo_fallback() -> Result<()> {
        let db = setup_test_db().await?;
        let keys = test_keys();
        let stored = create_admin(
            &db,
            "Admin Asli".to_string(),
            DEMO_EMAIL.to_string(),
            "password-sendiri".to_string(),
        )
        .await?;

        let outcome = login(&db, &keys, DEMO_EMAIL, "password-sendiri").await?;
        match outcome {
            LoginOutcome::Success(success) => {
                assert!(!success.demo);
                assert_eq!(success.admin.id, stored.id);
            }
            LoginOutcome::InvalidCredentials => panic!("expected stored login"),
        }

        Ok(())
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let keys = TokenKeys::new("test-secret", -120);
        let token = issue_token(&keys, 1, "operator@desa.go.id").unwrap();

        let result = verify_token(&keys, &token);
        assert!(result.is_err());
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let keys = test_keys();
        let other = TokenKeys::new("another-secret", 3600);
        let token = issue_token(&other, 1, "operator@desa.go.id").unwrap();

        let result = verify_token(&keys, &token);
        assert!(result.is_err());
    }
}
