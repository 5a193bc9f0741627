use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::auth::password;
use crate::auth::token::TokenService;
use crate::models::{Principal, PrincipalKind};
use crate::store::CredentialStore;
use crate::utils::error::AppError;

/// Registration payload shared by both principal kinds. Fields default to
/// empty so missing keys reach the validators instead of tripping serde.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// A freshly issued token plus the stored role, echoed by login.
#[derive(Debug)]
pub struct AuthGrant {
    pub token: String,
    pub role: String,
}

/// Registration and login for both principal kinds behind one code path.
/// The kind picks the backing table, the fixed role tag and the password
/// policy; everything else is identical.
#[derive(Clone)]
pub struct AccountService {
    credentials: Arc<dyn CredentialStore>,
    tokens: TokenService,
}

impl AccountService {
    pub fn new(credentials: Arc<dyn CredentialStore>, tokens: TokenService) -> Self {
        Self {
            credentials,
            tokens,
        }
    }

    /// Validation order is part of the API contract: name format, then email
    /// presence, then password presence, then policy, then uniqueness. The
    /// first failing check answers; nothing is written on failure.
    pub async fn register(
        &self,
        kind: PrincipalKind,
        request: &RegisterRequest,
    ) -> Result<AuthGrant, AppError> {
        let name = request.name.trim();
        let email = request.email.trim();
        let password = request.password.trim();

        if name.is_empty() || !name.chars().all(char::is_alphabetic) {
            return Err(AppError::ValidationError(
                "Name must contain only alphabetic characters.".to_string(),
            ));
        }
        if email.is_empty() {
            return Err(AppError::ValidationError("Email is required.".to_string()));
        }
        if password.is_empty() {
            return Err(AppError::ValidationError(
                "Password is required.".to_string(),
            ));
        }
        kind.password_policy()
            .check(password)
            .map_err(|msg| AppError::ValidationError(msg.to_string()))?;

        if self
            .credentials
            .find_by_email(kind, email)
            .await?
            .is_some()
        {
            return Err(AppError::ValidationError(
                "Email already exists.".to_string(),
            ));
        }

        let principal = Principal {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password::hash(password)?,
            role: kind.role().to_string(),
        };
        self.credentials.insert(kind, &principal).await?;
        info!(kind = kind.label(), email = %principal.email, "Registered principal");

        let token = self.tokens.issue(&principal)?;
        Ok(AuthGrant {
            token,
            role: principal.role,
        })
    }

    /// Unknown email and wrong password collapse into one answer so the
    /// endpoint does not reveal which of the two it was.
    pub async fn login(
        &self,
        kind: PrincipalKind,
        request: &LoginRequest,
    ) -> Result<AuthGrant, AppError> {
        let email = request.email.trim();
        let candidate = request.password.trim();

        if email.is_empty() || candidate.is_empty() {
            return Err(AppError::ValidationError(
                "Email and password are required.".to_string(),
            ));
        }

        match self.credentials.find_by_email(kind, email).await? {
            Some(principal) if password::verify(&principal.password_hash, candidate) => {
                let token = self.tokens.issue(&principal)?;
                Ok(AuthGrant {
                    token,
                    role: principal.role,
                })
            }
            _ => Err(AppError::AuthError("Invalid credentials".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryCredentialStore;

    fn service() -> AccountService {
        AccountService::new(
            Arc::new(MemoryCredentialStore::new()),
            TokenService::new("test-secret"),
        )
    }

    fn register_request(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn detail_of(err: AppError) -> String {
        match err {
            AppError::ValidationError(msg) | AppError::AuthError(msg) => msg,
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn register_then_login_round_trip() {
        let accounts = service();
        let grant = accounts
            .register(
                PrincipalKind::Admin,
                &register_request("Alice", "a@x.com", "secret1"),
            )
            .await
            .unwrap();
        assert_eq!(grant.role, "admin");

        let grant = accounts
            .login(
                PrincipalKind::Admin,
                &LoginRequest {
                    email: "a@x.com".to_string(),
                    password: "secret1".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(grant.role, "admin");
    }

    #[tokio::test]
    async fn validation_precedence_name_before_email_before_password() {
        let accounts = service();

        let err = accounts
            .register(PrincipalKind::Admin, &register_request("Alice1", "", ""))
            .await
            .unwrap_err();
        assert_eq!(
            detail_of(err),
            "Name must contain only alphabetic characters."
        );

        let err = accounts
            .register(PrincipalKind::Admin, &register_request("Alice", "", ""))
            .await
            .unwrap_err();
        assert_eq!(detail_of(err), "Email is required.");

        let err = accounts
            .register(
                PrincipalKind::Admin,
                &register_request("Alice", "a@x.com", ""),
            )
            .await
            .unwrap_err();
        assert_eq!(detail_of(err), "Password is required.");
    }

    #[tokio::test]
    async fn duplicate_email_rejected_within_kind_only() {
        let accounts = service();
        accounts
            .register(
                PrincipalKind::Admin,
                &register_request("Alice", "a@x.com", "secret1"),
            )
            .await
            .unwrap();

        let err = accounts
            .register(
                PrincipalKind::Admin,
                &register_request("Alicia", "a@x.com", "secret2"),
            )
            .await
            .unwrap_err();
        assert_eq!(detail_of(err), "Email already exists.");

        // The same email is still free for the other kind.
        accounts
            .register(
                PrincipalKind::User,
                &register_request("Alice", "a@x.com", "Str0ng!pass"),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn user_registration_enforces_strong_policy() {
        let accounts = service();
        let err = accounts
            .register(
                PrincipalKind::User,
                &register_request("Bob", "b@x.com", "Weak1"),
            )
            .await
            .unwrap_err();
        assert_eq!(
            detail_of(err),
            "Password must be at least 8 characters, include uppercase, lowercase, number, and special character."
        );
    }

    #[tokio::test]
    async fn login_failures_share_one_answer() {
        let accounts = service();
        accounts
            .register(
                PrincipalKind::Admin,
                &register_request("Alice", "a@x.com", "secret1"),
            )
            .await
            .unwrap();

        let unknown = accounts
            .login(
                PrincipalKind::Admin,
                &LoginRequest {
                    email: "nobody@x.com".to_string(),
                    password: "secret1".to_string(),
                },
            )
            .await
            .unwrap_err();
        let wrong = accounts
            .login(
                PrincipalKind::Admin,
                &LoginRequest {
                    email: "a@x.com".to_string(),
                    password: "wrong".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(detail_of(unknown), "Invalid credentials");
        assert_eq!(detail_of(wrong), "Invalid credentials");
    }

    #[tokio::test]
    async fn inputs_are_trimmed_before_validation() {
        let accounts = service();
        accounts
            .register(
                PrincipalKind::Admin,
                &register_request("  Alice  ", " a@x.com ", " secret1 "),
            )
            .await
            .unwrap();

        accounts
            .login(
                PrincipalKind::Admin,
                &LoginRequest {
                    email: "a@x.com".to_string(),
                    password: "secret1".to_string(),
                },
            )
            .await
            .unwrap();
    }
}
