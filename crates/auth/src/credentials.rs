use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Role;

/// Outcome of a successful credential check.
///
/// Carries only what the verifier knows: the login identifier and the role the
/// account is registered under. Building the full [`crate::Principal`] is the
/// caller's job (a partner principal comes from the roster).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedAccount {
    pub identifier: String,
    pub role: Role,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Credential verification seam.
///
/// Stand-in for a real identity service: given an identifier and a secret,
/// either name the account or refuse.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, identifier: &str, secret: &str) -> Result<VerifiedAccount, AuthError>;
}

/// A fixed login account held by [`StaticCredentials`].
#[derive(Debug, Clone, PartialEq, Eq)]
struct StaticAccount {
    identifier: String,
    secret: String,
    role: Role,
}

/// Fixed in-memory credential table.
///
/// Comparison is exact (no trimming, no case folding, no hashing); this is a
/// mock with no security claims.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    accounts: Vec<StaticAccount>,
}

impl StaticCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account. A later registration for the same identifier wins.
    pub fn with_account(
        mut self,
        identifier: impl Into<String>,
        secret: impl Into<String>,
        role: Role,
    ) -> Self {
        let identifier = identifier.into();
        self.accounts.retain(|a| a.identifier != identifier);
        self.accounts.push(StaticAccount {
            identifier,
            secret: secret.into(),
            role,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, identifier: &str, secret: &str) -> Result<VerifiedAccount, AuthError> {
        self.accounts
            .iter()
            .find(|a| a.identifier == identifier && a.secret == secret)
            .map(|a| VerifiedAccount {
                identifier: a.identifier.clone(),
                role: a.role,
            })
            .ok_or(AuthError::InvalidCredentials)
    }
}
