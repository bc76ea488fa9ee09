use thiserror::Error;

use ashroy_auth::{AuthError, AuthzError};
use ashroy_core::DomainError;

/// Back-office operation failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackOfficeError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Authz(#[from] AuthzError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl BackOfficeError {
    /// Stable machine-readable code, for the admin UI's inline messages.
    pub fn code(&self) -> &'static str {
        match self {
            BackOfficeError::Auth(AuthError::InvalidCredentials) => "invalid_credentials",
            BackOfficeError::Authz(AuthzError::Unauthenticated) => "unauthenticated",
            BackOfficeError::Authz(AuthzError::Forbidden(_)) => "forbidden",
            BackOfficeError::Domain(DomainError::Validation(_)) => "validation_error",
            BackOfficeError::Domain(DomainError::InvariantViolation(_)) => "invariant_violation",
            BackOfficeError::Domain(DomainError::InvalidId(_)) => "invalid_id",
            BackOfficeError::Domain(DomainError::NotFound(_)) => "not_found",
            BackOfficeError::Domain(DomainError::Conflict(_)) => "conflict",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, BackOfficeError::Domain(e) if e.is_not_found())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ashroy_auth::Capability;

    #[test]
    fn codes_are_stable() {
        assert_eq!(
            BackOfficeError::from(AuthError::InvalidCredentials).code(),
            "invalid_credentials"
        );
        assert_eq!(
            BackOfficeError::from(AuthzError::Forbidden(Capability::ManageAdmins)).code(),
            "forbidden"
        );
        assert_eq!(
            BackOfficeError::from(DomainError::not_found("admin")).code(),
            "not_found"
        );
    }

    #[test]
    fn display_is_transparent() {
        let e = BackOfficeError::from(AuthError::InvalidCredentials);
        assert_eq!(e.to_string(), "invalid credentials");
    }
}
