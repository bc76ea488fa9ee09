use serde::Serialize;
use thiserror::Error;

use crate::{Capability, Principal, Role};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("not authenticated")]
    Unauthenticated,

    #[error("forbidden: missing permission '{0}'")]
    Forbidden(Capability),
}

/// Authorize the current principal (if any) for a capability.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn authorize(principal: Option<&Principal>, required: Capability) -> Result<(), AuthzError> {
    let Some(principal) = principal else {
        tracing::debug!(required = %required, "authorization denied: no session");
        return Err(AuthzError::Unauthenticated);
    };

    if principal.can(required) {
        tracing::debug!(
            principal_id = %principal.id(),
            required = %required,
            "authorization granted"
        );
        Ok(())
    } else {
        tracing::debug!(
            principal_id = %principal.id(),
            role = %principal.role(),
            required = %required,
            "authorization denied"
        );
        Err(AuthzError::Forbidden(required))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Authorization Explanation (Audit Trail)
// ─────────────────────────────────────────────────────────────────────────────

/// Detailed explanation of an authorization decision.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorizationExplanation {
    /// The capability that was being checked.
    pub required: Capability,

    /// Whether the authorization was granted.
    pub granted: bool,

    /// Human-readable reason for the decision.
    pub reason: String,

    /// Role of the principal, if there was one.
    pub role: Option<Role>,

    /// Everything the principal currently holds (sorted).
    pub effective_capabilities: Vec<Capability>,

    /// If denied, what would fix it.
    pub suggestions: Vec<String>,
}

/// Explain why an authorization decision was made (or would be made).
pub fn explain_authorization(
    principal: Option<&Principal>,
    required: Capability,
) -> AuthorizationExplanation {
    let Some(principal) = principal else {
        return AuthorizationExplanation {
            required,
            granted: false,
            reason: "No principal is signed in".to_string(),
            role: None,
            effective_capabilities: Vec::new(),
            suggestions: vec!["Sign in with an admin account".to_string()],
        };
    };

    let mut effective = principal.permissions().granted();
    effective.sort();
    let granted = principal.can(required);

    let (reason, suggestions) = match (granted, principal.role()) {
        (true, Role::Parent) => (
            "Parent admins hold every capability".to_string(),
            Vec::new(),
        ),
        (true, Role::Partner) => (
            format!("Partner record grants '{required}'"),
            Vec::new(),
        ),
        (false, _) if required == Capability::ManageAdmins => (
            "Partner admins can never manage other admins".to_string(),
            vec!["Ask the parent admin to perform this operation".to_string()],
        ),
        (false, _) => (
            format!("Partner record does not grant '{required}'"),
            vec![format!(
                "Ask the parent admin to enable '{required}' on this partner"
            )],
        ),
    };

    AuthorizationExplanation {
        required,
        granted,
        reason,
        role: Some(principal.role()),
        effective_capabilities: effective,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ContactInfo, PartnerPermissions};
    use ashroy_core::AccountId;

    fn parent() -> Principal {
        Principal::parent(
            AccountId::from_u128(1),
            ContactInfo::new("Ashroy Admin", "admin@ashroy.com", ""),
        )
    }

    fn partner(perms: PartnerPermissions) -> Principal {
        Principal::partner(
            AccountId::from_u128(2),
            ContactInfo::new("John Smith", "partner@example.com", ""),
            perms,
        )
    }

    #[test]
    fn no_principal_is_unauthenticated() {
        assert_eq!(
            authorize(None, Capability::ManageRooms),
            Err(AuthzError::Unauthenticated)
        );
    }

    #[test]
    fn parent_is_always_granted() {
        let p = parent();
        for c in Capability::ALL {
            assert!(authorize(Some(&p), c).is_ok());
        }
    }

    #[test]
    fn partner_is_denied_manage_admins() {
        let p = partner(PartnerPermissions::default());
        assert!(authorize(Some(&p), Capability::ManageRooms).is_ok());
        assert_eq!(
            authorize(Some(&p), Capability::ManageAdmins),
            Err(AuthzError::Forbidden(Capability::ManageAdmins))
        );
    }

    #[test]
    fn explanation_for_missing_capability() {
        let p = partner(PartnerPermissions {
            view_analytics: false,
            ..PartnerPermissions::default()
        });
        let e = explain_authorization(Some(&p), Capability::ViewAnalytics);
        assert!(!e.granted);
        assert_eq!(e.role, Some(Role::Partner));
        assert!(!e.effective_capabilities.contains(&Capability::ViewAnalytics));
        assert_eq!(e.suggestions.len(), 1);
    }

    #[test]
    fn explanation_for_manage_admins_on_partner() {
        let p = partner(PartnerPermissions::default());
        let e = explain_authorization(Some(&p), Capability::ManageAdmins);
        assert!(!e.granted);
        assert!(e.reason.contains("never"));
    }

    #[test]
    fn explanation_without_session() {
        let e = explain_authorization(None, Capability::ManageRooms);
        assert!(!e.granted);
        assert!(e.role.is_none());
        assert!(e.effective_capabilities.is_empty());
    }
}
