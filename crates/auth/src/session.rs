//! The session slot: at most one current principal.

use crate::{Principal, Role};

/// Holds the current authenticated principal, if any.
///
/// In-memory and process-lifetime only. Credential checks happen before a
/// principal reaches this type; `begin` never fails.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    current: Option<Principal>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current principal.
    pub fn begin(&mut self, principal: Principal) {
        tracing::info!(
            principal_id = %principal.id(),
            role = %principal.role(),
            "session started"
        );
        self.current = Some(principal);
    }

    /// Clear the current principal. Idempotent.
    pub fn end(&mut self) {
        if let Some(p) = self.current.take() {
            tracing::info!(principal_id = %p.id(), "session ended");
        }
    }

    pub fn current(&self) -> Option<&Principal> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_parent_admin(&self) -> bool {
        self.role() == Some(Role::Parent)
    }

    pub fn is_partner_admin(&self) -> bool {
        self.role() == Some(Role::Partner)
    }

    fn role(&self) -> Option<Role> {
        self.current.as_ref().map(Principal::role)
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

    #[test]
    fn starts_unauthenticated() {
        let s = SessionState::new();
        assert!(s.current().is_none());
        assert!(!s.is_authenticated());
        assert!(!s.is_parent_admin());
        assert!(!s.is_partner_admin());
    }

    #[test]
    fn begin_then_end() {
        let mut s = SessionState::new();
        s.begin(parent());
        assert!(s.is_parent_admin());
        s.end();
        assert!(s.current().is_none());
        s.end();
        assert!(s.current().is_none());
    }

    #[test]
    fn begin_replaces_previous_principal() {
        let mut s = SessionState::new();
        s.begin(parent());
        s.begin(Principal::partner(
            AccountId::from_u128(2),
            ContactInfo::new("John Smith", "partner@example.com", ""),
            PartnerPermissions::default(),
        ));
        assert!(s.is_partner_admin());
        assert_eq!(s.current().map(Principal::id), Some(AccountId::from_u128(2)));
    }
}
