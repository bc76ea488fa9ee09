//! The back-office service object.

use chrono::Utc;

use ashroy_auth::{
    AuthError, AuthorizationExplanation, AuthzError, Capability, CredentialVerifier, Principal,
    Role, SessionState, StaticCredentials, authorize, explain_authorization,
};
use ashroy_core::{AccountId, DomainError, DomainResult};
use ashroy_roster::{
    AdminPatch, AdminRecord, AdminStats, ApplicationDetails, ApplicationForm,
    InMemoryPartnerDirectory, NewAdmin, PartnerApplication, PartnerDirectory, seed,
};

use crate::config::{BackOfficeConfig, ParentAccount};
use crate::error::BackOfficeError;
use crate::sections::AdminSection;
use crate::summary::RosterSummary;

/// Session, credentials and partner directory behind one owner.
///
/// Session changes take `&mut self`; directory operations take `&self` and are
/// gated on the current principal.
pub struct BackOffice<D = InMemoryPartnerDirectory, V = StaticCredentials> {
    directory: D,
    verifier: V,
    parent: ParentAccount,
    session: SessionState,
}

impl BackOffice<InMemoryPartnerDirectory, StaticCredentials> {
    /// Back-office over the demo roster (one active partner, one pending
    /// application).
    pub fn with_sample_data(config: BackOfficeConfig) -> DomainResult<Self> {
        Ok(Self::new(config, seed::sample_directory()?))
    }
}

impl<D: PartnerDirectory> BackOffice<D, StaticCredentials> {
    pub fn new(config: BackOfficeConfig, directory: D) -> Self {
        let verifier = config.credentials();
        Self::with_verifier(config.parent, directory, verifier)
    }
}

impl<D, V> BackOffice<D, V>
where
    D: PartnerDirectory,
    V: CredentialVerifier,
{
    pub fn with_verifier(parent: ParentAccount, directory: D, verifier: V) -> Self {
        Self {
            directory,
            verifier,
            parent,
            session: SessionState::new(),
        }
    }

    /// Read-only access to the underlying directory.
    pub fn directory(&self) -> &D {
        &self.directory
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────────────────────

    /// Sign in. On failure the current session is left as it was.
    pub fn authenticate(&mut self, identifier: &str, secret: &str) -> Result<Principal, AuthError> {
        let account = match self.verifier.verify(identifier, secret) {
            Ok(a) => a,
            Err(e) => {
                tracing::warn!(identifier, "login rejected");
                return Err(e);
            }
        };

        let principal = match account.role {
            Role::Parent => self.parent.principal(),
            Role::Partner => match self.directory.find_active_by_email(&account.identifier) {
                Some(record) => record.principal(),
                None => {
                    tracing::warn!(identifier, "partner login has no roster record");
                    return Err(AuthError::InvalidCredentials);
                }
            },
        };

        self.session.begin(principal.clone());
        Ok(principal)
    }

    pub fn end_session(&mut self) {
        self.session.end();
    }

    pub fn current_principal(&self) -> Option<&Principal> {
        self.session.current()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn is_parent_admin(&self) -> bool {
        self.session.is_parent_admin()
    }

    pub fn is_partner_admin(&self) -> bool {
        self.session.is_partner_admin()
    }

    /// Admin menu for the signed-in principal; empty when signed out.
    pub fn visible_sections(&self) -> Vec<AdminSection> {
        self.current_principal()
            .map(AdminSection::menu_for)
            .unwrap_or_default()
    }

    pub fn explain(&self, capability: Capability) -> AuthorizationExplanation {
        explain_authorization(self.current_principal(), capability)
    }

    fn require(&self, capability: Capability) -> Result<&Principal, AuthzError> {
        let principal = self.current_principal();
        authorize(principal, capability)?;
        principal.ok_or(AuthzError::Unauthenticated)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Partner onboarding
    // ─────────────────────────────────────────────────────────────────────────

    /// Public signup: validate the form, then submit.
    pub fn sign_up(&self, form: &ApplicationForm) -> Result<PartnerApplication, BackOfficeError> {
        let details = form.validate().inspect_err(|e| {
            tracing::debug!(error = %e, "signup form rejected");
        })?;
        Ok(self.submit_application(details))
    }

    pub fn submit_application(&self, details: ApplicationDetails) -> PartnerApplication {
        self.directory.submit_application(details, Utc::now())
    }

    pub fn pending_applications(&self) -> Result<Vec<PartnerApplication>, BackOfficeError> {
        self.require(Capability::ManageAdmins)?;
        Ok(self.directory.pending())
    }

    pub fn approve(&self, application_id: AccountId) -> Result<AdminRecord, BackOfficeError> {
        let reviewer = self.require(Capability::ManageAdmins)?;
        let record = self.directory.approve(application_id, Utc::now())?;
        tracing::info!(reviewer = %reviewer.id(), admin_id = %record.id, "partner onboarded");
        Ok(record)
    }

    pub fn reject(&self, application_id: AccountId) -> Result<(), BackOfficeError> {
        let reviewer = self.require(Capability::ManageAdmins)?;
        self.directory.reject(application_id)?;
        tracing::info!(reviewer = %reviewer.id(), %application_id, "partner application declined");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Admin roster
    // ─────────────────────────────────────────────────────────────────────────

    pub fn active_admins(&self) -> Result<Vec<AdminRecord>, BackOfficeError> {
        self.require(Capability::ManageAdmins)?;
        Ok(self.directory.active())
    }

    pub fn create_admin(&self, data: NewAdmin) -> Result<AdminRecord, BackOfficeError> {
        self.require(Capability::ManageAdmins)?;
        Ok(self.directory.create_admin(data, Utc::now()))
    }

    pub fn update_admin(
        &self,
        admin_id: AccountId,
        patch: AdminPatch,
    ) -> Result<AdminRecord, BackOfficeError> {
        self.require(Capability::ManageAdmins)?;
        Ok(self.directory.update_admin(admin_id, patch)?)
    }

    pub fn remove_admin(&self, admin_id: AccountId) -> Result<(), BackOfficeError> {
        self.require(Capability::ManageAdmins)?;
        Ok(self.directory.remove_admin(admin_id)?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Dashboard
    // ─────────────────────────────────────────────────────────────────────────

    pub fn roster_summary(&self) -> Result<RosterSummary, BackOfficeError> {
        self.require(Capability::ViewAllStats)?;
        Ok(RosterSummary::from_snapshot(&self.directory.snapshot()))
    }

    /// Statistics of the signed-in partner's own property.
    ///
    /// `None` for the parent admin, who owns no property. A partner whose record
    /// was removed mid-session gets `NotFound`.
    pub fn own_stats(&self) -> Result<Option<AdminStats>, BackOfficeError> {
        let principal = self.require(Capability::ViewAnalytics)?;
        if principal.role() == Role::Parent {
            return Ok(None);
        }
        self.directory
            .find_active(principal.id())
            .map(|r| Some(r.stats))
            .ok_or_else(|| DomainError::not_found(format!("admin {}", principal.id())).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ashroy_auth::{ContactInfo, PermissionFlags};
    use ashroy_roster::seed::{SAMPLE_APPLICATION_ID, SAMPLE_PARTNER_ID};

    fn office() -> BackOffice {
        BackOffice::with_sample_data(BackOfficeConfig::default()).unwrap()
    }

    #[test]
    fn parent_login_grants_everything() {
        let mut bo = office();
        let p = bo.authenticate("admin@ashroy.com", "admin123").unwrap();
        assert_eq!(p.role(), Role::Parent);
        for c in Capability::ALL {
            assert!(p.can(c));
        }
        assert!(bo.is_parent_admin());
    }

    #[test]
    fn wrong_secret_keeps_session_empty() {
        let mut bo = office();
        assert_eq!(
            bo.authenticate("admin@ashroy.com", "wrong"),
            Err(AuthError::InvalidCredentials)
        );
        assert!(bo.current_principal().is_none());
    }

    #[test]
    fn failed_login_keeps_previous_principal() {
        let mut bo = office();
        bo.authenticate("admin@ashroy.com", "admin123").unwrap();
        assert!(bo.authenticate("partner@example.com", "nope").is_err());
        assert!(bo.is_parent_admin());
    }

    #[test]
    fn partner_login_uses_roster_record() {
        let mut bo = office();
        let p = bo.authenticate("partner@example.com", "partner123").unwrap();
        assert_eq!(p.role(), Role::Partner);
        assert_eq!(p.id(), SAMPLE_PARTNER_ID);
        assert_eq!(p.display_name(), "John Smith");
        assert!(!p.can(Capability::ManageAdmins));
        assert!(bo.is_partner_admin());
    }

    #[test]
    fn partner_login_fails_once_record_is_removed() {
        let mut bo = office();
        bo.authenticate("admin@ashroy.com", "admin123").unwrap();
        bo.remove_admin(SAMPLE_PARTNER_ID).unwrap();
        bo.end_session();

        assert_eq!(
            bo.authenticate("partner@example.com", "partner123"),
            Err(AuthError::InvalidCredentials)
        );
        assert!(bo.current_principal().is_none());
    }

    #[test]
    fn end_session_is_idempotent() {
        let mut bo = office();
        bo.end_session();
        assert!(bo.current_principal().is_none());
        bo.authenticate("admin@ashroy.com", "admin123").unwrap();
        bo.end_session();
        bo.end_session();
        assert!(bo.current_principal().is_none());
        assert!(bo.visible_sections().is_empty());
    }

    #[test]
    fn onboarding_requires_manage_admins() {
        let mut bo = office();
        assert_eq!(
            bo.approve(SAMPLE_APPLICATION_ID),
            Err(BackOfficeError::Authz(AuthzError::Unauthenticated))
        );

        bo.authenticate("partner@example.com", "partner123").unwrap();
        assert_eq!(
            bo.reject(SAMPLE_APPLICATION_ID),
            Err(BackOfficeError::Authz(AuthzError::Forbidden(
                Capability::ManageAdmins
            )))
        );
        assert_eq!(bo.directory().pending().len(), 1);
    }

    #[test]
    fn parent_approves_sample_application() {
        let mut bo = office();
        bo.authenticate("admin@ashroy.com", "admin123").unwrap();

        let rec = bo.approve(SAMPLE_APPLICATION_ID).unwrap();
        assert_eq!(rec.contact.name, "Sarah Johnson");
        assert!(bo.pending_applications().unwrap().is_empty());
        assert_eq!(bo.active_admins().unwrap().len(), 2);
    }

    #[test]
    fn update_cannot_escalate_partner() {
        let mut bo = office();
        bo.authenticate("admin@ashroy.com", "admin123").unwrap();
        let rec = bo
            .update_admin(
                SAMPLE_PARTNER_ID,
                AdminPatch {
                    permissions: Some(PermissionFlags {
                        manage_rooms: true,
                        manage_admins: true,
                        ..Default::default()
                    }),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(!rec.permissions.allows(Capability::ManageAdmins));

        bo.end_session();
        let p = bo.authenticate("partner@example.com", "partner123").unwrap();
        assert!(!p.can(Capability::ManageAdmins));
        assert!(!p.can(Capability::ManageBookings));
    }

    #[test]
    fn create_admin_starts_empty() {
        let mut bo = office();
        bo.authenticate("admin@ashroy.com", "admin123").unwrap();
        let rec = bo
            .create_admin(NewAdmin::new(
                ContactInfo::new("Priya Das", "priya@example.com", "+919800000000"),
                "Riverside Cottage",
            ))
            .unwrap();
        assert_eq!(rec.total_bookings, 0);
        assert_eq!(rec.stats, AdminStats::default());
        assert!(bo.directory().find_active(rec.id).is_some());
    }

    #[test]
    fn summary_is_parent_only() {
        let mut bo = office();
        bo.authenticate("partner@example.com", "partner123").unwrap();
        assert_eq!(bo.roster_summary().unwrap_err().code(), "forbidden");

        bo.end_session();
        bo.authenticate("admin@ashroy.com", "admin123").unwrap();
        let s = bo.roster_summary().unwrap();
        assert_eq!(s.active_admins, 1);
        assert_eq!(s.pending_applications, 1);
        assert_eq!(s.total_revenue, 125_000);
    }

    #[test]
    fn own_stats_for_partner() {
        let mut bo = office();
        bo.authenticate("partner@example.com", "partner123").unwrap();
        let stats = bo.own_stats().unwrap().unwrap();
        assert_eq!(stats.rooms.len(), 3);

        bo.end_session();
        bo.authenticate("admin@ashroy.com", "admin123").unwrap();
        assert_eq!(bo.own_stats(), Ok(None));
    }

    #[test]
    fn own_stats_after_record_removed_is_not_found() {
        let mut bo = office();
        bo.authenticate("partner@example.com", "partner123").unwrap();
        bo.directory().remove_admin(SAMPLE_PARTNER_ID).unwrap();
        assert!(bo.own_stats().unwrap_err().is_not_found());
    }

    #[test]
    fn sign_up_validates_form() {
        let bo = office();
        let err = bo.sign_up(&ApplicationForm::default()).unwrap_err();
        assert_eq!(err.code(), "validation_error");
        assert_eq!(bo.directory().pending().len(), 1);
    }
}
