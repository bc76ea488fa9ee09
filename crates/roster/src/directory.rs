//! Owned store for pending applications and active admins.

use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde::Serialize;

use ashroy_core::{AccountId, DomainError, DomainResult, Entity};

use crate::admin::{AdminPatch, AdminRecord, NewAdmin};
use crate::application::{ApplicationDetails, ApplicationStatus, PartnerApplication};

/// Both collections, as seen by one reader at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectorySnapshot {
    pub pending: Vec<PartnerApplication>,
    pub active: Vec<AdminRecord>,
}

impl DirectorySnapshot {
    pub fn contains(&self, id: AccountId) -> bool {
        position_of(&self.pending, id).is_some() || position_of(&self.active, id).is_some()
    }
}

fn position_of<E: Entity<Id = AccountId>>(items: &[E], id: AccountId) -> Option<usize> {
    items.iter().position(|e| *e.id() == id)
}

/// Storage seam for the partner roster.
///
/// Every mutation is a single step: readers observe the state before or after
/// it, never in between. Collections keep insertion order.
pub trait PartnerDirectory: Send + Sync {
    /// Append a pending application with a fresh id.
    fn submit_application(
        &self,
        details: ApplicationDetails,
        submitted_at: DateTime<Utc>,
    ) -> PartnerApplication;

    /// Promote a pending application into the roster.
    fn approve(&self, id: AccountId, approved_at: DateTime<Utc>) -> DomainResult<AdminRecord>;

    /// Discard a pending application.
    fn reject(&self, id: AccountId) -> DomainResult<()>;

    fn create_admin(&self, data: NewAdmin, joined_at: DateTime<Utc>) -> AdminRecord;

    fn update_admin(&self, id: AccountId, patch: AdminPatch) -> DomainResult<AdminRecord>;

    fn remove_admin(&self, id: AccountId) -> DomainResult<()>;

    fn snapshot(&self) -> DirectorySnapshot;

    fn pending(&self) -> Vec<PartnerApplication> {
        self.snapshot().pending
    }

    fn active(&self) -> Vec<AdminRecord> {
        self.snapshot().active
    }

    fn find_pending(&self, id: AccountId) -> Option<PartnerApplication> {
        self.snapshot().pending.into_iter().find(|a| a.id == id)
    }

    fn find_active(&self, id: AccountId) -> Option<AdminRecord> {
        self.snapshot().active.into_iter().find(|a| a.id == id)
    }

    fn find_active_by_email(&self, email: &str) -> Option<AdminRecord> {
        self.snapshot()
            .active
            .into_iter()
            .find(|a| a.contact.email == email)
    }
}

impl<S> PartnerDirectory for Arc<S>
where
    S: PartnerDirectory + ?Sized,
{
    fn submit_application(
        &self,
        details: ApplicationDetails,
        submitted_at: DateTime<Utc>,
    ) -> PartnerApplication {
        (**self).submit_application(details, submitted_at)
    }

    fn approve(&self, id: AccountId, approved_at: DateTime<Utc>) -> DomainResult<AdminRecord> {
        (**self).approve(id, approved_at)
    }

    fn reject(&self, id: AccountId) -> DomainResult<()> {
        (**self).reject(id)
    }

    fn create_admin(&self, data: NewAdmin, joined_at: DateTime<Utc>) -> AdminRecord {
        (**self).create_admin(data, joined_at)
    }

    fn update_admin(&self, id: AccountId, patch: AdminPatch) -> DomainResult<AdminRecord> {
        (**self).update_admin(id, patch)
    }

    fn remove_admin(&self, id: AccountId) -> DomainResult<()> {
        (**self).remove_admin(id)
    }

    fn snapshot(&self) -> DirectorySnapshot {
        (**self).snapshot()
    }

    fn pending(&self) -> Vec<PartnerApplication> {
        (**self).pending()
    }

    fn active(&self) -> Vec<AdminRecord> {
        (**self).active()
    }

    fn find_pending(&self, id: AccountId) -> Option<PartnerApplication> {
        (**self).find_pending(id)
    }

    fn find_active(&self, id: AccountId) -> Option<AdminRecord> {
        (**self).find_active(id)
    }

    fn find_active_by_email(&self, email: &str) -> Option<AdminRecord> {
        (**self).find_active_by_email(email)
    }
}

/// Process-lifetime directory.
///
/// Both collections sit behind one lock, so approval (insert active + remove
/// pending) happens under a single write guard.
#[derive(Debug, Default)]
pub struct InMemoryPartnerDirectory {
    inner: RwLock<DirectorySnapshot>,
}

impl InMemoryPartnerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from existing records.
    ///
    /// Fails with `Conflict` if any id appears twice across the collections, and
    /// with `InvariantViolation` if a supplied application is not pending.
    pub fn from_parts(
        pending: Vec<PartnerApplication>,
        active: Vec<AdminRecord>,
    ) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        for id in pending.iter().map(|a| a.id).chain(active.iter().map(|a| a.id)) {
            if !seen.insert(id) {
                return Err(DomainError::conflict(format!("duplicate account id {id}")));
            }
        }
        if let Some(app) = pending.iter().find(|a| !a.is_pending()) {
            return Err(DomainError::invariant(format!(
                "application {} is not pending",
                app.id
            )));
        }

        Ok(Self {
            inner: RwLock::new(DirectorySnapshot { pending, active }),
        })
    }

    // A poisoned lock still holds a consistent state: every mutation below checks
    // its preconditions before touching either collection.
    fn read(&self) -> RwLockReadGuard<'_, DirectorySnapshot> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, DirectorySnapshot> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    fn fresh_id(state: &DirectorySnapshot) -> AccountId {
        let mut id = AccountId::new();
        while state.contains(id) {
            id = AccountId::new();
        }
        id
    }
}

impl PartnerDirectory for InMemoryPartnerDirectory {
    fn submit_application(
        &self,
        details: ApplicationDetails,
        submitted_at: DateTime<Utc>,
    ) -> PartnerApplication {
        let mut state = self.write();
        let app = PartnerApplication::new(Self::fresh_id(&state), details, submitted_at);
        state.pending.push(app.clone());

        tracing::info!(
            application_id = %app.id,
            property = %app.details.property_name,
            pending = state.pending.len(),
            "partner application submitted"
        );
        app
    }

    fn approve(&self, id: AccountId, approved_at: DateTime<Utc>) -> DomainResult<AdminRecord> {
        let mut state = self.write();
        let Some(pos) = position_of(&state.pending, id) else {
            tracing::warn!(application_id = %id, "approve: no pending application");
            return Err(DomainError::not_found(format!("pending application {id}")));
        };
        if position_of(&state.active, id).is_some() {
            return Err(DomainError::conflict(format!("admin {id} already active")));
        }

        let mut app = state.pending.remove(pos);
        app.status = ApplicationStatus::Approved;
        let record = AdminRecord::from_application(&app, approved_at);
        state.active.push(record.clone());

        tracing::info!(
            application_id = %id,
            name = %record.contact.name,
            "partner application approved"
        );
        Ok(record)
    }

    fn reject(&self, id: AccountId) -> DomainResult<()> {
        let mut state = self.write();
        let Some(pos) = position_of(&state.pending, id) else {
            tracing::warn!(application_id = %id, "reject: no pending application");
            return Err(DomainError::not_found(format!("pending application {id}")));
        };

        let mut app = state.pending.remove(pos);
        app.status = ApplicationStatus::Rejected;
        tracing::info!(application_id = %id, status = ?app.status, "partner application rejected");
        Ok(())
    }

    fn create_admin(&self, data: NewAdmin, joined_at: DateTime<Utc>) -> AdminRecord {
        let mut state = self.write();
        let record = AdminRecord::new(Self::fresh_id(&state), data, joined_at);
        state.active.push(record.clone());

        tracing::info!(admin_id = %record.id, name = %record.contact.name, "admin created");
        record
    }

    fn update_admin(&self, id: AccountId, patch: AdminPatch) -> DomainResult<AdminRecord> {
        if patch.is_empty() {
            tracing::debug!(admin_id = %id, "update: empty patch");
            return self
                .find_active(id)
                .ok_or_else(|| DomainError::not_found(format!("admin {id}")));
        }

        let mut state = self.write();
        let Some(record) = state.active.iter_mut().find(|a| a.id == id) else {
            tracing::warn!(admin_id = %id, "update: no such admin");
            return Err(DomainError::not_found(format!("admin {id}")));
        };

        record.apply_patch(patch);
        tracing::info!(admin_id = %id, "admin updated");
        Ok(record.clone())
    }

    fn remove_admin(&self, id: AccountId) -> DomainResult<()> {
        let mut state = self.write();
        let Some(pos) = position_of(&state.active, id) else {
            tracing::warn!(admin_id = %id, "remove: no such admin");
            return Err(DomainError::not_found(format!("admin {id}")));
        };

        state.active.remove(pos);
        tracing::info!(admin_id = %id, "admin removed");
        Ok(())
    }

    fn snapshot(&self) -> DirectorySnapshot {
        self.read().clone()
    }

    fn find_active(&self, id: AccountId) -> Option<AdminRecord> {
        self.read().active.iter().find(|a| a.id == id).cloned()
    }

    fn find_active_by_email(&self, email: &str) -> Option<AdminRecord> {
        self.read()
            .active
            .iter()
            .find(|a| a.contact.email == email)
            .cloned()
    }
}
