use serde::{Deserialize, Serialize};

use ashroy_core::{AccountId, ValueObject};

use crate::permissions::{Capability, PartnerPermissions, PermissionSet};
use crate::roles::{Role, resolve};

/// Name and contact details of a person behind an account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ValueObject for ContactInfo {}

impl ContactInfo {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// The authenticated identity driving an admin session.
///
/// Construct through [`Principal::parent`] or [`Principal::partner`] so the
/// permission set always matches the role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    id: AccountId,
    #[serde(flatten)]
    contact: ContactInfo,
    #[serde(rename = "type")]
    role: Role,
    permissions: PermissionSet,
}

impl Principal {
    /// Parent principal: every capability, always.
    pub fn parent(id: AccountId, contact: ContactInfo) -> Self {
        Self {
            id,
            contact,
            role: Role::Parent,
            permissions: resolve(Role::Parent),
        }
    }

    /// Partner principal carrying the partner record's own grants.
    pub fn partner(id: AccountId, contact: ContactInfo, permissions: PartnerPermissions) -> Self {
        Self {
            id,
            contact,
            role: Role::Partner,
            permissions: PermissionSet::Partner(permissions),
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn display_name(&self) -> &str {
        &self.contact.name
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.permissions.allows(capability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ContactInfo {
        ContactInfo::new("John Smith", "partner@example.com", "+919876543210")
    }

    #[test]
    fn partner_principal_cannot_manage_admins() {
        let p = Principal::partner(
            AccountId::from_u128(2),
            contact(),
            PartnerPermissions::default(),
        );
        assert_eq!(p.role(), Role::Partner);
        assert!(p.can(Capability::ManageRooms));
        assert!(!p.can(Capability::ManageAdmins));
    }

    #[test]
    fn serializes_with_type_and_flat_permissions() {
        let p = Principal::parent(
            AccountId::from_u128(1),
            ContactInfo::new("Ashroy Admin", "admin@ashroy.com", ""),
        );
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["type"], "parent");
        assert_eq!(v["name"], "Ashroy Admin");
        assert_eq!(v["permissions"]["manageAdmins"], true);
    }
}
