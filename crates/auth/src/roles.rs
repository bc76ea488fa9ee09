use serde::{Deserialize, Serialize};

use crate::permissions::{PartnerPermissions, PermissionSet};

/// Back-office role of a principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Platform operator with every capability.
    Parent,
    /// Onboarded property owner with restricted capabilities.
    Partner,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Parent => "parent",
            Role::Partner => "partner",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the default permission set for a role.
///
/// Pure: no IO, no state. Individual partner records may carry a customized
/// [`PartnerPermissions`] instead of this default.
pub fn resolve(role: Role) -> PermissionSet {
    match role {
        Role::Parent => PermissionSet::Full,
        Role::Partner => PermissionSet::Partner(PartnerPermissions::default()),
    }
}
