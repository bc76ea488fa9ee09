//! Active partner admins and their statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ashroy_auth::{ContactInfo, PartnerPermissions, PermissionFlags, Principal};
use ashroy_core::{AccountId, Entity, ValueObject};

use crate::application::PartnerApplication;

/// Length of the monthly time series kept per admin.
pub const MONTHS_TRACKED: usize = 6;

/// Rolling monthly series, oldest month first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MonthlyStats {
    pub bookings: [u32; MONTHS_TRACKED],
    pub revenue: [u64; MONTHS_TRACKED],
    /// Percentages, 0..=100.
    pub occupancy: [u8; MONTHS_TRACKED],
}

/// Per-room breakdown row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStats {
    pub id: u32,
    pub name: String,
    pub bookings: u32,
    pub revenue: u64,
}

/// Nested statistics block of an admin record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdminStats {
    pub monthly: MonthlyStats,
    pub rooms: Vec<RoomStats>,
}

impl ValueObject for AdminStats {}

/// Data for creating an admin record directly (parent admin's "add partner" form).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdmin {
    #[serde(flatten)]
    pub contact: ContactInfo,
    pub property_name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub permissions: PartnerPermissions,
}

fn default_true() -> bool {
    true
}

impl NewAdmin {
    pub fn new(contact: ContactInfo, property_name: impl Into<String>) -> Self {
        Self {
            contact,
            property_name: property_name.into(),
            is_active: true,
            permissions: PartnerPermissions::default(),
        }
    }
}

/// Shallow top-level patch for an admin record.
///
/// `None` keeps the current value. Nested objects (`permissions`, `stats`) are
/// replaced whole when present; a requested `manageAdmins` is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub property_name: Option<String>,
    pub is_active: Option<bool>,
    pub total_rooms: Option<u32>,
    pub total_bookings: Option<u32>,
    pub revenue: Option<u64>,
    pub occupancy_rate: Option<u8>,
    pub permissions: Option<PermissionFlags>,
    pub stats: Option<AdminStats>,
}

impl AdminPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// An active partner admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRecord {
    pub id: AccountId,
    #[serde(flatten)]
    pub contact: ContactInfo,
    pub property_name: String,
    pub is_active: bool,
    #[serde(rename = "joinedDate")]
    pub joined_at: DateTime<Utc>,
    pub total_rooms: u32,
    pub total_bookings: u32,
    pub revenue: u64,
    pub occupancy_rate: u8,
    pub permissions: PartnerPermissions,
    pub stats: AdminStats,
}

impl AdminRecord {
    /// Fresh record: active, every counter and the statistics block zeroed.
    pub fn new(id: AccountId, data: NewAdmin, joined_at: DateTime<Utc>) -> Self {
        Self {
            id,
            contact: data.contact,
            property_name: data.property_name,
            is_active: data.is_active,
            joined_at,
            total_rooms: 0,
            total_bookings: 0,
            revenue: 0,
            occupancy_rate: 0,
            permissions: data.permissions,
            stats: AdminStats::default(),
        }
    }

    /// Promote an approved application. The application's id carries over.
    pub fn from_application(app: &PartnerApplication, joined_at: DateTime<Utc>) -> Self {
        Self::new(
            app.id,
            NewAdmin::new(app.details.contact.clone(), app.details.property_name.clone()),
            joined_at,
        )
    }

    pub fn apply_patch(&mut self, patch: AdminPatch) {
        if let Some(v) = patch.name {
            self.contact.name = v;
        }
        if let Some(v) = patch.email {
            self.contact.email = v;
        }
        if let Some(v) = patch.phone {
            self.contact.phone = v;
        }
        if let Some(v) = patch.property_name {
            self.property_name = v;
        }
        if let Some(v) = patch.is_active {
            self.is_active = v;
        }
        if let Some(v) = patch.total_rooms {
            self.total_rooms = v;
        }
        if let Some(v) = patch.total_bookings {
            self.total_bookings = v;
        }
        if let Some(v) = patch.revenue {
            self.revenue = v;
        }
        if let Some(v) = patch.occupancy_rate {
            self.occupancy_rate = v;
        }
        if let Some(flags) = patch.permissions {
            self.permissions = flags.into();
        }
        if let Some(stats) = patch.stats {
            self.stats = stats;
        }
    }

    /// Session principal for this partner.
    pub fn principal(&self) -> Principal {
        Principal::partner(self.id, self.contact.clone(), self.permissions)
    }
}

impl Entity for AdminRecord {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
