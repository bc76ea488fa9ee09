use serde::{Deserialize, Serialize};

use ashroy_core::ValueObject;

/// A single back-office capability.
///
/// The string form (`as_str`) is the camelCase flag name used by the admin forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    ManageRooms,
    ManageBookings,
    ViewAnalytics,
    ManageAdmins,
    ViewAllStats,
    ViewAllCalendars,
}

impl Capability {
    pub const ALL: [Capability; 6] = [
        Capability::ManageRooms,
        Capability::ManageBookings,
        Capability::ViewAnalytics,
        Capability::ManageAdmins,
        Capability::ViewAllStats,
        Capability::ViewAllCalendars,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::ManageRooms => "manageRooms",
            Capability::ManageBookings => "manageBookings",
            Capability::ViewAnalytics => "viewAnalytics",
            Capability::ManageAdmins => "manageAdmins",
            Capability::ViewAllStats => "viewAllStats",
            Capability::ViewAllCalendars => "viewAllCalendars",
        }
    }
}

impl core::fmt::Display for Capability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat six-flag permission record, as submitted by the admin edit form.
///
/// This is a transport shape only. It is never stored on a partner as-is:
/// convert it into [`PartnerPermissions`], which has no `manage_admins` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionFlags {
    pub manage_rooms: bool,
    pub manage_bookings: bool,
    pub view_analytics: bool,
    pub manage_admins: bool,
    pub view_all_stats: bool,
    pub view_all_calendars: bool,
}

impl PermissionFlags {
    pub fn get(&self, capability: Capability) -> bool {
        match capability {
            Capability::ManageRooms => self.manage_rooms,
            Capability::ManageBookings => self.manage_bookings,
            Capability::ViewAnalytics => self.view_analytics,
            Capability::ManageAdmins => self.manage_admins,
            Capability::ViewAllStats => self.view_all_stats,
            Capability::ViewAllCalendars => self.view_all_calendars,
        }
    }
}

/// Capabilities a partner admin may hold.
///
/// There is deliberately no `manage_admins` field: a partner can never manage
/// other admins, whatever an editor submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PermissionFlags", into = "PermissionFlags")]
pub struct PartnerPermissions {
    pub manage_rooms: bool,
    pub manage_bookings: bool,
    pub view_analytics: bool,
    pub view_all_stats: bool,
    pub view_all_calendars: bool,
}

impl ValueObject for PartnerPermissions {}

impl Default for PartnerPermissions {
    /// Default grants for a freshly onboarded partner.
    fn default() -> Self {
        Self {
            manage_rooms: true,
            manage_bookings: true,
            view_analytics: true,
            view_all_stats: false,
            view_all_calendars: false,
        }
    }
}

impl PartnerPermissions {
    pub fn allows(&self, capability: Capability) -> bool {
        PermissionFlags::from(*self).get(capability)
    }
}

impl From<PermissionFlags> for PartnerPermissions {
    fn from(flags: PermissionFlags) -> Self {
        if flags.manage_admins {
            tracing::debug!("dropping manageAdmins from partner permission flags");
        }
        Self {
            manage_rooms: flags.manage_rooms,
            manage_bookings: flags.manage_bookings,
            view_analytics: flags.view_analytics,
            view_all_stats: flags.view_all_stats,
            view_all_calendars: flags.view_all_calendars,
        }
    }
}

impl From<PartnerPermissions> for PermissionFlags {
    fn from(p: PartnerPermissions) -> Self {
        Self {
            manage_rooms: p.manage_rooms,
            manage_bookings: p.manage_bookings,
            view_analytics: p.view_analytics,
            manage_admins: false,
            view_all_stats: p.view_all_stats,
            view_all_calendars: p.view_all_calendars,
        }
    }
}

/// Effective permission set of a principal.
///
/// `Full` is the parent admin's set and grants every capability; `Partner` wraps
/// the restricted partner record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "PermissionFlags")]
pub enum PermissionSet {
    Full,
    Partner(PartnerPermissions),
}

impl ValueObject for PermissionSet {}

impl PermissionSet {
    pub fn allows(&self, capability: Capability) -> bool {
        match self {
            PermissionSet::Full => true,
            PermissionSet::Partner(p) => p.allows(capability),
        }
    }

    /// Granted capabilities, in declaration order.
    pub fn granted(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|c| self.allows(*c))
            .collect()
    }
}

impl From<PermissionSet> for PermissionFlags {
    fn from(set: PermissionSet) -> Self {
        match set {
            PermissionSet::Full => PermissionFlags {
                manage_rooms: true,
                manage_bookings: true,
                view_analytics: true,
                manage_admins: true,
                view_all_stats: true,
                view_all_calendars: true,
            },
            PermissionSet::Partner(p) => p.into(),
        }
    }
}
