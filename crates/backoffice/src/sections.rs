use serde::Serialize;

use ashroy_auth::{Capability, Principal};

/// Pages of the admin area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminSection {
    Dashboard,
    ManageRooms,
    BlockDates,
    ManagePartners,
}

impl AdminSection {
    pub const ALL: [AdminSection; 4] = [
        AdminSection::Dashboard,
        AdminSection::ManageRooms,
        AdminSection::BlockDates,
        AdminSection::ManagePartners,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            AdminSection::Dashboard => "Dashboard",
            AdminSection::ManageRooms => "Manage Rooms",
            AdminSection::BlockDates => "Block Dates",
            AdminSection::ManagePartners => "Manage Partners",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            AdminSection::Dashboard => "/admin",
            AdminSection::ManageRooms => "/admin/manage-rooms",
            AdminSection::BlockDates => "/admin/block-dates",
            AdminSection::ManagePartners => "/admin/manage-admins",
        }
    }

    /// Capability needed to see the section; the dashboard is open to any admin.
    pub fn required(&self) -> Option<Capability> {
        match self {
            AdminSection::Dashboard => None,
            AdminSection::ManageRooms => Some(Capability::ManageRooms),
            AdminSection::BlockDates => Some(Capability::ManageBookings),
            AdminSection::ManagePartners => Some(Capability::ManageAdmins),
        }
    }

    pub fn visible_to(&self, principal: &Principal) -> bool {
        self.required().is_none_or(|c| principal.can(c))
    }

    /// Menu for a principal, in display order.
    pub fn menu_for(principal: &Principal) -> Vec<AdminSection> {
        Self::ALL
            .into_iter()
            .filter(|s| s.visible_to(principal))
            .collect()
    }
}
