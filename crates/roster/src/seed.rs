//! Sample roster shipped with the demo site.

use chrono::{DateTime, NaiveDate, Utc};

use ashroy_auth::{ContactInfo, PartnerPermissions};
use ashroy_core::{AccountId, DomainResult};

use crate::admin::{AdminRecord, AdminStats, MonthlyStats, RoomStats};
use crate::application::{ApplicationDetails, PartnerApplication};
use crate::directory::InMemoryPartnerDirectory;

/// Id of the seeded partner admin (John Smith).
pub const SAMPLE_PARTNER_ID: AccountId = AccountId::from_u128(2);

/// Id of the seeded pending application (Sarah Johnson).
pub const SAMPLE_APPLICATION_ID: AccountId = AccountId::from_u128(3);

/// Email of the seeded partner admin; matches the demo partner login.
pub const SAMPLE_PARTNER_EMAIL: &str = "partner@example.com";

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

pub fn sample_partner() -> AdminRecord {
    AdminRecord {
        id: SAMPLE_PARTNER_ID,
        contact: ContactInfo::new("John Smith", SAMPLE_PARTNER_EMAIL, "+919876543210"),
        property_name: "Smith's Villa by Ashroy".to_string(),
        is_active: true,
        joined_at: date(2024, 1, 15),
        total_rooms: 3,
        total_bookings: 45,
        revenue: 125_000,
        occupancy_rate: 75,
        permissions: PartnerPermissions::default(),
        stats: AdminStats {
            monthly: MonthlyStats {
                bookings: [12, 15, 18, 20, 25, 30],
                revenue: [30_000, 35_000, 40_000, 45_000, 50_000, 55_000],
                occupancy: [65, 70, 75, 80, 85, 90],
            },
            rooms: vec![
                RoomStats {
                    id: 1,
                    name: "Luxury Suite".to_string(),
                    bookings: 20,
                    revenue: 50_000,
                },
                RoomStats {
                    id: 2,
                    name: "Garden View Room".to_string(),
                    bookings: 15,
                    revenue: 35_000,
                },
                RoomStats {
                    id: 3,
                    name: "Family Room".to_string(),
                    bookings: 10,
                    revenue: 40_000,
                },
            ],
        },
    }
}

pub fn sample_application() -> PartnerApplication {
    PartnerApplication::new(
        SAMPLE_APPLICATION_ID,
        ApplicationDetails {
            contact: ContactInfo::new("Sarah Johnson", "sarah@example.com", "+919876543211"),
            property_name: "Mountain View Resort".to_string(),
            property_address: "123 Hill Road, Manali".to_string(),
            property_description: "A beautiful resort with mountain views".to_string(),
            documents: vec![
                "property_deed.pdf".to_string(),
                "business_license.pdf".to_string(),
                "id_proof.pdf".to_string(),
            ],
        },
        date(2024, 2, 15),
    )
}

/// Directory holding one active partner and one pending application.
pub fn sample_directory() -> DomainResult<InMemoryPartnerDirectory> {
    InMemoryPartnerDirectory::from_parts(vec![sample_application()], vec![sample_partner()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::PartnerDirectory;

    #[test]
    fn sample_directory_is_consistent() {
        let dir = sample_directory().unwrap();
        let snap = dir.snapshot();
        assert_eq!(snap.pending.len(), 1);
        assert_eq!(snap.active.len(), 1);
        assert!(dir.find_active_by_email(SAMPLE_PARTNER_EMAIL).is_some());
    }

    #[test]
    fn sample_partner_counters_match_room_breakdown() {
        let p = sample_partner();
        let room_bookings: u32 = p.stats.rooms.iter().map(|r| r.bookings).sum();
        assert_eq!(room_bookings, p.total_bookings);
        assert_eq!(p.stats.rooms.len() as u32, p.total_rooms);
    }

    #[test]
    fn fixture_dates_are_real_dates() {
        assert_eq!(sample_application().submitted_at.to_rfc3339(), "2024-02-15T00:00:00+00:00");
    }
}
