use serde::Serialize;

use ashroy_roster::DirectorySnapshot;

/// Aggregate figures across the roster, for the parent admin's dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSummary {
    pub active_admins: usize,
    pub pending_applications: usize,
    pub total_rooms: u64,
    pub total_bookings: u64,
    pub total_revenue: u64,
    /// Mean occupancy rate of active admins, in percent. Zero for an empty roster.
    pub average_occupancy: f64,
}

impl RosterSummary {
    pub fn from_snapshot(snapshot: &DirectorySnapshot) -> Self {
        let active = &snapshot.active;
        let average_occupancy = if active.is_empty() {
            0.0
        } else {
            active.iter().map(|a| f64::from(a.occupancy_rate)).sum::<f64>() / active.len() as f64
        };

        Self {
            active_admins: active.len(),
            pending_applications: snapshot.pending.len(),
            total_rooms: active.iter().map(|a| u64::from(a.total_rooms)).sum(),
            total_bookings: active.iter().map(|a| u64::from(a.total_bookings)).sum(),
            total_revenue: active.iter().map(|a| a.revenue).sum(),
            average_occupancy,
        }
    }
}
