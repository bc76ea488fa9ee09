//! Partner roster module: onboarding applications and active admin records.
//!
//! Business rules live on the record types (`application`, `admin`); the
//! `directory` module owns both collections and applies every mutation as one
//! step. No IO, no HTTP, no persistence beyond the process.

pub mod admin;
pub mod application;
pub mod directory;
pub mod seed;

pub use admin::{
    AdminPatch, AdminRecord, AdminStats, MONTHS_TRACKED, MonthlyStats, NewAdmin, RoomStats,
};
pub use application::{ApplicationDetails, ApplicationForm, ApplicationStatus, PartnerApplication};
pub use directory::{DirectorySnapshot, InMemoryPartnerDirectory, PartnerDirectory};
