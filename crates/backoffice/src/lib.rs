//! `ashroy-backoffice` — the admin back-office service object.
//!
//! One owned [`BackOffice`] holds the session slot, the credential table and the
//! partner directory. Forms call into it; pages read from it. Every mutating
//! roster operation is checked against the signed-in principal's capabilities.

pub mod config;
pub mod error;
pub mod sections;
pub mod service;
pub mod summary;

pub use config::{BackOfficeConfig, ParentAccount, PartnerLogin};
pub use error::BackOfficeError;
pub use sections::AdminSection;
pub use service::BackOffice;
pub use summary::RosterSummary;
