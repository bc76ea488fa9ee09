//! `ashroy-auth` — authentication/authorization boundary for the back-office.
//!
//! This crate is intentionally decoupled from storage and presentation: it knows
//! roles, capabilities, principals and the session slot, nothing about rosters.

pub mod authorize;
pub mod credentials;
pub mod permissions;
pub mod principal;
pub mod roles;
pub mod session;

pub use authorize::{AuthorizationExplanation, AuthzError, authorize, explain_authorization};
pub use credentials::{AuthError, CredentialVerifier, StaticCredentials, VerifiedAccount};
pub use permissions::{Capability, PartnerPermissions, PermissionFlags, PermissionSet};
pub use principal::{ContactInfo, Principal};
pub use roles::{Role, resolve};
pub use session::SessionState;
