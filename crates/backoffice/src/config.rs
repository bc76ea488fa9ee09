//! Fixed back-office accounts.

use ashroy_auth::{ContactInfo, Principal, Role, StaticCredentials};
use ashroy_core::{AccountId, DomainError, DomainResult};

const DEFAULT_PARENT_EMAIL: &str = "admin@ashroy.com";
const DEFAULT_PARENT_SECRET: &str = "admin123";
const DEFAULT_PARTNER_EMAIL: &str = "partner@example.com";
const DEFAULT_PARTNER_SECRET: &str = "partner123";

/// The platform operator's account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentAccount {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    pub secret: String,
}

impl ParentAccount {
    pub fn principal(&self) -> Principal {
        Principal::parent(self.id, ContactInfo::new(&*self.name, &*self.email, ""))
    }
}

/// The one partner login. Its profile comes from the roster record with the
/// same email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerLogin {
    pub email: String,
    pub secret: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackOfficeConfig {
    pub parent: ParentAccount,
    pub partner: PartnerLogin,
}

impl Default for BackOfficeConfig {
    fn default() -> Self {
        Self {
            parent: ParentAccount {
                id: AccountId::from_u128(1),
                name: "Ashroy Admin".to_string(),
                email: DEFAULT_PARENT_EMAIL.to_string(),
                secret: DEFAULT_PARENT_SECRET.to_string(),
            },
            partner: PartnerLogin {
                email: DEFAULT_PARTNER_EMAIL.to_string(),
                secret: DEFAULT_PARTNER_SECRET.to_string(),
            },
        }
    }
}

impl BackOfficeConfig {
    /// Read overrides from `ASHROY_PARENT_EMAIL`, `ASHROY_PARENT_SECRET`,
    /// `ASHROY_PARTNER_EMAIL` and `ASHROY_PARTNER_SECRET`.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`], with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("ASHROY_PARENT_EMAIL") {
            config.parent.email = v;
        }
        match lookup("ASHROY_PARENT_SECRET") {
            Some(v) => config.parent.secret = v,
            None => tracing::warn!("ASHROY_PARENT_SECRET not set; using insecure dev default"),
        }
        if let Some(v) = lookup("ASHROY_PARTNER_EMAIL") {
            config.partner.email = v;
        }
        match lookup("ASHROY_PARTNER_SECRET") {
            Some(v) => config.partner.secret = v,
            None => tracing::warn!("ASHROY_PARTNER_SECRET not set; using insecure dev default"),
        }

        config.validate()?;
        Ok(config)
    }

    /// Both logins must be usable: emails are non-empty and distinct.
    pub fn validate(&self) -> DomainResult<()> {
        if self.parent.email.trim().is_empty() || self.partner.email.trim().is_empty() {
            return Err(DomainError::validation("login email must not be empty"));
        }
        if self.parent.email == self.partner.email {
            return Err(DomainError::conflict(format!(
                "partner login {} collides with the parent login",
                self.partner.email
            )));
        }
        Ok(())
    }

    /// Credential table holding exactly the parent and the partner login.
    ///
    /// Assumes [`Self::validate`] passed; a colliding partner email would
    /// replace the parent entry.
    pub fn credentials(&self) -> StaticCredentials {
        StaticCredentials::new()
            .with_account(&*self.parent.email, &*self.parent.secret, Role::Parent)
            .with_account(&*self.partner.email, &*self.partner.secret, Role::Partner)
    }
}
