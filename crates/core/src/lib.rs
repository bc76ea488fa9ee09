//! `ashroy-core` — domain foundation building blocks for the Ashroy back-office.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::AccountId;
pub use value_object::ValueObject;
