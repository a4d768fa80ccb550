//! # gomun-core
//!
//! Core types shared across the GOMUN client crates.
//!
//! - Entity structs for seeded and remote domain objects (experts, companies,
//!   notifications, profiles)
//! - The [`Role`] enum that gates navigation and notification audiences
//! - The persisted [`Session`] record and its expiry arithmetic
//! - Request payloads and backend response shapes
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod payloads;
pub mod responses;
pub mod session;

pub use enums::{NotificationAudience, Role};
pub use errors::CoreError;
pub use session::Session;
