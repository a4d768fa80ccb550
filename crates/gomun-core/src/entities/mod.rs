//! Entity structs for GOMUN domain objects.
//!
//! Field names serialize in camelCase, matching the backend and the
//! single-page app that consumes the same JSON. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema`.

mod company;
mod expert;
mod notification;
mod profile;

pub use company::Company;
pub use expert::{Expert, ExpertDraft};
pub use notification::NotificationItem;
pub use profile::Profile;
