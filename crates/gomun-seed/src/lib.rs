//! # gomun-seed
//!
//! Built-in data the client shows before (and alongside) live backend data:
//! company requests, the expert directory, audience notifications, and form
//! option lists.
//!
//! Every accessor hands out owned values. Mutation goes through an
//! [`ExpertRepository`] the caller owns, never through shared statics.

pub mod companies;
pub mod experts;
pub mod notifications;
pub mod options;

pub use companies::CompanyCatalog;
pub use experts::{ExpertRepository, InMemoryExpertRepository, sync_remote_experts};
pub use notifications::NotificationSeed;
pub use options::FormOptions;

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}
