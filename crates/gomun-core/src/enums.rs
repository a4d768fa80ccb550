//! Role enum shared by sessions, routes, and notification audiences.
//!
//! Serialized in lowercase (`"guest"`, `"expert"`, `"company"`) to match the
//! backend and the persisted session record.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Account role. Gates route access and partitions seed notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Guest,
    Expert,
    Company,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Guest, Self::Expert, Self::Company];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Expert => "expert",
            Self::Company => "company",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "guest" => Ok(Self::Guest),
            "expert" => Ok(Self::Expert),
            "company" => Ok(Self::Company),
            other => Err(CoreError::InvalidRole(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// NotificationAudience
// ---------------------------------------------------------------------------

/// Audience a seed notification is addressed to. Every role, `guest`
/// included, is an audience.
pub type NotificationAudience = Role;
