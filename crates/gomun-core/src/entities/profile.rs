use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An expert profile as stored by the backend. Missing fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub region: String,
    pub focus: String,
    pub availability: String,
    pub response_time: String,
    pub phone: String,
    pub website: String,
    pub bio: String,
}
