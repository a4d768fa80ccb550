use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A freelance expert listed in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Expert {
    pub id: u64,
    pub name: String,
    pub title: String,
    pub region: String,
    pub rating: f64,
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// An expert without an identifier, as submitted for registration or update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpertDraft {
    pub name: String,
    pub title: String,
    pub region: String,
    pub rating: f64,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl ExpertDraft {
    /// Materialize the draft under `id`.
    #[must_use]
    pub fn into_expert(self, id: u64) -> Expert {
        Expert {
            id,
            name: self.name,
            title: self.title,
            region: self.region,
            rating: self.rating,
            keywords: self.keywords,
            avatar: self.avatar,
            years: self.years,
            focus: self.focus,
            availability: self.availability,
            response_time: self.response_time,
            email: self.email,
            phone: self.phone,
            website: self.website,
        }
    }
}

impl Expert {
    /// Overwrite this record with the draft's fields, keeping the id.
    ///
    /// Required fields always overwrite. Optional fields overwrite only when
    /// the draft carries a value, so a partial draft never erases contact data.
    pub fn apply(&mut self, draft: ExpertDraft) {
        self.name = draft.name;
        self.title = draft.title;
        self.region = draft.region;
        self.rating = draft.rating;
        self.keywords = draft.keywords;
        overwrite(&mut self.avatar, draft.avatar);
        overwrite(&mut self.years, draft.years);
        overwrite(&mut self.focus, draft.focus);
        overwrite(&mut self.availability, draft.availability);
        overwrite(&mut self.response_time, draft.response_time);
        overwrite(&mut self.email, draft.email);
        overwrite(&mut self.phone, draft.phone);
        overwrite(&mut self.website, draft.website);
    }
}

fn overwrite<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}
