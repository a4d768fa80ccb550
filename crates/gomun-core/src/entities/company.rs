use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A company's open request for an expert (shown on the requests board).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: u64,
    pub company: String,
    pub company_type: String,
    pub role: String,
    pub headline: String,
    pub job_category: String,
    pub region: String,
    pub employment: String,
    pub deadline: String,
    pub views: u64,
    pub keywords: Vec<String>,
    pub urgency: String,
    pub mode: String,
    pub duration: String,
    pub budget: String,
    pub description: String,
}
