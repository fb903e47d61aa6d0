use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A staff position ("cargo") employees can be hired into.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub job_id: i32,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub description: String,
}

impl NewJob {
    #[must_use]
    pub fn new(description: String) -> Self {
        Self {
            description: description.trim().to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJob {
    pub description: String,
}

impl UpdateJob {
    #[must_use]
    pub fn new(description: String) -> Self {
        Self {
            description: description.trim().to_string(),
        }
    }
}
