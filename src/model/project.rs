use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project as returned by `GET /projects/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Server-assigned identifier
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Owning user id (null when unassigned)
    #[serde(default)]
    pub owner: Option<u64>,
    /// Member usernames
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Display name, falling back to "Untitled"
    pub fn display_name(&self) -> &str {
        super::text_or(self.name.as_deref(), "Untitled")
    }
}
