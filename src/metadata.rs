use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableMetadata {
    pub center_name: String,
    pub description: String,
}

impl Default for TimetableMetadata {
    fn default() -> Self {
        Self {
            center_name: "New Center".to_string(),
            description: "No description".to_string(),
        }
    }
}
