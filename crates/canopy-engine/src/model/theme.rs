use serde::{Deserialize, Serialize};

/// Page-wide presentation settings stored alongside the section list.
/// The editor carries these through load/save untouched; rendering them
/// is a collaborator concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub primary_color: String,
    pub background_color: String,
    pub font_family: String,
    pub logo: Option<String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: "#1a7f64".to_string(),
            background_color: "#ffffff".to_string(),
            font_family: "Inter".to_string(),
            logo: None,
        }
    }
}
