use crate::api::Result;
use crate::message::format_downloads;
use derive_more::Constructor;
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u8 = 1;

pub const DEFAULT_LABEL: &str = "CurseForge";
pub const DEFAULT_COLOR: &str = "orange";
pub const DEFAULT_NAMED_LOGO: &str = "curseforge";

/// Constant parts of the badge.
#[derive(Debug, Clone, PartialEq, Constructor)]
pub struct BadgeStyle {
    pub label: String,
    pub color: String,
    pub named_logo: String,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        BadgeStyle::new(
            DEFAULT_LABEL.to_string(),
            DEFAULT_COLOR.to_string(),
            DEFAULT_NAMED_LOGO.to_string(),
        )
    }
}

/// shields.io endpoint badge document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeDocument {
    pub schema_version: u8,
    pub label: String,
    pub message: String,
    pub color: String,
    pub named_logo: String,
}

impl BadgeDocument {
    pub fn new(style: &BadgeStyle, total: u64) -> Self {
        BadgeDocument {
            schema_version: SCHEMA_VERSION,
            label: style.label.clone(),
            message: format_downloads(total),
            color: style.color.clone(),
            named_logo: style.named_logo.clone(),
        }
    }

    /// Pretty printed JSON terminated by a newline.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
