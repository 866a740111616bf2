//! Panel configuration
//!
//! Defaults are compiled in. A page can override any of them with a JSON
//! `<script id="panel-config" type="application/json">` element.

use serde::{Deserialize, Serialize};

use crate::types::SettingsForm;

/// Id of the optional config element in `index.html`.
pub const CONFIG_ELEMENT_ID: &str = "panel-config";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PanelConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_toast_duration")]
    pub toast_duration_ms: u64,
    #[serde(default = "default_toast_exit")]
    pub toast_exit_ms: u64,
    #[serde(default = "default_period_days")]
    pub default_sales_period_days: u32,
    #[serde(default = "default_period_days")]
    pub delivery_report_days: u32,
    #[serde(default = "default_expiry_hours")]
    pub download_expiry_hours: u32,
    #[serde(default = "default_max_downloads")]
    pub max_downloads: u32,
}

fn default_api_base() -> String {
    "/api".to_string()
}
fn default_toast_duration() -> u64 {
    5000
}
fn default_toast_exit() -> u64 {
    300
}
fn default_period_days() -> u32 {
    7
}
fn default_expiry_hours() -> u32 {
    24
}
fn default_max_downloads() -> u32 {
    3
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            toast_duration_ms: default_toast_duration(),
            toast_exit_ms: default_toast_exit(),
            default_sales_period_days: default_period_days(),
            delivery_report_days: default_period_days(),
            download_expiry_hours: default_expiry_hours(),
            max_downloads: default_max_downloads(),
        }
    }
}

impl PanelConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.api_base = config.api_base.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Read overrides from the page, falling back to defaults.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring invalid panel config");
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    /// Settings form as it looks before anything is typed.
    pub fn default_settings(&self) -> SettingsForm {
        SettingsForm {
            download_expiry: self.download_expiry_hours.to_string(),
            max_downloads: self.max_downloads.to_string(),
            bot_token: String::new(),
            webhook_url: String::new(),
        }
    }
}
