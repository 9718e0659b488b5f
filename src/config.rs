//! Gallery configuration.
//!
//! Defaults match the stock page layout (`img/work/work-1.webp`, ...). A host
//! page can override any subset of fields through a JSON `data-config`
//! attribute on the mount element.

use serde::Deserialize;
use web_sys::Element;

use crate::error::ConfigError;

pub const CONFIG_ATTRIBUTE: &str = "data-config";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Directory holding the images and `manifest.json`, relative to the page.
    pub path: String,
    pub prefix: String,
    /// Probed in this order; the first hit wins for an index.
    pub extensions: Vec<String>,
    pub max_files: u32,
    /// Consecutive missing indices tolerated before probing stops.
    pub gap_limit: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            path: "img/work/".to_string(),
            prefix: "work-".to_string(),
            extensions: ["webp", "png", "jpg", "jpeg"]
                .into_iter()
                .map(String::from)
                .collect(),
            max_files: 200,
            gap_limit: 6,
        }
    }
}

impl GalleryConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: GalleryConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the override attribute from the mount element, falling back to
    /// defaults when it is absent or unusable.
    pub fn from_element(root: &Element) -> Self {
        let Some(raw) = root.get_attribute(CONFIG_ATTRIBUTE) else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => {
                tracing::debug!(?config, "gallery config override applied");
                config
            }
            Err(err) => {
                tracing::warn!("{err}; using default gallery config");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extensions.is_empty() {
            return Err(ConfigError::NoExtensions);
        }
        if self.max_files == 0 {
            return Err(ConfigError::NoProbeRange);
        }
        Ok(())
    }

    /// `path` joined with `name`, inserting the separator when the configured
    /// path lacks a trailing slash.
    pub fn asset_url(&self, name: &str) -> String {
        if self.path.is_empty() || self.path.ends_with('/') {
            format!("{}{}", self.path, name)
        } else {
            format!("{}/{}", self.path, name)
        }
    }

    pub fn manifest_url(&self) -> String {
        self.asset_url("manifest.json")
    }

    pub fn candidate_url(&self, index: u32, extension: &str) -> String {
        self.asset_url(&format!("{}{}.{}", self.prefix, index, extension))
    }
}
