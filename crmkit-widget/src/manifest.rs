//! `manifest.json` of a widget archive.

use crate::WidgetError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetLocale {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "pt")]
    Portuguese,
}

/// Locations that only work when the manifest carries a matching block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationWithAdditionalProps {
    DigitalPipeline,
    AdvancedSettings,
    MobileCard,
    Sms,
    #[serde(rename = "widget_page")]
    LeftMenu,
    #[serde(rename = "salesbot_designer")]
    Salesbot,
}

impl LocationWithAdditionalProps {
    pub const ALL: [Self; 6] = [
        Self::DigitalPipeline,
        Self::AdvancedSettings,
        Self::MobileCard,
        Self::Sms,
        Self::LeftMenu,
        Self::Salesbot,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::DigitalPipeline => "digital_pipeline",
            Self::AdvancedSettings => "advanced_settings",
            Self::MobileCard => "mobile_card",
            Self::Sms => "sms",
            Self::LeftMenu => "widget_page",
            Self::Salesbot => "salesbot_designer",
        }
    }

    /// Matches a `locations` entry. Entries may carry a `-1`/`-0` display
    /// suffix (`lcard-1`), which is ignored.
    pub fn from_location(location: &str) -> Option<Self> {
        let base = location
            .strip_suffix("-1")
            .or_else(|| location.strip_suffix("-0"))
            .unwrap_or(location);
        Self::ALL.into_iter().find(|l| l.as_str() == base)
    }

    /// Top-level manifest key of the block this location needs.
    pub fn block_key(self) -> &'static str {
        match self {
            Self::DigitalPipeline => "dp",
            Self::AdvancedSettings => "advanced",
            Self::MobileCard => "mobile",
            Self::Sms => "sms",
            Self::LeftMenu => "left_menu",
            Self::Salesbot => "salesbot_designer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportInfo {
    pub link: String,
    pub email: String,
}

/// The manifest's `widget` section. Keys other than `locale` and `support`
/// (name, code, version, ...) are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetInfo {
    pub locale: WidgetLocale,
    pub support: SupportInfo,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One field of the digital pipeline settings form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DpSettingField {
    /// Translation key or display name.
    pub name: String,
    /// `text`, `number`, `custom` or another host field type.
    #[serde(rename = "type")]
    pub field_type: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalPipelineBlock {
    pub action_multiple: bool,
    pub webhook_url: String,
    pub settings: BTreeMap<String, DpSettingField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedBlock {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobileBlock {
    /// Opened inside the mobile app's widget area.
    pub frame_url: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsBlock {
    pub endpoint: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandlerSetting {
    pub name: String,
    #[serde(rename = "type")]
    pub setting_type: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandlerCode {
    pub name: String,
    pub settings: BTreeMap<String, HandlerSetting>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesbotDesignerBlock {
    pub handler_code: HandlerCode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortAfter {
    pub after: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeftMenuItem {
    pub title: String,
    pub icon: String,
    pub sort: SortAfter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeftMenuBlock {
    pub notifications: LeftMenuItem,
}

/// A parsed `manifest.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetManifest {
    pub widget: WidgetInfo,
    pub locations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dp: Option<DigitalPipelineBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced: Option<AdvancedBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<MobileBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms: Option<SmsBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salesbot_designer: Option<SalesbotDesignerBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_menu: Option<LeftMenuBlock>,
}

impl WidgetManifest {
    pub fn from_json(json: &str) -> Result<Self, WidgetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a manifest file. Missing location blocks are logged,
    /// not rejected; the host decides whether they matter.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, WidgetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let manifest = Self::from_json(&json)?;
        debug!(
            path = %path.display(),
            locations = manifest.locations.len(),
            "Loaded widget manifest"
        );
        for location in manifest.missing_blocks() {
            warn!(
                location = location.as_str(),
                block = location.block_key(),
                "Manifest location has no matching block"
            );
        }
        Ok(manifest)
    }

    /// Declared locations that need an additional block, in declaration
    /// order and without duplicates.
    pub fn locations_with_additional_props(&self) -> Vec<LocationWithAdditionalProps> {
        let mut found = Vec::new();
        for location in self
            .locations
            .iter()
            .filter_map(|l| LocationWithAdditionalProps::from_location(l))
        {
            if !found.contains(&location) {
                found.push(location);
            }
        }
        found
    }

    /// Declared locations whose block is absent.
    pub fn missing_blocks(&self) -> Vec<LocationWithAdditionalProps> {
        self.locations_with_additional_props()
            .into_iter()
            .filter(|l| !self.has_block(*l))
            .collect()
    }

    fn has_block(&self, location: LocationWithAdditionalProps) -> bool {
        use LocationWithAdditionalProps as L;
        match location {
            L::DigitalPipeline => self.dp.is_some(),
            L::AdvancedSettings => self.advanced.is_some(),
            L::MobileCard => self.mobile.is_some(),
            L::Sms => self.sms.is_some(),
            L::LeftMenu => self.left_menu.is_some(),
            L::Salesbot => self.salesbot_designer.is_some(),
        }
    }
}
