//! The capability handle the host passes to every widget callback.

use crate::WidgetError;
use crmkit_types::Opaque;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;

/// The widget's translation dictionary (contents of its `i18n/<lang>.json`).
pub type Langs = BTreeMap<String, String>;

/// Widget settings as entered by the user, keyed by setting name.
pub type Settings = serde_json::Map<String, serde_json::Value>;

/// Options of an authorized request, passed through to the host untouched.
pub type AjaxSettings = Opaque;

/// Installation status of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallStatus {
    /// Not active.
    Install,
    /// Active.
    Installed,
    Error,
}

/// Parameters of the `initMenuPage` callback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitMenuPageParams {
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subitem_code: Option<String>,
}

/// What `render_template` places in the widget's right-column block.
///
/// The host accepts either ready markup (`body`) or a template name to
/// render with parameters (`render`), never both.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderTemplate {
    Body {
        caption_class: String,
        body: String,
    },
    Template {
        caption_class: String,
        render: String,
        params: Opaque,
    },
}

impl RenderTemplate {
    pub fn body(caption_class: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Body {
            caption_class: caption_class.into(),
            body: body.into(),
        }
    }

    pub fn template(caption_class: impl Into<String>, render: impl Into<String>, params: Opaque) -> Self {
        Self::Template {
            caption_class: caption_class.into(),
            render: render.into(),
            params,
        }
    }

    /// The `options` object (and render params, if any) in the host's
    /// calling convention: the unused one of `body`/`render` is `""`.
    pub fn to_host_args(&self) -> (Opaque, Option<&Opaque>) {
        match self {
            Self::Body { caption_class, body } => (
                json!({"caption": {"class_name": caption_class}, "body": body, "render": ""}),
                None,
            ),
            Self::Template {
                caption_class,
                render,
                params,
            } => (
                json!({"caption": {"class_name": caption_class}, "body": "", "render": render}),
                Some(params),
            ),
        }
    }
}

/// Methods the host exposes to widget code through the `self` handle.
///
/// Implemented by the host bridge; widgets only consume it.
pub trait WidgetIntegration {
    /// Wraps markup or a template in the standard widget layout and places it
    /// in the right column.
    fn render_template(&mut self, template: RenderTemplate);

    /// The widget's translation dictionary.
    fn langs(&self) -> &Langs;

    /// Looks up a translation; unknown keys come back unchanged.
    fn i18n(&self, key: &str) -> String {
        self.langs().get(key).cloned().unwrap_or_else(|| key.to_owned())
    }

    /// Replaces entries of the translation dictionary.
    fn set_lang(&mut self, langs: Langs);

    /// Performs a request with the `X-Auth-Token` header added (OAuth
    /// integrations only).
    fn authorized_ajax(&self, options: AjaxSettings) -> Result<Opaque, WidgetError>;

    /// Current settings of the widget.
    fn get_settings(&self) -> Settings;

    fn set_settings(&mut self, settings: Settings);

    /// Records checked in the current list view.
    fn list_selected(&self) -> Vec<Opaque>;

    /// Pipeline the widget is attached to as a lead source. Resolves once the
    /// host has answered.
    fn get_pipeline_id(&self) -> BoxFuture<'static, Result<String, WidgetError>>;

    fn set_status(&mut self, status: InstallStatus);

    fn get_version(&self) -> String;

    fn get_install_status(&self) -> InstallStatus;

    /// Sets the catalog used by SDK list operations.
    fn set_sdk_catalog_id(&mut self, catalog_id: &str);
}
