//! In-memory host used by the widget tests.

#![allow(dead_code)]

use crmkit_types::Opaque;
use crmkit_widget::{
    AjaxSettings, InstallStatus, Langs, RenderTemplate, Settings, WidgetError, WidgetIntegration,
};
use futures::future::{self, BoxFuture};
use serde_json::json;
use std::sync::{Arc, Mutex};

#[derive(Debug)]
pub struct MockHost {
    pub langs: Langs,
    pub settings: Settings,
    pub rendered: Vec<RenderTemplate>,
    pub status: InstallStatus,
    pub catalog_id: Option<String>,
    pub selected: Vec<Opaque>,
}

impl Default for MockHost {
    fn default() -> Self {
        let mut langs = Langs::new();
        langs.insert("widget.name".into(), "Call tracker".into());
        Self {
            langs,
            settings: Settings::new(),
            rendered: Vec::new(),
            status: InstallStatus::Install,
            catalog_id: None,
            selected: vec![json!({"id": 1}), json!({"id": 2})],
        }
    }
}

impl WidgetIntegration for MockHost {
    fn render_template(&mut self, template: RenderTemplate) {
        self.rendered.push(template);
    }

    fn langs(&self) -> &Langs {
        &self.langs
    }

    fn set_lang(&mut self, langs: Langs) {
        self.langs.extend(langs);
    }

    fn authorized_ajax(&self, options: AjaxSettings) -> Result<Opaque, WidgetError> {
        match options.get("url").and_then(|u| u.as_str()) {
            Some(url) => Ok(json!({"url": url, "status": 200})),
            None => Err(WidgetError::Request("missing url".into())),
        }
    }

    fn get_settings(&self) -> Settings {
        self.settings.clone()
    }

    fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    fn list_selected(&self) -> Vec<Opaque> {
        self.selected.clone()
    }

    fn get_pipeline_id(&self) -> BoxFuture<'static, Result<String, WidgetError>> {
        Box::pin(future::ready(Ok("3177727".to_owned())))
    }

    fn set_status(&mut self, status: InstallStatus) {
        self.status = status;
    }

    fn get_version(&self) -> String {
        "1.0.3".to_owned()
    }

    fn get_install_status(&self) -> InstallStatus {
        self.status
    }

    fn set_sdk_catalog_id(&mut self, catalog_id: &str) {
        self.catalog_id = Some(catalog_id.to_owned());
    }
}

/// Shared record of which callbacks ran, in order.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<&'static str>>>);

impl CallLog {
    pub fn push(&self, name: &'static str) {
        self.0.lock().unwrap().push(name);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }
}
