//! Convenience re-exports for widget authors.

pub use crate::{
    Callback, Callbacks, ContextWrapper, CrmApp, CrmNotifications, InstallStatus, RenderTemplate,
    Settings, Widget, WidgetError, WidgetIntegration, WidgetManifest,
};
pub use crate::{
    BindActionsCallback, DestroyCallback, InitCallback, OnSaveCallback, RenderCallback,
    SettingsCallback,
};
