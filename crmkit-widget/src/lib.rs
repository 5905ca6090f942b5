//! Widget SDK types for the CRM web application.
//!
//! Widget code runs inside the host page. The host hands it a capability
//! handle ([`WidgetIntegration`]) and calls back into a [`Callbacks`] table
//! the widget fills in. Every callback receives the handle as its first
//! argument; [`ContextWrapper`] derives each wrapped signature from the
//! plain one.
//!
//! [`Widget`] drives the lifecycle: `render` and `init` must return `true`
//! before `bind_actions` runs.
//!
//! # Example
//!
//! ```ignore
//! use crmkit_widget::prelude::*;
//!
//! let mut callbacks = Callbacks::default();
//! callbacks.render = Some(RenderCallback::new(|host, ()| {
//!     host.render_template(RenderTemplate::body("my-widget", "<p>Hi</p>"));
//!     true
//! }));
//! callbacks.init = Some(InitCallback::lift(|()| true));
//! callbacks.bind_actions = Some(BindActionsCallback::lift(|()| true));
//!
//! let mut widget = Widget::new(host_handle, callbacks);
//! widget.start()?;
//! ```

mod app;
mod callback;
mod error;
mod integration;
mod lifecycle;
mod manifest;
pub mod prelude;

pub use app::{
    AddCallParams, AddErrorParams, CallElement, ConstantKey, CrmApp, CrmConstants,
    CrmNotifications, ElementType, LangId, NotificationLink, ShowMessageErrorParams,
    ShowMessageParams, ShowNotificationParams, constant,
};
pub use callback::{
    AdvancedSettingsCallback, BindActionsCallback, Callback, Callbacks, ContactsSelectedCallback,
    ContextWrapper, DestroyCallback, DpSettingsCallback, InitCallback, InitMenuPageCallback,
    LeadsSelectedCallback, LinkCardCallback, LoadCatalogElementCallback, LoadElementsCallback,
    LoadPreloadedDataCallback, OnAddAsSourceCallback, OnSalesbotDesignerSaveCallback,
    OnSaveCallback, RenderCallback, SalesbotDesignerSettingsCallback, Selected,
    SettingsCallback, Signature, TodoSelectedCallback, original,
};
pub use error::WidgetError;
pub use integration::{
    AjaxSettings, InitMenuPageParams, InstallStatus, Langs, RenderTemplate, Settings,
    WidgetIntegration,
};
pub use lifecycle::{LifecycleStage, Widget};
pub use manifest::{
    AdvancedBlock, DigitalPipelineBlock, DpSettingField, HandlerCode, HandlerSetting,
    LeftMenuBlock, LeftMenuItem, LocationWithAdditionalProps, MobileBlock, SalesbotDesignerBlock,
    SmsBlock, SortAfter, SupportInfo, WidgetInfo, WidgetLocale, WidgetManifest,
};
