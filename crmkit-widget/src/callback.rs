//! Widget callbacks and the handle-first wrapper.
//!
//! Each callback is declared twice: its plain signature in [`original`], and
//! the signature the host actually calls, derived with [`ContextWrapper`].
//! The wrapper prepends `&mut dyn WidgetIntegration` and keeps the plain
//! parameters (as a tuple) and return type unchanged.

use crate::WidgetIntegration;
use std::fmt;

/// Parameter tuple and return type of a plain callback signature.
pub trait Signature {
    type Args;
    type Output;
}

impl<R> Signature for fn() -> R {
    type Args = ();
    type Output = R;
}

impl<A, R> Signature for fn(A) -> R {
    type Args = (A,);
    type Output = R;
}

impl<A, B, R> Signature for fn(A, B) -> R {
    type Args = (A, B);
    type Output = R;
}

/// A callback the host invokes with its capability handle first.
pub struct Callback<Args, Ret> {
    f: Box<dyn Fn(&mut dyn WidgetIntegration, Args) -> Ret + Send + Sync>,
}

impl<Args, Ret> Callback<Args, Ret> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut dyn WidgetIntegration, Args) -> Ret + Send + Sync + 'static,
    {
        Self { f: Box::new(f) }
    }

    /// Wraps a callback that does not use the handle.
    pub fn lift<F>(f: F) -> Self
    where
        F: Fn(Args) -> Ret + Send + Sync + 'static,
    {
        Self::new(move |_, args| f(args))
    }

    pub fn call(&self, handle: &mut dyn WidgetIntegration, args: Args) -> Ret {
        (self.f)(handle, args)
    }
}

impl<Args, Ret> fmt::Debug for Callback<Args, Ret> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// The wrapped form of plain signature `F`.
pub type ContextWrapper<F> = Callback<<F as Signature>::Args, <F as Signature>::Output>;

/// Plain callback signatures, before the handle is prepended.
pub mod original {
    use crate::{InitMenuPageParams, Settings};
    use crmkit_types::Opaque;
    use futures::future::BoxFuture;

    /// Lifecycle step that must return `true` to let the host proceed.
    pub type TrueCallback = fn() -> bool;

    pub type AdvancedSettings = fn();
    pub type BindActions = TrueCallback;
    pub type Destroy = fn();
    pub type Init = TrueCallback;
    pub type LeadsSelected = fn();
    pub type TodoSelected = fn();
    pub type ContactsSelected = fn();
    pub type DpSettings = fn();
    pub type InitMenuPage = fn(InitMenuPageParams);
    pub type LinkCard = fn(Vec<Opaque>) -> Opaque;
    pub type LoadCatalogElement = fn(Opaque);
    pub type LoadElements = fn(Vec<Opaque>) -> Opaque;
    pub type LoadPreloadedData = fn() -> BoxFuture<'static, Vec<Opaque>>;
    pub type OnAddAsSource = fn(i64);
    pub type OnSalesbotDesignerSave = fn(String, Settings) -> String;
    pub type OnSave = TrueCallback;
    pub type Render = TrueCallback;
    pub type SalesbotDesignerSettings = fn(Vec<Opaque>) -> Opaque;
    /// Receives the settings modal's content element.
    pub type SettingsModal = fn(Opaque);
}

pub type AdvancedSettingsCallback = ContextWrapper<original::AdvancedSettings>;
/// Must return `true`.
pub type BindActionsCallback = ContextWrapper<original::BindActions>;
/// Called when the widget is disabled.
pub type DestroyCallback = ContextWrapper<original::Destroy>;
/// Must return `true` for `bind_actions` to run.
pub type InitCallback = ContextWrapper<original::Init>;
pub type LeadsSelectedCallback = ContextWrapper<original::LeadsSelected>;
pub type TodoSelectedCallback = ContextWrapper<original::TodoSelected>;
pub type ContactsSelectedCallback = ContextWrapper<original::ContactsSelected>;
/// Digital pipeline settings.
pub type DpSettingsCallback = ContextWrapper<original::DpSettings>;
pub type InitMenuPageCallback = ContextWrapper<original::InitMenuPage>;
pub type LinkCardCallback = ContextWrapper<original::LinkCard>;
pub type LoadCatalogElementCallback = ContextWrapper<original::LoadCatalogElement>;
pub type LoadElementsCallback = ContextWrapper<original::LoadElements>;
pub type LoadPreloadedDataCallback = ContextWrapper<original::LoadPreloadedData>;
pub type OnAddAsSourceCallback = ContextWrapper<original::OnAddAsSource>;
pub type OnSalesbotDesignerSaveCallback = ContextWrapper<original::OnSalesbotDesignerSave>;
/// Must return `true` for the settings to be saved.
pub type OnSaveCallback = ContextWrapper<original::OnSave>;
/// Must return `true` for widget initialization to continue.
pub type RenderCallback = ContextWrapper<original::Render>;
pub type SalesbotDesignerSettingsCallback = ContextWrapper<original::SalesbotDesignerSettings>;
pub type SettingsCallback = ContextWrapper<original::SettingsModal>;

/// `{ selected }` sub-table of list-view callbacks.
#[derive(Debug)]
pub struct Selected<C> {
    pub selected: Option<C>,
}

impl<C> Default for Selected<C> {
    fn default() -> Self {
        Self { selected: None }
    }
}

/// The callback table a widget fills in. Unset entries are never called.
#[derive(Debug, Default)]
pub struct Callbacks {
    pub render: Option<RenderCallback>,
    pub init: Option<InitCallback>,
    pub bind_actions: Option<BindActionsCallback>,
    pub settings: Option<SettingsCallback>,
    pub on_save: Option<OnSaveCallback>,
    pub destroy: Option<DestroyCallback>,
    pub leads: Selected<LeadsSelectedCallback>,
    pub contacts: Selected<ContactsSelectedCallback>,
    pub todo: Selected<TodoSelectedCallback>,
    pub advanced_settings: Option<AdvancedSettingsCallback>,
    pub dp_settings: Option<DpSettingsCallback>,
    pub init_menu_page: Option<InitMenuPageCallback>,
    pub on_salesbot_designer_save: Option<OnSalesbotDesignerSaveCallback>,
    pub on_add_as_source: Option<OnAddAsSourceCallback>,
    pub load_catalog_element: Option<LoadCatalogElementCallback>,
    pub load_preloaded_data: Option<LoadPreloadedDataCallback>,
    pub load_elements: Option<LoadElementsCallback>,
    pub link_card: Option<LinkCardCallback>,
    pub salesbot_designer_settings: Option<SalesbotDesignerSettingsCallback>,
}

impl Callbacks {
    /// Host-side names of the registered callbacks.
    pub fn registered(&self) -> Vec<&'static str> {
        let entries = [
            ("render", self.render.is_some()),
            ("init", self.init.is_some()),
            ("bind_actions", self.bind_actions.is_some()),
            ("settings", self.settings.is_some()),
            ("onSave", self.on_save.is_some()),
            ("destroy", self.destroy.is_some()),
            ("leads.selected", self.leads.selected.is_some()),
            ("contacts.selected", self.contacts.selected.is_some()),
            ("todo.selected", self.todo.selected.is_some()),
            ("advancedSettings", self.advanced_settings.is_some()),
            ("dpSettings", self.dp_settings.is_some()),
            ("initMenuPage", self.init_menu_page.is_some()),
            ("onSalesbotDesignerSave", self.on_salesbot_designer_save.is_some()),
            ("onAddAsSource", self.on_add_as_source.is_some()),
            ("loadCatalogElement", self.load_catalog_element.is_some()),
            ("loadPreloadedData", self.load_preloaded_data.is_some()),
            ("loadElements", self.load_elements.is_some()),
            ("linkCard", self.link_card.is_some()),
            ("salesbotDesignerSettings", self.salesbot_designer_settings.is_some()),
        ];
        entries
            .into_iter()
            .filter_map(|(name, set)| set.then_some(name))
            .collect()
    }
}
