//! Host-side driver of a widget's callback table.
//!
//! Event callbacks (list selections, menu pages, salesbot, catalog and card
//! hooks) only fire once `start` has reached [`LifecycleStage::Ready`].
//! `settings`, `onSave` and `destroy` are exempt: the host opens the settings
//! modal for widgets that are not yet installed or failed to start.

use crate::callback::{Callback, Callbacks};
use crate::{InitMenuPageParams, Settings, WidgetError, WidgetIntegration};
use crmkit_types::Opaque;
use futures::future::BoxFuture;
use tracing::{debug, info, warn};

/// How far a widget got through `render` → `init` → `bind_actions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStage {
    Idle,
    Rendered,
    Initialized,
    /// `bind_actions` returned `true`; event callbacks may fire.
    Ready,
    /// A gate callback returned `false`.
    Halted,
    Destroyed,
}

/// A widget instance: the host handle plus the widget's callback table.
pub struct Widget<H> {
    handle: H,
    callbacks: Callbacks,
    stage: LifecycleStage,
}

impl<H: WidgetIntegration> Widget<H> {
    pub fn new(handle: H, callbacks: Callbacks) -> Self {
        Self {
            handle,
            callbacks,
            stage: LifecycleStage::Idle,
        }
    }

    pub fn stage(&self) -> LifecycleStage {
        self.stage
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn handle_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    pub fn callbacks(&self) -> &Callbacks {
        &self.callbacks
    }

    /// Runs `render`, `init` and `bind_actions` in order. Each must be
    /// registered and return `true` for the next one to run.
    pub fn start(&mut self) -> Result<LifecycleStage, WidgetError> {
        if self.stage == LifecycleStage::Destroyed {
            return Err(WidgetError::Destroyed);
        }
        debug!(callbacks = ?self.callbacks.registered(), "Starting widget");

        self.gate("render", |c| c.render.as_ref(), LifecycleStage::Rendered)?;
        self.gate("init", |c| c.init.as_ref(), LifecycleStage::Initialized)?;
        self.gate("bind_actions", |c| c.bind_actions.as_ref(), LifecycleStage::Ready)?;

        info!(version = %self.handle.get_version(), "Widget ready");
        Ok(self.stage)
    }

    fn gate(
        &mut self,
        name: &'static str,
        select: impl Fn(&Callbacks) -> Option<&Callback<(), bool>>,
        next: LifecycleStage,
    ) -> Result<(), WidgetError> {
        let Some(callback) = select(&self.callbacks) else {
            self.stage = LifecycleStage::Halted;
            return Err(WidgetError::MissingCallback(name));
        };
        if !callback.call(&mut self.handle, ()) {
            warn!(callback = name, "Widget callback returned false, halting");
            self.stage = LifecycleStage::Halted;
            return Err(WidgetError::GateRejected { callback: name });
        }
        self.stage = next;
        Ok(())
    }

    fn dispatch<A, R>(
        &mut self,
        name: &'static str,
        select: impl Fn(&Callbacks) -> Option<&Callback<A, R>>,
        args: A,
    ) -> Result<Option<R>, WidgetError> {
        if self.stage == LifecycleStage::Destroyed {
            return Err(WidgetError::Destroyed);
        }
        match select(&self.callbacks) {
            Some(callback) => {
                debug!(callback = name, "Dispatching widget callback");
                Ok(Some(callback.call(&mut self.handle, args)))
            }
            None => {
                debug!(callback = name, "Widget callback not registered");
                Ok(None)
            }
        }
    }

    fn dispatch_event<A, R>(
        &mut self,
        name: &'static str,
        select: impl Fn(&Callbacks) -> Option<&Callback<A, R>>,
        args: A,
    ) -> Result<Option<R>, WidgetError> {
        match self.stage {
            LifecycleStage::Ready => self.dispatch(name, select, args),
            LifecycleStage::Destroyed => Err(WidgetError::Destroyed),
            stage => {
                warn!(callback = name, ?stage, "Widget not ready, event dropped");
                Err(WidgetError::NotReady(name))
            }
        }
    }

    /// Opens the settings modal; `modal` is the modal content element.
    pub fn open_settings(&mut self, modal: Opaque) -> Result<(), WidgetError> {
        self.dispatch("settings", |c| c.settings.as_ref(), (modal,))
            .map(|_| ())
    }

    /// Saves settings if `onSave` allows it (returns `true` or is unset).
    pub fn save_settings(&mut self, settings: Settings) -> Result<(), WidgetError> {
        if self.dispatch("onSave", |c| c.on_save.as_ref(), ())? == Some(false) {
            warn!("onSave rejected the new settings");
            return Err(WidgetError::GateRejected { callback: "onSave" });
        }
        self.handle.set_settings(settings);
        Ok(())
    }

    /// Runs `destroy` and retires the widget. Later calls fail with
    /// [`WidgetError::Destroyed`].
    pub fn destroy(&mut self) -> Result<(), WidgetError> {
        self.dispatch("destroy", |c| c.destroy.as_ref(), ())?;
        self.stage = LifecycleStage::Destroyed;
        info!("Widget destroyed");
        Ok(())
    }

    pub fn leads_selected(&mut self) -> Result<bool, WidgetError> {
        self.dispatch_event("leads.selected", |c| c.leads.selected.as_ref(), ())
            .map(|r| r.is_some())
    }

    pub fn contacts_selected(&mut self) -> Result<bool, WidgetError> {
        self.dispatch_event("contacts.selected", |c| c.contacts.selected.as_ref(), ())
            .map(|r| r.is_some())
    }

    pub fn todo_selected(&mut self) -> Result<bool, WidgetError> {
        self.dispatch_event("todo.selected", |c| c.todo.selected.as_ref(), ())
            .map(|r| r.is_some())
    }

    pub fn advanced_settings(&mut self) -> Result<bool, WidgetError> {
        self.dispatch_event("advancedSettings", |c| c.advanced_settings.as_ref(), ())
            .map(|r| r.is_some())
    }

    pub fn dp_settings(&mut self) -> Result<bool, WidgetError> {
        self.dispatch_event("dpSettings", |c| c.dp_settings.as_ref(), ())
            .map(|r| r.is_some())
    }

    pub fn init_menu_page(&mut self, params: InitMenuPageParams) -> Result<bool, WidgetError> {
        self.dispatch_event("initMenuPage", |c| c.init_menu_page.as_ref(), (params,))
            .map(|r| r.is_some())
    }

    /// Returns the handler code produced by the widget for the salesbot step.
    pub fn on_salesbot_designer_save(
        &mut self,
        handler_code: String,
        params: Settings,
    ) -> Result<Option<String>, WidgetError> {
        self.dispatch_event(
            "onSalesbotDesignerSave",
            |c| c.on_salesbot_designer_save.as_ref(),
            (handler_code, params),
        )
    }

    pub fn on_add_as_source(&mut self, pipeline_id: i64) -> Result<bool, WidgetError> {
        self.dispatch_event("onAddAsSource", |c| c.on_add_as_source.as_ref(), (pipeline_id,))
            .map(|r| r.is_some())
    }

    pub fn load_catalog_element(&mut self, element: Opaque) -> Result<bool, WidgetError> {
        self.dispatch_event("loadCatalogElement", |c| c.load_catalog_element.as_ref(), (element,))
            .map(|r| r.is_some())
    }

    pub fn load_preloaded_data(
        &mut self,
    ) -> Result<Option<BoxFuture<'static, Vec<Opaque>>>, WidgetError> {
        self.dispatch_event("loadPreloadedData", |c| c.load_preloaded_data.as_ref(), ())
    }

    pub fn load_elements(&mut self, args: Vec<Opaque>) -> Result<Option<Opaque>, WidgetError> {
        self.dispatch_event("loadElements", |c| c.load_elements.as_ref(), (args,))
    }

    pub fn link_card(&mut self, args: Vec<Opaque>) -> Result<Option<Opaque>, WidgetError> {
        self.dispatch_event("linkCard", |c| c.link_card.as_ref(), (args,))
    }

    pub fn salesbot_designer_settings(
        &mut self,
        args: Vec<Opaque>,
    ) -> Result<Option<Opaque>, WidgetError> {
        self.dispatch_event(
            "salesbotDesignerSettings",
            |c| c.salesbot_designer_settings.as_ref(),
            (args,),
        )
    }
}
