mod common;

use common::MockHost;
use crmkit_types::Opaque;
use crmkit_widget::original;
use crmkit_widget::{
    Callback, Callbacks, ContextWrapper, InitMenuPageCallback, InitMenuPageParams,
    LeadsSelectedCallback, LinkCardCallback, LoadPreloadedDataCallback,
    OnSalesbotDesignerSaveCallback, OnSaveCallback, RenderCallback,
    RenderTemplate, Settings, SettingsCallback, Signature, WidgetIntegration,
};
use futures::executor::block_on;
use futures::future::BoxFuture;
use pretty_assertions::assert_eq;
use serde_json::json;

/// Compiles only when `A` and `B` are the same type.
trait SameAs<T> {}
impl<T> SameAs<T> for T {}
fn same_type<A: SameAs<B>, B>() {}

// ── Derived signatures ────────────────────────────────────────────

#[test]
fn wrapper_keeps_parameters_and_return_type() {
    same_type::<<original::Render as Signature>::Args, ()>();
    same_type::<<original::Render as Signature>::Output, bool>();
    same_type::<<original::OnAddAsSource as Signature>::Args, (i64,)>();
    same_type::<<original::OnAddAsSource as Signature>::Output, ()>();
    same_type::<<original::OnSalesbotDesignerSave as Signature>::Args, (String, Settings)>();
    same_type::<<original::OnSalesbotDesignerSave as Signature>::Output, String>();
    same_type::<<original::LinkCard as Signature>::Output, Opaque>();
}

#[test]
fn wrapped_aliases_match_their_plain_signatures() {
    same_type::<RenderCallback, Callback<(), bool>>();
    same_type::<SettingsCallback, Callback<(Opaque,), ()>>();
    same_type::<InitMenuPageCallback, Callback<(InitMenuPageParams,), ()>>();
    same_type::<OnSalesbotDesignerSaveCallback, Callback<(String, Settings), String>>();
    same_type::<LinkCardCallback, Callback<(Vec<Opaque>,), Opaque>>();
    same_type::<LoadPreloadedDataCallback, Callback<(), BoxFuture<'static, Vec<Opaque>>>>();
    same_type::<ContextWrapper<fn(u8, u16) -> u32>, Callback<(u8, u16), u32>>();
}

// ── Invocation ────────────────────────────────────────────────────

#[test]
fn handle_is_passed_first() {
    let render = RenderCallback::new(|host, ()| {
        let title = host.i18n("widget.name");
        host.render_template(RenderTemplate::body("tracker", title));
        true
    });
    let mut host = MockHost::default();

    assert!(render.call(&mut host, ()));
    assert_eq!(
        host.rendered,
        vec![RenderTemplate::body("tracker", "Call tracker")]
    );
}

#[test]
fn lifted_callback_ignores_handle() {
    let save = OnSalesbotDesignerSaveCallback::lift(|(code, params)| {
        format!("{code}:{}", params.len())
    });
    let mut params = Settings::new();
    params.insert("message".into(), json!("hi"));

    let out = save.call(&mut MockHost::default(), ("send".into(), params));
    assert_eq!(out, "send:1");
}

#[test]
fn callback_can_use_host_selection() {
    let link = LinkCardCallback::new(|host, (args,)| {
        json!({"linked": args.len(), "selected": host.list_selected().len()})
    });
    let out = link.call(&mut MockHost::default(), (vec![json!({"id": 10})],));
    assert_eq!(out, json!({"linked": 1, "selected": 2}));
}

#[test]
fn preloaded_data_resolves() {
    let preload = LoadPreloadedDataCallback::lift(|()| {
        Box::pin(async { vec![json!({"id": "1", "name": "Basic plan"})] }) as BoxFuture<'static, _>
    });
    let items = block_on(preload.call(&mut MockHost::default(), ()));
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Basic plan");
}

// ── Callback table ────────────────────────────────────────────────

#[test]
fn registered_lists_host_names_in_table_order() {
    let mut callbacks = Callbacks::default();
    assert!(callbacks.registered().is_empty());

    callbacks.on_save = Some(OnSaveCallback::lift(|()| true));
    callbacks.render = Some(RenderCallback::lift(|()| true));
    callbacks.leads.selected = Some(LeadsSelectedCallback::lift(|()| ()));
    callbacks.init_menu_page = Some(InitMenuPageCallback::lift(|(_params,)| ()));

    assert_eq!(
        callbacks.registered(),
        vec!["render", "onSave", "leads.selected", "initMenuPage"]
    );
}

// ── Host helpers ──────────────────────────────────────────────────

#[test]
fn i18n_falls_back_to_key() {
    let host = MockHost::default();
    assert_eq!(host.i18n("widget.name"), "Call tracker");
    assert_eq!(host.i18n("widget.missing"), "widget.missing");
}

#[test]
fn render_template_host_arguments() {
    let body = RenderTemplate::body("c", "<b>x</b>");
    let (options, params) = body.to_host_args();
    assert_eq!(
        options,
        json!({"caption": {"class_name": "c"}, "body": "<b>x</b>", "render": ""})
    );
    assert!(params.is_none());

    let template = RenderTemplate::template("c", "{{ name }}", json!({"name": "Ann"}));
    let (options, params) = template.to_host_args();
    assert_eq!(options["body"], "");
    assert_eq!(options["render"], "{{ name }}");
    assert_eq!(params, Some(&json!({"name": "Ann"})));
}

#[test]
fn pipeline_id_resolves_asynchronously() {
    let host = MockHost::default();
    assert_eq!(block_on(host.get_pipeline_id()).unwrap(), "3177727");
}
