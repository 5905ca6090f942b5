//! Typed schemas for the amoCRM / Kommo REST API and widget SDK.
//!
//! This crate re-exports the workspace crates under one name:
//! - [`crmkit_types`]: numeric-or-string ids, links, flags, entity kinds
//! - [`crmkit_model`]: entities, custom fields, account, users, pipelines
//! - [`crmkit_widget`]: host handle, callbacks, lifecycle, manifest
//!
//! [`compat`] carries the legacy `Amo*` / `Kommo*` names, and [`inspect`]
//! backs the `crmkit-inspect` binary.

pub mod compat;
pub mod inspect;

pub use crmkit_model::*;
pub use crmkit_types::{
    CountryId, EntityKind, Error, FlagValue, Link, NumOrStr, Opaque, PageLinks, Result,
    SelfLinks, StringBoolean,
};
pub use crmkit_widget as widget;
