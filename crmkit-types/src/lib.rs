//! Primitive wire types for the CRM REST API and widget runtime.
//!
//! This crate defines the small building blocks every schema crate uses:
//! - [`NumOrStr`], the explicit numeric-or-string sum type the API uses for
//!   ids and timestamps
//! - HAL-style links (`_links.self`, `_links.next`)
//! - [`StringBoolean`] (`"Y"` / `"N"`) flags of the runtime constants
//! - [`EntityKind`], the entity collection names used as `_embedded` keys
//!
//! Entity, account and widget schemas live in `crmkit-model` and
//! `crmkit-widget`, not here.

mod flags;
mod kinds;
mod links;
mod num_or_str;

pub use flags::{FlagValue, StringBoolean};
pub use kinds::{CountryId, EntityKind};
pub use links::{Link, PageLinks, SelfLinks};
pub use num_or_str::NumOrStr;

/// Untyped JSON value for fields the API leaves unspecified.
///
/// Used wherever the upstream payload has no stable shape (catalog ids,
/// status rights, jQuery settings objects handed through the widget host).
pub type Opaque = serde_json::Value;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while decoding or checking CRM payloads.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("custom field {field_id} ({field_type}) value has no enum_id")]
    MissingEnumId { field_id: i64, field_type: String },

    #[error("custom field {field_id} ({field_type}) cannot hold {found}")]
    UnexpectedValue {
        field_id: i64,
        field_type: String,
        found: String,
    },

    #[error("custom field value for {found} decoded against definition {expected}")]
    FieldMismatch { expected: i64, found: i64 },

    #[error("no custom field definition for field_id {0}")]
    UnknownField(i64),

    #[error("predefined custom field '{alias}' disagrees with cf[{id}]")]
    InconsistentCustomFieldViews { alias: String, id: String },

    #[error("invalid value: {0}")]
    InvalidValue(String),
}
