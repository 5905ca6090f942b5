//! Custom field definitions and the values entities carry for them.
//!
//! A custom field exists twice on the wire: once as a definition
//! ([`CustomField`], from `/api/v4/<kind>/custom_fields`) and once per record
//! as a value list ([`EntityCustomField`]). The concrete shape of a value is
//! decided by the definition's type tag, see [`crate::CustomFieldIndex`].

use crmkit_types::{EntityKind, NumOrStr, Opaque, SelfLinks};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Type tag of a custom field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomFieldType {
    Text,
    Numeric,
    Checkbox,
    Select,
    Multiselect,
    /// Labelled multi-value text; system `PHONE` / `EMAIL` fields use it.
    Multitext,
    Date,
    Url,
    Textarea,
    Radiobutton,
    Streetaddress,
    SmartAddress,
    Birthday,
    LegalEntity,
    DateTime,
    Price,
    Category,
    Items,
}

impl CustomFieldType {
    pub const ALL: [Self; 18] = [
        Self::Text,
        Self::Numeric,
        Self::Checkbox,
        Self::Select,
        Self::Multiselect,
        Self::Multitext,
        Self::Date,
        Self::Url,
        Self::Textarea,
        Self::Radiobutton,
        Self::Streetaddress,
        Self::SmartAddress,
        Self::Birthday,
        Self::LegalEntity,
        Self::DateTime,
        Self::Price,
        Self::Category,
        Self::Items,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Numeric => "numeric",
            Self::Checkbox => "checkbox",
            Self::Select => "select",
            Self::Multiselect => "multiselect",
            Self::Multitext => "multitext",
            Self::Date => "date",
            Self::Url => "url",
            Self::Textarea => "textarea",
            Self::Radiobutton => "radiobutton",
            Self::Streetaddress => "streetaddress",
            Self::SmartAddress => "smart_address",
            Self::Birthday => "birthday",
            Self::LegalEntity => "legal_entity",
            Self::DateTime => "date_time",
            Self::Price => "price",
            Self::Category => "category",
            Self::Items => "items",
        }
    }

    /// Choice-like types: every value carries an `enum_id`.
    #[must_use]
    pub const fn is_choice(self) -> bool {
        matches!(
            self,
            Self::Select | Self::Multiselect | Self::Radiobutton | Self::Category
        )
    }

    /// Types whose value list may hold more than one entry.
    #[must_use]
    pub const fn is_multi_valued(self) -> bool {
        matches!(self, Self::Multiselect | Self::Multitext | Self::Items)
    }
}

impl fmt::Display for CustomFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Codes reserved for system fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CustomFieldCode {
    Email,
    Phone,
    Web,
    Address,
    Position,
}

/// Numeric `TYPE_ID`s used by the runtime custom-field configs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyFieldType {
    Text = 1,
    Numeric = 2,
    Checkbox = 3,
    Select = 4,
    Multiselect = 5,
    Date = 6,
    Url = 7,
    Multitext = 8,
    Textarea = 9,
    Radiobutton = 10,
    Streetaddress = 11,
    SmartAddress = 13,
    Birthday = 14,
    LegalEntity = 15,
}

impl LegacyFieldType {
    pub const ALL: [Self; 14] = [
        Self::Text,
        Self::Numeric,
        Self::Checkbox,
        Self::Select,
        Self::Multiselect,
        Self::Date,
        Self::Url,
        Self::Multitext,
        Self::Textarea,
        Self::Radiobutton,
        Self::Streetaddress,
        Self::SmartAddress,
        Self::Birthday,
        Self::LegalEntity,
    ];

    #[must_use]
    pub fn from_type_id(type_id: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.type_id() == type_id)
    }

    #[must_use]
    pub const fn type_id(self) -> i64 {
        self as i64
    }

    /// The type tag the REST API uses for the same field.
    #[must_use]
    pub const fn field_type(self) -> CustomFieldType {
        match self {
            Self::Text => CustomFieldType::Text,
            Self::Numeric => CustomFieldType::Numeric,
            Self::Checkbox => CustomFieldType::Checkbox,
            Self::Select => CustomFieldType::Select,
            Self::Multiselect => CustomFieldType::Multiselect,
            Self::Date => CustomFieldType::Date,
            Self::Url => CustomFieldType::Url,
            Self::Multitext => CustomFieldType::Multitext,
            Self::Textarea => CustomFieldType::Textarea,
            Self::Radiobutton => CustomFieldType::Radiobutton,
            Self::Streetaddress => CustomFieldType::Streetaddress,
            Self::SmartAddress => CustomFieldType::SmartAddress,
            Self::Birthday => CustomFieldType::Birthday,
            Self::LegalEntity => CustomFieldType::LegalEntity,
        }
    }
}

/// Fixed record carried by legal-entity values.
///
/// This shape is recognised on its own: a value object with exactly these
/// keys decodes to an address whatever the field's definition says. Every
/// key must be present; only its value may be `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomFieldTypeAddress {
    #[serde(deserialize_with = "nullable")]
    pub name: Option<NumOrStr>,
    #[serde(deserialize_with = "nullable")]
    pub entity_type: Option<NumOrStr>,
    #[serde(deserialize_with = "nullable")]
    pub vat_id: Option<NumOrStr>,
    #[serde(deserialize_with = "nullable")]
    pub tax_registration_reason_code: Option<NumOrStr>,
    #[serde(deserialize_with = "nullable")]
    pub address: Option<NumOrStr>,
    #[serde(deserialize_with = "nullable")]
    pub kpp: Option<NumOrStr>,
    #[serde(deserialize_with = "nullable")]
    pub external_uid: Option<NumOrStr>,
}

// A field with `deserialize_with` has no implicit default, so a missing key
// is an error while an explicit `null` still reads as `None`.
fn nullable<'de, D>(deserializer: D) -> Result<Option<NumOrStr>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NumOrStr>::deserialize(deserializer)
}

/// The `value` of one custom field value entry, before type-directed
/// decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawFieldValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
    Address(Box<CustomFieldTypeAddress>),
    Other(Opaque),
}

impl RawFieldValue {
    /// Short description of the JSON shape, used in error messages.
    #[must_use]
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Text(_) => "string",
            Self::Number(_) => "number",
            Self::Flag(_) => "boolean",
            Self::Address(_) => "address record",
            Self::Other(v) if v.is_object() => "object",
            Self::Other(v) if v.is_array() => "array",
            Self::Other(_) => "null",
        }
    }
}

/// One entry of an entity's value list for a custom field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldValue {
    pub value: RawFieldValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_id: Option<NumOrStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_code: Option<NumOrStr>,
}

impl CustomFieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: RawFieldValue::Text(value.into()),
            enum_id: None,
            enum_code: None,
        }
    }

    pub fn choice(value: impl Into<String>, enum_id: impl Into<NumOrStr>) -> Self {
        Self {
            value: RawFieldValue::Text(value.into()),
            enum_id: Some(enum_id.into()),
            enum_code: None,
        }
    }
}

/// Values of one custom field attached to an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityCustomField {
    pub field_id: i64,
    pub field_name: String,
    pub field_code: Option<CustomFieldCode>,
    pub field_type: CustomFieldType,
    pub values: Vec<CustomFieldValue>,
}

impl EntityCustomField {
    /// First value as text, for single-valued text-like fields.
    pub fn first_text(&self) -> Option<&str> {
        self.values.first().and_then(|v| match &v.value {
            RawFieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }
}

/// A choice of a select-like field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumChoice {
    pub id: i64,
    pub value: String,
    pub sort: i64,
}

/// A (pipeline, status) pair in which the field must be filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredStatus {
    pub pipeline_id: i64,
    pub status_id: i64,
}

/// Reminder period of birthday/date fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemindPeriod {
    Day,
    Week,
    Month,
}

/// A custom field definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: CustomFieldType,
    pub account_id: i64,
    pub code: Option<CustomFieldCode>,
    pub sort: i64,
    pub is_api_only: bool,
    pub enums: Option<Vec<EnumChoice>>,
    pub group_id: Option<String>,
    pub required_statuses: Vec<RequiredStatus>,
    pub entity_type: EntityKind,
    pub remind: Option<RemindPeriod>,
    #[serde(rename = "_links")]
    pub links: SelfLinks,
}

impl CustomField {
    pub fn enum_by_id(&self, id: i64) -> Option<&EnumChoice> {
        self.enums.as_deref()?.iter().find(|e| e.id == id)
    }

    /// Whether the field must be filled before a record enters the status.
    pub fn is_required_for(&self, pipeline_id: i64, status_id: i64) -> bool {
        self.required_statuses
            .iter()
            .any(|r| r.pipeline_id == pipeline_id && r.status_id == status_id)
    }
}

/// A tab grouping custom fields on the record card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldGroup {
    pub id: NumOrStr,
    pub name: String,
    pub is_predefined: bool,
    pub entity_type: EntityKind,
    pub sort: i64,
    #[serde(rename = "_links")]
    pub links: SelfLinks,
}
