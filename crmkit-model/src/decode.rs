//! Type-directed decoding of custom field values.
//!
//! A value entry alone does not say what it is: `"150"` may be text, a
//! number or a choice label. The definition's type tag decides. The one
//! exception is the legal-entity address record, which is recognised by its
//! fixed key set before the type tag is consulted.

use crate::{
    CustomField, CustomFieldType, CustomFieldTypeAddress, CustomFieldValue, EntityCustomField,
    RawFieldValue,
};
use crmkit_types::{Error, NumOrStr, Opaque, Result};
use std::collections::HashMap;

/// A custom field value resolved against its field type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    /// text, textarea, url, streetaddress
    Text(String),
    /// multitext and smart_address: text plus its label code (`WORK`, `MOB`...).
    Labeled {
        value: String,
        enum_code: Option<NumOrStr>,
    },
    /// numeric, price
    Number(serde_json::Number),
    /// checkbox
    Flag(bool),
    /// date, birthday, date_time
    Timestamp(NumOrStr),
    /// select, multiselect, radiobutton, category
    Choice {
        enum_id: NumOrStr,
        value: Option<String>,
    },
    /// legal_entity, or any value carrying the address record shape
    Address(Box<CustomFieldTypeAddress>),
    /// items: shape not fixed by the API
    Opaque(Opaque),
}

impl EntityCustomField {
    /// Decodes the values against `definition`'s type tag.
    ///
    /// Fails with [`Error::FieldMismatch`] if the definition is for another
    /// field.
    pub fn decode_with(&self, definition: &CustomField) -> Result<Vec<TypedValue>> {
        if definition.id != self.field_id {
            return Err(Error::FieldMismatch {
                expected: definition.id,
                found: self.field_id,
            });
        }
        decode_values(self.field_id, definition.field_type, &self.values)
    }

    /// Decodes the values against the type tag echoed in the value list
    /// itself. Prefer [`EntityCustomField::decode_with`] when the definition
    /// is at hand.
    pub fn decode(&self) -> Result<Vec<TypedValue>> {
        decode_values(self.field_id, self.field_type, &self.values)
    }
}

fn decode_values(
    field_id: i64,
    field_type: CustomFieldType,
    values: &[CustomFieldValue],
) -> Result<Vec<TypedValue>> {
    values
        .iter()
        .map(|v| decode_value(field_id, field_type, v))
        .collect()
}

fn decode_value(
    field_id: i64,
    field_type: CustomFieldType,
    entry: &CustomFieldValue,
) -> Result<TypedValue> {
    use crate::CustomFieldType as T;

    if let RawFieldValue::Address(address) = &entry.value {
        return Ok(TypedValue::Address(address.clone()));
    }

    let unexpected = || Error::UnexpectedValue {
        field_id,
        field_type: field_type.to_string(),
        found: entry.value.shape().to_string(),
    };

    match (field_type, &entry.value) {
        (T::Text | T::Textarea | T::Url | T::Streetaddress, RawFieldValue::Text(s)) => {
            Ok(TypedValue::Text(s.clone()))
        }
        (T::Multitext | T::SmartAddress, RawFieldValue::Text(s)) => Ok(TypedValue::Labeled {
            value: s.clone(),
            enum_code: entry.enum_code.clone(),
        }),
        (T::Numeric | T::Price, RawFieldValue::Number(n)) => Ok(TypedValue::Number(n.clone())),
        // Numeric fields are commonly returned as decimal strings.
        (T::Numeric | T::Price, RawFieldValue::Text(s)) => s
            .trim()
            .parse::<serde_json::Number>()
            .map(TypedValue::Number)
            .map_err(|_| unexpected()),
        (T::Checkbox, RawFieldValue::Flag(b)) => Ok(TypedValue::Flag(*b)),
        (T::Date | T::Birthday | T::DateTime, RawFieldValue::Number(n)) => n
            .as_i64()
            .map(|ts| TypedValue::Timestamp(NumOrStr::Num(ts)))
            .ok_or_else(unexpected),
        (T::Date | T::Birthday | T::DateTime, RawFieldValue::Text(s)) => {
            Ok(TypedValue::Timestamp(NumOrStr::Str(s.clone())))
        }
        (t, value) if t.is_choice() => {
            let enum_id = entry.enum_id.clone().ok_or_else(|| Error::MissingEnumId {
                field_id,
                field_type: t.to_string(),
            })?;
            let value = match value {
                RawFieldValue::Text(s) => Some(s.clone()),
                RawFieldValue::Other(v) if v.is_null() => None,
                _ => return Err(unexpected()),
            };
            Ok(TypedValue::Choice { enum_id, value })
        }
        (T::Items, value) => Ok(TypedValue::Opaque(serde_json::to_value(value)?)),
        _ => Err(unexpected()),
    }
}

/// Custom field definitions of one entity kind, keyed by field id.
#[derive(Debug, Clone, Default)]
pub struct CustomFieldIndex {
    by_id: HashMap<i64, CustomField>,
}

impl CustomFieldIndex {
    pub fn new(definitions: impl IntoIterator<Item = CustomField>) -> Self {
        Self {
            by_id: definitions.into_iter().map(|d| (d.id, d)).collect(),
        }
    }

    pub fn get(&self, field_id: i64) -> Option<&CustomField> {
        self.by_id.get(&field_id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Decodes one value list against its definition.
    pub fn decode(&self, field: &EntityCustomField) -> Result<Vec<TypedValue>> {
        let definition = self
            .get(field.field_id)
            .ok_or(Error::UnknownField(field.field_id))?;
        field.decode_with(definition)
    }

    /// Decodes a record's whole `custom_fields_values` list, keyed by field id.
    pub fn decode_all(&self, fields: &[EntityCustomField]) -> Result<Vec<(i64, Vec<TypedValue>)>> {
        fields
            .iter()
            .map(|f| Ok((f.field_id, self.decode(f)?)))
            .collect()
    }
}
