use crate::EntityCustomField;
use crmkit_types::{EntityKind, NumOrStr, SelfLinks};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Common surface of the four business records.
///
/// `KIND` is the collection name the record is listed under in the
/// `_embedded` block of a list response.
pub trait EntityRecord: Serialize + DeserializeOwned {
    const KIND: EntityKind;

    fn id(&self) -> NumOrStr;
    fn name(&self) -> &str;
    fn custom_fields_values(&self) -> &[EntityCustomField];

    /// Looks up the values of one custom field by field id.
    fn custom_field(&self, field_id: i64) -> Option<&EntityCustomField> {
        self.custom_fields_values()
            .iter()
            .find(|f| f.field_id == field_id)
    }
}

/// A tag attached to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRef {
    pub id: NumOrStr,
    pub name: String,
}

/// A linked record inside `_embedded` (company or contact reference).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: NumOrStr,
    #[serde(rename = "_links")]
    pub links: SelfLinks,
}

/// Related records of a lead, as far as the request's `with` parameter
/// asked for them. A `None` collection means "not requested", not "empty".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadEmbedded {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub companies: Option<Vec<EntityRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<EntityRef>>,
}

/// Related records of a contact or customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEmbedded {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub companies: Option<Vec<EntityRef>>,
}

/// Related records of a company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyEmbedded {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagRef>>,
}

/// A lead (deal) as returned by `GET /api/v4/leads`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub responsible_user_id: NumOrStr,
    pub group_id: NumOrStr,
    pub status_id: NumOrStr,
    pub pipeline_id: NumOrStr,
    pub loss_reason_id: Option<NumOrStr>,
    pub source_id: Option<NumOrStr>,
    pub created_by: NumOrStr,
    pub updated_by: NumOrStr,
    pub created_at: NumOrStr,
    pub updated_at: NumOrStr,
    pub closed_at: Option<NumOrStr>,
    pub closest_task_at: Option<NumOrStr>,
    pub is_deleted: bool,
    pub custom_fields_values: Vec<EntityCustomField>,
    pub score: Option<NumOrStr>,
    pub account_id: NumOrStr,
    #[serde(rename = "_links")]
    pub links: SelfLinks,
    #[serde(rename = "_embedded")]
    pub embedded: LeadEmbedded,
}

/// A contact (person).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: NumOrStr,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub responsible_user_id: NumOrStr,
    pub group_id: NumOrStr,
    pub created_by: NumOrStr,
    pub updated_by: NumOrStr,
    pub created_at: NumOrStr,
    pub updated_at: NumOrStr,
    pub closest_task_at: Option<NumOrStr>,
    pub custom_fields_values: Vec<EntityCustomField>,
    pub account_id: NumOrStr,
    #[serde(rename = "_links")]
    pub links: SelfLinks,
    #[serde(rename = "_embedded")]
    pub embedded: ContactEmbedded,
}

/// A company (organization).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: NumOrStr,
    pub name: String,
    pub responsible_user_id: NumOrStr,
    pub group_id: NumOrStr,
    pub created_by: NumOrStr,
    pub updated_by: NumOrStr,
    pub created_at: NumOrStr,
    pub updated_at: NumOrStr,
    pub closest_task_at: Option<NumOrStr>,
    pub custom_fields_values: Vec<EntityCustomField>,
    pub account_id: NumOrStr,
    #[serde(rename = "_links")]
    pub links: SelfLinks,
    #[serde(rename = "_embedded")]
    pub embedded: CompanyEmbedded,
}

/// A customer (recurring-sales record).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: NumOrStr,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub responsible_user_id: NumOrStr,
    pub group_id: NumOrStr,
    pub created_by: NumOrStr,
    pub updated_by: NumOrStr,
    pub created_at: NumOrStr,
    pub updated_at: NumOrStr,
    pub closest_task_at: Option<NumOrStr>,
    pub custom_fields_values: Vec<EntityCustomField>,
    pub account_id: NumOrStr,
    pub is_deleted: bool,
    pub ltv: f64,
    pub purchases_count: i64,
    pub average_check: f64,
    pub status_id: i64,
    pub periodicity: i64,
    pub next_price: f64,
    pub next_date: i64,
    #[serde(rename = "_links")]
    pub links: SelfLinks,
    #[serde(rename = "_embedded")]
    pub embedded: ContactEmbedded,
}

macro_rules! entity_record {
    ($ty:ty, $kind:expr, |$s:ident| $id:expr) => {
        impl EntityRecord for $ty {
            const KIND: EntityKind = $kind;

            fn id(&self) -> NumOrStr {
                let $s = self;
                $id
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn custom_fields_values(&self) -> &[EntityCustomField] {
                &self.custom_fields_values
            }
        }
    };
}

entity_record!(Lead, EntityKind::Leads, |s| NumOrStr::Num(s.id));
entity_record!(Contact, EntityKind::Contacts, |s| s.id.clone());
entity_record!(Company, EntityKind::Companies, |s| s.id.clone());
entity_record!(Customer, EntityKind::Customers, |s| s.id.clone());

impl Lead {
    /// Returns the ids of embedded contacts, if contacts were requested.
    pub fn contact_ids(&self) -> Option<Vec<&NumOrStr>> {
        self.embedded
            .contacts
            .as_ref()
            .map(|refs| refs.iter().map(|r| &r.id).collect())
    }
}
