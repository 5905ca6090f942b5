//! Account records: the REST shape and the host runtime constant.
//!
//! The two are separate types on purpose. [`Account`] is what
//! `GET /api/v4/account` returns; [`AccountConstant`] is the flattened view
//! the host exposes as `APP.constant('account')`. They are connected by the
//! mapping below and by nothing else:
//!
//! | wire (`Account`)                  | runtime (`AccountConstant`)            |
//! |-----------------------------------|----------------------------------------|
//! | `customers_mode: disabled/enabled`| boolean-like, see [`CustomersMode::is_enabled`] |
//! | `is_unsorted_on: bool`            | `unsorted_on: "Y"/"N"`, see [`Account::unsorted_flag`] |
//! | `is_helpbot_enabled`              | `helpbot_enabled`                       |
//! | `_embedded.amojo_rights.can_create_groups` | `amojo_rights.can_group_create` |
//! | `_embedded.datetime_settings.*`   | `date_pattern`, `date_format`, `time_format`, `timezone` |

use crmkit_types::{CountryId, Error, FlagValue, Opaque, Result, SelfLinks, StringBoolean};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---- Wire format ----

/// Whether the customers (recurring sales) section is switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomersMode {
    Disabled,
    Enabled,
}

impl CustomersMode {
    /// The runtime view collapses the mode to a flag.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// Grammatical case of a localized entity name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammaticalCase {
    Default,
    Genitive,
    Dative,
    Accusative,
    Instrumental,
    Prepositional,
}

/// One declension table. Only `default` is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameForms {
    pub default: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genitive: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dative: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accusative: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrumental: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prepositional: Option<String>,
}

impl NameForms {
    /// Returns the form for `case`, falling back to `default`.
    pub fn get(&self, case: GrammaticalCase) -> &str {
        let form = match case {
            GrammaticalCase::Default => None,
            GrammaticalCase::Genitive => self.genitive.as_deref(),
            GrammaticalCase::Dative => self.dative.as_deref(),
            GrammaticalCase::Accusative => self.accusative.as_deref(),
            GrammaticalCase::Instrumental => self.instrumental.as_deref(),
            GrammaticalCase::Prepositional => self.prepositional.as_deref(),
        };
        form.unwrap_or(&self.default)
    }
}

/// Localized singular and plural names of an entity in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityNames {
    pub singular_form: NameForms,
    pub plural_form: NameForms,
    pub gender: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmojoRights {
    pub can_direct: bool,
    pub can_create_groups: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersGroup {
    pub id: i64,
    pub name: String,
}

/// Task type as embedded in the account response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTaskType {
    pub id: i64,
    pub name: String,
    pub color: Option<String>,
    pub icon_id: Option<String>,
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatetimeSettings {
    pub date_pattern: String,
    pub short_date_pattern: String,
    pub short_time_pattern: String,
    pub date_format: String,
    pub time_format: String,
    pub timezone: String,
    pub timezone_offset: String,
}

/// Optional blocks requested through `?with=`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountEmbedded {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amojo_rights: Option<AmojoRights>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users_groups: Option<Vec<UsersGroup>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_types: Option<Vec<AccountTaskType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime_settings: Option<DatetimeSettings>,
}

/// The account as returned by the REST API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub subdomain: String,
    pub created_at: i64,
    pub created_by: i64,
    pub updated_at: i64,
    pub updated_by: i64,
    pub current_user_id: i64,
    pub country: CountryId,
    pub customers_mode: CustomersMode,
    pub is_unsorted_on: bool,
    pub mobile_feature_version: i64,
    pub is_loss_reason_enabled: bool,
    pub is_helpbot_enabled: bool,
    pub is_technical_account: bool,
    pub contact_name_display_order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amojo_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    /// entity → language → names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_names: Option<BTreeMap<String, BTreeMap<String, EntityNames>>>,
    #[serde(rename = "_links")]
    pub links: SelfLinks,
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<AccountEmbedded>,
}

impl Account {
    /// Localized names of `entity` in `language`, if the account was
    /// requested with `entity_names`.
    pub fn entity_names(&self, entity: &str, language: &str) -> Option<&EntityNames> {
        self.entity_names.as_ref()?.get(entity)?.get(language)
    }

    pub fn customers_enabled(&self) -> bool {
        self.customers_mode.is_enabled()
    }

    /// `is_unsorted_on` in the runtime encoding of `AccountConstant::unsorted_on`.
    pub fn unsorted_flag(&self) -> StringBoolean {
        StringBoolean::from(self.is_unsorted_on)
    }
}

// ---- Runtime constant ----

/// `SETTINGS` block of a runtime custom-field config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldSettings {
    #[serde(default)]
    pub is_required: Opaque,
    pub is_deletable: bool,
    pub is_visible: bool,
    #[serde(default)]
    pub vat_rates: Opaque,
    #[serde(default)]
    pub filter_type: Opaque,
}

/// A choice in the runtime `ENUMS` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct RuntimeEnum {
    pub id: i64,
    #[serde(default)]
    pub value: Opaque,
    pub sort: i64,
}

/// Custom field metadata in the runtime account constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct AccountCustomFieldConfig {
    pub id: i64,
    pub name: String,
    /// Numeric type id, see [`crate::LegacyFieldType`].
    pub type_id: i64,
    pub account_id: i64,
    pub description: String,
    pub code: String,
    pub sort: i64,
    pub entree_catalog: FlagValue,
    pub predefined: FlagValue,
    pub multiple: FlagValue,
    pub disabled: FlagValue,
    pub origin: String,
    #[serde(default)]
    pub catalog_id: Opaque,
    pub settings: CustomFieldSettings,
    #[serde(rename = "deleted_at", default)]
    pub deleted_at: Opaque,
    pub element_types: BTreeMap<i64, i64>,
    pub entree_deals: i64,
    pub entree_contacts: i64,
    pub entree_company: i64,
    pub entree_customers: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enums_names: Option<BTreeMap<String, BTreeMap<String, String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enums: Option<BTreeMap<String, RuntimeEnum>>,
}

impl AccountCustomFieldConfig {
    /// The REST type tag for `TYPE_ID`, if the id is a known one.
    pub fn field_type(&self) -> Option<crate::CustomFieldType> {
        crate::LegacyFieldType::from_type_id(self.type_id).map(|t| t.field_type())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Products {
    pub enabled: bool,
    pub catalog_id: i64,
}

/// Chat rights in the runtime view. Note `can_group_create`, where the wire
/// format says `can_create_groups`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeAmojoRights {
    pub can_direct: bool,
    pub can_group_create: bool,
}

/// The account as the host exposes it to widget code.
///
/// `predefined_cf` (keyed by alias) and `cf` (keyed by id) are two indexes
/// over the same field configs. Mutate them through
/// [`AccountConstant::upsert_custom_field`] and
/// [`AccountConstant::remove_custom_field`] to keep them in step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountConstant {
    pub id: i64,
    pub name: String,
    pub subdomain: String,
    pub predefined_cf: BTreeMap<String, AccountCustomFieldConfig>,
    pub cf: BTreeMap<String, AccountCustomFieldConfig>,
    pub users: BTreeMap<String, String>,
    pub country: String,
    pub currency: String,
    pub paid_from: bool,
    pub paid_till: bool,
    pub pay_type: String,
    #[serde(rename = "tariffName")]
    pub tariff_name: String,
    pub timezone: String,
    pub date_pattern: String,
    pub language: String,
    pub date_format: String,
    pub time_format: String,
    pub unsorted_on: StringBoolean,
    pub is_contact_name_display_order_first: bool,
    pub products: Products,
    pub helpbot_enabled: bool,
    pub amojo_id: String,
    pub amojo_server: String,
    pub amojo_enabled: i64,
    pub amojo_rights: RuntimeAmojoRights,
    pub talks_auto_close_delay: i64,
    pub notifications_enabled: bool,
    pub version: i64,
}

impl AccountConstant {
    pub fn custom_field_by_alias(&self, alias: &str) -> Option<&AccountCustomFieldConfig> {
        self.predefined_cf.get(alias)
    }

    pub fn custom_field_by_id(&self, id: i64) -> Option<&AccountCustomFieldConfig> {
        self.cf.get(&id.to_string())
    }

    /// Checks that every `predefined_cf` entry is also in `cf` under its id,
    /// with identical content.
    pub fn check_custom_field_views(&self) -> Result<()> {
        for (alias, config) in &self.predefined_cf {
            let id = config.id.to_string();
            if self.cf.get(&id) != Some(config) {
                return Err(Error::InconsistentCustomFieldViews {
                    alias: alias.clone(),
                    id,
                });
            }
        }
        Ok(())
    }

    /// Inserts or replaces a field config in both views. `alias` adds or
    /// refreshes the `predefined_cf` entry; existing aliases pointing at the
    /// same id are refreshed as well.
    pub fn upsert_custom_field(&mut self, alias: Option<&str>, config: AccountCustomFieldConfig) {
        for existing in self.predefined_cf.values_mut() {
            if existing.id == config.id {
                *existing = config.clone();
            }
        }
        if let Some(alias) = alias {
            self.predefined_cf.insert(alias.to_owned(), config.clone());
        }
        self.cf.insert(config.id.to_string(), config);
    }

    /// Removes a field config from both views.
    pub fn remove_custom_field(&mut self, id: i64) -> Option<AccountCustomFieldConfig> {
        self.predefined_cf.retain(|_, c| c.id != id);
        self.cf.remove(&id.to_string())
    }
}
