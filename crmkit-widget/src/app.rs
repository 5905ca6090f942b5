//! The global application object available to widget code.

use crmkit_model::{AccountConstant, Manager, TaskType, UserConstant, UserStatus};
use crmkit_types::{EntityKind, Opaque};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Interface language of the current user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LangId {
    En,
    Pt,
    Es,
    Other(String),
}

impl LangId {
    pub fn as_str(&self) -> &str {
        match self {
            Self::En => "en",
            Self::Pt => "pt",
            Self::Es => "es",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for LangId {
    fn from(s: String) -> Self {
        match s.as_str() {
            "en" => Self::En,
            "pt" => Self::Pt,
            "es" => Self::Es,
            _ => Self::Other(s),
        }
    }
}

impl From<LangId> for String {
    fn from(lang: LangId) -> Self {
        match lang {
            LangId::Other(s) => s,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for LangId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Notifications ────────────────────────────────────────────────

/// Informational message. `date` is a unix timestamp in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowMessageParams {
    pub header: String,
    pub text: String,
    pub date: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowMessageErrorParams {
    pub header: String,
    pub text: String,
}

/// Record a pop-up notification links to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationLink {
    pub id: i64,
    #[serde(rename = "type")]
    pub entity_type: EntityKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowNotificationParams {
    pub header: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<NotificationLink>,
}

/// Entry for the notification center's error list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddErrorParams {
    pub header: String,
    pub text: String,
    pub date: i64,
}

/// Singular entity name used by call notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Lead,
    Contact,
    Company,
    Customer,
}

impl From<EntityKind> for ElementType {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Leads => Self::Lead,
            EntityKind::Contacts => Self::Contact,
            EntityKind::Companies => Self::Company,
            EntityKind::Customers => Self::Customer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallElement {
    pub id: i64,
    #[serde(rename = "type")]
    pub element_type: ElementType,
}

/// Call notification; `duration` is in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCallParams {
    pub text: String,
    pub element: CallElement,
    pub duration: i64,
}

/// The host's notification manager.
pub trait CrmNotifications {
    fn show_message(&self, params: ShowMessageParams);
    fn show_message_error(&self, params: ShowMessageErrorParams);
    fn show_notification(&self, params: ShowNotificationParams);
    fn add_error(&self, params: AddErrorParams);
    fn add_call(&self, params: AddCallParams);
}

// ── Constants ────────────────────────────────────────────────────

/// Everything `APP.constant(key)` can return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrmConstants {
    pub user: UserConstant,
    pub account: AccountConstant,
    pub managers: Vec<Manager>,
    pub task_types: Vec<TaskType>,
    pub user_statuses: Vec<UserStatus>,
}

/// A key of [`CrmConstants`], tied to the type it selects.
pub trait ConstantKey {
    const NAME: &'static str;
    type Value;

    fn select(constants: &CrmConstants) -> &Self::Value;
}

/// Keys for [`CrmApp::constant`].
pub mod constant {
    use super::{ConstantKey, CrmConstants};
    use crmkit_model::{AccountConstant, Manager, TaskType, UserConstant, UserStatus};

    macro_rules! constant_key {
        ($key:ident, $name:literal, $field:ident, $ty:ty) => {
            #[derive(Debug, Clone, Copy)]
            pub struct $key;

            impl ConstantKey for $key {
                const NAME: &'static str = $name;
                type Value = $ty;

                fn select(constants: &CrmConstants) -> &$ty {
                    &constants.$field
                }
            }
        };
    }

    constant_key!(User, "user", user, UserConstant);
    constant_key!(Account, "account", account, AccountConstant);
    constant_key!(Managers, "managers", managers, Vec<Manager>);
    constant_key!(TaskTypes, "task_types", task_types, Vec<TaskType>);
    constant_key!(UserStatuses, "user_statuses", user_statuses, Vec<UserStatus>);
}

/// The global CRM application object (`APP` / `AMOCRM` in the page).
pub trait CrmApp {
    /// Entity kind of the current page, as the host names it.
    fn get_base_entity(&self) -> String;

    /// Whether the current page is an entity card.
    fn is_card(&self) -> bool;

    fn get_widgets_area(&self) -> String;

    fn lang_id(&self) -> LangId;

    fn constants(&self) -> &CrmConstants;

    /// Typed constant lookup: `app.constant::<constant::Account>()`.
    fn constant<K: ConstantKey>(&self) -> &K::Value
    where
        Self: Sized,
    {
        K::select(self.constants())
    }

    fn notifications(&self) -> &dyn CrmNotifications;

    /// SDK object for catalog and list operations, if the page exposes one.
    fn sdk(&self) -> Option<&Opaque> {
        None
    }

    fn data(&self) -> Option<&Opaque> {
        None
    }
}
