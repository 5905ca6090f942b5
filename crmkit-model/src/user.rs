//! User records: REST user, runtime current user, managers and statuses.

use crmkit_types::{NumOrStr, Opaque, SelfLinks, StringBoolean};
use serde::{Deserialize, Serialize};

/// Access scope of a permission: all, department, mine, group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessRight {
    #[serde(rename = "A")]
    All,
    #[serde(rename = "D")]
    Department,
    #[serde(rename = "M")]
    Mine,
    #[serde(rename = "G")]
    Group,
}

/// Permissions on one entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRights {
    pub view: AccessRight,
    pub edit: AccessRight,
    pub add: AccessRight,
    pub delete: AccessRight,
    pub export: AccessRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRights {
    pub edit: AccessRight,
    pub delete: AccessRight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRights {
    pub leads: EntityRights,
    pub contacts: EntityRights,
    pub companies: EntityRights,
    pub tasks: TaskRights,
    pub mail_access: bool,
    pub catalog_access: bool,
    #[serde(default)]
    pub status_rights: Opaque,
    pub is_admin: bool,
    pub is_free: bool,
    pub is_active: bool,
    #[serde(default)]
    pub group_id: Opaque,
    #[serde(default)]
    pub role_id: Opaque,
}

/// A user as returned by `GET /api/v4/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub lang: String,
    pub rights: UserRights,
    #[serde(rename = "_links")]
    pub links: SelfLinks,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.rights.is_admin
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnWidth {
    pub width: NumOrStr,
}

/// Column widths of the list views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutWidth {
    pub leads: ColumnWidth,
    pub contacts: ColumnWidth,
    pub companies: ColumnWidth,
    pub customers: ColumnWidth,
    pub unsorted: ColumnWidth,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedFilterEntry {
    pub linked: Vec<i64>,
    pub types: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedFilter {
    pub leads: FeedFilterEntry,
    pub contacts: FeedFilterEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub layout_width: LayoutWidth,
    pub feed_filter: FeedFilter,
    pub notify_time_before_task: i64,
    pub default_task_preset: NumOrStr,
}

/// The current user as the host exposes it (`APP.constant('user')`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConstant {
    pub id: i64,
    pub name: String,
    pub login: String,
    pub api_key: String,
    pub personal_mobile: String,
    pub amojo_id: String,
    pub group_mates_ids: Vec<i64>,
    pub settings: UserSettings,
}

/// An entry of `APP.constant('managers')`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manager {
    pub id: NumOrStr,
    pub title: String,
    pub option: String,
    pub active: bool,
    pub login: String,
    pub status: String,
    pub is_admin: StringBoolean,
    pub free_user: StringBoolean,
    pub amojo_id: String,
    pub avatar: String,
    pub group: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnlineStatus {
    Online,
    Offline,
}

/// Presence of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatus {
    pub id: String,
    pub online_status: OnlineStatus,
    pub last_activity_at: i64,
    pub call_busy_status: bool,
}

impl UserStatus {
    pub fn is_online(&self) -> bool {
        self.online_status == OnlineStatus::Online
    }
}
