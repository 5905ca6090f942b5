//! Schemas of the CRM REST API and the host runtime constants.
//!
//! Defines the records every other crmkit crate depends on:
//! - [`Lead`], [`Contact`], [`Company`], [`Customer`] and the paginated
//!   [`ApiResponse`] envelope they are listed in
//! - [`CustomField`] definitions and the per-entity [`EntityCustomField`]
//!   values, decoded against their definition into [`TypedValue`]s
//! - [`Account`] / [`User`] as the API returns them, and the reduced
//!   [`AccountConstant`] / [`UserConstant`] views the host hands to widgets
//! - [`Pipeline`]s with their statuses, and [`TaskType`]s
//!
//! Every record is a deserialization target. Nothing here talks to the API.

mod account;
mod custom_field;
mod decode;
mod entity;
mod list;
mod pipeline;
mod user;

pub use account::{
    Account, AccountConstant, AccountCustomFieldConfig, AccountEmbedded, AccountTaskType,
    AmojoRights, CustomFieldSettings, CustomersMode, DatetimeSettings, EntityNames,
    GrammaticalCase, NameForms, Products, RuntimeAmojoRights, RuntimeEnum, UsersGroup,
};
pub use custom_field::{
    CustomField, CustomFieldCode, CustomFieldGroup, CustomFieldType, CustomFieldTypeAddress,
    CustomFieldValue, EntityCustomField, EnumChoice, LegacyFieldType, RawFieldValue,
    RemindPeriod, RequiredStatus,
};
pub use decode::{CustomFieldIndex, TypedValue};
pub use entity::{
    Company, CompanyEmbedded, Contact, ContactEmbedded, Customer, EntityRecord, EntityRef,
    Lead, LeadEmbedded, TagRef,
};
pub use list::{ApiResponse, CompaniesList, ContactsList, CustomersList, LeadsList};
pub use pipeline::{Pipeline, PipelineEmbedded, Status, TaskType};
pub use user::{
    AccessRight, ColumnWidth, EntityRights, FeedFilter, FeedFilterEntry, LayoutWidth, Manager,
    OnlineStatus, TaskRights, User, UserConstant, UserRights, UserSettings, UserStatus,
};
