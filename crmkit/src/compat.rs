//! Legacy names of the public types.
//!
//! Each alias is a re-export of exactly one item, so `AmoLead` and
//! [`Lead`] are the same type and code written against either name
//! interoperates.
//!
//! `AmoCountries` is the one exception: upstream it names the table of
//! country codes, which this crate does not ship. Here it is a type-level
//! stand-in for [`CountryId`](crmkit_types::CountryId), the same item as
//! `AmoCountriesIds`.

// Entities
pub use crmkit_model::{
    CompaniesList as AmoCompaniesList, Company as AmoCompany, Contact as AmoContact,
    ContactsList as AmoContactsList, Customer as AmoCustomer, CustomersList as AmoCustomersList,
    Lead as AmoLead, LeadsList as AmoLeadsList,
};

// Users and managers
pub use crmkit_model::{
    AccessRight as AmoUserAccessRight, Manager as AmoConstantManager, User as AmoUser,
    UserConstant as AmoConstantUser, UserStatus as KommoUserStatus,
};

// Account
pub use crmkit_model::{
    Account as AmoAccount, AccountConstant as AmoConstantAccount,
    AccountCustomFieldConfig as AmoConstantAccountCF,
};

// Pipelines and task types
pub use crmkit_model::{
    Pipeline as AmoPipeline, TaskType as AmoConstantTaskType, TaskType as KommoTaskType,
};

// Custom fields
pub use crmkit_model::{
    CustomField as AmoCustomField, CustomFieldCode as AmoCustomFieldCode,
    CustomFieldGroup as AmoCustomFieldGroup, CustomFieldType as AmoCustomFieldType,
    CustomFieldTypeAddress as AmoCustomFieldTypeAddress,
    EntityCustomField as AmoEntityCustomField, LegacyFieldType as AmoLegacyFieldTypes,
};

// Utility types
pub use crmkit_model::ApiResponse as AmoApiResponse;
pub use crmkit_types::{
    CountryId as AmoCountries, CountryId as AmoCountriesIds, EntityKind as AmoEntities,
    StringBoolean,
};

// App
pub use crmkit_widget::{
    AddCallParams as KommoAddCallParams, AddErrorParams as KommoAddErrorParams,
    CrmApp as KommoApp, CrmNotifications as KommoNotifications,
    ShowMessageErrorParams as KommoShowMessageErrorParams,
    ShowMessageParams as KommoShowMessageParams,
    ShowNotificationParams as KommoShowNotificationParams,
};

// Widget integration and callbacks
pub use crmkit_widget::{
    AdvancedSettingsCallback as KommoAdvancedSettingsCallback,
    BindActionsCallback as KommoBindActionsCallback,
    ContactsSelectedCallback as KommoContactsSelectedCallback,
    DestroyCallback as KommoDestroyCallback, DpSettingsCallback as KommoDpSettingsCallback,
    InitCallback as KommoInitCallback, InitMenuPageCallback as KommoInitMenuPageCallback,
    LeadsSelectedCallback as KommoLeadsSelectedCallback,
    LinkCardCallback as KommoLinkCardCallback,
    LoadCatalogElementCallback as KommoLoadCatalogElementCallback,
    LoadElementsCallback as KommoLoadElementsCallback,
    LoadPreloadedDataCallback as KommoLoadPreloadedDataCallback,
    OnAddAsSourceCallback as KommoOnAddAsSourceCallback,
    OnSalesbotDesignerSaveCallback as KommoOnSalesbotDesignerSaveCallback,
    OnSaveCallback as KommoOnSaveCallback, RenderCallback as KommoRenderCallback,
    SalesbotDesignerSettingsCallback as KommoSalesbotDesignerSettingsCallback,
    SettingsCallback as KommoSettingsCallback,
    TodoSelectedCallback as KommoTodoSelectedCallback,
    WidgetIntegration as KommoAbstractIntegration,
};

// Manifest
pub use crmkit_widget::{
    LocationWithAdditionalProps as KommoLocationWithAdditionalProps,
    SupportInfo as KommoSupportInfo, WidgetLocale as KommoLocale,
    WidgetManifest as KommoManifestJson,
};
