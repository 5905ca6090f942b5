use crmkit::compat::*;
use crmkit::widget;
use crmkit::{
    Account, AccountConstant, AccountCustomFieldConfig, ApiResponse, Company, CompaniesList,
    Contact, ContactsList, CountryId, Customer, CustomersList, CustomField, CustomFieldCode,
    CustomFieldGroup, CustomFieldType, CustomFieldTypeAddress, EntityCustomField, EntityKind,
    Lead, LeadsList, LegacyFieldType, Manager, Pipeline, TaskType, User, UserConstant,
    UserStatus,
};
use serde_json::json;

/// Compiles only when `A` and `B` are the same type.
trait SameAs<T> {}
impl<T> SameAs<T> for T {}
fn same_type<A: SameAs<B>, B>() {}

#[test]
fn entity_aliases() {
    same_type::<AmoLead, Lead>();
    same_type::<AmoLeadsList, LeadsList>();
    same_type::<AmoContact, Contact>();
    same_type::<AmoContactsList, ContactsList>();
    same_type::<AmoCompany, Company>();
    same_type::<AmoCompaniesList, CompaniesList>();
    same_type::<AmoCustomer, Customer>();
    same_type::<AmoCustomersList, CustomersList>();
    same_type::<AmoApiResponse<Lead>, ApiResponse<Lead>>();
}

#[test]
fn account_user_and_pipeline_aliases() {
    same_type::<AmoUser, User>();
    same_type::<AmoConstantUser, UserConstant>();
    same_type::<AmoConstantManager, Manager>();
    same_type::<AmoUserAccessRight, crmkit::AccessRight>();
    same_type::<KommoUserStatus, UserStatus>();
    same_type::<AmoAccount, Account>();
    same_type::<AmoConstantAccount, AccountConstant>();
    same_type::<AmoConstantAccountCF, AccountCustomFieldConfig>();
    same_type::<AmoPipeline, Pipeline>();
    same_type::<AmoConstantTaskType, TaskType>();
    same_type::<KommoTaskType, AmoConstantTaskType>();
}

#[test]
fn custom_field_and_utility_aliases() {
    same_type::<AmoCustomField, CustomField>();
    same_type::<AmoCustomFieldGroup, CustomFieldGroup>();
    same_type::<AmoCustomFieldType, CustomFieldType>();
    same_type::<AmoCustomFieldCode, CustomFieldCode>();
    same_type::<AmoCustomFieldTypeAddress, CustomFieldTypeAddress>();
    same_type::<AmoEntityCustomField, EntityCustomField>();
    same_type::<AmoLegacyFieldTypes, LegacyFieldType>();
    same_type::<AmoEntities, EntityKind>();
    same_type::<AmoCountriesIds, CountryId>();
    same_type::<AmoCountries, CountryId>();
    same_type::<StringBoolean, crmkit::StringBoolean>();
}

#[test]
fn widget_aliases() {
    same_type::<KommoShowMessageParams, widget::ShowMessageParams>();
    same_type::<KommoShowMessageErrorParams, widget::ShowMessageErrorParams>();
    same_type::<KommoShowNotificationParams, widget::ShowNotificationParams>();
    same_type::<KommoAddErrorParams, widget::AddErrorParams>();
    same_type::<KommoAddCallParams, widget::AddCallParams>();
    same_type::<KommoRenderCallback, widget::RenderCallback>();
    same_type::<KommoInitCallback, widget::InitCallback>();
    same_type::<KommoBindActionsCallback, widget::BindActionsCallback>();
    same_type::<KommoSettingsCallback, widget::SettingsCallback>();
    same_type::<KommoOnSaveCallback, widget::OnSaveCallback>();
    same_type::<KommoDestroyCallback, widget::DestroyCallback>();
    same_type::<KommoLeadsSelectedCallback, widget::LeadsSelectedCallback>();
    same_type::<KommoContactsSelectedCallback, widget::ContactsSelectedCallback>();
    same_type::<KommoTodoSelectedCallback, widget::TodoSelectedCallback>();
    same_type::<KommoAdvancedSettingsCallback, widget::AdvancedSettingsCallback>();
    same_type::<KommoDpSettingsCallback, widget::DpSettingsCallback>();
    same_type::<KommoInitMenuPageCallback, widget::InitMenuPageCallback>();
    same_type::<KommoOnSalesbotDesignerSaveCallback, widget::OnSalesbotDesignerSaveCallback>();
    same_type::<KommoOnAddAsSourceCallback, widget::OnAddAsSourceCallback>();
    same_type::<KommoLoadCatalogElementCallback, widget::LoadCatalogElementCallback>();
    same_type::<KommoLoadPreloadedDataCallback, widget::LoadPreloadedDataCallback>();
    same_type::<KommoLoadElementsCallback, widget::LoadElementsCallback>();
    same_type::<KommoLinkCardCallback, widget::LinkCardCallback>();
    same_type::<KommoSalesbotDesignerSettingsCallback, widget::SalesbotDesignerSettingsCallback>();
    same_type::<KommoManifestJson, widget::WidgetManifest>();
    same_type::<KommoLocale, widget::WidgetLocale>();
    same_type::<KommoSupportInfo, widget::SupportInfo>();
    same_type::<KommoLocationWithAdditionalProps, widget::LocationWithAdditionalProps>();
}

fn render_with<H: KommoAbstractIntegration + ?Sized>(_host: &H) {}
fn notify_with(n: &dyn KommoNotifications) -> &dyn widget::CrmNotifications {
    n
}
fn app_constants<A: KommoApp>(app: &A) -> &widget::CrmConstants {
    app.constants()
}

#[test]
fn trait_aliases_name_the_same_traits() {
    let _ = render_with::<dyn widget::WidgetIntegration>;
    let _ = notify_with;
    let _ = app_constants::<NoApp>;
}

struct NoApp;

impl widget::CrmApp for NoApp {
    fn get_base_entity(&self) -> String {
        String::new()
    }
    fn is_card(&self) -> bool {
        false
    }
    fn get_widgets_area(&self) -> String {
        String::new()
    }
    fn lang_id(&self) -> widget::LangId {
        widget::LangId::En
    }
    fn constants(&self) -> &widget::CrmConstants {
        unimplemented!()
    }
    fn notifications(&self) -> &dyn widget::CrmNotifications {
        unimplemented!()
    }
}

#[test]
fn alias_and_primary_name_interoperate() {
    let raw = json!({"id": 1, "option": "Call", "color": "#00ff00", "icon_id": 2});
    let legacy: KommoTaskType = serde_json::from_value(raw).unwrap();
    let primary: TaskType = legacy.clone();
    assert_eq!(primary, legacy);
}
