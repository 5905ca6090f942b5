use crmkit::inspect::{self, PayloadKind};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::io::Write;

fn lead(id: i64, custom_fields: Value) -> Value {
    json!({
        "id": id,
        "name": "Website order",
        "price": 1500,
        "responsible_user_id": 123321,
        "group_id": 0,
        "status_id": 142,
        "pipeline_id": 1300,
        "loss_reason_id": null,
        "source_id": null,
        "created_by": 321123,
        "updated_by": 321123,
        "created_at": 1453279607,
        "updated_at": 1502193501,
        "closed_at": null,
        "closest_task_at": null,
        "is_deleted": false,
        "custom_fields_values": custom_fields,
        "score": null,
        "account_id": 5135160,
        "_links": {"self": {"href": format!("/api/v4/leads/{id}")}},
        "_embedded": {}
    })
}

fn leads_page(leads: Vec<Value>) -> String {
    json!({
        "_page": 1,
        "_links": {"self": {"href": "/api/v4/leads?page=1"}},
        "_embedded": {"leads": leads}
    })
    .to_string()
}

fn select_value(enum_id: Option<i64>) -> Value {
    let mut value = json!({"value": "Red"});
    if let Some(id) = enum_id {
        value["enum_id"] = json!(id);
    }
    json!([{
        "field_id": 7,
        "field_name": "Color",
        "field_code": null,
        "field_type": "select",
        "values": [value]
    }])
}

fn definitions_file() -> tempfile::NamedTempFile {
    let definitions = json!({
        "_total_items": 1,
        "_page": 1,
        "_links": {"self": {"href": "/api/v4/leads/custom_fields"}},
        "_embedded": {"custom_fields": [{
            "id": 7,
            "name": "Color",
            "type": "select",
            "account_id": 5135160,
            "code": null,
            "sort": 1,
            "is_api_only": false,
            "enums": [{"id": 1, "value": "Red", "sort": 1}],
            "group_id": null,
            "required_statuses": [],
            "entity_type": "leads",
            "remind": null,
            "_links": {"self": {"href": "/api/v4/leads/custom_fields/7"}}
        }]}
    });
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(definitions.to_string().as_bytes()).unwrap();
    file
}

#[test]
fn leads_page_is_summarised() {
    let payload = leads_page(vec![lead(1, json!([])), lead(2, select_value(Some(1)))]);
    let summary = inspect::inspect(PayloadKind::Leads, &payload, None).unwrap();
    assert_eq!(summary.records, 2);
    assert_eq!(summary.custom_fields, 1);
    assert!(summary.warnings.is_empty());
}

#[test]
fn empty_page_is_valid_with_warning() {
    let summary = inspect::inspect(PayloadKind::Leads, &leads_page(vec![]), None).unwrap();
    assert_eq!(summary.records, 0);
    assert_eq!(summary.warnings.len(), 1);
}

#[test]
fn choice_without_enum_id_fails() {
    let payload = leads_page(vec![lead(3, select_value(None))]);
    assert!(inspect::inspect(PayloadKind::Leads, &payload, None).is_err());
}

#[test]
fn wrong_schema_fails() {
    let payload = leads_page(vec![lead(1, json!([]))]);
    assert!(inspect::inspect(PayloadKind::Contacts, &payload, None).is_err());
    assert!(inspect::inspect(PayloadKind::User, &payload, None).is_err());
    assert!(inspect::inspect(PayloadKind::Manifest, "[]", None).is_err());
}

#[test]
fn definitions_drive_decoding() {
    let file = definitions_file();
    let index = inspect::load_definitions(file.path()).unwrap();
    assert_eq!(index.len(), 1);

    let payload = leads_page(vec![lead(2, select_value(Some(1)))]);
    let summary = inspect::inspect(PayloadKind::Leads, &payload, Some(&index)).unwrap();
    assert_eq!(summary.custom_fields, 1);
    assert!(summary.warnings.is_empty());

    let mut undefined = select_value(Some(1));
    undefined[0]["field_id"] = json!(8);
    let payload = leads_page(vec![lead(4, undefined)]);
    let summary = inspect::inspect(PayloadKind::Leads, &payload, Some(&index)).unwrap();
    assert_eq!(summary.warnings, vec!["record 4: field 8 has no definition".to_owned()]);
}

#[test]
fn pipelines_accept_list_response() {
    let payload = json!({
        "_total_items": 1,
        "_links": {"self": {"href": "/api/v4/leads/pipelines"}},
        "_embedded": {"pipelines": []}
    })
    .to_string();
    let summary = inspect::inspect(PayloadKind::Pipelines, &payload, None).unwrap();
    assert_eq!(summary.records, 0);
    assert_eq!(
        inspect::inspect(PayloadKind::Pipelines, "[]", None).unwrap().records,
        0
    );
}

#[test]
fn manifest_missing_blocks_are_warnings() {
    let payload = json!({
        "widget": {
            "locale": "en",
            "support": {"link": "https://example.com", "email": "a@example.com"}
        },
        "locations": ["sms", "settings"]
    })
    .to_string();
    let summary = inspect::inspect(PayloadKind::Manifest, &payload, None).unwrap();
    assert_eq!(summary.warnings, vec!["location 'sms' has no 'sms' block".to_owned()]);
}

#[test]
fn kind_names_match_cli_values() {
    assert_eq!(PayloadKind::AccountConstant.to_string(), "account-constant");
    assert_eq!(PayloadKind::Leads.to_string(), "leads");
}
