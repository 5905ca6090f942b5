use crmkit_model::{ApiResponse, ContactsList, Lead, LeadsList};
use crmkit_types::EntityKind;
use pretty_assertions::assert_eq;
use serde_json::json;

fn lead(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("Lead {id}"),
        "price": 0,
        "responsible_user_id": 1,
        "group_id": 0,
        "status_id": 142,
        "pipeline_id": 1,
        "loss_reason_id": null,
        "source_id": null,
        "created_by": 1,
        "updated_by": 1,
        "created_at": 1,
        "updated_at": 1,
        "closed_at": null,
        "closest_task_at": null,
        "is_deleted": false,
        "custom_fields_values": [],
        "score": null,
        "account_id": 1,
        "_links": {"self": {"href": format!("/api/v4/leads/{id}")}},
        "_embedded": {}
    })
}

#[test]
fn empty_leads_page_is_well_formed() {
    let page: LeadsList = serde_json::from_value(json!({
        "_page": 1,
        "_links": {"self": {"href": "/api/v4/leads?page=1"}},
        "_embedded": {"leads": []}
    }))
    .unwrap();
    assert!(page.is_empty());
    assert_eq!(page.items().len(), 0);
    assert_eq!(page.next_href(), None);
}

#[test]
fn page_exposes_items_and_next_link() {
    let page: LeadsList = serde_json::from_value(json!({
        "_page": 2,
        "_links": {
            "self": {"href": "/api/v4/leads?page=2"},
            "next": {"href": "/api/v4/leads?page=3"}
        },
        "_embedded": {"leads": [lead(1), lead(2)]}
    }))
    .unwrap();
    assert_eq!(page.page, 2);
    assert_eq!(page.next_href(), Some("/api/v4/leads?page=3"));
    let ids: Vec<i64> = page.items().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(page.into_items().len(), 2);
}

#[test]
fn items_only_reads_own_kind() {
    let page: ContactsList = serde_json::from_value(json!({
        "_page": 1,
        "_links": {"self": {"href": "/api/v4/contacts"}},
        "_embedded": {}
    }))
    .unwrap();
    assert!(page.items().is_empty());
}

#[test]
fn unknown_collection_key_is_rejected() {
    let res = serde_json::from_value::<LeadsList>(json!({
        "_page": 1,
        "_links": {"self": {"href": "/api/v4/leads"}},
        "_embedded": {"catalogs": []}
    }));
    assert!(res.is_err());
}

#[test]
fn constructed_page_serializes_under_kind() {
    let first: Lead = serde_json::from_value(lead(7)).unwrap();
    let page = ApiResponse::new(1, "/api/v4/leads", vec![first]);
    let v = serde_json::to_value(&page).unwrap();
    assert_eq!(v["_embedded"]["leads"][0]["id"], json!(7));
    assert!(page.embedded.contains_key(&EntityKind::Leads));
    assert!(v["_links"].get("next").is_none());
}
