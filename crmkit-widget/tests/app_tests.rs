use crmkit_types::EntityKind;
use crmkit_widget::{
    AddCallParams, CallElement, ConstantKey, CrmApp, CrmConstants, CrmNotifications,
    ElementType, LangId, NotificationLink, ShowNotificationParams, constant,
};
use crmkit_widget::{AddErrorParams, ShowMessageErrorParams, ShowMessageParams};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::sync::Mutex;

fn constants() -> Value {
    let width = json!({"width": "auto"});
    json!({
        "user": {
            "id": 3,
            "name": "Admin",
            "login": "admin@example.com",
            "api_key": "",
            "personal_mobile": "",
            "amojo_id": "abc",
            "group_mates_ids": [],
            "settings": {
                "layout_width": {
                    "leads": width, "contacts": width, "companies": width,
                    "customers": width, "unsorted": width
                },
                "feed_filter": {
                    "leads": {"linked": [], "types": []},
                    "contacts": {"linked": [], "types": []}
                },
                "notify_time_before_task": 15,
                "default_task_preset": "1"
            }
        },
        "account": {
            "id": 1231414,
            "name": "example",
            "subdomain": "example",
            "predefined_cf": {},
            "cf": {},
            "users": {"3": "Admin"},
            "country": "ru",
            "currency": "RUB",
            "paid_from": false,
            "paid_till": false,
            "pay_type": "trial",
            "tariffName": "Base",
            "timezone": "Europe/Moscow",
            "date_pattern": "d.m.Y H:i",
            "language": "en",
            "date_format": "d.m.Y",
            "time_format": "H:i",
            "unsorted_on": "N",
            "is_contact_name_display_order_first": true,
            "products": {"enabled": false, "catalog_id": 0},
            "helpbot_enabled": false,
            "amojo_id": "f3c6340d",
            "amojo_server": "amojo.amocrm.ru",
            "amojo_enabled": 1,
            "amojo_rights": {"can_direct": true, "can_group_create": false},
            "talks_auto_close_delay": 0,
            "notifications_enabled": true,
            "version": 11
        },
        "managers": [],
        "task_types": [{"id": 1, "option": "Follow-up", "color": "#ff0000", "icon_id": 5}],
        "user_statuses": []
    })
}

#[derive(Default)]
struct Notes(Mutex<Vec<String>>);

impl CrmNotifications for Notes {
    fn show_message(&self, params: ShowMessageParams) {
        self.0.lock().unwrap().push(params.header);
    }
    fn show_message_error(&self, params: ShowMessageErrorParams) {
        self.0.lock().unwrap().push(params.header);
    }
    fn show_notification(&self, params: ShowNotificationParams) {
        self.0.lock().unwrap().push(params.header);
    }
    fn add_error(&self, params: AddErrorParams) {
        self.0.lock().unwrap().push(params.header);
    }
    fn add_call(&self, params: AddCallParams) {
        self.0.lock().unwrap().push(params.text);
    }
}

struct App {
    constants: CrmConstants,
    notes: Notes,
}

impl CrmApp for App {
    fn get_base_entity(&self) -> String {
        "leads".into()
    }
    fn is_card(&self) -> bool {
        true
    }
    fn get_widgets_area(&self) -> String {
        "leads_card".into()
    }
    fn lang_id(&self) -> LangId {
        LangId::from("en".to_owned())
    }
    fn constants(&self) -> &CrmConstants {
        &self.constants
    }
    fn notifications(&self) -> &dyn CrmNotifications {
        &self.notes
    }
}

fn app() -> App {
    App {
        constants: serde_json::from_value(constants()).unwrap(),
        notes: Notes::default(),
    }
}

#[test]
fn typed_constant_lookup() {
    let app = app();
    assert_eq!(app.constant::<constant::Account>().subdomain, "example");
    assert_eq!(app.constant::<constant::User>().id, 3);
    assert_eq!(app.constant::<constant::TaskTypes>()[0].option, "Follow-up");
    assert!(app.constant::<constant::Managers>().is_empty());
    assert_eq!(constant::UserStatuses::NAME, "user_statuses");
}

#[test]
fn optional_app_members_default_to_none() {
    let app = app();
    assert!(app.sdk().is_none());
    assert!(app.data().is_none());
    assert_eq!(app.lang_id(), LangId::En);
}

#[test]
fn lang_id_keeps_unknown_codes() {
    let lang: LangId = serde_json::from_value(json!("ru")).unwrap();
    assert_eq!(lang, LangId::Other("ru".into()));
    assert_eq!(serde_json::to_value(&lang).unwrap(), json!("ru"));
    assert_eq!(serde_json::to_value(LangId::Pt).unwrap(), json!("pt"));
}

#[test]
fn notifications_go_through_the_app() {
    let app = app();
    app.notifications().show_notification(ShowNotificationParams {
        header: "New lead".into(),
        text: "Lead #10".into(),
        link: Some(NotificationLink {
            id: 10,
            entity_type: EntityKind::Leads,
        }),
    });
    app.notifications().add_call(AddCallParams {
        text: "Incoming call".into(),
        element: CallElement {
            id: 7,
            element_type: ElementType::from(EntityKind::Contacts),
        },
        duration: 42,
    });
    assert_eq!(
        *app.notes.0.lock().unwrap(),
        vec!["New lead".to_owned(), "Incoming call".to_owned()]
    );
}

#[test]
fn notification_wire_shapes() {
    let params: ShowNotificationParams = serde_json::from_value(json!({
        "header": "h", "text": "t", "link": {"id": 1, "type": "companies"}
    }))
    .unwrap();
    assert_eq!(params.link.unwrap().entity_type, EntityKind::Companies);

    let call = serde_json::to_value(AddCallParams {
        text: "t".into(),
        element: CallElement { id: 1, element_type: ElementType::Customer },
        duration: 5,
    })
    .unwrap();
    assert_eq!(call["element"], json!({"id": 1, "type": "customer"}));

    let no_link = serde_json::to_value(ShowNotificationParams {
        header: "h".into(),
        text: "t".into(),
        link: None,
    })
    .unwrap();
    assert!(no_link.get("link").is_none());
}
