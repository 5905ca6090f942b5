use crmkit_types::{EntityKind, NumOrStr, SelfLinks};
use serde::{Deserialize, Serialize};

/// A pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub id: i64,
    pub name: String,
    pub sort: i64,
    pub is_editable: bool,
    pub pipeline_id: i64,
    pub color: String,
    #[serde(rename = "type")]
    pub status_type: NumOrStr,
    pub account_id: i64,
    #[serde(rename = "_links")]
    pub links: SelfLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineEmbedded {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statuses: Option<Vec<Status>>,
}

/// A sales pipeline of one entity kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    pub id: i64,
    pub account_id: i64,
    pub name: String,
    pub sort: i64,
    pub is_main: bool,
    pub is_unsorted_on: bool,
    pub is_archive: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_predefined: Option<bool>,
    pub entity_type: EntityKind,
    #[serde(rename = "_links")]
    pub links: SelfLinks,
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<PipelineEmbedded>,
}

impl Pipeline {
    /// Statuses in the order the API listed them. Empty if not embedded.
    pub fn statuses(&self) -> &[Status] {
        self.embedded
            .as_ref()
            .and_then(|e| e.statuses.as_deref())
            .unwrap_or_default()
    }

    /// Statuses in display order: ascending `sort`, equal `sort` values
    /// keep their listed order.
    pub fn sorted_statuses(&self) -> Vec<&Status> {
        let mut statuses: Vec<&Status> = self.statuses().iter().collect();
        statuses.sort_by_key(|s| s.sort);
        statuses
    }

    pub fn status(&self, id: i64) -> Option<&Status> {
        self.statuses().iter().find(|s| s.id == id)
    }
}

/// Task type in the runtime constants (`APP.constant('task_types')`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskType {
    pub id: i64,
    pub option: String,
    pub color: String,
    pub icon_id: i64,
}
